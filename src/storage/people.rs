use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};

const BUNDLED_PEOPLE: &str = include_str!("../../data/people.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub sex: String,
    pub born: i32,
    pub died: i32,
    #[serde(default)]
    pub father_name: Option<String>,
    #[serde(default)]
    pub mother_name: Option<String>,
    #[serde(default)]
    pub slug: String,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - {})", self.name, self.born, self.died)
    }
}

pub fn load_bundled_people() -> Result<Vec<Person>> {
    let people: Vec<Person> = serde_json::from_str(BUNDLED_PEOPLE).map_err(AppError::BundledData)?;
    warn_on_duplicate_names(&people);
    Ok(people)
}

pub fn load_people_from(path: &Path) -> Result<Vec<Person>> {
    let raw = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    let people: Vec<Person> = serde_json::from_str(&raw).map_err(|e| AppError::json(path, e))?;
    
    log::info!("Loaded {} people from {}", people.len(), path.display());
    warn_on_duplicate_names(&people);
    Ok(people)
}

pub fn load_people(data_path: Option<&Path>) -> Result<Vec<Person>> {
    match data_path {
        Some(path) => load_people_from(path),
        None => load_bundled_people(),
    }
}

// Names are treated as row identity but nothing guarantees uniqueness.
fn warn_on_duplicate_names(people: &[Person]) {
    let mut seen = HashSet::with_capacity(people.len());
    for person in people {
        if !seen.insert(person.name.as_str()) {
            log::warn!("Duplicate person name in roster: {}", person.name);
        }
    }
}

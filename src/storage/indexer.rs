use super::Person;

/// Case-insensitive substring matcher over the people roster.
#[derive(Default)]
pub struct SearchIndex {
    lowered_names: Vec<String>,
}

impl SearchIndex {
    pub fn new(people: &[Person]) -> Self {
        Self {
            lowered_names: people.iter().map(|p| p.name.to_lowercase()).collect(),
        }
    }
    
    pub fn all(&self) -> Vec<usize> {
        (0..self.lowered_names.len()).collect()
    }
    
    /// Positions of every name containing `query`, in roster order.
    /// The query is trimmed; names are compared as-is.
    pub fn search(&self, query: &str) -> Vec<usize> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return self.all();
        }
        
        self.lowered_names.iter()
            .enumerate()
            .filter_map(|(idx, name)| {
                if name.contains(&query_lower) {
                    Some(idx)
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn person(name: &str) -> Person {
        Person {
            name: name.to_string(),
            sex: String::new(),
            born: 1990,
            died: 0,
            father_name: None,
            mother_name: None,
            slug: String::new(),
        }
    }

    fn roster() -> Vec<Person> {
        ["Jane", "Jan van Brussel", "Maria de Rycke", "Emma de Milliano", "JANUS"]
            .into_iter()
            .map(person)
            .collect()
    }

    fn search_names<'a>(people: &'a [Person], query: &str) -> Vec<&'a str> {
        SearchIndex::new(people)
            .search(query)
            .into_iter()
            .map(|idx| people[idx].name.as_str())
            .collect()
    }

    #[rstest]
    #[case("jan", vec!["Jane", "Jan van Brussel", "JANUS"])]
    #[case("  JAN  ", vec!["Jane", "Jan van Brussel", "JANUS"])]
    #[case("de ", vec!["Maria de Rycke", "Emma de Milliano"])]
    #[case("xyz", vec![])]
    #[case("", vec!["Jane", "Jan van Brussel", "Maria de Rycke", "Emma de Milliano", "JANUS"])]
    #[case("   ", vec!["Jane", "Jan van Brussel", "Maria de Rycke", "Emma de Milliano", "JANUS"])]
    fn filters_by_trimmed_lowercase_substring(#[case] query: &str, #[case] expected: Vec<&str>) {
        let people = roster();
        assert_eq!(search_names(&people, query), expected);
    }

    #[test]
    fn single_record_example() {
        let people = vec![person("Jane")];
        assert_eq!(search_names(&people, "jan"), vec!["Jane"]);
        assert!(search_names(&people, "xyz").is_empty());
    }

    #[test]
    fn empty_roster_matches_nothing() {
        let index = SearchIndex::new(&[]);
        assert!(index.all().is_empty());
        assert!(index.search("").is_empty());
        assert!(index.search("a").is_empty());
    }

    proptest! {
        #[test]
        fn search_is_the_matching_subsequence(
            raw in prop::collection::vec("[a-zA-Z ]{0,8}", 0..12),
            query in "[a-zA-Z ]{0,4}",
        ) {
            let people: Vec<Person> = raw.iter().map(|n| person(n)).collect();
            let index = SearchIndex::new(&people);
            let needle = query.trim().to_lowercase();
            
            let expected: Vec<usize> = people.iter()
                .enumerate()
                .filter(|(_, p)| p.name.to_lowercase().contains(&needle))
                .map(|(i, _)| i)
                .collect();
            let found = index.search(&query);
            
            prop_assert_eq!(&found, &expected);
            prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(index.search(&query), found);
        }

        #[test]
        fn blank_query_returns_whole_roster(
            raw in prop::collection::vec("[a-z]{1,6}", 0..12),
            blanks in " {0,3}",
        ) {
            let people: Vec<Person> = raw.iter().map(|n| person(n)).collect();
            let index = SearchIndex::new(&people);
            prop_assert_eq!(index.search(&blanks), (0..people.len()).collect::<Vec<_>>());
        }
    }
}

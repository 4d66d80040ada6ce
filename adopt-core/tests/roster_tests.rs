use adopt_core::{Dog, Roster, RosterError};

#[cfg(test)]
mod roster_construction_tests {
    use super::*;

    #[test]
    fn test_sample_has_four_records_in_order() {
        let roster = Roster::sample();
        assert_eq!(roster.len(), 4);
        assert!(!roster.is_empty());

        let names: Vec<&str> = roster.records().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Jaycee", "James", "Jamie", "James"]);
    }

    #[test]
    fn test_sample_shares_one_identifier() {
        let roster = Roster::sample();
        assert_eq!(roster.duplicate_ids(), vec!["1".to_string()]);

        let sharing = roster
            .records()
            .iter()
            .filter(|d| d.id == "1")
            .count();
        assert_eq!(sharing, 2);
    }

    #[test]
    fn test_unique_roster_reports_no_duplicates() {
        let roster = Roster::new(vec![record("a"), record("b")]);
        assert!(roster.duplicate_ids().is_empty());
    }

    fn record(id: &str) -> Dog {
        Dog {
            id: id.to_string(),
            name: format!("Dog {}", id),
            shelter: "Test shelter".to_string(),
            photo: id.to_string(),
            age: 1,
            size: "Small".to_string(),
            breed: "Mixed".to_string(),
        }
    }
}

#[cfg(test)]
mod roster_lookup_tests {
    use super::*;

    #[test]
    fn test_find_takes_first_match_in_roster_order() {
        let roster = Roster::sample();

        let found = roster.find("1").expect("identifier '1' is present");
        assert_eq!(found.name, "Jaycee");
        assert_eq!(found.breed, "Shiba Inu");
    }

    #[test]
    fn test_find_round_trips_unique_identifiers() {
        let roster = Roster::sample();

        for record in roster.records().iter().filter(|d| d.id != "1") {
            let found = roster.find(&record.id).expect("identifier is present");
            assert_eq!(found, record);
        }
    }

    #[test]
    fn test_find_misses_unknown_identifier() {
        let roster = Roster::sample();
        assert!(roster.find("404").is_none());
    }
}

#[cfg(test)]
mod roster_json_tests {
    use super::*;

    #[test]
    fn test_loads_records_from_json() {
        let json = r#"[
            {
                "id": "7",
                "name": "Biscuit",
                "shelter": "Northside Rescue",
                "photo": "biscuit",
                "age": 6,
                "size": "Large",
                "breed": "Labrador"
            }
        ]"#;

        let roster = Roster::from_json_str(json).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.find("7").map(|d| d.name.as_str()), Some("Biscuit"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = Roster::from_json_str("not json");
        assert!(matches!(result, Err(RosterError::Parse(_))));
    }

    #[test]
    fn test_rejects_empty_array() {
        let result = Roster::from_json_str("[]");
        assert!(matches!(result, Err(RosterError::Empty)));
    }
}

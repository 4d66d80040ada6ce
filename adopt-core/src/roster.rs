use crate::error::RosterError;
use crate::models::Dog;

/// Immutable dataset of adoptable dogs.
///
/// Built once at startup (from the built-in sample data or a JSON file) and
/// injected into the state holders that need it; there is no global dataset.
/// Lookup by identifier takes the first match in roster order. Duplicate
/// identifiers are allowed but reported, since lookups can only ever reach
/// the first record carrying a shared identifier.
#[derive(Debug, Clone)]
pub struct Roster {
    records: Vec<Dog>,
}

impl Roster {
    pub fn new(records: Vec<Dog>) -> Self {
        let roster = Self { records };
        let duplicates = roster.duplicate_ids();
        if !duplicates.is_empty() {
            log::warn!("roster contains duplicate identifiers: {:?}", duplicates);
        }
        roster
    }

    /// Built-in sample dataset. The first two records share identifier "1".
    pub fn sample() -> Self {
        Self::new(vec![
            Dog {
                id: "1".to_string(),
                name: "Jaycee".to_string(),
                shelter: "Refuge la ferme des arches".to_string(),
                photo: "jaycee".to_string(),
                age: 4,
                size: "Medium".to_string(),
                breed: "Shiba Inu".to_string(),
            },
            Dog {
                id: "1".to_string(),
                name: "James".to_string(),
                shelter: "Refuge Le Moulin d'en Haut".to_string(),
                photo: "james".to_string(),
                age: 5,
                size: "Large".to_string(),
                breed: "Brachet".to_string(),
            },
            Dog {
                id: "2".to_string(),
                name: "Jamie".to_string(),
                shelter: "Maison SPA".to_string(),
                photo: "jamie".to_string(),
                age: 2,
                size: "Small".to_string(),
                breed: "Spaniel".to_string(),
            },
            Dog {
                id: "3".to_string(),
                name: "James".to_string(),
                shelter: "Refuge Le Moulin d'en Haut".to_string(),
                photo: "james".to_string(),
                age: 5,
                size: "Large".to_string(),
                breed: "Brachet".to_string(),
            },
        ])
    }

    /// Deserialize a roster from a JSON array of records.
    ///
    /// An empty array is rejected: a browser with nothing to browse is a
    /// configuration mistake, not a valid dataset.
    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        let records: Vec<Dog> = serde_json::from_str(json)?;
        if records.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self::new(records))
    }

    /// First record whose identifier matches, in roster order.
    pub fn find(&self, id: &str) -> Option<&Dog> {
        self.records.iter().find(|dog| dog.id == id)
    }

    pub fn records(&self) -> &[Dog] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifiers carried by more than one record, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen: Vec<&str> = Vec::new();
        let mut duplicates: Vec<String> = Vec::new();
        for dog in &self.records {
            if seen.contains(&dog.id.as_str()) {
                if !duplicates.contains(&dog.id) {
                    duplicates.push(dog.id.clone());
                }
            } else {
                seen.push(dog.id.as_str());
            }
        }
        duplicates
    }
}

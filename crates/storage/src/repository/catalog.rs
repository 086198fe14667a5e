use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, StorageError};
use crate::models::{Participant, ParticipantRecord};

const BUNDLED_CATALOG: &str = include_str!("../../data/participants.json");

/// The static participant list of one contest edition.
#[derive(Debug, Default)]
pub struct Catalog {
    participants: Vec<Arc<Participant>>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Demo catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ParticipantRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Validates the records and assigns slugs to the ones missing one.
    ///
    /// Explicit slugs are reserved first so that derived slugs never steal them.
    pub fn from_records(records: Vec<ParticipantRecord>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut taken_slugs = HashSet::new();

        for record in &records {
            if record.id.trim().is_empty() {
                return Err(StorageError::InvalidCatalog(format!(
                    "participant '{}' has an empty id",
                    record.name
                )));
            }
            if !ids.insert(record.id.as_str()) {
                return Err(StorageError::InvalidCatalog(format!(
                    "duplicate participant id '{}'",
                    record.id
                )));
            }
            if record.name.trim().is_empty() {
                return Err(StorageError::InvalidCatalog(format!(
                    "participant '{}' has an empty name",
                    record.id
                )));
            }
            if !record.price.is_finite() || record.price < 0.0 {
                return Err(StorageError::InvalidCatalog(format!(
                    "participant '{}' has an invalid price {}",
                    record.id, record.price
                )));
            }
            if let Some(ref slug) = record.slug {
                if !is_valid_slug(slug) {
                    return Err(StorageError::InvalidCatalog(format!(
                        "participant '{}' has a malformed slug '{}'",
                        record.id, slug
                    )));
                }
                if !taken_slugs.insert(slug.clone()) {
                    return Err(StorageError::InvalidCatalog(format!(
                        "duplicate slug '{}'",
                        slug
                    )));
                }
            }
        }

        let mut participants = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());

        for record in records {
            let slug = match record.slug.clone() {
                Some(slug) => slug,
                None => {
                    let slug = generate_unique_slug(&record.name, &taken_slugs);
                    tracing::debug!(id = %record.id, %slug, "Derived slug for participant");
                    taken_slugs.insert(slug.clone());
                    slug
                }
            };

            by_id.insert(record.id.clone(), participants.len());
            participants.push(Arc::new(record.into_participant(slug)));
        }

        tracing::info!(participants = participants.len(), "Participant catalog loaded");

        Ok(Self {
            participants,
            by_id,
        })
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Participant>> {
        self.by_id.get(id).map(|&index| &self.participants[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Participants in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Participant>> {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Lowercase ASCII alphanumerics separated by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('-').all(|part| {
            !part.is_empty()
                && part
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

/// Turns a display name into a slug, folding Spanish accents to ASCII.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(fold_accent)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>()
        .join("-")
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

fn generate_unique_slug(name: &str, taken: &HashSet<String>) -> String {
    let base_slug = slugify(name);
    let base_slug = if base_slug.is_empty() {
        "participant".to_string()
    } else {
        base_slug
    };

    let mut final_slug = base_slug.clone();
    let mut counter = 2;

    while taken.contains(&final_slug) {
        final_slug = format!("{}-{}", base_slug, counter);
        counter += 1;
    }

    final_slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, District};

    fn record(id: &str, slug: Option<&str>, name: &str) -> ParticipantRecord {
        ParticipantRecord {
            id: id.to_string(),
            slug: slug.map(String::from),
            name: name.to_string(),
            district: District::Triana,
            category: Category::Smash,
            price: 9.5,
            description: String::new(),
            ingredients: vec![],
            address: String::new(),
            hours: String::new(),
            phone: None,
            instagram: None,
            image: None,
            is_gluten_free: false,
            is_veggie: false,
            lat: 37.38,
            lng: -5.99,
        }
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.len(), 16);

        let first = catalog.get("1").unwrap();
        assert_eq!(first.slug, "la-burger-triana");
        assert_eq!(first.district, District::Triana);
        assert_eq!(first.category, Category::Clasica);
        assert!(catalog.iter().all(|p| is_valid_slug(&p.slug)));
    }

    #[test]
    fn test_slugify_folds_accents() {
        assert_eq!(slugify("Smash Nervión"), "smash-nervion");
        assert_eq!(slugify("  Old  School -- Centro! "), "old-school-centro");
        assert_eq!(slugify("Año Ñú"), "ano-nu");
    }

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("bbq-pit-macarena"));
        assert!(is_valid_slug("burger-2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Burger"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("nervión"));
    }

    #[test]
    fn test_derived_slugs_are_unique() {
        let catalog = Catalog::from_records(vec![
            record("1", Some("smash-nervion"), "Smash Nervión"),
            record("2", None, "Smash Nervión"),
            record("3", None, "Smash  Nervion"),
        ])
        .unwrap();

        assert_eq!(catalog.get("1").unwrap().slug, "smash-nervion");
        assert_eq!(catalog.get("2").unwrap().slug, "smash-nervion-2");
        assert_eq!(catalog.get("3").unwrap().slug, "smash-nervion-3");
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let err = Catalog::from_records(vec![
            record("1", Some("same"), "A"),
            record("2", Some("same"), "B"),
        ])
        .unwrap_err();
        assert!(matches!(err, StorageError::InvalidCatalog(_)));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let err = Catalog::from_records(vec![record("1", None, "A"), record("1", None, "B")])
            .unwrap_err();
        assert!(err.to_string().contains("duplicate participant id"));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut bad = record("1", None, "A");
        bad.price = -1.0;
        assert!(Catalog::from_records(vec![bad]).is_err());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get("1").is_none());
    }
}

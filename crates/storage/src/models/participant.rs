use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// City districts a venue can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum District {
    #[serde(alias = "triana")]
    Triana,
    #[serde(rename = "Nervión", alias = "Nervion", alias = "nervion")]
    Nervion,
    #[serde(alias = "alameda")]
    Alameda,
    #[serde(rename = "Los Remedios", alias = "los-remedios")]
    LosRemedios,
    #[serde(alias = "macarena")]
    Macarena,
    #[serde(alias = "centro")]
    Centro,
    #[serde(alias = "bellavista")]
    Bellavista,
    #[serde(rename = "San Pablo", alias = "san-pablo")]
    SanPablo,
}

impl District {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Triana => "Triana",
            Self::Nervion => "Nervión",
            Self::Alameda => "Alameda",
            Self::LosRemedios => "Los Remedios",
            Self::Macarena => "Macarena",
            Self::Centro => "Centro",
            Self::Bellavista => "Bellavista",
            Self::SanPablo => "San Pablo",
        }
    }

    pub fn all() -> &'static [District] {
        &[
            Self::Triana,
            Self::Nervion,
            Self::Alameda,
            Self::LosRemedios,
            Self::Macarena,
            Self::Centro,
            Self::Bellavista,
            Self::SanPablo,
        ]
    }
}

impl std::fmt::Display for District {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Burger style a venue competes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    #[serde(rename = "Clásica", alias = "Clasica", alias = "clasica")]
    Clasica,
    #[serde(alias = "smash")]
    Smash,
    #[serde(alias = "gourmet")]
    Gourmet,
    #[serde(alias = "veggie")]
    Veggie,
    #[serde(rename = "BBQ", alias = "bbq")]
    Bbq,
    #[serde(alias = "picante")]
    Picante,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clasica => "Clásica",
            Self::Smash => "Smash",
            Self::Gourmet => "Gourmet",
            Self::Veggie => "Veggie",
            Self::Bbq => "BBQ",
            Self::Picante => "Picante",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Clasica,
            Self::Smash,
            Self::Gourmet,
            Self::Veggie,
            Self::Bbq,
            Self::Picante,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A contest participant as served to clients. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub district: District,
    pub category: Category,
    pub price: f64,
    pub description: String,
    pub ingredients: Vec<String>,
    pub address: String,
    pub hours: String,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub image: Option<String>,
    pub is_gluten_free: bool,
    pub is_veggie: bool,
    pub lat: f64,
    pub lng: f64,
}

/// Catalog input row. The slug may be omitted and is then derived from the name.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantRecord {
    pub id: String,
    pub slug: Option<String>,
    pub name: String,
    pub district: District,
    pub category: Category,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub hours: String,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub is_gluten_free: bool,
    #[serde(default)]
    pub is_veggie: bool,
    pub lat: f64,
    pub lng: f64,
}

impl ParticipantRecord {
    pub(crate) fn into_participant(self, slug: String) -> Participant {
        Participant {
            id: self.id,
            slug,
            name: self.name,
            district: self.district,
            category: self.category,
            price: self.price,
            description: self.description,
            ingredients: self.ingredients,
            address: self.address,
            hours: self.hours,
            phone: self.phone,
            instagram: self.instagram,
            image: self.image,
            is_gluten_free: self.is_gluten_free,
            is_veggie: self.is_veggie,
            lat: self.lat,
            lng: self.lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_accepts_display_name_and_ascii_alias() {
        let display: District = serde_json::from_str("\"Nervión\"").unwrap();
        let alias: District = serde_json::from_str("\"nervion\"").unwrap();
        assert_eq!(display, District::Nervion);
        assert_eq!(alias, District::Nervion);
        assert_eq!(serde_json::to_string(&District::LosRemedios).unwrap(), "\"Los Remedios\"");
    }

    #[test]
    fn test_category_round_trips_display_name() {
        for category in Category::all() {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            let parsed: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, *category);
        }
    }
}

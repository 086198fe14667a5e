use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{Result, StorageError};

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// The five criteria every vote rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RatingField {
    Taste,
    Bun,
    Cooking,
    Presentation,
    Value,
}

impl RatingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Taste => "taste",
            Self::Bun => "bun",
            Self::Cooking => "cooking",
            Self::Presentation => "presentation",
            Self::Value => "value",
        }
    }
}

/// Five validated sub-ratings, each within `[MIN_RATING, MAX_RATING]`.
///
/// The only way to obtain a `Ratings` is through [`Ratings::new`] or
/// [`Ratings::from_optional`], so scoring never sees an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Ratings {
    taste: f64,
    bun: f64,
    cooking: f64,
    presentation: f64,
    value: f64,
}

impl Ratings {
    pub fn new(taste: f64, bun: f64, cooking: f64, presentation: f64, value: f64) -> Result<Self> {
        Self::from_optional(
            Some(taste),
            Some(bun),
            Some(cooking),
            Some(presentation),
            Some(value),
        )
    }

    /// Validates possibly missing sub-ratings.
    ///
    /// Every missing, non-finite or out-of-range field is reported, in
    /// declaration order, in a single [`StorageError::InvalidRating`].
    pub fn from_optional(
        taste: Option<f64>,
        bun: Option<f64>,
        cooking: Option<f64>,
        presentation: Option<f64>,
        value: Option<f64>,
    ) -> Result<Self> {
        let mut invalid = Vec::new();
        let mut check = |field: RatingField, rating: Option<f64>| match rating {
            Some(rating) if is_valid_rating(rating) => rating,
            _ => {
                invalid.push(field);
                MIN_RATING
            }
        };

        let ratings = Self {
            taste: check(RatingField::Taste, taste),
            bun: check(RatingField::Bun, bun),
            cooking: check(RatingField::Cooking, cooking),
            presentation: check(RatingField::Presentation, presentation),
            value: check(RatingField::Value, value),
        };

        if invalid.is_empty() {
            Ok(ratings)
        } else {
            Err(StorageError::InvalidRating { fields: invalid })
        }
    }

    pub fn get(&self, field: RatingField) -> f64 {
        match field {
            RatingField::Taste => self.taste,
            RatingField::Bun => self.bun,
            RatingField::Cooking => self.cooking,
            RatingField::Presentation => self.presentation,
            RatingField::Value => self.value,
        }
    }
}

fn is_valid_rating(rating: f64) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// A vote as recorded in the log. Never mutated after append.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Vote {
    pub id: Uuid,
    /// 1-based position in the vote log.
    pub sequence: u64,
    pub participant_id: String,
    #[serde(flatten)]
    pub ratings: Ratings,
    pub comment: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A validated vote waiting for the log to assign its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVote {
    pub participant_id: String,
    pub ratings: Ratings,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds() {
        let ratings = Ratings::new(1.0, 5.0, 3.5, 1.0, 5.0).unwrap();
        assert_eq!(ratings.get(RatingField::Taste), 1.0);
        assert_eq!(ratings.get(RatingField::Bun), 5.0);
        assert_eq!(ratings.get(RatingField::Cooking), 3.5);
    }

    #[test]
    fn test_zero_presentation_is_rejected() {
        let err = Ratings::new(4.0, 4.0, 4.0, 0.0, 4.0).unwrap_err();
        assert_eq!(err.invalid_fields(), &[RatingField::Presentation]);
    }

    #[test]
    fn test_reports_every_offending_field_in_order() {
        let err = Ratings::from_optional(None, Some(6.0), Some(3.0), Some(f64::NAN), Some(0.5))
            .unwrap_err();
        assert_eq!(
            err.invalid_fields(),
            &[
                RatingField::Taste,
                RatingField::Bun,
                RatingField::Presentation,
                RatingField::Value
            ]
        );
        assert_eq!(
            err.to_string(),
            "Invalid rating for taste, bun, presentation, value: every rating must be between 1 and 5"
        );
    }

    #[test]
    fn test_vote_serializes_ratings_inline() {
        let vote = Vote {
            id: Uuid::nil(),
            sequence: 1,
            participant_id: "1".to_string(),
            ratings: Ratings::new(5.0, 4.0, 3.0, 2.0, 1.0).unwrap(),
            comment: None,
            timestamp: DateTime::from_timestamp(0, 0).unwrap(),
        };
        let json = serde_json::to_value(&vote).unwrap();
        assert_eq!(json["taste"], 5.0);
        assert_eq!(json["value"], 1.0);
        assert_eq!(json["participant_id"], "1");
    }
}

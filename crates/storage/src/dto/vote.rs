use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::Result;
use crate::models::{NewVote, Ratings};

pub const MAX_COMMENT_LENGTH: u64 = 1000;

/// Request payload for submitting a vote.
///
/// Ratings are optional at the wire level so a missing one is reported by
/// name alongside out-of-range ones instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitVoteRequest {
    /// Unknown or empty ids are rejected as not found when the vote is submitted.
    pub participant_id: String,

    pub taste: Option<f64>,
    pub bun: Option<f64>,
    pub cooking: Option<f64>,
    pub presentation: Option<f64>,
    pub value: Option<f64>,

    #[validate(length(max = MAX_COMMENT_LENGTH, message = "Comment is too long"))]
    pub comment: Option<String>,
}

impl SubmitVoteRequest {
    pub fn ratings(&self) -> Result<Ratings> {
        Ratings::from_optional(
            self.taste,
            self.bun,
            self.cooking,
            self.presentation,
            self.value,
        )
    }

    /// Validated vote ready for the log. Blank comments are dropped.
    pub fn to_new_vote(&self) -> Result<NewVote> {
        let ratings = self.ratings()?;
        let comment = self
            .comment
            .as_deref()
            .map(str::trim)
            .filter(|comment| !comment.is_empty())
            .map(String::from);

        Ok(NewVote {
            participant_id: self.participant_id.clone(),
            ratings,
            comment,
        })
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VoteListQuery {
    pub participant_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RatingField;

    fn request(presentation: Option<f64>, comment: Option<&str>) -> SubmitVoteRequest {
        SubmitVoteRequest {
            participant_id: "1".to_string(),
            taste: Some(5.0),
            bun: Some(4.0),
            cooking: Some(4.0),
            presentation,
            value: Some(3.0),
            comment: comment.map(String::from),
        }
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: SubmitVoteRequest =
            serde_json::from_str(r#"{"participant_id": "1", "taste": 5}"#).unwrap();
        assert_eq!(req.taste, Some(5.0));
        assert_eq!(req.bun, None);

        let err = req.ratings().unwrap_err();
        assert_eq!(
            err.invalid_fields(),
            &[
                RatingField::Bun,
                RatingField::Cooking,
                RatingField::Presentation,
                RatingField::Value
            ]
        );
    }

    #[test]
    fn test_blank_comment_is_dropped() {
        let vote = request(Some(4.0), Some("   ")).to_new_vote().unwrap();
        assert_eq!(vote.comment, None);

        let vote = request(Some(4.0), Some("  jugosa  ")).to_new_vote().unwrap();
        assert_eq!(vote.comment.as_deref(), Some("jugosa"));
    }

    #[test]
    fn test_comment_length_is_validated() {
        let longest = "a".repeat(MAX_COMMENT_LENGTH as usize);
        assert!(request(Some(4.0), Some(&longest)).validate().is_ok());

        let long = "a".repeat(MAX_COMMENT_LENGTH as usize + 1);
        let errors = request(Some(4.0), Some(&long)).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("comment"));
        assert!(request(Some(4.0), Some("ok")).validate().is_ok());
    }

    #[test]
    fn test_empty_participant_id_passes_validation() {
        let mut req = request(Some(4.0), None);
        req.participant_id = String::new();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_zero_rating_is_invalid() {
        let err = request(Some(0.0), None).to_new_vote().unwrap_err();
        assert_eq!(err.invalid_fields(), &[RatingField::Presentation]);
    }
}

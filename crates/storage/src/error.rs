use thiserror::Error;

use crate::models::RatingField;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found")]
    NotFound,

    #[error(
        "Invalid rating for {}: every rating must be between 1 and 5",
        join_fields(.fields)
    )]
    InvalidRating { fields: Vec<RatingField> },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_fields(fields: &[RatingField]) -> String {
    fields
        .iter()
        .map(RatingField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Rating fields rejected by vote validation, empty for every other error.
    pub fn invalid_fields(&self) -> &[RatingField] {
        match self {
            StorageError::InvalidRating { fields } => fields,
            _ => &[],
        }
    }
}

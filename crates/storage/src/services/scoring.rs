use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{RatingField, Ratings};

/// Fixed criterion weights. They sum to exactly 1.0.
pub const WEIGHTS: [(RatingField, f64); 5] = [
    (RatingField::Taste, 0.40),
    (RatingField::Bun, 0.15),
    (RatingField::Cooking, 0.20),
    (RatingField::Presentation, 0.10),
    (RatingField::Value, 0.15),
];

/// Weighted composite of one vote, within the `[1, 5]` bounds of its inputs.
pub fn composite_score(ratings: &Ratings) -> f64 {
    WEIGHTS
        .iter()
        .map(|&(field, weight)| ratings.get(field) * weight)
        .sum()
}

/// Rounds to two decimals, halves away from zero.
pub fn round_score(score: f64) -> f64 {
    Decimal::from_f64_retain(score)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(0.0)
}

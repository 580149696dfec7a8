use std::cmp::Ordering;

use crate::types::report::{HelpfulnessScore, ReviewTally, ScoredProduct, WordCount};

/// Round a score or ratio to 5 decimal digits for presentation.
///
/// Applied only at the output edge, after every sort. Ranking on rounded
/// values would corrupt tie-break order for averages that differ past the
/// 5th digit.
pub fn round_score(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

/// Descending average score, ascending product id on equal scores.
pub fn by_average_then_id(a: &ScoredProduct, b: &ScoredProduct) -> Ordering {
    b.average_score
        .partial_cmp(&a.average_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.product_id.cmp(&b.product_id))
}

/// Descending review count, ascending product id on equal counts.
pub fn by_count_then_id(a: &ReviewTally, b: &ReviewTally) -> Ordering {
    b.review_count
        .cmp(&a.review_count)
        .then_with(|| a.product_id.cmp(&b.product_id))
}

/// Descending occurrence count, ascending word on equal counts.
pub fn by_count_then_word(a: &WordCount, b: &WordCount) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.word.cmp(&b.word))
}

/// Descending helpfulness ratio, ascending user id on equal ratios.
pub fn by_ratio_then_user(a: &HelpfulnessScore, b: &HelpfulnessScore) -> Ordering {
    b.ratio
        .partial_cmp(&a.ratio)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.user_id.cmp(&b.user_id))
}

use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ProductId, UserId};

/// A product together with its review-weighted average score.
///
/// The average is surfaced rounded to 5 decimal digits; ranking always
/// happens on the unrounded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProduct {
    pub product_id: ProductId,
    pub average_score: f64,
}

/// A product together with the number of reviews it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewTally {
    pub product_id: ProductId,
    pub review_count: u64,
}

/// A whitespace-delimited token together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// A reviewer together with their aggregated helpfulness ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpfulnessScore {
    pub user_id: UserId,
    pub ratio: f64,
}

/// Serializable summary of a corpus: snapshot identity, cardinalities, and
/// the head of each ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    pub fingerprint: String,
    pub review_count: usize,
    pub product_count: usize,
    pub user_count: usize,
    pub top_products: Vec<ScoredProduct>,
    pub most_reviewed: Vec<ReviewTally>,
    pub top_words: Vec<WordCount>,
    pub top_reviewers: Vec<HelpfulnessScore>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QueryError {
    #[error("Corpus contains no reviews")]
    EmptyCorpus,

    #[error("No reviews for product {0}")]
    UnknownProduct(ProductId),

    #[error("No product has at least {0} reviews")]
    NoQualifyingProduct(u64),

    #[error("Percentile {0} is outside the 0-100 range")]
    InvalidPercentile(f64),
}

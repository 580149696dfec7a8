use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::helpfulness::Helpfulness;
use crate::types::identifiers::{ProductId, UserId};

/// One observed review. The atomic unit of the corpus.
///
/// Records are immutable once constructed. The engine performs no
/// validation of field values; whatever the source yields is stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub product_id: ProductId,
    pub user_id: UserId,
    pub profile_name: String,
    pub helpfulness: Helpfulness,
    /// The reviewer's rating of the product in this review.
    pub score: f64,
    /// Informational only; no query reads it.
    pub timestamp: Option<DateTime<Utc>>,
    pub summary: String,
    pub text: String,
}

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::review::ReviewRecord;

/// Content hash identifying a corpus snapshot.
///
/// Two corpora built from identical record sequences always hash to the
/// same value; any difference in order or content changes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorpusFingerprint(String);

impl CorpusFingerprint {
    /// Hash the canonical record sequence: one
    /// `product_id \t user_id \t score_bits \t helpful/total \t text` line
    /// per record, in insertion order. Scores hash by their bit pattern so
    /// the digest never depends on float formatting.
    pub fn from_records(records: &[ReviewRecord]) -> Self {
        let mut hasher = Sha256::new();
        for record in records {
            let line = format!(
                "{}\t{}\t{:016x}\t{}\t{}\n",
                record.product_id.as_str(),
                record.user_id.as_str(),
                record.score.to_bits(),
                record.helpfulness,
                record.text,
            );
            hasher.update(line.as_bytes());
        }

        let hash = hasher.finalize();
        CorpusFingerprint(format!("sha256:{}", hex::encode(hash)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

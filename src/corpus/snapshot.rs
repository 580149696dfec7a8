// Read-only once built:
// no mutation
// no "update" methods

use crate::review::ReviewRecord;
use crate::source::{ReviewSource, SourceError};

use super::fingerprint::CorpusFingerprint;

/// The immutable snapshot of all review records, in insertion order.
///
/// Built exactly once by draining a source; every query afterwards is a
/// pure read. Per-query maps (counts, sums, tallies) live in the queries
/// themselves, never here.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCorpus {
    records: Vec<ReviewRecord>,
}

impl ReviewCorpus {
    /// Drain `source` to completion. Fails only if the source itself fails.
    pub fn from_source<S: ReviewSource>(mut source: S) -> Result<Self, SourceError> {
        let mut records = Vec::new();
        while let Some(record) = source.next_review()? {
            records.push(record);
        }
        Ok(ReviewCorpus { records })
    }

    pub fn from_records(records: Vec<ReviewRecord>) -> Self {
        ReviewCorpus { records }
    }

    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Content hash identifying this snapshot.
    pub fn fingerprint(&self) -> CorpusFingerprint {
        CorpusFingerprint::from_records(&self.records)
    }
}

impl From<Vec<ReviewRecord>> for ReviewCorpus {
    fn from(records: Vec<ReviewRecord>) -> Self {
        ReviewCorpus::from_records(records)
    }
}

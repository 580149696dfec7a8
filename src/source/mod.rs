pub mod file;

use thiserror::Error;

use crate::review::ReviewRecord;

pub use file::FileReviewSource;

/// A finite, single-pass producer of review records.
///
/// The corpus drains a source fully at construction time; there is no
/// rewind. `Ok(None)` marks exhaustion.
pub trait ReviewSource {
    fn next_review(&mut self) -> Result<Option<ReviewRecord>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: missing field {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("Line {line}: invalid number in field {field}")]
    InvalidNumber { line: usize, field: &'static str },

    #[error("Line {line}: invalid helpfulness vote pair")]
    InvalidHelpfulness { line: usize },
}

/// Infallible source over an in-memory record list. Yields records in the
/// order given.
pub struct VecSource {
    records: std::vec::IntoIter<ReviewRecord>,
}

impl VecSource {
    pub fn new(records: Vec<ReviewRecord>) -> Self {
        VecSource {
            records: records.into_iter(),
        }
    }
}

impl ReviewSource for VecSource {
    fn next_review(&mut self) -> Result<Option<ReviewRecord>, SourceError> {
        Ok(self.records.next())
    }
}

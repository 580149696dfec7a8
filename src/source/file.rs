use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};

use super::{ReviewSource, SourceError};
use crate::review::{Helpfulness, ReviewRecord};
use crate::types::identifiers::{ProductId, UserId};

/// Field markers of the line-oriented review format, in the order they
/// appear on each line. One review per line; every field is introduced by
/// its tag and terminated by the next field's tag.
const FIELD_MARKERS: [&str; 8] = [
    "product/productId: ",
    "\treview/userId: ",
    "\treview/profileName: ",
    "\treview/helpfulness: ",
    "\treview/score: ",
    "\treview/time: ",
    "\treview/summary: ",
    "\treview/text: ",
];

/// Short names used in error reporting, aligned with [`FIELD_MARKERS`].
const FIELD_NAMES: [&str; 8] = [
    "productId",
    "userId",
    "profileName",
    "helpfulness",
    "score",
    "time",
    "summary",
    "text",
];

/// Reads review records from the tab-delimited key-value text format.
///
/// Blank lines are skipped. Any structural problem on a line surfaces as a
/// [`SourceError`] carrying the 1-based line number.
#[derive(Debug)]
pub struct FileReviewSource {
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl FileReviewSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(FileReviewSource {
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }

    /// Slice the value of field `idx` out of `line`: everything between its
    /// marker and the next field's marker (or end of line for the last).
    fn field<'a>(&self, line: &'a str, idx: usize) -> Result<&'a str, SourceError> {
        let marker = FIELD_MARKERS[idx];
        let start = line.find(marker).ok_or(SourceError::MissingField {
            line: self.line_no,
            field: FIELD_NAMES[idx],
        })? + marker.len();
        let rest = &line[start..];
        let end = FIELD_MARKERS
            .get(idx + 1)
            .and_then(|next| rest.find(next))
            .unwrap_or(rest.len());
        Ok(rest[..end].trim())
    }

    fn parse_line(&self, line: &str) -> Result<ReviewRecord, SourceError> {
        let product_id = ProductId::new(self.field(line, 0)?);
        let user_id = UserId::new(self.field(line, 1)?);
        let profile_name = self.field(line, 2)?.to_string();

        let helpfulness: Helpfulness =
            self.field(line, 3)?
                .parse()
                .map_err(|_| SourceError::InvalidHelpfulness {
                    line: self.line_no,
                })?;

        let score: f64 = self
            .field(line, 4)?
            .parse()
            .map_err(|_| SourceError::InvalidNumber {
                line: self.line_no,
                field: FIELD_NAMES[4],
            })?;

        let seconds: i64 = self
            .field(line, 5)?
            .parse()
            .map_err(|_| SourceError::InvalidNumber {
                line: self.line_no,
                field: FIELD_NAMES[5],
            })?;
        let timestamp: Option<DateTime<Utc>> = Utc.timestamp_opt(seconds, 0).single();

        let summary = self.field(line, 6)?.to_string();
        let text = self.field(line, 7)?.to_string();

        Ok(ReviewRecord {
            product_id,
            user_id,
            profile_name,
            helpfulness,
            score,
            timestamp,
            summary,
            text,
        })
    }
}

impl ReviewSource for FileReviewSource {
    fn next_review(&mut self) -> Result<Option<ReviewRecord>, SourceError> {
        loop {
            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            let line = line?;
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            return self.parse_line(&line).map(Some);
        }
    }
}

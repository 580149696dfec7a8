pub mod helpfulness;
pub mod record;

pub use helpfulness::{Helpfulness, HelpfulnessParseError};
pub use record::ReviewRecord;

pub mod identifiers;
pub mod report;

pub use identifiers::{ProductId, UserId};
pub use report::{
    CorpusReport, HelpfulnessScore, QueryError, ReviewTally, ScoredProduct, WordCount,
};

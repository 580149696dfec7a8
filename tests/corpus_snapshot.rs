use review_core::aggregate::ReviewAggregator;
use review_core::corpus::ReviewCorpus;
use review_core::review::{Helpfulness, ReviewRecord};
use review_core::source::{ReviewSource, SourceError, VecSource};
use review_core::types::{ProductId, UserId};

fn make_review(product: &str, user: &str, score: f64) -> ReviewRecord {
    ReviewRecord {
        product_id: ProductId::new(product),
        user_id: UserId::new(user),
        profile_name: format!("profile-{user}"),
        helpfulness: Helpfulness::default(),
        score,
        timestamp: None,
        summary: String::new(),
        text: String::new(),
    }
}

/// Source that yields a few records and then fails, for exercising the
/// construction error path.
struct FailingSource {
    yielded: usize,
    fail_after: usize,
}

impl ReviewSource for FailingSource {
    fn next_review(&mut self) -> Result<Option<ReviewRecord>, SourceError> {
        if self.yielded == self.fail_after {
            return Err(SourceError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "stream cut short",
            )));
        }
        self.yielded += 1;
        Ok(Some(make_review("A", "u", 3.0)))
    }
}

#[test]
fn construction_drains_the_source_in_order() {
    let records = vec![
        make_review("zz", "u1", 1.0),
        make_review("aa", "u2", 2.0),
        make_review("mm", "u3", 3.0),
    ];

    let corpus = ReviewCorpus::from_source(VecSource::new(records.clone())).unwrap();

    // Insertion order is preserved exactly; no reordering on build.
    assert_eq!(corpus.records(), records.as_slice());
    assert_eq!(corpus.len(), 3);
    assert!(!corpus.is_empty());
}

#[test]
fn construction_propagates_source_failure() {
    let source = FailingSource {
        yielded: 0,
        fail_after: 2,
    };

    let err = ReviewCorpus::from_source(source).unwrap_err();
    assert!(matches!(err, SourceError::Io(_)));

    let source = FailingSource {
        yielded: 0,
        fail_after: 0,
    };
    assert!(ReviewAggregator::from_source(source).is_err());
}

#[test]
fn empty_source_builds_an_empty_corpus() {
    let corpus = ReviewCorpus::from_source(VecSource::new(Vec::new())).unwrap();
    assert!(corpus.is_empty());
    assert_eq!(corpus.len(), 0);
}

#[test]
fn aggregator_exposes_its_corpus() {
    let agg = ReviewAggregator::from_source(VecSource::new(vec![make_review("A", "u1", 4.0)]))
        .unwrap();

    assert_eq!(agg.corpus().len(), 1);
    assert_eq!(agg.corpus().records()[0].product_id.as_str(), "A");
}

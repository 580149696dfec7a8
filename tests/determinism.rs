use review_core::aggregate::ReviewAggregator;
use review_core::corpus::ReviewCorpus;
use review_core::review::{Helpfulness, ReviewRecord};
use review_core::types::{ProductId, UserId};

fn make_review(
    product: &str,
    user: &str,
    score: f64,
    votes: (u64, u64),
    text: &str,
) -> ReviewRecord {
    ReviewRecord {
        product_id: ProductId::new(product),
        user_id: UserId::new(user),
        profile_name: format!("profile-{user}"),
        helpfulness: Helpfulness::new(votes.0, votes.1),
        score,
        timestamp: None,
        summary: String::new(),
        text: text.to_string(),
    }
}

fn golden_records() -> Vec<ReviewRecord> {
    vec![
        make_review("A", "u2", 5.0, (1, 2), "great movie"),
        make_review("A", "u1", 3.0, (0, 0), "bad acting"),
        make_review("B", "u1", 4.0, (3, 4), "great great fun"),
    ]
}

#[test]
fn identical_corpora_share_a_fingerprint() {
    let corpus1 = ReviewCorpus::from_records(golden_records());
    let corpus2 = ReviewCorpus::from_records(golden_records());

    assert_eq!(corpus1.fingerprint(), corpus2.fingerprint());

    let fp = corpus1.fingerprint();
    let hex_part = fp.as_str().strip_prefix("sha256:").expect("sha256 prefix");
    assert_eq!(hex_part.len(), 64);
    assert!(hex_part.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn reordering_records_changes_the_fingerprint() {
    let mut reordered = golden_records();
    reordered.swap(0, 2);

    let corpus1 = ReviewCorpus::from_records(golden_records());
    let corpus2 = ReviewCorpus::from_records(reordered);

    assert_ne!(corpus1.fingerprint(), corpus2.fingerprint());
}

#[test]
fn changing_any_hashed_field_changes_the_fingerprint() {
    let base = ReviewCorpus::from_records(golden_records()).fingerprint();

    let mut records = golden_records();
    records[0].score = 4.0;
    assert_ne!(ReviewCorpus::from_records(records).fingerprint(), base);

    let mut records = golden_records();
    records[1].text.push('!');
    assert_ne!(ReviewCorpus::from_records(records).fingerprint(), base);

    let mut records = golden_records();
    records[2].helpfulness = Helpfulness::new(4, 4);
    assert_ne!(ReviewCorpus::from_records(records).fingerprint(), base);
}

#[test]
fn reports_are_byte_for_byte_deterministic() {
    let agg1 = ReviewAggregator::from(golden_records());
    let agg2 = ReviewAggregator::from(golden_records());

    let json1 = serde_json::to_string_pretty(&agg1.summarize(2)).unwrap();
    let json2 = serde_json::to_string_pretty(&agg2.summarize(2)).unwrap();

    assert_eq!(json1, json2, "Report output is not deterministic");
}

#[test]
fn golden_report_snapshot() {
    let agg = ReviewAggregator::from(golden_records());

    // The fingerprint is a content hash; pin it before snapshotting so the
    // golden text stays readable.
    let mut report = agg.summarize(2);
    report.fingerprint = "sha256:golden".to_string();

    let json = serde_json::to_string_pretty(&report).unwrap();

    let expected = r#"{
  "fingerprint": "sha256:golden",
  "review_count": 3,
  "product_count": 2,
  "user_count": 2,
  "top_products": [
    {
      "product_id": "A",
      "average_score": 4.0
    },
    {
      "product_id": "B",
      "average_score": 4.0
    }
  ],
  "most_reviewed": [
    {
      "product_id": "A",
      "review_count": 2
    },
    {
      "product_id": "B",
      "review_count": 1
    }
  ],
  "top_words": [
    {
      "word": "great",
      "count": 3
    },
    {
      "word": "acting",
      "count": 1
    }
  ],
  "top_reviewers": [
    {
      "user_id": "u1",
      "ratio": 0.75
    },
    {
      "user_id": "u2",
      "ratio": 0.5
    }
  ]
}"#;

    assert_eq!(json.trim(), expected.trim(), "Golden snapshot mismatch");
}

#[test]
fn queries_do_not_mutate_the_snapshot() {
    let agg = ReviewAggregator::from(golden_records());
    let before = agg.corpus().fingerprint();

    let _ = agg.total_average_score();
    let _ = agg.top_k_products_by_average(10);
    let _ = agg.products_percentile(50.0);
    let _ = agg.top_words(10);
    let _ = agg.top_k_helpful_users(10);
    let _ = agg.summarize(3);

    assert_eq!(agg.corpus().fingerprint(), before);
    assert_eq!(agg.corpus().len(), 3);
}

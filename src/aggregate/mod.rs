pub mod ranking;
pub mod wordcount;

use std::collections::{HashMap, HashSet};

use crate::corpus::ReviewCorpus;
use crate::review::{Helpfulness, ReviewRecord};
use crate::source::{ReviewSource, SourceError};
use crate::types::identifiers::{ProductId, UserId};
use crate::types::report::{
    CorpusReport, HelpfulnessScore, QueryError, ReviewTally, ScoredProduct, WordCount,
};

pub use ranking::round_score;

/// Aggregate query engine over an immutable review corpus.
///
/// Every query is a pure read: it scans the snapshot, builds whatever
/// transient maps it needs, and returns a fresh result. Total orderings are
/// deterministic throughout — equal sort keys always fall back to the
/// ascending lexicographic order of the identifier.
pub struct ReviewAggregator {
    corpus: ReviewCorpus,
}

impl ReviewAggregator {
    pub fn new(corpus: ReviewCorpus) -> Self {
        ReviewAggregator { corpus }
    }

    /// Drain `source` fully and snapshot the result. Fails only if the
    /// source itself fails.
    pub fn from_source<S: ReviewSource>(source: S) -> Result<Self, SourceError> {
        Ok(ReviewAggregator::new(ReviewCorpus::from_source(source)?))
    }

    pub fn corpus(&self) -> &ReviewCorpus {
        &self.corpus
    }

    /// Review-weighted mean of `score` across all records. Products with
    /// more reviews weigh proportionally more; this is NOT the mean of
    /// per-product averages.
    pub fn total_average_score(&self) -> Result<f64, QueryError> {
        let records = self.corpus.records();
        if records.is_empty() {
            return Err(QueryError::EmptyCorpus);
        }
        let sum: f64 = records.iter().map(|record| record.score).sum();
        Ok(sum / records.len() as f64)
    }

    /// Mean of `score` over records matching `product_id`.
    pub fn product_average_score(&self, product_id: &ProductId) -> Result<f64, QueryError> {
        let mut sum = 0.0;
        let mut matching = 0u64;
        for record in self.corpus.records() {
            if record.product_id == *product_id {
                sum += record.score;
                matching += 1;
            }
        }
        if matching == 0 {
            return Err(QueryError::UnknownProduct(product_id.clone()));
        }
        Ok(sum / matching as f64)
    }

    /// All distinct products with their unrounded averages, ranked by
    /// (average desc, product id asc).
    fn ranked_product_averages(&self) -> Vec<ScoredProduct> {
        let mut sums: HashMap<&ProductId, (f64, u64)> = HashMap::new();
        for record in self.corpus.records() {
            let entry = sums.entry(&record.product_id).or_insert((0.0, 0));
            entry.0 += record.score;
            entry.1 += 1;
        }

        let mut ranked: Vec<ScoredProduct> = sums
            .into_iter()
            .map(|(product_id, (sum, count))| ScoredProduct {
                product_id: product_id.clone(),
                average_score: sum / count as f64,
            })
            .collect();
        ranked.sort_by(ranking::by_average_then_id);
        ranked
    }

    /// The `k` products with the highest average scores. `k` beyond the
    /// distinct product count returns all of them.
    pub fn top_k_products_by_average(&self, k: usize) -> Vec<ScoredProduct> {
        let mut ranked = self.ranked_product_averages();
        ranked.truncate(k);
        for product in &mut ranked {
            product.average_score = ranking::round_score(product.average_score);
        }
        ranked
    }

    /// The single best-rated product; same ordering as
    /// [`Self::top_k_products_by_average`].
    pub fn highest_average_product(&self) -> Result<ScoredProduct, QueryError> {
        self.top_k_products_by_average(1)
            .into_iter()
            .next()
            .ok_or(QueryError::EmptyCorpus)
    }

    /// Discard the bottom `floor(n * percentile / 100)` entries of the
    /// average-score ranking and return the rest. Percentile 0 returns
    /// everything, 100 returns an empty list.
    pub fn products_percentile(&self, percentile: f64) -> Result<Vec<ScoredProduct>, QueryError> {
        if !(0.0..=100.0).contains(&percentile) {
            return Err(QueryError::InvalidPercentile(percentile));
        }

        let mut ranked = self.ranked_product_averages();
        let cut = (ranked.len() as f64 * percentile / 100.0).floor() as usize;
        ranked.truncate(ranked.len() - cut);
        for product in &mut ranked {
            product.average_score = ranking::round_score(product.average_score);
        }
        Ok(ranked)
    }

    /// All distinct products with their review counts, ranked by
    /// (count desc, product id asc).
    fn review_tallies(&self) -> Vec<ReviewTally> {
        let mut counts: HashMap<&ProductId, u64> = HashMap::new();
        for record in self.corpus.records() {
            *counts.entry(&record.product_id).or_default() += 1;
        }

        let mut tallies: Vec<ReviewTally> = counts
            .into_iter()
            .map(|(product_id, review_count)| ReviewTally {
                product_id: product_id.clone(),
                review_count,
            })
            .collect();
        tallies.sort_by(ranking::by_count_then_id);
        tallies
    }

    /// The product with the largest review count.
    pub fn most_reviewed_product(&self) -> Result<ProductId, QueryError> {
        self.review_tallies()
            .into_iter()
            .next()
            .map(|tally| tally.product_id)
            .ok_or(QueryError::EmptyCorpus)
    }

    /// The `k` most-reviewed products in strictly descending count order.
    pub fn top_k_most_reviewed(&self, k: usize) -> Vec<ReviewTally> {
        let mut tallies = self.review_tallies();
        tallies.truncate(k);
        tallies
    }

    /// Among products with at least `min_reviews` reviews, the one with the
    /// highest average score.
    pub fn most_popular_with_at_least(
        &self,
        min_reviews: u64,
    ) -> Result<ScoredProduct, QueryError> {
        let qualifying: HashSet<ProductId> = self
            .review_tallies()
            .into_iter()
            .filter(|tally| tally.review_count >= min_reviews)
            .map(|tally| tally.product_id)
            .collect();

        self.ranked_product_averages()
            .into_iter()
            .find(|product| qualifying.contains(&product.product_id))
            .map(|mut product| {
                product.average_score = ranking::round_score(product.average_score);
                product
            })
            .ok_or(QueryError::NoQualifyingProduct(min_reviews))
    }

    /// The `k` most frequent whitespace tokens across every review text.
    pub fn top_words(&self, k: usize) -> Vec<WordCount> {
        wordcount::top_words(
            self.corpus.records().iter().map(|record| record.text.as_str()),
            k,
        )
    }

    /// Word counts as in [`Self::top_words`], restricted to reviews of the
    /// `top_products` most-reviewed products.
    pub fn top_words_in_most_reviewed(
        &self,
        top_products: usize,
        top_words: usize,
    ) -> Vec<WordCount> {
        let leaders: HashSet<ProductId> = self
            .top_k_most_reviewed(top_products)
            .into_iter()
            .map(|tally| tally.product_id)
            .collect();

        wordcount::top_words(
            self.corpus
                .records()
                .iter()
                .filter(|record| leaders.contains(&record.product_id))
                .map(|record| record.text.as_str()),
            top_words,
        )
    }

    /// The `k` users with the highest aggregated helpfulness ratios.
    ///
    /// Votes are summed per user across all their reviews before the ratio
    /// is taken, so one heavily-voted review outweighs many unvoted ones.
    pub fn top_k_helpful_users(&self, k: usize) -> Vec<HelpfulnessScore> {
        let mut votes: HashMap<&UserId, Helpfulness> = HashMap::new();
        for record in self.corpus.records() {
            votes
                .entry(&record.user_id)
                .or_default()
                .accumulate(record.helpfulness);
        }

        let mut scores: Vec<HelpfulnessScore> = votes
            .into_iter()
            .map(|(user_id, tally)| HelpfulnessScore {
                user_id: user_id.clone(),
                ratio: tally.ratio(),
            })
            .collect();
        scores.sort_by(ranking::by_ratio_then_user);
        scores.truncate(k);
        for score in &mut scores {
            score.ratio = ranking::round_score(score.ratio);
        }
        scores
    }

    /// Count of distinct products in the corpus.
    pub fn product_count(&self) -> usize {
        self.corpus
            .records()
            .iter()
            .map(|record| &record.product_id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Count of distinct reviewing users.
    pub fn user_count(&self) -> usize {
        self.corpus
            .records()
            .iter()
            .map(|record| &record.user_id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Total number of review records.
    pub fn review_count(&self) -> usize {
        self.corpus.len()
    }

    /// Serializable summary of the corpus: snapshot identity, cardinalities,
    /// and the top `k` entries of each ranking. Small corpora simply yield
    /// shorter lists.
    pub fn summarize(&self, k: usize) -> CorpusReport {
        CorpusReport {
            fingerprint: self.corpus.fingerprint().as_str().to_string(),
            review_count: self.review_count(),
            product_count: self.product_count(),
            user_count: self.user_count(),
            top_products: self.top_k_products_by_average(k),
            most_reviewed: self.top_k_most_reviewed(k),
            top_words: self.top_words(k),
            top_reviewers: self.top_k_helpful_users(k),
        }
    }
}

impl From<Vec<ReviewRecord>> for ReviewAggregator {
    fn from(records: Vec<ReviewRecord>) -> Self {
        ReviewAggregator::new(ReviewCorpus::from_records(records))
    }
}

use std::collections::HashMap;

use super::ranking;
use crate::types::report::WordCount;

/// Tokenize by runs of whitespace. Tokens are case-sensitive and keep
/// their punctuation; no normalization is applied.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Count tokens across `texts` and return the `k` most frequent, ordered
/// by (count desc, word asc). Fewer than `k` distinct tokens returns them
/// all.
pub fn top_words<'a>(texts: impl Iterator<Item = &'a str>, k: usize) -> Vec<WordCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for text in texts {
        for token in tokenize(text) {
            *counts.entry(token).or_default() += 1;
        }
    }

    let mut ranked: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(ranking::by_count_then_word);
    ranked.truncate(k);
    ranked
}

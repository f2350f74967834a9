//! Bigram successor prediction over the corpus-wide token stream.

use crate::corpus::Corpus;
use crate::error::QueryError;
use crate::map::ChainedMap;

/// Predict the token most likely to follow `word`.
///
/// Walks the corpus-wide token stream once, accumulating successor counts
/// in a frequency map, then takes a single pass for the maximum. Ties at
/// the maximum count resolve to the lexicographically smallest successor.
/// A final-position occurrence of `word` has no successor and is skipped.
pub fn predict(corpus: &Corpus, word: &str) -> Result<String, QueryError> {
    if corpus.is_empty() {
        return Err(QueryError::EmptyCorpus);
    }

    let mut counts: ChainedMap<&str, u32> = ChainedMap::new();
    let mut prev: Option<&str> = None;
    for token in corpus.token_stream() {
        if prev == Some(word) {
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token, 1);
                }
            }
        }
        prev = Some(token);
    }

    let mut best: Option<(&str, u32)> = None;
    for (successor, count) in counts.iter() {
        let better = match best {
            None => true,
            Some((best_successor, best_count)) => {
                *count > best_count || (*count == best_count && *successor < best_successor)
            }
        };
        if better {
            best = Some((*successor, *count));
        }
    }

    best.map(|(successor, _)| successor.to_string())
        .ok_or_else(|| QueryError::NoSuccessor(word.to_string()))
}

//! Single-term TF-IDF ranking over the corpus.

use crate::corpus::Corpus;
use crate::error::QueryError;
use crate::map::ChainedMap;

/// Pick the document most characteristic of `word`.
///
/// Per document: `TF = occurrences / total tokens` and
/// `IDF = 1 + ln(N / DF)`, both in real-valued arithmetic. The word must
/// occur somewhere in the corpus, otherwise IDF is undefined and the query
/// reports [`QueryError::WordNotFound`]. Ties at the maximum score resolve
/// to the lexicographically smallest file name.
pub fn best_document<'a>(corpus: &'a Corpus, word: &str) -> Result<&'a str, QueryError> {
    if corpus.is_empty() {
        return Err(QueryError::EmptyCorpus);
    }
    let df = corpus.words().document_frequency(word);
    if df == 0 {
        return Err(QueryError::WordNotFound(word.to_string()));
    }
    let idf = 1.0 + (corpus.len() as f64 / df as f64).ln();

    let mut scores: ChainedMap<&str, f64> = ChainedMap::new();
    for doc in corpus.documents() {
        let occurrences = corpus.inverted().occurrences(word, &doc.name) as f64;
        let tf = if doc.tokens.is_empty() {
            0.0
        } else {
            occurrences / doc.tokens.len() as f64
        };
        scores.insert(doc.name.as_str(), tf * idf);
    }

    // Scan (document, score) pairs directly: equal scores keep every
    // candidate in play, and the smallest name among them wins.
    let mut best: Option<(&str, f64)> = None;
    for (doc, score) in scores.iter() {
        let better = match best {
            None => true,
            Some((best_doc, best_score)) => {
                *score > best_score || (*score == best_score && *doc < best_doc)
            }
        };
        if better {
            best = Some((*doc, *score));
        }
    }
    best.map(|(doc, _)| doc).ok_or(QueryError::EmptyCorpus)
}

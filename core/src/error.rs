use thiserror::Error;

/// Query-level failure conditions. These are reported per query line and
/// never abort the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The word has zero document frequency, so IDF is undefined.
    #[error("word not found in corpus: {0}")]
    WordNotFound(String),
    /// No documents were ingested; no query has an answer.
    #[error("corpus is empty")]
    EmptyCorpus,
    /// The word never appears with a token after it.
    #[error("no successor found for word: {0}")]
    NoSuccessor(String),
}

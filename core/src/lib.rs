//! In-memory document indexing and retrieval.
//!
//! A chained hash map ([`map::ChainedMap`]) backs every index structure: an
//! inverted index over (term, document) pairs, a word index aggregating
//! per-term document postings, single-term TF-IDF ranking, and bigram
//! successor prediction. Indexes are built once per corpus and served
//! read-only.

pub mod bigram;
pub mod corpus;
pub mod error;
pub mod index;
pub mod map;
pub mod score;
pub mod tokenizer;

pub use corpus::{Corpus, Document};
pub use error::QueryError;
pub use index::{InvertedIndex, PositionList, PostingKey, WordIndex};
pub use map::ChainedMap;

use crate::map::ChainedMap;

/// Token offsets within one document, strictly increasing by construction
/// because ingestion appends them in scan order.
pub type PositionList = Vec<u32>;

/// Key of one inverted-index entry: a (term, document) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostingKey {
    pub term: String,
    pub doc: String,
}

impl PostingKey {
    fn new(term: &str, doc: &str) -> Self {
        Self {
            term: term.to_string(),
            doc: doc.to_string(),
        }
    }
}

/// Maps each (term, document) pair to the ordered offsets at which the term
/// occurs in that document. One entry per distinct term per document.
#[derive(Default)]
pub struct InvertedIndex {
    postings: ChainedMap<PostingKey, PositionList>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `term` in `doc` at token offset `position`,
    /// creating the entry on first sight of the pair.
    pub fn add_occurrence(&mut self, term: &str, doc: &str, position: u32) {
        let key = PostingKey::new(term, doc);
        match self.postings.get_mut(&key) {
            Some(positions) => positions.push(position),
            None => {
                self.postings.insert(key, vec![position]);
            }
        }
    }

    pub fn positions(&self, term: &str, doc: &str) -> Option<&PositionList> {
        self.postings.get(&PostingKey::new(term, doc))
    }

    /// Number of times `term` occurs in `doc`; 0 when the pair is absent.
    pub fn occurrences(&self, term: &str, doc: &str) -> usize {
        self.positions(term, doc).map_or(0, Vec::len)
    }

    /// Number of distinct (term, document) pairs.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// Aggregation view over the inverted index: term → document → offsets.
///
/// Document frequency of a term is the size of its inner map. Entries are
/// created incrementally as documents are ingested and never shrink.
#[derive(Default)]
pub struct WordIndex {
    terms: ChainedMap<String, ChainedMap<String, PositionList>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished (document, positions) pair into the entry for `term`.
    pub fn fold(&mut self, term: &str, doc: &str, positions: PositionList) {
        match self.terms.get_mut(term) {
            Some(docs) => {
                docs.insert(doc.to_string(), positions);
            }
            None => {
                let mut docs = ChainedMap::new();
                docs.insert(doc.to_string(), positions);
                self.terms.insert(term.to_string(), docs);
            }
        }
    }

    /// Count of documents containing `term` at least once.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.terms.get(term).map_or(0, ChainedMap::len)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Per-document offsets for `term`, if the term occurs anywhere.
    pub fn documents(&self, term: &str) -> Option<&ChainedMap<String, PositionList>> {
        self.terms.get(term)
    }
}

use crate::index::{InvertedIndex, WordIndex};

/// One ingested document: its unique file name and normalized token stream,
/// in scan order.
pub struct Document {
    pub name: String,
    pub tokens: Vec<String>,
}

/// Everything a query needs, bundled in one context object: the ordered
/// document list, the inverted index, and the word index.
///
/// Built once by ingestion and read-only afterwards; queries never mutate
/// it. Documents are identified by file name alone.
#[derive(Default)]
pub struct Corpus {
    documents: Vec<Document>,
    inverted: InvertedIndex,
    words: WordIndex,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one tokenized document.
    ///
    /// Offsets are assigned left to right, then each distinct term's
    /// finished position list is folded into the word index. A name already
    /// present is rejected: file names are the document identity.
    pub fn add_document(&mut self, name: impl Into<String>, tokens: Vec<String>) {
        let name = name.into();
        if self.documents.iter().any(|d| d.name == name) {
            tracing::warn!(doc = %name, "duplicate document name, skipping");
            return;
        }

        for (offset, token) in tokens.iter().enumerate() {
            self.inverted.add_occurrence(token, &name, offset as u32);
        }
        for token in &tokens {
            let already_folded = self
                .words
                .documents(token)
                .is_some_and(|docs| docs.contains_key(name.as_str()));
            if already_folded {
                continue;
            }
            let positions = self
                .inverted
                .positions(token, &name)
                .cloned()
                .unwrap_or_default();
            self.words.fold(token, &name, positions);
        }

        tracing::debug!(doc = %name, tokens = tokens.len(), "indexed document");
        self.documents.push(Document { name, tokens });
    }

    /// Number of ingested documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents in ingestion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    pub fn words(&self) -> &WordIndex {
        &self.words
    }

    /// The corpus-wide token stream: every document's tokens chained in
    /// ingestion order. Document boundaries are not marked, so the last
    /// token of one document is immediately followed by the first token of
    /// the next.
    pub fn token_stream(&self) -> impl Iterator<Item = &str> {
        self.documents
            .iter()
            .flat_map(|d| d.tokens.iter().map(String::as_str))
    }
}

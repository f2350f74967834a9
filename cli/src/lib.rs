//! I/O glue around the core engine: directory ingestion, query-file
//! parsing, and the query loop.

use anyhow::{Context, Result};
use docsearch_core::tokenizer::tokenize;
use docsearch_core::{bigram, score, Corpus, QueryError};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use walkdir::WalkDir;

pub const SEARCH_KEYWORD: &str = "search";
pub const DEFAULT_BIGRAM_KEYWORD: &str = "bigram";

/// Build the corpus from every regular file directly under `dir`.
///
/// Entries are visited in file-name order so ingestion, and with it the
/// corpus-wide bigram stream, is deterministic across platforms. There is
/// no extension filtering: every file is a document, keyed by its file
/// name. A document that cannot be read is logged and skipped; only a
/// missing directory is fatal.
pub fn ingest_dir(dir: &Path) -> Result<Corpus> {
    if !dir.is_dir() {
        anyhow::bail!("document directory not found: {}", dir.display());
    }
    let mut corpus = Corpus::new();
    for entry in WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        match fs::read_to_string(entry.path()) {
            Ok(text) => corpus.add_document(name, tokenize(&text)),
            Err(err) => tracing::warn!(doc = %name, %err, "skipping unreadable document"),
        }
    }
    tracing::info!(num_docs = corpus.len(), "corpus ingested");
    Ok(corpus)
}

/// One parsed query line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    Search(String),
    Bigram(String),
}

/// Parse one query line.
///
/// Dispatch is keyed on the first whitespace token and the *last* token on
/// the line is the query word, so `search for the word cat` queries `cat`.
/// Lines with fewer than two tokens or an unknown command are malformed.
pub fn parse_query_line(line: &str, bigram_keyword: &str) -> Option<QueryCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&first, &last) = (tokens.first()?, tokens.last()?);
    if tokens.len() < 2 {
        return None;
    }
    if first == SEARCH_KEYWORD {
        Some(QueryCommand::Search(last.to_string()))
    } else if first == bigram_keyword {
        Some(QueryCommand::Bigram(last.to_string()))
    } else {
        None
    }
}

/// Run every query line from `reader` against the corpus, writing one
/// output line per answered query: the winning file name for a search, or
/// `<word> <successor>` for a bigram prediction.
///
/// Malformed lines and query-level failures are logged and skipped; only
/// I/O errors on the reader or writer abort the loop.
pub fn run_queries<R: BufRead, W: Write>(
    corpus: &Corpus,
    reader: R,
    out: &mut W,
    bigram_keyword: &str,
) -> Result<()> {
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("reading query file")?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = parse_query_line(&line, bigram_keyword) else {
            tracing::warn!(line = idx + 1, "malformed query line, skipping");
            continue;
        };
        match command {
            QueryCommand::Search(word) => match score::best_document(corpus, &word) {
                Ok(doc) => writeln!(out, "{doc}")?,
                Err(err) => report(idx + 1, &err),
            },
            QueryCommand::Bigram(word) => match bigram::predict(corpus, &word) {
                Ok(successor) => writeln!(out, "{word} {successor}")?,
                Err(err) => report(idx + 1, &err),
            },
        }
    }
    Ok(())
}

fn report(line: usize, err: &QueryError) {
    tracing::warn!(line, %err, "query failed");
}

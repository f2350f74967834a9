use anyhow::{Context, Result};
use clap::Parser;
use docsearch_cli::{ingest_dir, run_queries, DEFAULT_BIGRAM_KEYWORD};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Index a directory of text documents and answer TF-IDF and bigram queries", long_about = None)]
struct Args {
    /// Directory of documents to index
    docs_dir: PathBuf,
    /// Newline-delimited query file
    query_file: PathBuf,
    /// Keyword that dispatches a query line to the bigram predictor
    #[arg(long, default_value = DEFAULT_BIGRAM_KEYWORD)]
    bigram_keyword: String,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let corpus = ingest_dir(&args.docs_dir)?;
    let queries = File::open(&args.query_file)
        .with_context(|| format!("query file not found: {}", args.query_file.display()))?;

    let stdout = io::stdout();
    run_queries(
        &corpus,
        BufReader::new(queries),
        &mut stdout.lock(),
        &args.bigram_keyword,
    )
}

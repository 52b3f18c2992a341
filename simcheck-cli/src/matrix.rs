mod common;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use simcheck::{Analyzer, ComparisonCache, Document};

#[derive(Parser, Debug)]
#[clap(
    name = "simcheck-matrix",
    about = "A program to compute the pairwise similarity matrix of a corpus."
)]
struct Args {
    /// File path to a corpus of documents in JSON lines.
    #[clap(short = 'i', long)]
    corpus_path: PathBuf,

    /// File path to a configuration in JSON.
    #[clap(long)]
    config: Option<PathBuf>,

    /// Window size of word n-grams in the range of [1,10].
    #[clap(short = 'n', long)]
    ngram_size: Option<usize>,
}

fn main() -> Result<()> {
    common::init_tracing();
    let args = Args::parse();

    let mut config = common::load_config(args.config.as_deref())?;
    if let Some(ngram_size) = args.ngram_size {
        config.ngram_size = ngram_size;
    }
    config.validate()?;

    let corpus: Vec<Document> = common::load_jsonl(&args.corpus_path)?;
    let cache = ComparisonCache::new(config.cache_capacity)?;
    let analyzer = Analyzer::from_config(&cache, &config)?;

    tracing::info!(documents = corpus.len(), "computing similarity matrix");
    let start = Instant::now();
    let matrix = analyzer.similarity_matrix(&corpus)?;
    tracing::info!(elapsed_sec = start.elapsed().as_secs_f64(), "done");

    let ids: Vec<_> = corpus.iter().map(|doc| doc.id.as_str()).collect();
    println!("id,{}", ids.join(","));
    for (id, row) in ids.iter().zip(&matrix) {
        let row: Vec<_> = row.iter().map(|score| score.to_string()).collect();
        println!("{id},{}", row.join(","));
    }
    Ok(())
}

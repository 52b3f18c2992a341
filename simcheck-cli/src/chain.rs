mod common;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::Parser;

use simcheck::{Analyzer, ComparisonCache, Document};

#[derive(Parser, Debug)]
#[clap(
    name = "simcheck-chain",
    about = "A program to chain documents by walking to the most similar unvisited one."
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

    /// Maximum number of documents in the chain.
    #[clap(short = 'd', long)]
    max_depth: Option<usize>,

    /// Index of the starting document.
    /// If None, every document is tried and the longest chain is reported.
    #[clap(short = 'r', long)]
    root: Option<usize>,
}

fn main() -> Result<()> {
    common::init_tracing();
    let args = Args::parse();

    let mut config = common::load_config(args.config.as_deref())?;
    if let Some(ngram_size) = args.ngram_size {
        config.ngram_size = ngram_size;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    config.validate()?;

    let corpus: Vec<Document> = common::load_jsonl(&args.corpus_path)?;
    let cache = ComparisonCache::new(config.cache_capacity)?;
    let analyzer = Analyzer::from_config(&cache, &config)?;

    let start = Instant::now();
    let chain = match args.root {
        Some(root) if root >= corpus.len() => {
            return Err(anyhow!(
                "root {root} is out of range for {} documents",
                corpus.len()
            ));
        }
        Some(root) => analyzer.walk(&corpus, root)?,
        None => analyzer.longest_chain(&corpus)?,
    };
    let stats = cache.stats();
    tracing::info!(
        length = chain.len(),
        elapsed_sec = start.elapsed().as_secs_f64(),
        hit_rate = stats.hit_rate(),
        "done"
    );

    for id in chain {
        println!("{id}");
    }
    Ok(())
}

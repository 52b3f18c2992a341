mod common;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use simcheck::{Analyzer, ComparisonCache, Document, Submission};

#[derive(Parser, Debug)]
#[clap(
    name = "simcheck-batch",
    about = "A program to find the highest similarity of each submission to a corpus."
)]
struct Args {
    /// File path to a corpus of documents in JSON lines.
    #[clap(short = 'i', long)]
    corpus_path: PathBuf,

    /// File path to submissions in JSON lines.
    #[clap(short = 's', long)]
    submissions_path: PathBuf,

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
    let submissions: Vec<Submission> = common::load_jsonl(&args.submissions_path)?;
    tracing::info!(
        documents = corpus.len(),
        submissions = submissions.len(),
        "loaded inputs"
    );

    let cache = ComparisonCache::new(config.cache_capacity)?;
    let analyzer = Analyzer::from_config(&cache, &config)?;
    let start = Instant::now();
    let scores = analyzer.batch_max_similarity(&submissions, &corpus)?;
    tracing::info!(elapsed_sec = start.elapsed().as_secs_f64(), "done");

    println!("i,id,score");
    for (i, (submission, score)) in submissions.iter().zip(scores).enumerate() {
        println!("{i},{},{score}", submission.id);
    }
    Ok(())
}

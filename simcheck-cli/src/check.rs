mod common;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use simcheck::{ComparisonCache, Document, ProgressiveCheck, Ranker, Submission};

#[derive(Parser, Debug)]
#[clap(
    name = "simcheck-check",
    about = "A program to check a submission against a corpus of documents."
)]
struct Args {
    /// File path to a corpus of documents in JSON lines.
    #[clap(short = 'i', long)]
    corpus_path: PathBuf,

    /// File path to the submission text.
    #[clap(short = 'q', long)]
    submission_path: PathBuf,

    /// Identifier of the submission. A corpus document with the same id is skipped.
    #[clap(long, default_value = "submission")]
    id: String,

    /// File path to a configuration in JSON.
    #[clap(long)]
    config: Option<PathBuf>,

    /// Window size of word n-grams in the range of [1,10].
    #[clap(short = 'n', long)]
    ngram_size: Option<usize>,

    /// Number of matches to report.
    #[clap(short = 'k', long)]
    top_k: Option<usize>,

    /// Reports only matches whose similarity is at least this value.
    #[clap(short = 't', long)]
    threshold: Option<f64>,

    /// Prints each comparison as soon as it is done.
    #[clap(short = 'p', long)]
    progressive: bool,
}

fn main() -> Result<()> {
    common::init_tracing();
    let args = Args::parse();

    let mut config = common::load_config(args.config.as_deref())?;
    if let Some(ngram_size) = args.ngram_size {
        config.ngram_size = ngram_size;
    }
    if let Some(top_k) = args.top_k {
        config.top_k = top_k;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    config.validate()?;

    let corpus: Vec<Document> = common::load_jsonl(&args.corpus_path)?;
    let submission = Submission::new(args.id, fs::read_to_string(&args.submission_path)?);
    tracing::info!(documents = corpus.len(), "loaded corpus");

    let cache = ComparisonCache::new(config.cache_capacity)?;
    let start = Instant::now();

    if args.progressive {
        config.validate_text(&submission.text)?;
        let mut best = 0f64;
        println!("document_id,score,percent_complete");
        for progress in ProgressiveCheck::new(&cache, &submission.text, &corpus, config.ngram_size)?
        {
            let progress = progress?;
            if progress.document_id == submission.id {
                continue;
            }
            best = best.max(progress.score);
            if progress.score >= config.threshold {
                println!(
                    "{},{},{}",
                    progress.document_id, progress.score, progress.percent_complete
                );
            }
        }
        tracing::info!(score = best, "check completed");
    } else {
        let ranking = Ranker::new(&cache, &config)
            .rank(&submission, &corpus)?
            .filter_by_threshold(config.threshold);
        tracing::info!(
            score = ranking.score,
            matched = ranking.best().map(|m| m.document_id.as_str()),
            "check completed"
        );
        println!("{}", serde_json::to_string_pretty(&ranking)?);
    }

    let stats = cache.stats();
    tracing::info!(
        elapsed_sec = start.elapsed().as_secs_f64(),
        hits = stats.hits,
        misses = stats.misses,
        hit_rate = stats.hit_rate(),
        "done"
    );
    Ok(())
}

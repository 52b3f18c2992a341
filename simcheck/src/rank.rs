//! Ranking a submission against a corpus.
use serde::Serialize;

use crate::cache::{CacheStats, ComparisonCache};
use crate::config::CheckConfig;
use crate::document::{Document, Submission};
use crate::errors::Result;
use crate::shingling::ShingleIter;
use crate::text::{normalize, tokenize};

/// A corpus document with its similarity to the submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedMatch {
    /// Identifier of the matched document.
    pub document_id: String,
    /// Title of the matched document.
    pub title: String,
    /// Author of the matched document.
    pub author: String,
    /// Similarity in `[0,1]`.
    pub score: f64,
}

/// Statistics of a ranking run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CheckStats {
    /// Number of words in the submission.
    pub tokens: usize,
    /// Number of n-grams in the submission.
    pub ngrams: usize,
    /// Number of corpus documents compared.
    pub documents_checked: usize,
    /// Cache statistics after the run.
    pub cache: CacheStats,
}

/// Result of ranking a submission against a corpus.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ranking {
    /// Highest similarity found, or 0 if nothing was compared.
    pub score: f64,
    /// Best matches in descending order of similarity.
    pub matches: Vec<RankedMatch>,
    /// Run statistics.
    pub stats: CheckStats,
}

impl Ranking {
    /// Keeps only the matches whose similarity is at least `threshold`.
    ///
    /// [`Ranking::score`] is left untouched.
    pub fn filter_by_threshold(mut self, threshold: f64) -> Self {
        self.matches.retain(|m| m.score >= threshold);
        self
    }

    /// Gets the best match, if any.
    pub fn best(&self) -> Option<&RankedMatch> {
        self.matches.first()
    }
}

/// Ranks submissions against a corpus through a shared [`ComparisonCache`].
///
/// # Examples
///
/// ```
/// use simcheck::{CheckConfig, ComparisonCache, Document, Ranker, Submission};
///
/// let corpus = vec![
///     Document::new("1", "hello world"),
///     Document::new("2", "goodbye world"),
/// ];
/// let config = CheckConfig { ngram_size: 2, min_length: 1, ..Default::default() };
/// let cache = ComparisonCache::new(config.cache_capacity).unwrap();
///
/// let ranking = Ranker::new(&cache, &config)
///     .rank(&Submission::new("s", "hello world"), &corpus)
///     .unwrap();
/// assert_eq!(ranking.score, 1.0);
/// assert_eq!(ranking.matches[0].document_id, "1");
/// ```
pub struct Ranker<'c> {
    cache: &'c ComparisonCache,
    config: &'c CheckConfig,
}

impl<'c> Ranker<'c> {
    /// Creates an instance.
    pub const fn new(cache: &'c ComparisonCache, config: &'c CheckConfig) -> Self {
        Self { cache, config }
    }

    /// Ranks a submission against all corpus documents except the one sharing its id.
    ///
    /// # Errors
    ///
    /// The configuration is validated, and then the submission text against
    /// the length policy, before any comparison.
    pub fn rank(&self, submission: &Submission, corpus: &[Document]) -> Result<Ranking> {
        self.rank_inner(&submission.text, Some(&submission.id), corpus)
    }

    /// Ranks a bare text against all corpus documents.
    pub fn rank_text(&self, text: &str, corpus: &[Document]) -> Result<Ranking> {
        self.rank_inner(text, None, corpus)
    }

    /// Ranks each submission independently, reporting failures per submission.
    pub fn rank_batch(
        &self,
        submissions: &[Submission],
        corpus: &[Document],
    ) -> Vec<Result<Ranking>> {
        submissions
            .iter()
            .map(|submission| self.rank(submission, corpus))
            .collect()
    }

    fn rank_inner(
        &self,
        text: &str,
        self_id: Option<&str>,
        corpus: &[Document],
    ) -> Result<Ranking> {
        self.config.validate()?;
        self.config.validate_text(text)?;
        let n = self.config.ngram_size;

        let mut matches = Vec::with_capacity(corpus.len());
        for doc in corpus {
            if self_id == Some(doc.id.as_str()) {
                continue;
            }
            let score = self.cache.compare(text, &doc.text, n)?;
            matches.push(RankedMatch {
                document_id: doc.id.clone(),
                title: doc.title.clone(),
                author: doc.author.clone(),
                score,
            });
        }
        let documents_checked = matches.len();

        // A stable sort keeps the corpus order among equal scores.
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        let score = matches.first().map_or(0., |m| m.score);
        matches.truncate(self.config.top_k);

        let normalized = normalize(text);
        let tokens = tokenize(&normalized);
        let stats = CheckStats {
            tokens: tokens.len(),
            ngrams: ShingleIter::new(&tokens, n).len(),
            documents_checked,
            cache: self.cache.stats(),
        };
        tracing::debug!(score, documents_checked, "ranked submission");

        Ok(Ranking {
            score,
            matches,
            stats,
        })
    }
}

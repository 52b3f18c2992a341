//! Corpus-wide analytics built on pairwise similarities.
//!
//! All algorithms take an immutable corpus snapshot and obtain every score
//! through a shared [`ComparisonCache`]. Independent units of work are fanned
//! out with rayon; results are collected in index order.
use hashbrown::HashSet;
use rayon::prelude::*;

use crate::cache::ComparisonCache;
use crate::config::{validate_ngram_size, CheckConfig};
use crate::document::{Document, Submission};
use crate::errors::Result;

/// Default maximum length of a document chain.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Analyzer of similarities across a corpus.
///
/// # Examples
///
/// ```
/// use simcheck::{Analyzer, ComparisonCache, Document};
///
/// let corpus = vec![
///     Document::new("a", "the quick brown fox jumps over the lazy dog"),
///     Document::new("b", "the quick brown fox jumps over the lazy dog"),
///     Document::new("c", "lorem ipsum dolor sit amet"),
/// ];
/// let cache = ComparisonCache::default();
/// let analyzer = Analyzer::new(&cache, 3).unwrap();
///
/// let matrix = analyzer.similarity_matrix(&corpus).unwrap();
/// assert_eq!(matrix[0][1], 1.0);
/// assert_eq!(matrix[0][2], 0.0);
/// ```
pub struct Analyzer<'c> {
    cache: &'c ComparisonCache,
    ngram_size: usize,
    max_depth: usize,
}

impl<'c> Analyzer<'c> {
    /// Creates an instance comparing word `ngram_size`-grams.
    ///
    /// # Errors
    ///
    /// [`SimcheckError::Config`](crate::errors::SimcheckError::Config) is returned
    /// if `ngram_size` is not in `1..=10`.
    pub fn new(cache: &'c ComparisonCache, ngram_size: usize) -> Result<Self> {
        validate_ngram_size(ngram_size)?;
        Ok(Self {
            cache,
            ngram_size,
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    /// Creates an instance with the n-gram size and the maximum depth of a configuration.
    pub fn from_config(cache: &'c ComparisonCache, config: &CheckConfig) -> Result<Self> {
        Ok(Self::new(cache, config.ngram_size)?.max_depth(config.max_depth))
    }

    /// Sets the maximum length of a document chain.
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Computes, for each submission, the highest similarity to a corpus document
    /// with a different id (0 if there is none).
    ///
    /// The output is aligned with `submissions`.
    pub fn batch_max_similarity(
        &self,
        submissions: &[Submission],
        corpus: &[Document],
    ) -> Result<Vec<f64>> {
        submissions
            .par_iter()
            .map(|submission| self.max_similarity(submission, corpus))
            .collect()
    }

    /// Computes the highest similarity of a submission to a corpus document with a different id.
    pub fn max_similarity(&self, submission: &Submission, corpus: &[Document]) -> Result<f64> {
        let mut max = 0f64;
        for doc in corpus.iter().filter(|doc| doc.id != submission.id) {
            max = max.max(self.compare(&submission.text, &doc.text)?);
        }
        Ok(max)
    }

    /// Builds the symmetric matrix of pairwise similarities, whose diagonal is 1.
    ///
    /// Only the upper triangle is computed.
    pub fn similarity_matrix(&self, corpus: &[Document]) -> Result<Vec<Vec<f64>>> {
        let num_docs = corpus.len();
        let pairs: Vec<_> = (0..num_docs)
            .flat_map(|i| (i + 1..num_docs).map(move |j| (i, j)))
            .collect();
        let scores = pairs
            .par_iter()
            .map(|&(i, j)| self.compare(&corpus[i].text, &corpus[j].text))
            .collect::<Result<Vec<_>>>()?;

        let mut matrix = vec![vec![0.; num_docs]; num_docs];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = 1.;
        }
        for ((i, j), score) in pairs.into_iter().zip(scores) {
            matrix[i][j] = score;
            matrix[j][i] = score;
        }
        tracing::debug!(num_docs, "built similarity matrix");
        Ok(matrix)
    }

    /// Walks greedily from `root`, moving each time to the unvisited document
    /// most similar to the current one.
    ///
    /// Only documents with a positive similarity are reachable, and ties go to the
    /// lowest corpus index. The walk stops when no such document remains or the
    /// chain holds `max_depth` ids. An out-of-range `root` yields an empty chain.
    pub fn walk(&self, corpus: &[Document], root: usize) -> Result<Vec<String>> {
        let mut chain = vec![];
        if root >= corpus.len() || self.max_depth == 0 {
            return Ok(chain);
        }

        let mut visited = HashSet::new();
        let mut current = root;
        visited.insert(corpus[root].id.as_str());
        chain.push(corpus[root].id.clone());

        while chain.len() < self.max_depth {
            let Some(next) = self.most_similar_unvisited(corpus, current, &visited)? else {
                break;
            };
            visited.insert(corpus[next].id.as_str());
            chain.push(corpus[next].id.clone());
            current = next;
        }
        tracing::trace!(root, len = chain.len(), "walk terminated");
        Ok(chain)
    }

    /// Walks from every document and returns the longest chain.
    ///
    /// Among chains of equal length, the one from the lowest root index wins.
    pub fn longest_chain(&self, corpus: &[Document]) -> Result<Vec<String>> {
        let chains = (0..corpus.len())
            .into_par_iter()
            .map(|root| self.walk(corpus, root))
            .collect::<Result<Vec<_>>>()?;
        Ok(chains
            .into_iter()
            .reduce(|best, chain| if chain.len() > best.len() { chain } else { best })
            .unwrap_or_default())
    }

    fn most_similar_unvisited(
        &self,
        corpus: &[Document],
        current: usize,
        visited: &HashSet<&str>,
    ) -> Result<Option<usize>> {
        let mut best = None;
        let mut best_score = 0.;
        for (idx, doc) in corpus.iter().enumerate() {
            if visited.contains(doc.id.as_str()) {
                continue;
            }
            let score = self.compare(&corpus[current].text, &doc.text)?;
            if score > best_score {
                best = Some(idx);
                best_score = score;
            }
        }
        Ok(best)
    }

    #[inline(always)]
    fn compare(&self, text1: &str, text2: &str) -> Result<f64> {
        self.cache.compare(text1, text2, self.ngram_size)
    }
}

//! Progressive checking of a submission, one corpus document at a time.
use serde::Serialize;

use crate::cache::ComparisonCache;
use crate::config::validate_ngram_size;
use crate::document::Document;
use crate::errors::Result;

/// Similarity of one corpus document, with the progress of the whole run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Progress {
    /// Identifier of the compared document.
    pub document_id: String,
    /// Title of the compared document.
    pub title: String,
    /// Author of the compared document.
    pub author: String,
    /// Similarity in `[0,1]`.
    pub score: f64,
    /// Percentage of the corpus compared so far, rounded to one decimal with
    /// ties to even (`0.25` becomes `0.2`).
    pub percent_complete: f64,
}

/// Lazy iterator comparing a text with each corpus document in order.
///
/// Nothing is computed until the iterator is advanced, and dropping it
/// early cancels the rest of the run.
///
/// # Examples
///
/// ```
/// use simcheck::{ComparisonCache, Document, ProgressiveCheck};
///
/// let corpus = vec![Document::new("1", "a b c"), Document::new("2", "x y z")];
/// let cache = ComparisonCache::default();
/// let progress: Vec<_> = ProgressiveCheck::new(&cache, "a b c", &corpus, 1)
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(progress[0].score, 1.0);
/// assert_eq!(progress[1].percent_complete, 100.0);
/// ```
pub struct ProgressiveCheck<'a> {
    cache: &'a ComparisonCache,
    text: &'a str,
    corpus: &'a [Document],
    ngram_size: usize,
    position: usize,
}

impl<'a> ProgressiveCheck<'a> {
    /// Creates an instance.
    ///
    /// # Errors
    ///
    /// [`SimcheckError::Config`](crate::errors::SimcheckError::Config) is returned
    /// if `ngram_size` is not in `1..=10`.
    pub fn new(
        cache: &'a ComparisonCache,
        text: &'a str,
        corpus: &'a [Document],
        ngram_size: usize,
    ) -> Result<Self> {
        validate_ngram_size(ngram_size)?;
        Ok(Self {
            cache,
            text,
            corpus,
            ngram_size,
            position: 0,
        })
    }
}

impl<'a> Iterator for ProgressiveCheck<'a> {
    type Item = Result<Progress>;

    fn next(&mut self) -> Option<Self::Item> {
        let doc = self.corpus.get(self.position)?;
        self.position += 1;
        let percent_complete =
            ((self.position * 1000) as f64 / self.corpus.len() as f64).round_ties_even() / 10.;
        Some(
            self.cache
                .compare(self.text, &doc.text, self.ngram_size)
                .map(|score| Progress {
                    document_id: doc.id.clone(),
                    title: doc.title.clone(),
                    author: doc.author.clone(),
                    score,
                    percent_complete,
                }),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.corpus.len() - self.position;
        (rest, Some(rest))
    }
}

impl<'a> ExactSizeIterator for ProgressiveCheck<'a> {}

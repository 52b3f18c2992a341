//! Keyword search over corpus metadata and text.
use hashbrown::HashSet;

use crate::document::Document;

const TITLE_WEIGHT: f64 = 0.5;
const AUTHOR_WEIGHT: f64 = 0.3;
const TEXT_WEIGHT: f64 = 0.2;

/// Document fields consulted by [`search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchFields {
    /// Matches the whole query as a substring of the title.
    pub title: bool,
    /// Matches the whole query as a substring of the author.
    pub author: bool,
    /// Matches query words against text words.
    pub text: bool,
}

impl Default for SearchFields {
    fn default() -> Self {
        Self {
            title: true,
            author: true,
            text: true,
        }
    }
}

/// Lazily yields the documents relevant to `query`, with their relevance, in corpus order.
///
/// A title match adds 0.5 and an author match adds 0.3. The text adds 0.2
/// times the fraction of distinct query words found among its words. Matching
/// ignores case. Documents with no relevance are skipped. A blank query
/// yields nothing.
///
/// # Examples
///
/// ```
/// use simcheck::search::{search, SearchFields};
/// use simcheck::Document;
///
/// let corpus = vec![Document::new("1", "rust borrow checker").title("Rust")];
/// let hits: Vec<_> = search(&corpus, "rust", SearchFields::default()).collect();
/// assert_eq!(hits.len(), 1);
/// assert!((hits[0].1 - 0.7).abs() < 1e-9);
/// ```
pub fn search<'a>(
    corpus: &'a [Document],
    query: &str,
    fields: SearchFields,
) -> impl Iterator<Item = (&'a Document, f64)> + 'a {
    let query = query.trim().to_lowercase();
    let query_tokens: HashSet<String> = query.split_whitespace().map(str::to_string).collect();
    let corpus = if query.is_empty() { &[][..] } else { corpus };

    corpus.iter().filter_map(move |doc| {
        let mut relevance = 0.;
        if fields.title && doc.title.to_lowercase().contains(&query) {
            relevance += TITLE_WEIGHT;
        }
        if fields.author && doc.author.to_lowercase().contains(&query) {
            relevance += AUTHOR_WEIGHT;
        }
        if fields.text {
            let text = doc.text.to_lowercase();
            let doc_tokens: HashSet<&str> = text.split_whitespace().collect();
            let matches = query_tokens
                .iter()
                .filter(|t| doc_tokens.contains(t.as_str()))
                .count();
            if matches > 0 {
                relevance += TEXT_WEIGHT * (matches as f64 / query_tokens.len() as f64);
            }
        }
        (relevance > 0.).then_some((doc, relevance))
    })
}

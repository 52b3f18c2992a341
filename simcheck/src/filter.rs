//! Predicates for selecting corpus documents.
//!
//! Each builder returns a closure over a [`Document`], so they compose with
//! [`Iterator::filter`] and with [`all_of`].
use crate::document::Document;

/// A boxed document predicate.
pub type DocumentFilter = Box<dyn Fn(&Document) -> bool + Send + Sync>;

/// Matches documents whose author contains `author`, ignoring case.
pub fn by_author(author: &str) -> impl Fn(&Document) -> bool + Send + Sync {
    let author = author.to_lowercase();
    move |doc| doc.author.to_lowercase().contains(&author)
}

/// Matches documents whose title contains `keyword`, ignoring case.
pub fn by_title(keyword: &str) -> impl Fn(&Document) -> bool + Send + Sync {
    let keyword = keyword.to_lowercase();
    move |doc| doc.title.to_lowercase().contains(&keyword)
}

/// Matches documents whose text has at least `min_len` characters.
pub fn by_min_length(min_len: usize) -> impl Fn(&Document) -> bool + Send + Sync {
    move |doc| doc.text.chars().count() >= min_len
}

/// Matches documents created within `start..=end`, comparing ISO-8601 timestamps as strings.
pub fn by_date_range(start: &str, end: &str) -> impl Fn(&Document) -> bool + Send + Sync {
    let (start, end) = (start.to_string(), end.to_string());
    move |doc| start.as_str() <= doc.timestamp.as_str() && doc.timestamp.as_str() <= end.as_str()
}

/// Matches documents accepted by every filter. An empty list matches everything.
///
/// # Examples
///
/// ```
/// use simcheck::filter::{all_of, by_author, by_min_length, DocumentFilter};
/// use simcheck::Document;
///
/// let filters = vec![
///     Box::new(by_author("knuth")) as DocumentFilter,
///     Box::new(by_min_length(3)),
/// ];
/// let filter = all_of(filters);
/// assert!(filter(&Document::new("1", "abcd").author("Donald Knuth")));
/// assert!(!filter(&Document::new("2", "ab").author("Donald Knuth")));
/// ```
pub fn all_of(filters: Vec<DocumentFilter>) -> impl Fn(&Document) -> bool + Send + Sync {
    move |doc| filters.iter().all(|f| f(doc))
}

/// Counts the documents whose author contains `author`, ignoring case.
pub fn count_by_author(corpus: &[Document], author: &str) -> usize {
    let matches = by_author(author);
    corpus.iter().filter(|doc| matches(doc)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new("1", "Sorting and searching")
                .title("The Art of Computer Programming")
                .author("Donald Knuth")
                .timestamp("1968-01-01T00:00:00"),
            Document::new("2", "Short")
                .title("Structure and Interpretation")
                .author("Abelson")
                .timestamp("1985-06-01T00:00:00"),
            Document::new("3", "Literate programming essays")
                .title("Literate Programming")
                .author("D. E. KNUTH")
                .timestamp("1992-01-01T00:00:00"),
        ]
    }

    fn ids<F: Fn(&Document) -> bool>(corpus: &[Document], f: F) -> Vec<&str> {
        corpus
            .iter()
            .filter(|d| f(d))
            .map(|d| d.id.as_str())
            .collect()
    }

    #[test]
    fn test_single_filters() {
        let corpus = corpus();
        assert_eq!(ids(&corpus, by_author("knuth")), vec!["1", "3"]);
        assert_eq!(ids(&corpus, by_title("PROGRAMMING")), vec!["1", "3"]);
        assert_eq!(ids(&corpus, by_min_length(10)), vec!["1", "3"]);
        assert_eq!(
            ids(&corpus, by_date_range("1960-01-01", "1990-01-01")),
            vec!["1", "2"]
        );
    }

    #[test]
    fn test_all_of() {
        let corpus = corpus();
        let filter = all_of(vec![
            Box::new(by_author("knuth")) as DocumentFilter,
            Box::new(by_date_range("1990-01-01", "2000-01-01")),
        ]);
        assert_eq!(ids(&corpus, filter), vec!["3"]);
        assert_eq!(ids(&corpus, all_of(vec![])), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_count_by_author() {
        let corpus = corpus();
        assert_eq!(count_by_author(&corpus, "Knuth"), 2);
        assert_eq!(count_by_author(&corpus, "nobody"), 0);
        assert_eq!(count_by_author(&[], "Knuth"), 0);
    }
}

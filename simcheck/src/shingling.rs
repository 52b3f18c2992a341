//! Word n-gram extraction.
use crate::errors::{Result, SimcheckError};

/// Iterator over overlapping windows of `window_size` consecutive tokens.
pub struct ShingleIter<'a, T> {
    tokens: &'a [T],
    window_size: usize,
    position: usize,
}

impl<'a, T> ShingleIter<'a, T> {
    /// Creates an iterator.
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is 0.
    pub fn new(tokens: &'a [T], window_size: usize) -> Self {
        assert!(window_size >= 1);
        Self {
            tokens,
            window_size,
            position: 0,
        }
    }
}

impl<'a, T> Iterator for ShingleIter<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.tokens.len() < self.position + self.window_size {
            return None;
        }
        let window = &self.tokens[self.position..self.position + self.window_size];
        self.position += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = (self.tokens.len() + 1).saturating_sub(self.position + self.window_size);
        (rest, Some(rest))
    }
}

impl<'a, T> ExactSizeIterator for ShingleIter<'a, T> {}

/// Extracts the n-grams of a token sequence in their original order.
///
/// If `tokens` has fewer than `n` items, the result is empty.
///
/// # Errors
///
/// [`SimcheckError::Config`] is returned if `n` is 0.
///
/// # Examples
///
/// ```
/// use simcheck::shingling::ngrams;
///
/// let tokens = ["a", "b", "c", "d"];
/// let grams = ngrams(&tokens, 3).unwrap();
/// assert_eq!(grams, vec![&["a", "b", "c"][..], &["b", "c", "d"][..]]);
/// ```
pub fn ngrams<T>(tokens: &[T], n: usize) -> Result<Vec<&[T]>> {
    if n == 0 {
        return Err(SimcheckError::config("n-gram size must not be 0"));
    }
    Ok(ShingleIter::new(tokens, n).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q1() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = ShingleIter::new(&tokens, 1);
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&tokens[0..1]));
        assert_eq!(iter.next(), Some(&tokens[1..2]));
        assert_eq!(iter.next(), Some(&tokens[2..3]));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_q2() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = ShingleIter::new(&tokens, 2);
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&tokens[0..2]));
        assert_eq!(iter.next(), Some(&tokens[1..3]));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_q4() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = ShingleIter::new(&tokens, 4);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_ngrams() {
        let tokens = ["a", "b", "c", "d"];
        let grams = ngrams(&tokens, 3).unwrap();
        assert_eq!(grams.len(), tokens.len() - 3 + 1);
        assert_eq!(grams[0], ["a", "b", "c"]);
        assert_eq!(grams[1], ["b", "c", "d"]);
    }

    #[test]
    fn test_ngrams_short() {
        let tokens = ["a", "b"];
        assert!(ngrams(&tokens, 3).unwrap().is_empty());
        let empty: [&str; 0] = [];
        assert!(ngrams(&empty, 1).unwrap().is_empty());
    }

    #[test]
    fn test_ngrams_zero() {
        let tokens = ["a"];
        assert!(matches!(ngrams(&tokens, 0), Err(SimcheckError::Config(_))));
    }
}

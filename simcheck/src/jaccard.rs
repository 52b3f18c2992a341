//! Jaccard similarity between n-gram sets.
use std::hash::Hash;

use hashbrown::HashSet;

use crate::config::validate_ngram_size;
use crate::errors::Result;
use crate::shingling::ShingleIter;
use crate::text::{normalize, tokenize};

/// Computes the Jaccard similarity of two collections treated as sets.
///
/// Duplicate items collapse. The score is computed from the exact
/// intersection and union cardinalities.
/// If both sides are empty, the score is `1.0`; if exactly one side is empty, it is `0.0`.
///
/// # Examples
///
/// ```
/// use simcheck::jaccard::jaccard;
///
/// assert_eq!(jaccard(["a", "b", "c"], ["b", "c", "d"]), 0.5);
/// assert_eq!(jaccard(Vec::<&str>::new(), Vec::new()), 1.0);
/// ```
pub fn jaccard<I, J, T>(lhs: I, rhs: J) -> f64
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    T: Hash + Eq,
{
    let a = HashSet::<T>::from_iter(lhs);
    let b = HashSet::<T>::from_iter(rhs);
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.,
        (true, false) | (false, true) => return 0.,
        _ => {}
    }
    let (small, large) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let intersection = small.iter().filter(|x| large.contains(*x)).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Computes the word n-gram Jaccard similarity of two raw texts.
///
/// Both texts are normalized and tokenized, and their `n`-grams are compared.
///
/// # Errors
///
/// [`SimcheckError::Config`](crate::errors::SimcheckError::Config) is returned
/// if `n` is not in `1..=10`.
pub fn text_similarity(text1: &str, text2: &str, n: usize) -> Result<f64> {
    validate_ngram_size(n)?;
    let (norm1, norm2) = (normalize(text1), normalize(text2));
    let (tokens1, tokens2) = (tokenize(&norm1), tokenize(&norm2));
    Ok(jaccard(
        ShingleIter::new(&tokens1, n),
        ShingleIter::new(&tokens2, n),
    ))
}

//! Text normalization and tokenization.

/// Normalizes a text for comparison.
///
/// The text is lower-cased, ASCII punctuation is removed, runs of whitespace
/// are collapsed into a single space, and both ends are trimmed.
/// Removing punctuation joins its neighbours, e.g., `"don't"` becomes `"dont"`.
///
/// # Examples
///
/// ```
/// use simcheck::text::normalize;
///
/// assert_eq!(normalize("Hello, World!  "), "hello world");
/// ```
pub fn normalize(text: &str) -> String {
    // Lower-cased as a whole so that context-dependent mappings (final sigma) apply.
    let lowered = text.to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for c in lowered.chars() {
        if c.is_ascii_punctuation() {
            continue;
        }
        if c.is_whitespace() {
            pending_space = !normalized.is_empty();
            continue;
        }
        if pending_space {
            normalized.push(' ');
            pending_space = false;
        }
        normalized.push(c);
    }
    normalized
}

/// Normalizes an optional text, treating an absent one as empty.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Splits a normalized text into words.
///
/// # Examples
///
/// ```
/// use simcheck::text::tokenize;
///
/// assert_eq!(tokenize("a   b c"), vec!["a", "b", "c"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Hello, World!  "), "hello world");
        assert_eq!(normalize("  Tabs\tand\nnew-lines\r\n"), "tabs and newlines");
        assert_eq!(normalize("ПРИВЕТ, мир!"), "привет мир");
        assert_eq!(normalize("ΟΔΟΣ"), "οδος");
        assert_eq!(normalize("ΟΔΟΣ ΚΑΙ ΠΟΛΙΣ."), normalize("οδος και πολις"));
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!.,"), "");
        assert_eq!(normalize(" . , "), "");
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("A b")), "a b");
    }

    #[test]
    fn test_normalize_idempotent() {
        let alphabet = ['a', 'B', 'я', 'Ж', ' ', '\t', '\n', ',', '!', '-', '\'', '1'];
        let mut rng = rand_xoshiro::Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..500 {
            let len = rng.gen_range(0..40);
            let text: String = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            let once = normalize(&text);
            assert_eq!(normalize(&once), once, "input={text:?}");
        }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("a   b c"), vec!["a", "b", "c"]);
        assert_eq!(tokenize(" a "), vec!["a"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}

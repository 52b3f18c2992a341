//! Detection of textual overlap between a submission and a corpus of documents,
//! using the Jaccard similarity of word n-grams.
//!
//! Texts are normalized, split into words and cut into overlapping n-grams,
//! and two n-gram sets are compared with the Jaccard coefficient.
//! Every pairwise score goes through a [`ComparisonCache`], on top of which
//! [`Ranker`] ranks a submission against a corpus and [`Analyzer`] computes
//! corpus-wide analytics.
//!
//! # Examples
//!
//! ```
//! use simcheck::{CheckConfig, ComparisonCache, Document, Ranker, Submission};
//!
//! let corpus = vec![
//!     Document::new("1", "Welcome to Jimbocho, the town of books and curry!"),
//!     Document::new("2", "Welcome to Jimbocho, the city of books and curry!"),
//!     Document::new("3", "A completely different sentence."),
//! ];
//! let config = CheckConfig::default();
//! let cache = ComparisonCache::new(config.cache_capacity).unwrap();
//!
//! let submission = Submission::new("s", "welcome to jimbocho the town of books and curry");
//! let ranking = Ranker::new(&cache, &config).rank(&submission, &corpus).unwrap();
//! assert_eq!(ranking.score, 1.0);
//! assert_eq!(ranking.matches[0].document_id, "1");
//! ```
#![deny(missing_docs)]

pub mod analytics;
pub mod cache;
pub mod config;
pub mod document;
pub mod errors;
pub mod filter;
pub mod jaccard;
pub mod progress;
pub mod rank;
pub mod search;
pub mod shingling;
pub mod text;

pub use analytics::Analyzer;
pub use cache::{CacheStats, ComparisonCache};
pub use config::CheckConfig;
pub use document::{Document, Submission};
pub use errors::{ConfigError, Result, SimcheckError, ValidationError};
pub use progress::{Progress, ProgressiveCheck};
pub use rank::{CheckStats, RankedMatch, Ranker, Ranking};

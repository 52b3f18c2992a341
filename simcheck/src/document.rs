//! Immutable document records.
use serde::{Deserialize, Serialize};

/// A reference document of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    /// Identifier, unique within a corpus.
    pub id: String,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Author.
    #[serde(default)]
    pub author: String,
    /// Raw body.
    pub text: String,
    /// Creation time in ISO-8601.
    #[serde(default)]
    pub timestamp: String,
}

impl Document {
    /// Creates a document with an empty title, author, and timestamp.
    pub fn new<I, T>(id: I, text: T) -> Self
    where
        I: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            title: String::new(),
            author: String::new(),
            text: text.into(),
            timestamp: String::new(),
        }
    }

    /// Sets the title.
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the author.
    pub fn author<S: Into<String>>(mut self, author: S) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the timestamp.
    pub fn timestamp<S: Into<String>>(mut self, timestamp: S) -> Self {
        self.timestamp = timestamp.into();
        self
    }
}

/// A text submitted by a user to be checked against the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Submission {
    /// Identifier. A corpus document with the same id is excluded from comparison.
    pub id: String,
    /// Identifier of the submitting user.
    #[serde(default)]
    pub user_id: String,
    /// Raw body.
    pub text: String,
    /// Submission time in ISO-8601.
    #[serde(default)]
    pub timestamp: String,
}

impl Submission {
    /// Creates a submission with an empty user id and timestamp.
    pub fn new<I, T>(id: I, text: T) -> Self
    where
        I: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            user_id: String::new(),
            text: text.into(),
            timestamp: String::new(),
        }
    }

    /// Sets the submitting user.
    pub fn user_id<S: Into<String>>(mut self, user_id: S) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the timestamp.
    pub fn timestamp<S: Into<String>>(mut self, timestamp: S) -> Self {
        self.timestamp = timestamp.into();
        self
    }
}

impl From<&Document> for Submission {
    /// Checks a stored document against the rest of its corpus.
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            user_id: doc.author.clone(),
            text: doc.text.clone(),
            timestamp: doc.timestamp.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial() {
        let doc: Document = serde_json::from_str(r#"{"id": "7", "text": "abc"}"#).unwrap();
        assert_eq!(doc, Document::new("7", "abc"));
    }

    #[test]
    fn test_structural_equality() {
        let a = Document::new("1", "x").title("T").author("A");
        let b = Document::new("1", "x").title("T").author("A");
        assert_eq!(a, b);
        assert_ne!(a, b.clone().timestamp("2024-01-01"));
    }

    #[test]
    fn test_submission_from_document() {
        let doc = Document::new("3", "text").author("knuth");
        let sub = Submission::from(&doc);
        assert_eq!(sub.id, "3");
        assert_eq!(sub.text, "text");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Document ID ---
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: String) -> Self {
        Self(id)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id.to_string())
    }
}
impl From<DocumentId> for String {
    fn from(doc_id: DocumentId) -> Self {
        doc_id.0
    }
}

// --- Author ID ---
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn new(id: String) -> Self {
        Self(id)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl From<String> for AuthorId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
impl From<&str> for AuthorId {
    fn from(id: &str) -> Self {
        Self::new(id.to_string())
    }
}

// --- Author ---

/// An embedded value identifying and naming a document's creator.
/// Authors have no independent lifecycle; they travel inside a Document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<AuthorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// --- Document ---

/// A stored record with id, title, content, author, and creation timestamp.
///
/// Every field is optional: callers may hand the store a structurally
/// incomplete document and no validation is performed. The store guarantees
/// that a *stored* document always carries `Some` id; the other fields stay
/// exactly as the caller provided them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: Option<DocumentId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

// --- Search Request ---

/// A filter specification combined with AND-across-dimensions,
/// OR-within-a-dimension semantics.
///
/// Every field is independently optional; an absent field places no
/// constraint on that dimension. Prefix and substring matching is
/// case-sensitive (verbatim comparison, no case folding). Both timestamp
/// bounds are exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub title_prefixes: Option<Vec<String>>,
    #[serde(default)]
    pub contains_contents: Option<Vec<String>>,
    #[serde(default)]
    pub author_ids: Option<Vec<AuthorId>>,
    #[serde(default)]
    pub created_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Checks whether a document satisfies every filter dimension present
    /// on this request. A document missing a field a present filter needs
    /// never matches that filter.
    pub fn matches(&self, document: &Document) -> bool {
        self.matches_title(document)
            && self.matches_content(document)
            && self.matches_author(document)
            && self.matches_created(document)
    }

    fn matches_title(&self, document: &Document) -> bool {
        match &self.title_prefixes {
            None => true,
            Some(prefixes) => document
                .title
                .as_deref()
                .is_some_and(|title| prefixes.iter().any(|prefix| title.starts_with(prefix))),
        }
    }

    fn matches_content(&self, document: &Document) -> bool {
        match &self.contains_contents {
            None => true,
            Some(needles) => document
                .content
                .as_deref()
                .is_some_and(|content| needles.iter().any(|needle| content.contains(needle))),
        }
    }

    fn matches_author(&self, document: &Document) -> bool {
        match &self.author_ids {
            None => true,
            Some(ids) => document
                .author
                .as_ref()
                .is_some_and(|author| ids.contains(&author.id)),
        }
    }

    // Both bounds are exclusive: a document created exactly at a bound
    // fails the filter.
    fn matches_created(&self, document: &Document) -> bool {
        let after_lower = match self.created_from {
            None => true,
            Some(from) => document.created.is_some_and(|created| created > from),
        };
        let before_upper = match self.created_to {
            None => true,
            Some(to) => document.created.is_some_and(|created| created < to),
        };
        after_lower && before_upper
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn doc(title: &str, content: &str, author_id: &str, created: DateTime<Utc>) -> Document {
        Document {
            id: None,
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            author: Some(Author::new(author_id, format!("{author_id} name"))),
            created: Some(created),
        }
    }

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn empty_request_matches_everything() {
        let request = SearchRequest::default();
        assert!(request.matches(&doc("Hello", "world", "a1", t(100))));
        // Even a completely empty document matches when no filter is present.
        assert!(request.matches(&Document {
            id: None,
            title: None,
            content: None,
            author: None,
            created: None,
        }));
    }

    #[test]
    fn title_prefix_is_or_matched() {
        let request = SearchRequest {
            title_prefixes: Some(vec!["He".to_string(), "Wo".to_string()]),
            ..Default::default()
        };
        assert!(request.matches(&doc("Hello", "", "a1", t(0))));
        assert!(request.matches(&doc("World", "", "a1", t(0))));
        assert!(!request.matches(&doc("Goodbye", "", "a1", t(0))));
    }

    #[test]
    fn title_prefix_is_case_sensitive() {
        let request = SearchRequest {
            title_prefixes: Some(vec!["he".to_string()]),
            ..Default::default()
        };
        assert!(!request.matches(&doc("Hello", "", "a1", t(0))));
    }

    #[test]
    fn content_substring_matches_anywhere() {
        let request = SearchRequest {
            contains_contents: Some(vec!["needle".to_string()]),
            ..Default::default()
        };
        assert!(request.matches(&doc("t", "hay needle stack", "a1", t(0))));
        assert!(!request.matches(&doc("t", "just hay", "a1", t(0))));
    }

    #[test]
    fn author_filter_is_set_membership() {
        let request = SearchRequest {
            author_ids: Some(vec![AuthorId::from("a2"), AuthorId::from("a3")]),
            ..Default::default()
        };
        assert!(request.matches(&doc("t", "c", "a2", t(0))));
        assert!(!request.matches(&doc("t", "c", "a1", t(0))));
    }

    #[test]
    fn created_bounds_are_exclusive() {
        let request = SearchRequest {
            created_from: Some(t(100)),
            created_to: Some(t(200)),
            ..Default::default()
        };
        assert!(request.matches(&doc("t", "c", "a1", t(150))));
        // Equality on either bound fails: strict inequality on both ends.
        assert!(!request.matches(&doc("t", "c", "a1", t(100))));
        assert!(!request.matches(&doc("t", "c", "a1", t(200))));
    }

    #[test]
    fn dimensions_combine_with_and() {
        let request = SearchRequest {
            title_prefixes: Some(vec!["He".to_string()]),
            author_ids: Some(vec![AuthorId::from("a2")]),
            ..Default::default()
        };
        // Title matches but author does not.
        assert!(!request.matches(&doc("Hello", "c", "a1", t(0))));
        assert!(request.matches(&doc("Hello", "c", "a2", t(0))));
    }

    #[test]
    fn absent_document_field_never_matches_present_filter() {
        let title_filter = SearchRequest {
            title_prefixes: Some(vec!["He".to_string()]),
            ..Default::default()
        };
        let author_filter = SearchRequest {
            author_ids: Some(vec![AuthorId::from("a1")]),
            ..Default::default()
        };
        let created_filter = SearchRequest {
            created_from: Some(t(0)),
            ..Default::default()
        };
        let bare = Document {
            id: Some(DocumentId::from("1")),
            title: None,
            content: None,
            author: None,
            created: None,
        };
        assert!(!title_filter.matches(&bare));
        assert!(!author_filter.matches(&bare));
        assert!(!created_filter.matches(&bare));
    }

    #[test]
    fn empty_criteria_list_matches_nothing() {
        // Present-but-empty differs from absent: no value can satisfy it.
        let request = SearchRequest {
            title_prefixes: Some(vec![]),
            ..Default::default()
        };
        assert!(!request.matches(&doc("Hello", "c", "a1", t(0))));
    }

    #[test]
    fn search_request_deserializes_with_all_fields_optional() {
        let request: SearchRequest = serde_json::from_value(serde_json::json!({
            "title_prefixes": ["He"],
        }))
        .expect("partial request should deserialize");
        assert_eq!(request.title_prefixes, Some(vec!["He".to_string()]));
        assert!(request.contains_contents.is_none());
        assert!(request.author_ids.is_none());
        assert!(request.created_from.is_none());
        assert!(request.created_to.is_none());
    }

    #[test]
    fn document_deserializes_without_id() {
        let document: Document = serde_json::from_value(serde_json::json!({
            "title": "Hello",
            "content": "body",
        }))
        .expect("partial document should deserialize");
        assert!(document.id.is_none());
        assert_eq!(document.title.as_deref(), Some("Hello"));
    }
}

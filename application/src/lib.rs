use async_trait::async_trait;
use domain::{Document, DocumentId, SearchRequest};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

// --- Application Errors ---

/// Failures surfaced by a document store backend.
///
/// The store contract itself is total: upsert, lookup, and search are
/// defined for every input and the in-memory implementation never returns
/// an error. The `Result` shape exists so alternative backends can report
/// infrastructure faults without changing the interface.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

// --- Infrastructure Interfaces (Traits) ---

/// Interface for storing and retrieving documents.
///
/// Semantics every implementation must honor:
/// - `save` is an upsert: a document without an id is assigned the smallest
///   positive integer (as a decimal string) not currently used as a key; a
///   document with an explicit id fully replaces any existing record under
///   that key, `created` included.
/// - `search` with `None` returns no documents; with a request, it returns
///   exactly the stored documents matching every present filter dimension.
/// - `find_by_id` never fails on an unknown id; it returns `None`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Upserts a document, assigning a fresh id if it has none.
    /// Returns the document as stored.
    async fn save(&self, document: Document) -> Result<Document, StoreError>;

    /// Returns all stored documents matching the request, in no particular
    /// order. An absent request matches nothing.
    async fn search(
        &self,
        request: Option<&SearchRequest>,
    ) -> Result<Vec<Document>, StoreError>;

    /// Retrieves a document by its exact id, if present.
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, StoreError>;
}

// --- Application Services (Use Cases) ---

/// Service exposing the document repository use cases over any
/// `DocumentStore` backend, adding logging around each operation.
pub struct DocumentService {
    store: Arc<dyn DocumentStore>,
}

impl DocumentService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, document))]
    pub async fn save(&self, document: Document) -> Result<Document, StoreError> {
        let supplied_id = document.id.clone();
        debug!(
            has_id = supplied_id.is_some(),
            "Saving document to the store"
        );
        let stored = self.store.save(document).await?;
        match (&supplied_id, &stored.id) {
            (None, Some(assigned)) => {
                info!(doc_id = %assigned.as_str(), "Document saved with freshly assigned id")
            }
            (Some(_), Some(id)) => info!(doc_id = %id.as_str(), "Document saved"),
            // The store contract guarantees a stored document carries an id.
            _ => debug!("Store returned a document without an id"),
        }
        Ok(stored)
    }

    #[instrument(skip(self, request), fields(has_request = request.is_some()))]
    pub async fn search(
        &self,
        request: Option<&SearchRequest>,
    ) -> Result<Vec<Document>, StoreError> {
        debug!("Searching documents");
        let matches = self.store.search(request).await?;
        info!(hits = matches.len(), "Search finished");
        Ok(matches)
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Document>, StoreError> {
        debug!(doc_id = %id, "Looking up document by id");
        let found = self.store.find_by_id(&DocumentId::from(id)).await?;
        debug!(doc_id = %id, found = found.is_some(), "Lookup finished");
        Ok(found)
    }
}

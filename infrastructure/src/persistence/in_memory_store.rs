// ./infrastructure/src/persistence/in_memory_store.rs
use application::{DocumentStore, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use domain::{Document, DocumentId, SearchRequest};
use std::sync::Arc;
use tracing::{debug, instrument};

// --- Document Store Implementation ---

/// In-memory `DocumentStore` backed by a `DashMap`.
///
/// The map only provides the interior mutability the `&self` trait methods
/// need; one logical caller at a time is assumed. In particular, `save`'s
/// id allocation and the subsequent insert are two uncoordinated steps.
/// Each store instance owns its mapping independently; there is no shared
/// or static state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<DashMap<DocumentId, Document>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(DashMap::new()),
        }
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    // Scans upward from 1 so a fresh id never collides with any key
    // currently present, including caller-supplied numeric strings.
    // With no delete operation the scan terminates after at most len + 1
    // probes.
    fn next_free_id(&self) -> DocumentId {
        let mut candidate: u64 = 1;
        loop {
            let id = DocumentId::from(candidate.to_string());
            if !self.documents.contains_key(&id) {
                return id;
            }
            candidate += 1;
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    #[instrument(skip(self, document))]
    async fn save(&self, mut document: Document) -> Result<Document, StoreError> {
        let id = match document.id.clone() {
            Some(id) => id,
            None => {
                let id = self.next_free_id();
                debug!(doc_id = %id.as_str(), "Assigned fresh id to document");
                document.id = Some(id.clone());
                id
            }
        };
        // Full-replace policy: an explicit-id save overwrites the whole
        // record under that key, `created` included.
        self.documents.insert(id.clone(), document.clone());
        debug!(doc_id = %id.as_str(), "Document saved to in-memory store");
        Ok(document)
    }

    #[instrument(skip(self, request), fields(has_request = request.is_some()))]
    async fn search(
        &self,
        request: Option<&SearchRequest>,
    ) -> Result<Vec<Document>, StoreError> {
        let Some(request) = request else {
            debug!("Search without a request matches nothing");
            return Ok(Vec::new());
        };
        // Full scan; the store keeps no index and promises no ordering.
        let matches: Vec<Document> = self
            .documents
            .iter()
            .filter(|entry| request.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        debug!(hits = matches.len(), "In-memory search finished");
        Ok(matches)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, StoreError> {
        debug!(doc_id = %id.as_str(), "Getting document from in-memory store");
        Ok(self.documents.get(id).map(|entry| entry.value().clone()))
    }
}

//! Media Store
//!
//! Session-scoped media library over a [`BlobStorage`] backend. Uploads
//! are the only suspending operations: the payload goes to the backend
//! first, and a failed upload leaves the library exactly as it was.
//! Listing, filtering, and search are synchronous reads over the owned
//! item list.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::storage::BlobStorage;
use super::types::{MediaError, MediaItem, MediaKind, MediaScope};

// ============================================================================
// Store
// ============================================================================

/// Holds all media items for a session, in upload order.
pub struct MediaStore {
    items: Vec<MediaItem>,
    storage: Arc<dyn BlobStorage>,
}

impl MediaStore {
    /// Empty library over the given storage backend.
    pub fn new(storage: Arc<dyn BlobStorage>) -> Self {
        Self {
            items: Vec::new(),
            storage,
        }
    }

    // ========================================================================
    // Uploads
    // ========================================================================

    /// Upload a payload and record it in the library.
    ///
    /// The payload is handed to the storage backend first; if the backend
    /// fails, the error propagates and no item is recorded. On success
    /// the new item carries a fresh id, the payload length as its size,
    /// and the backend's locator.
    pub async fn add_media_item(
        &mut self,
        name: impl Into<String>,
        bytes: &[u8],
        scope: MediaScope,
        kind: MediaKind,
    ) -> Result<MediaItem, MediaError> {
        let name = name.into();
        let locator = self.storage.store(&name, bytes).await?;

        let item = MediaItem {
            id: Uuid::new_v4().to_string(),
            name,
            locator,
            kind,
            scope,
            size: bytes.len() as u64,
            created_at: Utc::now(),
        };

        info!(
            media_id = %item.id,
            name = %item.name,
            size = item.size,
            scope = %item.scope,
            backend = self.storage.name(),
            "Uploaded media item"
        );
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove an item from the library.
    ///
    /// The blob removal is best-effort: a backend failure is logged and
    /// the item is dropped from the library regardless. Unknown ids are
    /// ignored.
    pub async fn delete_media_item(&mut self, id: &str) {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            debug!(media_id = %id, "Delete ignored, media item does not exist");
            return;
        };

        let item = self.items.remove(index);
        if let Err(err) = self.storage.remove(&item.locator).await {
            warn!(
                media_id = %item.id,
                locator = %item.locator,
                error = %err,
                "Failed to remove blob, item dropped from library anyway"
            );
        }
        info!(media_id = %item.id, "Deleted media item");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All items, in upload order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn item(&self, id: &str) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items visible to a document: everything global plus the items
    /// scoped to that document, in upload order.
    pub fn document_media(&self, document_id: &str) -> Vec<&MediaItem> {
        self.items
            .iter()
            .filter(|item| {
                item.scope.is_global() || item.scope.document_id() == Some(document_id)
            })
            .collect()
    }

    /// Only the globally visible items.
    pub fn global_media(&self) -> Vec<&MediaItem> {
        self.items
            .iter()
            .filter(|item| item.scope.is_global())
            .collect()
    }

    /// Case-insensitive substring search over item names.
    ///
    /// An empty or whitespace-only query matches everything. Any other
    /// query matches as-is: surrounding whitespace is part of the needle.
    pub fn search_media(&self, query: &str) -> Vec<&MediaItem> {
        if query.trim().is_empty() {
            return self.items.iter().collect();
        }

        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

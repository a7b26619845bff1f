//! Blob storage backends for media payloads.
//!
//! This module provides the [`BlobStorage`] trait and the bundled
//! [`MemoryBlobStorage`] implementation. The media library never holds
//! payload bytes itself; it hands them to a backend at upload time and
//! keeps only the [`BlobLocator`] the backend returns.
//!
//! Real deployments put an object store or CDN behind this trait. The
//! in-memory backend exists for tests and short-lived sessions.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

// ============================================================================
// Blob Locator
// ============================================================================

/// Opaque handle to a stored payload.
///
/// The backend decides the shape (URL, object key); callers only pass it
/// back for removal. The in-memory backend uses `mem://{uuid}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobLocator(String);

impl BlobLocator {
    /// Wrap a backend-issued locator string.
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// The locator as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// BlobStorage Trait
// ============================================================================

/// Trait for media payload storage backends.
///
/// All implementations must be thread-safe (`Send + Sync`) to support
/// concurrent access from multiple tasks. Failures are reported as
/// `io::Error`; the media library propagates them without modifying its
/// own state.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Store a payload and return a locator for it.
    ///
    /// `name` is the original file name, available to backends that key
    /// or tag blobs by it. Each call yields a fresh locator even for
    /// identical payloads.
    async fn store(&self, name: &str, bytes: &[u8]) -> io::Result<BlobLocator>;

    /// Remove a stored payload.
    ///
    /// Returns `Ok(())` even if the locator is unknown.
    async fn remove(&self, locator: &BlobLocator) -> io::Result<()>;

    /// Get the name of this storage backend.
    ///
    /// Used for logging and debugging. Default is "unknown".
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Blanket implementation for `Arc<T>` where T: BlobStorage
#[async_trait]
impl<T: BlobStorage + ?Sized> BlobStorage for Arc<T> {
    async fn store(&self, name: &str, bytes: &[u8]) -> io::Result<BlobLocator> {
        (**self).store(name, bytes).await
    }

    async fn remove(&self, locator: &BlobLocator) -> io::Result<()> {
        (**self).remove(locator).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Blanket implementation for `Box<T>` where T: BlobStorage
#[async_trait]
impl<T: BlobStorage + ?Sized> BlobStorage for Box<T> {
    async fn store(&self, name: &str, bytes: &[u8]) -> io::Result<BlobLocator> {
        (**self).store(name, bytes).await
    }

    async fn remove(&self, locator: &BlobLocator) -> io::Result<()> {
        (**self).remove(locator).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// MemoryBlobStorage
// ============================================================================

/// In-memory blob storage.
///
/// Uses `Arc<RwLock<HashMap<String, Vec<u8>>>>` for thread-safe access
/// from multiple async tasks. The storage is Clone and can be shared
/// across the application.
///
/// An optional byte limit turns oversized uploads into `io::Error`s,
/// which the media library surfaces as upload failures.
#[derive(Debug, Clone)]
pub struct MemoryBlobStorage {
    /// Payloads keyed by locator string.
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    /// Largest accepted payload, if bounded.
    max_bytes: Option<u64>,
}

impl Default for MemoryBlobStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBlobStorage {
    /// Create an unbounded in-memory storage.
    pub fn new() -> Self {
        Self {
            blobs: Arc::new(RwLock::new(HashMap::new())),
            max_bytes: None,
        }
    }

    /// Create a storage that rejects payloads larger than `max_bytes`.
    pub fn with_max_bytes(max_bytes: u64) -> Self {
        Self {
            blobs: Arc::new(RwLock::new(HashMap::new())),
            max_bytes: Some(max_bytes),
        }
    }

    /// Number of stored payloads.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    /// Check if storage is empty.
    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }

    /// Check if a payload exists for the locator.
    pub async fn contains(&self, locator: &BlobLocator) -> bool {
        self.blobs.read().await.contains_key(locator.as_str())
    }
}

#[async_trait]
impl BlobStorage for MemoryBlobStorage {
    #[instrument(skip(self, bytes))]
    async fn store(&self, name: &str, bytes: &[u8]) -> io::Result<BlobLocator> {
        if let Some(limit) = self.max_bytes {
            if bytes.len() as u64 > limit {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "payload '{}' is {} bytes, limit is {} bytes",
                        name,
                        bytes.len(),
                        limit
                    ),
                ));
            }
        }

        let locator = BlobLocator::new(format!("mem://{}", Uuid::new_v4()));
        let mut blobs = self.blobs.write().await;
        blobs.insert(locator.as_str().to_string(), bytes.to_vec());
        Ok(locator)
    }

    #[instrument(skip(self))]
    async fn remove(&self, locator: &BlobLocator) -> io::Result<()> {
        let mut blobs = self.blobs.write().await;
        blobs.remove(locator.as_str());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Tests
// ============================================================================

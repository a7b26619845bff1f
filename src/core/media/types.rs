//! Media Domain Types
//!
//! Items in the media library and the errors the library can surface.
//! An item's payload lives behind a [`BlobStorage`](super::BlobStorage)
//! backend; the item itself only carries the locator the backend handed
//! back.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::storage::BlobLocator;

// ============================================================================
// Media Kind
// ============================================================================

/// What a media item is used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// General imagery. The default for uploads that do not say otherwise.
    #[default]
    Image,
    /// Brand logo.
    Logo,
}

impl MediaKind {
    /// Stable identifier used in serialized state.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Logo => "logo",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Logo => "Logo",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for MediaKind {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "image" => Ok(MediaKind::Image),
            "logo" => Ok(MediaKind::Logo),
            _ => Err(format!("Unknown media kind: {}", s)),
        }
    }
}

// ============================================================================
// Media Scope
// ============================================================================

/// Where a media item is visible.
///
/// Global items appear in every document's library; document items carry
/// the id of the document that owns them. The owning id only exists for
/// document-scoped items, so a global item can never point at a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", content = "document_id")]
#[serde(rename_all = "snake_case")]
pub enum MediaScope {
    /// Visible everywhere.
    Global,
    /// Owned by a single document.
    Document(String),
}

impl MediaScope {
    /// True for globally visible items.
    pub fn is_global(&self) -> bool {
        matches!(self, MediaScope::Global)
    }

    /// The owning document id, if the item is document-scoped.
    pub fn document_id(&self) -> Option<&str> {
        match self {
            MediaScope::Global => None,
            MediaScope::Document(id) => Some(id),
        }
    }
}

impl fmt::Display for MediaScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaScope::Global => write!(f, "global"),
            MediaScope::Document(id) => write!(f, "document:{}", id),
        }
    }
}

// ============================================================================
// Media Item
// ============================================================================

/// One entry in the media library.
///
/// The payload bytes live in blob storage; `locator` is the handle the
/// backend returned at upload time and `size` is the payload length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MediaItem {
    /// Unique item identifier (UUID).
    pub id: String,
    /// Original file name.
    pub name: String,
    /// Where the payload is stored.
    pub locator: BlobLocator,
    /// Image or logo.
    pub kind: MediaKind,
    /// Global or document-scoped visibility.
    #[serde(flatten)]
    pub scope: MediaScope,
    /// Payload size in bytes.
    pub size: u64,
    /// When the item was uploaded.
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Errors
// ============================================================================

/// Errors surfaced by the media library.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The storage backend rejected or lost the upload. The library is
    /// left unmodified when this happens.
    #[error("Failed to upload media: {0}")]
    Upload(#[from] std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

//! Document Domain Types
//!
//! Core types for the document workspace: documents and their lifecycle
//! status, the seeded template/category catalog records, collaborator
//! sharing, and the export seam.
//!
//! Documents are identified by UUID strings and carry explicit
//! `created_at` / `updated_at` timestamps. The `version` counter is only
//! advanced by an explicit save; ordinary edits refresh `updated_at` and
//! leave the version alone.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Document Status
// ============================================================================

/// Lifecycle status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Work in progress. Every new document starts here.
    #[default]
    Draft,
    /// Marked finished by its owner.
    Completed,
}

impl DocumentStatus {
    /// Stable identifier used in serialized state.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Completed => "completed",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for DocumentStatus {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "draft" => Ok(DocumentStatus::Draft),
            "completed" => Ok(DocumentStatus::Completed),
            _ => Err(format!("Unknown document status: {}", s)),
        }
    }
}

// ============================================================================
// Collaborators
// ============================================================================

/// What a collaborator is allowed to do with a shared document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Read-only access.
    #[default]
    View,
    /// Full editing access.
    Edit,
}

impl AccessLevel {
    /// Stable identifier used in serialized state.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::View => "view",
            AccessLevel::Edit => "edit",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AccessLevel::View => "Can view",
            AccessLevel::Edit => "Can edit",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A person a document has been shared with.
///
/// Collaborators are keyed by email within a document; sharing the same
/// email again updates the access level in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Collaborator {
    /// Email address the invite was sent to.
    pub email: String,
    /// Granted access level.
    pub access: AccessLevel,
    /// True until the invitee accepts the invite.
    pub invite_pending: bool,
}

impl Collaborator {
    /// A freshly invited collaborator, awaiting acceptance.
    pub fn invited(email: impl Into<String>, access: AccessLevel) -> Self {
        Self {
            email: email.into(),
            access,
            invite_pending: true,
        }
    }
}

// ============================================================================
// Catalog Records
// ============================================================================

/// A category grouping related document templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DocumentCategory {
    /// Stable category identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Icon identifier for presentation layers.
    pub icon: String,
}

/// A starting point for new documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DocumentTemplate {
    /// Stable template identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short blurb shown when browsing templates.
    pub description: String,
    /// Category this template belongs to.
    pub category_id: String,
    /// Preview image path.
    pub thumbnail: String,
}

// ============================================================================
// Documents
// ============================================================================

/// A single document in the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Document {
    /// Unique document identifier (UUID).
    pub id: String,
    /// Document title.
    pub title: String,
    /// Full document body.
    pub content: String,
    /// Category inherited from the source template.
    pub category_id: String,
    /// Template this document was created from.
    pub template_id: String,
    /// Lifecycle status.
    pub status: DocumentStatus,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last modified.
    pub updated_at: DateTime<Utc>,
    /// Save counter, starting at 1. Only explicit saves advance it.
    pub version: u32,
    /// People this document has been shared with, in invite order.
    pub collaborators: Vec<Collaborator>,
}

impl Document {
    /// Look up a collaborator by email.
    pub fn collaborator(&self, email: &str) -> Option<&Collaborator> {
        self.collaborators.iter().find(|c| c.email == email)
    }

    /// Refresh the modification timestamp.
    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Document Updates
// ============================================================================

/// A single-field edit applied to the selected document.
///
/// Edits are whole-field replacements. Each variant names the field it
/// overwrites; untouched fields keep their current values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value")]
#[serde(rename_all = "snake_case")]
pub enum DocumentUpdate {
    /// Replace the title.
    Title(String),
    /// Replace the body content.
    Content(String),
    /// Change the lifecycle status.
    Status(DocumentStatus),
    /// Move the document to a different category.
    Category(String),
}

impl DocumentUpdate {
    /// Name of the field this update touches.
    pub fn field(&self) -> &'static str {
        match self {
            DocumentUpdate::Title(_) => "title",
            DocumentUpdate::Content(_) => "content",
            DocumentUpdate::Status(_) => "status",
            DocumentUpdate::Category(_) => "category",
        }
    }
}

// ============================================================================
// Export
// ============================================================================

/// Output formats a document can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Portable Document Format.
    #[default]
    Pdf,
    /// Microsoft Word document.
    Docx,
    /// Google Docs import.
    GoogleDoc,
}

impl ExportFormat {
    /// Stable identifier used in serialized state.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::GoogleDoc => "google_doc",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF Document",
            ExportFormat::Docx => "Word Document",
            ExportFormat::GoogleDoc => "Google Doc",
        }
    }

    /// File extension for exported artifacts.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::GoogleDoc => "gdoc",
        }
    }

    /// All formats in menu order.
    pub fn all() -> Vec<ExportFormat> {
        vec![ExportFormat::Pdf, ExportFormat::Docx, ExportFormat::GoogleDoc]
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for ExportFormat {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            "google_doc" => Ok(ExportFormat::GoogleDoc),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

/// A rendered export, ready to hand to a download or upload path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name, derived from the document title.
    pub file_name: String,
    /// Format the artifact was rendered in.
    pub format: ExportFormat,
    /// Rendered bytes.
    pub bytes: Vec<u8>,
}

/// Errors surfaced while rendering an export.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// The exporter does not handle the requested format.
    #[error("Export format not supported: {format}")]
    UnsupportedFormat {
        /// Format that was requested.
        format: ExportFormat,
    },
    /// Rendering itself failed.
    #[error("Failed to render {format} export: {reason}")]
    RenderFailed {
        /// Format that was being rendered.
        format: ExportFormat,
        /// Renderer-provided failure description.
        reason: String,
    },
}

/// Renders document content into export bytes.
///
/// The store owns naming and selection; implementations only turn content
/// into bytes for the requested format. Real renderers live outside this
/// crate, behind this seam.
pub trait DocumentExporter: Send + Sync {
    /// Identifier for logging.
    fn name(&self) -> &str {
        "exporter"
    }

    /// Render `content` in the given format.
    fn render(&self, content: &str, format: ExportFormat) -> Result<Vec<u8>, ExportError>;
}

/// Format-agnostic exporter that emits the raw content bytes.
///
/// Stands in until a real renderer is wired up; every format yields the
/// same plain-text payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExporter;

impl DocumentExporter for PlainTextExporter {
    fn name(&self) -> &str {
        "plain_text"
    }

    fn render(&self, content: &str, _format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        Ok(content.as_bytes().to_vec())
    }
}

// ============================================================================
// Tests
// ============================================================================

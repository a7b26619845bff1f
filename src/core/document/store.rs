//! Document Store
//!
//! Session-scoped state for the document workspace: the document
//! collection, the seeded template/category catalogs, and the current
//! selection. Edits always target the selected document; sharing and
//! deletion address documents by id.
//!
//! Missing references degrade instead of failing: creating from an
//! unknown template falls back to the default category, and operations
//! against an unknown id are logged no-ops.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::DocumentsConfig;

use super::catalog::{seed_categories, seed_templates};
use super::types::{
    AccessLevel, Collaborator, Document, DocumentCategory, DocumentExporter, DocumentStatus,
    DocumentTemplate, DocumentUpdate, ExportArtifact, ExportError, ExportFormat,
};

// ============================================================================
// Store
// ============================================================================

/// Holds all documents for a session, plus the seeded catalogs.
///
/// The catalogs are fixed at construction; documents and selection are
/// the mutable state.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    documents: Vec<Document>,
    templates: Vec<DocumentTemplate>,
    categories: Vec<DocumentCategory>,
    selected_document_id: Option<String>,
    selected_template_id: Option<String>,
    default_category: String,
}

impl DocumentStore {
    /// Fresh store: seeded catalogs, no documents, nothing selected.
    pub fn new() -> Self {
        Self::with_config(&DocumentsConfig::default())
    }

    /// Fresh store using the configured default category.
    pub fn with_config(config: &DocumentsConfig) -> Self {
        Self {
            documents: Vec::new(),
            templates: seed_templates(),
            categories: seed_categories(),
            selected_document_id: None,
            selected_template_id: None,
            default_category: config.default_category.clone(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// All documents, oldest first.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The seeded template catalog.
    pub fn templates(&self) -> &[DocumentTemplate] {
        &self.templates
    }

    /// The seeded category catalog.
    pub fn categories(&self) -> &[DocumentCategory] {
        &self.categories
    }

    /// Look up a document by id.
    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Look up a template by id.
    pub fn template(&self, id: &str) -> Option<&DocumentTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&DocumentCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Templates belonging to one category, in catalog order.
    pub fn templates_in_category(&self, category_id: &str) -> Vec<&DocumentTemplate> {
        self.templates
            .iter()
            .filter(|t| t.category_id == category_id)
            .collect()
    }

    /// The currently selected document, if any.
    pub fn selected_document(&self) -> Option<&Document> {
        self.selected_document_id
            .as_deref()
            .and_then(|id| self.document(id))
    }

    /// The currently selected template, if any.
    pub fn selected_template(&self) -> Option<&DocumentTemplate> {
        self.selected_template_id
            .as_deref()
            .and_then(|id| self.template(id))
    }

    // ========================================================================
    // Document Lifecycle
    // ========================================================================

    /// Create a new draft from a template and select it.
    ///
    /// The document inherits the template's category; an unknown template
    /// id falls back to the default category rather than failing.
    pub fn create_document(&mut self, template_id: &str, title: impl Into<String>) -> Document {
        let category_id = match self.template(template_id) {
            Some(template) => template.category_id.clone(),
            None => {
                warn!(
                    template_id = %template_id,
                    fallback = %self.default_category,
                    "Unknown template, using default category"
                );
                self.default_category.clone()
            }
        };

        let now = chrono::Utc::now();
        let document = Document {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: String::new(),
            category_id,
            template_id: template_id.to_string(),
            status: DocumentStatus::Draft,
            created_at: now,
            updated_at: now,
            version: 1,
            collaborators: Vec::new(),
        };

        info!(
            document_id = %document.id,
            template_id = %template_id,
            "Created document"
        );
        self.selected_document_id = Some(document.id.clone());
        self.documents.push(document.clone());
        document
    }

    /// Change which document edits apply to. An unknown id clears the
    /// selection.
    pub fn select_document(&mut self, id: Option<&str>) {
        self.selected_document_id = match id {
            Some(id) if self.document(id).is_some() => Some(id.to_string()),
            Some(id) => {
                warn!(document_id = %id, "Selected document does not exist, clearing selection");
                None
            }
            None => None,
        };
    }

    /// Change the highlighted template. An unknown id clears the
    /// selection.
    pub fn select_template(&mut self, id: Option<&str>) {
        self.selected_template_id = match id {
            Some(id) if self.template(id).is_some() => Some(id.to_string()),
            Some(id) => {
                warn!(template_id = %id, "Selected template does not exist, clearing selection");
                None
            }
            None => None,
        };
    }

    /// Apply a single-field edit to the selected document.
    ///
    /// Refreshes `updated_at`; the version counter is untouched. Without
    /// a selection this is a logged no-op.
    pub fn update_document(&mut self, update: DocumentUpdate) {
        let Some(id) = self.selected_document_id.clone() else {
            debug!(field = update.field(), "No document selected, ignoring update");
            return;
        };
        let Some(document) = self.documents.iter_mut().find(|d| d.id == id) else {
            return;
        };

        debug!(document_id = %id, field = update.field(), "Updating document");
        match update {
            DocumentUpdate::Title(title) => document.title = title,
            DocumentUpdate::Content(content) => document.content = content,
            DocumentUpdate::Status(status) => document.status = status,
            DocumentUpdate::Category(category_id) => document.category_id = category_id,
        }
        document.touch();
    }

    /// Save the selected document: bump its version and refresh
    /// `updated_at`. Without a selection this is a logged no-op.
    pub fn save_document(&mut self) {
        let Some(id) = self.selected_document_id.clone() else {
            debug!("No document selected, ignoring save");
            return;
        };
        let Some(document) = self.documents.iter_mut().find(|d| d.id == id) else {
            return;
        };

        document.version += 1;
        document.touch();
        info!(document_id = %id, version = document.version, "Saved document");
    }

    /// Delete a document by id. Clears the selection if it pointed at the
    /// deleted document; unknown ids are ignored.
    pub fn delete_document(&mut self, id: &str) {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        if self.documents.len() == before {
            debug!(document_id = %id, "Delete ignored, document does not exist");
            return;
        }

        if self.selected_document_id.as_deref() == Some(id) {
            self.selected_document_id = None;
        }
        info!(document_id = %id, "Deleted document");
    }

    // ========================================================================
    // Sharing
    // ========================================================================

    /// Share a document with an email address.
    ///
    /// Upserts by email: a new address joins the collaborator list with a
    /// pending invite, a known address just gets its access level
    /// replaced. Unknown document ids are a logged no-op.
    pub fn share_document(&mut self, id: &str, email: impl Into<String>, access: AccessLevel) {
        let email = email.into();
        let Some(document) = self.documents.iter_mut().find(|d| d.id == id) else {
            warn!(document_id = %id, "Cannot share unknown document");
            return;
        };

        match document.collaborators.iter_mut().find(|c| c.email == email) {
            Some(existing) => {
                debug!(
                    document_id = %id,
                    email = %email,
                    access = %access,
                    "Updating collaborator access"
                );
                existing.access = access;
            }
            None => {
                info!(
                    document_id = %id,
                    email = %email,
                    access = %access,
                    "Invited collaborator"
                );
                document.collaborators.push(Collaborator::invited(email, access));
            }
        }
        document.touch();
    }

    /// Remove a collaborator from a document. Unknown document ids or
    /// emails are ignored.
    pub fn remove_collaborator(&mut self, id: &str, email: &str) {
        let Some(document) = self.documents.iter_mut().find(|d| d.id == id) else {
            debug!(document_id = %id, "Cannot remove collaborator from unknown document");
            return;
        };

        let before = document.collaborators.len();
        document.collaborators.retain(|c| c.email != email);
        if document.collaborators.len() < before {
            document.touch();
            info!(document_id = %id, email = %email, "Removed collaborator");
        }
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Export the selected document through the given exporter.
    ///
    /// Returns `Ok(None)` when nothing is selected; the only error path
    /// is the exporter itself failing.
    pub fn export_document(
        &self,
        format: ExportFormat,
        exporter: &dyn DocumentExporter,
    ) -> Result<Option<ExportArtifact>, ExportError> {
        let Some(document) = self.selected_document() else {
            debug!(format = %format, "No document selected, nothing to export");
            return Ok(None);
        };

        info!(
            document_id = %document.id,
            format = %format,
            exporter = exporter.name(),
            "Exporting document"
        );
        let bytes = exporter.render(&document.content, format)?;

        let stem = document.title.trim();
        let stem = if stem.is_empty() { "untitled" } else { stem };
        Ok(Some(ExportArtifact {
            file_name: format!("{}.{}", stem, format.extension()),
            format,
            bytes,
        }))
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

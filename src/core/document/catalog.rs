//! Seeded Document Catalog
//!
//! Built-in categories and templates every workspace starts with. The
//! seeds are compile-time constants; [`seed_categories`] and
//! [`seed_templates`] materialize them into owned records for a store.

use super::types::{DocumentCategory, DocumentTemplate};

/// Preview image shared by all seeded templates.
pub const TEMPLATE_THUMBNAIL: &str = "/placeholder.svg";

/// Compile-time category record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySeed {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// Compile-time template record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category_id: &'static str,
}

// ============================================================================
// Categories
// ============================================================================

/// Built-in document categories.
pub const DOCUMENT_CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        id: "1",
        name: "Business Plans",
        icon: "file-text",
    },
    CategorySeed {
        id: "2",
        name: "Contracts",
        icon: "file-pen",
    },
    CategorySeed {
        id: "3",
        name: "Marketing Materials",
        icon: "presentation",
    },
    CategorySeed {
        id: "4",
        name: "Financial Reports",
        icon: "bar-chart",
    },
    CategorySeed {
        id: "5",
        name: "Legal Documents",
        icon: "gavel",
    },
];

/// Number of built-in categories.
pub const DOCUMENT_CATEGORY_COUNT: usize = DOCUMENT_CATEGORIES.len();

// ============================================================================
// Templates
// ============================================================================

/// Built-in document templates.
pub const DOCUMENT_TEMPLATES: &[TemplateSeed] = &[
    TemplateSeed {
        id: "1",
        name: "Startup Business Plan",
        description: "A comprehensive business plan template for startups seeking funding.",
        category_id: "1",
    },
    TemplateSeed {
        id: "2",
        name: "Freelance Contract",
        description: "A standard contract for freelance services with customizable terms.",
        category_id: "2",
    },
    TemplateSeed {
        id: "3",
        name: "Investor Pitch Deck",
        description: "A professional pitch deck template for presenting to potential investors.",
        category_id: "3",
    },
    TemplateSeed {
        id: "4",
        name: "Non-Disclosure Agreement",
        description: "A standard NDA template to protect your confidential information.",
        category_id: "5",
    },
    TemplateSeed {
        id: "5",
        name: "Financial Projection",
        description: "A template for creating financial projections for your business.",
        category_id: "4",
    },
];

/// Number of built-in templates.
pub const DOCUMENT_TEMPLATE_COUNT: usize = DOCUMENT_TEMPLATES.len();

// ============================================================================
// Materialization
// ============================================================================

/// Owned category records for seeding a fresh store.
pub fn seed_categories() -> Vec<DocumentCategory> {
    DOCUMENT_CATEGORIES
        .iter()
        .map(|seed| DocumentCategory {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            icon: seed.icon.to_string(),
        })
        .collect()
}

/// Owned template records for seeding a fresh store.
pub fn seed_templates() -> Vec<DocumentTemplate> {
    DOCUMENT_TEMPLATES
        .iter()
        .map(|seed| DocumentTemplate {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            category_id: seed.category_id.to_string(),
            thumbnail: TEMPLATE_THUMBNAIL.to_string(),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

//! Property-based tests for the document store
//!
//! Tests invariants:
//! - Field edits never advance the version counter
//! - The version counter counts explicit saves exactly
//! - Sharing never duplicates a collaborator email
//! - The selection always refers to a live document

use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::document::{AccessLevel, DocumentStatus, DocumentStore, DocumentUpdate};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate an arbitrary single-field edit
fn arb_update() -> impl Strategy<Value = DocumentUpdate> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}".prop_map(DocumentUpdate::Title),
        "[a-zA-Z0-9 .,]{0,40}".prop_map(DocumentUpdate::Content),
        prop_oneof![Just(DocumentStatus::Draft), Just(DocumentStatus::Completed)]
            .prop_map(DocumentUpdate::Status),
        "[1-5]".prop_map(DocumentUpdate::Category),
    ]
}

/// Generate an email from a small pool, so upserts actually collide
fn arb_email() -> impl Strategy<Value = String> {
    "[a-f]{1,3}".prop_map(|user| format!("{}@example.com", user))
}

fn arb_access() -> impl Strategy<Value = AccessLevel> {
    prop_oneof![Just(AccessLevel::View), Just(AccessLevel::Edit)]
}

/// One user action against the store
#[derive(Debug, Clone)]
enum DocOp {
    Create,
    Select(usize),
    Clear,
    Delete(usize),
    Save,
    Update,
}

fn arb_doc_op() -> impl Strategy<Value = DocOp> {
    prop_oneof![
        3 => Just(DocOp::Create),
        2 => (0usize..8).prop_map(DocOp::Select),
        1 => Just(DocOp::Clear),
        2 => (0usize..8).prop_map(DocOp::Delete),
        1 => Just(DocOp::Save),
        1 => Just(DocOp::Update),
    ]
}

/// Pick a live document id by wrapping `index` into the collection, or a
/// ghost id when the store is empty.
fn nth_id(store: &DocumentStore, index: usize) -> String {
    let docs = store.documents();
    if docs.is_empty() {
        "ghost".to_string()
    } else {
        docs[index % docs.len()].id.clone()
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Field edits never advance the version counter
    #[test]
    fn prop_updates_never_touch_version(
        updates in prop::collection::vec(arb_update(), 0..12)
    ) {
        let mut store = DocumentStore::new();
        store.create_document("1", "Plan");

        for update in updates {
            store.update_document(update);
        }

        prop_assert_eq!(store.selected_document().unwrap().version, 1);
    }

    /// Property: The version counter counts explicit saves exactly,
    /// regardless of interleaved edits
    #[test]
    fn prop_version_counts_saves(
        saves in 0u32..16,
        updates in prop::collection::vec(arb_update(), 0..8)
    ) {
        let mut store = DocumentStore::new();
        store.create_document("1", "Plan");

        let mut updates = updates.into_iter();
        for _ in 0..saves {
            if let Some(update) = updates.next() {
                store.update_document(update);
            }
            store.save_document();
        }
        for update in updates {
            store.update_document(update);
        }

        prop_assert_eq!(store.selected_document().unwrap().version, 1 + saves);
    }

    /// Property: Sharing any sequence never duplicates a collaborator email
    #[test]
    fn prop_share_upsert_keeps_emails_unique(
        shares in prop::collection::vec((arb_email(), arb_access()), 0..20)
    ) {
        let mut store = DocumentStore::new();
        let doc = store.create_document("1", "Plan");

        let mut last_access = std::collections::HashMap::new();
        for (email, access) in &shares {
            store.share_document(&doc.id, email.clone(), *access);
            last_access.insert(email.clone(), *access);
        }

        let collaborators = &store.document(&doc.id).unwrap().collaborators;
        let emails: HashSet<&str> = collaborators.iter().map(|c| c.email.as_str()).collect();
        prop_assert_eq!(emails.len(), collaborators.len(), "duplicate collaborator email");

        // Last share wins the access level.
        for collaborator in collaborators {
            prop_assert_eq!(
                Some(&collaborator.access),
                last_access.get(&collaborator.email)
            );
        }
    }

    /// Property: The selection always refers to a live document, whatever
    /// sequence of creates, selects, and deletes happens
    #[test]
    fn prop_selection_is_live(ops in prop::collection::vec(arb_doc_op(), 0..24)) {
        let mut store = DocumentStore::new();
        let mut created = 0u32;

        for op in ops {
            match op {
                DocOp::Create => {
                    created += 1;
                    store.create_document("1", format!("Doc {}", created));
                }
                DocOp::Select(index) => {
                    let id = nth_id(&store, index);
                    store.select_document(Some(&id));
                }
                DocOp::Clear => store.select_document(None),
                DocOp::Delete(index) => {
                    let id = nth_id(&store, index);
                    store.delete_document(&id);
                }
                DocOp::Save => store.save_document(),
                DocOp::Update => {
                    store.update_document(DocumentUpdate::Content("edited".to_string()));
                }
            }

            if let Some(selected) = store.selected_document() {
                let id = selected.id.clone();
                prop_assert!(
                    store.documents().iter().any(|d| d.id == id),
                    "selection points at a deleted document"
                );
            }
        }
    }
}

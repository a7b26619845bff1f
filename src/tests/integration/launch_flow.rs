//! Launch Flow Integration Tests
//!
//! End-to-end session scenarios: walking the wizard to completion,
//! turning the plan into a shared document, attaching media, and
//! exporting. Each store keeps its own state; these tests verify the
//! seams between them.

use crate::core::document::{
    AccessLevel, DocumentStatus, DocumentUpdate, ExportFormat, PlainTextExporter,
};
use crate::core::media::{MediaKind, MediaScope};
use crate::core::wizard::{WizardStep, WizardStore};
use crate::tests::common::{complete_section, completed_wizard, media_store, store_with_document};

// =============================================================================
// Wizard Walkthrough
// =============================================================================

#[test]
fn test_wizard_walkthrough_gates_every_step() {
    let mut wizard = WizardStore::new();

    for step in WizardStep::all() {
        assert_eq!(wizard.current_step(), step);

        // The gate holds until the section is filled in.
        assert!(wizard.advance().is_err());
        wizard.apply_section(complete_section(step));

        if step.next().is_some() {
            let next = wizard.advance().expect("filled section should pass");
            assert_eq!(Some(next), step.next());
        } else {
            // Final step: advance validates but stays put.
            assert_eq!(wizard.advance().expect("final gate"), step);
        }
    }

    assert!(wizard.is_ready_for_completion());
    assert_eq!(wizard.progress_percent(), 100);
}

#[test]
fn test_wizard_revisit_keeps_completion() {
    let mut wizard = completed_wizard();

    // Jump around; completion is derived from the plan, not the path.
    wizard.set_step(WizardStep::DistributionPlan);
    wizard.go_back();
    wizard.set_step(WizardStep::ProductDetails);

    assert!(wizard.is_ready_for_completion());
    assert_eq!(wizard.completed_steps().len(), wizard.total_steps());
}

// =============================================================================
// Plan to Document
// =============================================================================

#[test]
fn test_plan_becomes_shared_exported_document() {
    let wizard = completed_wizard();
    let (mut documents, doc_id) = store_with_document("Stellar Notes Launch");

    // Write the plan summary into the document body.
    let summary = format!(
        "{} targets {} via {} channels",
        wizard.plan().product_details.name,
        wizard.plan().product_details.target_audience,
        wizard.plan().marketing_strategy.channels.len()
    );
    documents.update_document(DocumentUpdate::Content(summary.clone()));
    documents.save_document();

    documents.share_document(&doc_id, "ada@example.com", AccessLevel::Edit);
    documents.update_document(DocumentUpdate::Status(DocumentStatus::Completed));

    let doc = documents.document(&doc_id).expect("document is live");
    assert_eq!(doc.version, 2);
    assert_eq!(doc.status, DocumentStatus::Completed);
    assert_eq!(doc.collaborators.len(), 1);
    assert!(doc.collaborators[0].invite_pending);

    let artifact = documents
        .export_document(ExportFormat::Pdf, &PlainTextExporter)
        .expect("exporter never fails")
        .expect("a document is selected");
    assert_eq!(artifact.file_name, "Stellar Notes Launch.pdf");
    assert_eq!(artifact.bytes, summary.as_bytes());
}

// =============================================================================
// Document and Media Together
// =============================================================================

#[tokio::test]
async fn test_document_gallery_mixes_scoped_and_global_media() {
    let (mut documents, doc_id) = store_with_document("Launch Brief");
    let (mut media, backend) = media_store();

    media
        .add_media_item("brand.svg", b"<svg/>", MediaScope::Global, MediaKind::Logo)
        .await
        .expect("upload");
    let hero = media
        .add_media_item(
            "hero.png",
            b"png bytes",
            MediaScope::Document(doc_id.clone()),
            MediaKind::Image,
        )
        .await
        .expect("upload");

    let gallery: Vec<&str> = media
        .document_media(&doc_id)
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(gallery, vec!["brand.svg", "hero.png"]);

    // Deleting the document does not cascade into the library.
    documents.delete_document(&doc_id);
    assert!(documents.documents().is_empty());
    assert_eq!(media.items().len(), 2);
    assert!(backend.contains(&hero.locator).await);

    // The orphaned scope keeps working; the gallery still shows globals.
    let leftover = media.document_media(&doc_id);
    assert_eq!(leftover.len(), 2);
}

#[tokio::test]
async fn test_search_spans_every_scope() {
    let (_, doc_id) = store_with_document("Launch Brief");
    let (mut media, _) = media_store();

    media
        .add_media_item("Launch-Logo.png", b"a", MediaScope::Global, MediaKind::Logo)
        .await
        .expect("upload");
    media
        .add_media_item(
            "launch-hero.jpg",
            b"b",
            MediaScope::Document(doc_id),
            MediaKind::Image,
        )
        .await
        .expect("upload");
    media
        .add_media_item("teaser.mp4", b"c", MediaScope::Global, MediaKind::Image)
        .await
        .expect("upload");

    let hits: Vec<&str> = media
        .search_media("LAUNCH")
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(hits, vec!["Launch-Logo.png", "launch-hero.jpg"]);
}

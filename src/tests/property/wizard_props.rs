//! Property-based tests for the launch wizard
//!
//! Tests invariants:
//! - Step identifiers and numbers round-trip
//! - Navigation never leaves the step range
//! - Advance succeeds exactly when the current gate passes
//! - Section updates replace exactly one section
//! - Completion and progress are derived from the plan contents

use proptest::prelude::*;

use crate::core::wizard::{
    CreativeAssets, DistributionPlan, LaunchPlan, LaunchTimeline, MarketingStrategy,
    ProductDetails, SectionData, WizardError, WizardStep, WizardStore,
};
use chrono::NaiveDate;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate an arbitrary wizard step
fn arb_step() -> impl Strategy<Value = WizardStep> {
    prop_oneof![
        Just(WizardStep::ProductDetails),
        Just(WizardStep::MarketingStrategy),
        Just(WizardStep::CreativeAssets),
        Just(WizardStep::LaunchTimeline),
        Just(WizardStep::DistributionPlan),
    ]
}

/// Generate free-form section text, empty included
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,16}"
}

/// Generate a list of catalog-shaped channel ids, empty included
fn arb_ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z_]{2,12}", 0..4)
}

/// Generate an optional calendar date
fn arb_date() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of((2024i32..2028, 1u32..13, 1u32..29).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }))
}

fn arb_product_details() -> impl Strategy<Value = ProductDetails> {
    (arb_text(), arb_text(), arb_text(), arb_text()).prop_map(
        |(name, description, category, target_audience)| ProductDetails {
            name,
            description,
            category,
            target_audience,
        },
    )
}

fn arb_marketing_strategy() -> impl Strategy<Value = MarketingStrategy> {
    (arb_text(), arb_ids(), arb_text(), arb_text()).prop_map(
        |(objective, channels, budget, timeline)| MarketingStrategy {
            objective,
            channels,
            budget,
            timeline,
        },
    )
}

fn arb_creative_assets() -> impl Strategy<Value = CreativeAssets> {
    (any::<bool>(), any::<bool>(), any::<bool>(), arb_text()).prop_map(
        |(logo, images, videos, descriptions)| CreativeAssets {
            logo,
            images,
            videos,
            descriptions,
        },
    )
}

fn arb_launch_timeline() -> impl Strategy<Value = LaunchTimeline> {
    (arb_date(), arb_date(), arb_ids()).prop_map(
        |(prelaunch_date, launch_date, post_launch_activities)| LaunchTimeline {
            prelaunch_date,
            launch_date,
            post_launch_activities,
        },
    )
}

fn arb_distribution_plan() -> impl Strategy<Value = DistributionPlan> {
    (arb_ids(), arb_text(), arb_text()).prop_map(|(channels, partnerships, pricing)| {
        DistributionPlan {
            channels,
            partnerships,
            pricing,
        }
    })
}

/// Generate an arbitrary section payload
fn arb_section() -> impl Strategy<Value = SectionData> {
    prop_oneof![
        arb_product_details().prop_map(SectionData::ProductDetails),
        arb_marketing_strategy().prop_map(SectionData::MarketingStrategy),
        arb_creative_assets().prop_map(SectionData::CreativeAssets),
        arb_launch_timeline().prop_map(SectionData::LaunchTimeline),
        arb_distribution_plan().prop_map(SectionData::DistributionPlan),
    ]
}

/// Generate an arbitrary full plan
fn arb_plan() -> impl Strategy<Value = LaunchPlan> {
    (
        arb_product_details(),
        arb_marketing_strategy(),
        arb_creative_assets(),
        arb_launch_timeline(),
        arb_distribution_plan(),
    )
        .prop_map(
            |(product_details, marketing_strategy, creative_assets, launch_timeline, distribution_plan)| {
                LaunchPlan {
                    product_details,
                    marketing_strategy,
                    creative_assets,
                    launch_timeline,
                    distribution_plan,
                }
            },
        )
}

/// One user navigation action
#[derive(Debug, Clone)]
enum NavOp {
    Advance,
    Back,
    Jump(WizardStep),
}

fn arb_nav_op() -> impl Strategy<Value = NavOp> {
    prop_oneof![
        2 => Just(NavOp::Advance),
        2 => Just(NavOp::Back),
        1 => arb_step().prop_map(NavOp::Jump),
    ]
}

/// True when every section other than `except` matches between the plans.
fn other_sections_equal(a: &LaunchPlan, b: &LaunchPlan, except: WizardStep) -> bool {
    (except == WizardStep::ProductDetails || a.product_details == b.product_details)
        && (except == WizardStep::MarketingStrategy || a.marketing_strategy == b.marketing_strategy)
        && (except == WizardStep::CreativeAssets || a.creative_assets == b.creative_assets)
        && (except == WizardStep::LaunchTimeline || a.launch_timeline == b.launch_timeline)
        && (except == WizardStep::DistributionPlan || a.distribution_plan == b.distribution_plan)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Step identifiers and numbers round-trip
    #[test]
    fn prop_step_identity_round_trips(step in arb_step()) {
        prop_assert_eq!(WizardStep::try_from(step.as_str()).unwrap(), step);
        prop_assert_eq!(WizardStep::from_number(step.number()).unwrap(), step);
        prop_assert!((1..=5).contains(&step.number()));
    }

    /// Property: Navigation never leaves the step range, no matter what
    /// the user does in what order
    #[test]
    fn prop_navigation_stays_in_bounds(
        sections in prop::collection::vec(arb_section(), 0..4),
        ops in prop::collection::vec(arb_nav_op(), 0..24)
    ) {
        let mut store = WizardStore::new();
        for section in sections {
            store.apply_section(section);
        }

        for op in ops {
            match op {
                NavOp::Advance => {
                    let _ = store.advance();
                }
                NavOp::Back => {
                    store.go_back();
                }
                NavOp::Jump(step) => store.set_step(step),
            }
            let number = store.current_step().number();
            prop_assert!(
                (1..=5).contains(&number),
                "step number {} escaped the wizard range",
                number
            );
        }
    }

    /// Property: Advance succeeds exactly when the current gate passes,
    /// and a refusal leaves the store untouched
    #[test]
    fn prop_advance_mirrors_gate(
        sections in prop::collection::vec(arb_section(), 0..6),
        position in arb_step()
    ) {
        let mut store = WizardStore::new();
        for section in sections {
            store.apply_section(section);
        }
        store.set_step(position);

        let before = store.clone();
        let gate_passes = store.current_step_complete();

        match store.advance() {
            Ok(_) => prop_assert!(gate_passes, "advance succeeded past a failing gate"),
            Err(WizardError::IncompleteStep { step }) => {
                prop_assert!(!gate_passes, "advance refused a passing gate");
                prop_assert_eq!(step, position);
                prop_assert_eq!(&store, &before, "a refused advance must not mutate");
            }
        }
    }

    /// Property: Applying a section payload replaces exactly that section
    #[test]
    fn prop_apply_is_section_scoped(plan in arb_plan(), section in arb_section()) {
        let step = section.step();
        let mut updated = plan.clone();
        updated.apply(section.clone());

        prop_assert!(
            other_sections_equal(&plan, &updated, step),
            "sections other than {} changed",
            step
        );
        // The named section now holds exactly the payload.
        match section {
            SectionData::ProductDetails(data) => prop_assert_eq!(updated.product_details, data),
            SectionData::MarketingStrategy(data) => {
                prop_assert_eq!(updated.marketing_strategy, data)
            }
            SectionData::CreativeAssets(data) => prop_assert_eq!(updated.creative_assets, data),
            SectionData::LaunchTimeline(data) => prop_assert_eq!(updated.launch_timeline, data),
            SectionData::DistributionPlan(data) => {
                prop_assert_eq!(updated.distribution_plan, data)
            }
        }
    }

    /// Property: Plan completion is exactly the conjunction of the five gates
    #[test]
    fn prop_completion_is_derived(plan in arb_plan()) {
        let all_gates = WizardStep::all().iter().all(|step| plan.step_complete(*step));
        prop_assert_eq!(plan.is_complete(), all_gates);
    }

    /// Property: Progress is a percentage and hits 100 exactly at readiness
    #[test]
    fn prop_progress_tracks_completion(
        sections in prop::collection::vec(arb_section(), 0..6)
    ) {
        let mut store = WizardStore::new();
        for section in sections {
            store.apply_section(section);
        }

        let progress = store.progress_percent();
        prop_assert!(progress <= 100);
        prop_assert_eq!(progress == 100, store.is_ready_for_completion());
        prop_assert_eq!(
            store.completed_steps().len() == store.total_steps(),
            store.is_ready_for_completion()
        );
    }
}

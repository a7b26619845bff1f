//! Wizard Domain Types
//!
//! Defines the core domain types for the product launch wizard:
//! - [`LaunchPlan`]: Accumulating draft state covering all five sections
//! - [`SectionData`]: Typed per-section replacement payloads
//! - [`WizardStep`]: The fixed five-step flow
//! - [`WizardError`]: Error types for wizard operations
//!
//! # Architecture
//!
//! The wizard walks a fixed five-step flow where each step edits exactly one
//! section of the [`LaunchPlan`]. Sections are always present (defaulting to
//! empty) and a step's completion is a pure predicate over its section,
//! evaluated live rather than cached, so edits made out of order are picked
//! up immediately.
//!
//! # Usage
//!
//! ```rust,ignore
//! use launchdesk::core::wizard::{LaunchPlan, SectionData, ProductDetails, WizardStep};
//!
//! let mut plan = LaunchPlan::new();
//! plan.apply(SectionData::ProductDetails(ProductDetails {
//!     name: "Widget".to_string(),
//!     description: "A widget for widgets".to_string(),
//!     ..Default::default()
//! }));
//! assert!(plan.step_complete(WizardStep::ProductDetails));
//! ```
//!
//! # Serialization
//!
//! All types implement `Serialize` and `Deserialize` so hosts can snapshot
//! drafts or move them across an IPC boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Wizard Step Enum
// ============================================================================

/// Wizard step enum for the launch wizard state machine.
/// Steps are numbered 1 to 5 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    ProductDetails,
    MarketingStrategy,
    CreativeAssets,
    LaunchTimeline,
    DistributionPlan,
}

impl WizardStep {
    /// Total number of wizard steps.
    pub const COUNT: usize = 5;

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::ProductDetails => "product_details",
            WizardStep::MarketingStrategy => "marketing_strategy",
            WizardStep::CreativeAssets => "creative_assets",
            WizardStep::LaunchTimeline => "launch_timeline",
            WizardStep::DistributionPlan => "distribution_plan",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::ProductDetails => "Product Details",
            WizardStep::MarketingStrategy => "Marketing Strategy",
            WizardStep::CreativeAssets => "Creative Assets",
            WizardStep::LaunchTimeline => "Launch Timeline",
            WizardStep::DistributionPlan => "Distribution Plan",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::ProductDetails => {
                "Let's start by gathering some basic information about your product."
            }
            WizardStep::MarketingStrategy => {
                "Define your marketing approach to successfully launch your product."
            }
            WizardStep::CreativeAssets => {
                "Prepare the visual and textual assets you'll need for your product launch."
            }
            WizardStep::LaunchTimeline => {
                "Set your product launch schedule and plan post-launch activities."
            }
            WizardStep::DistributionPlan => {
                "Define how your product will reach customers and your pricing strategy."
            }
        }
    }

    /// 1-based step number as shown to users.
    pub fn number(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// 0-based position in the flow.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::ProductDetails => 0,
            WizardStep::MarketingStrategy => 1,
            WizardStep::CreativeAssets => 2,
            WizardStep::LaunchTimeline => 3,
            WizardStep::DistributionPlan => 4,
        }
    }

    /// Resolve a 1-based step number (None outside 1..=5).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WizardStep::ProductDetails),
            2 => Some(WizardStep::MarketingStrategy),
            3 => Some(WizardStep::CreativeAssets),
            4 => Some(WizardStep::LaunchTimeline),
            5 => Some(WizardStep::DistributionPlan),
            _ => None,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            WizardStep::ProductDetails,
            WizardStep::MarketingStrategy,
            WizardStep::CreativeAssets,
            WizardStep::LaunchTimeline,
            WizardStep::DistributionPlan,
        ]
    }

    /// Get the next step in the wizard flow (None if at the end)
    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::ProductDetails => Some(WizardStep::MarketingStrategy),
            WizardStep::MarketingStrategy => Some(WizardStep::CreativeAssets),
            WizardStep::CreativeAssets => Some(WizardStep::LaunchTimeline),
            WizardStep::LaunchTimeline => Some(WizardStep::DistributionPlan),
            WizardStep::DistributionPlan => None,
        }
    }

    /// Get the previous step in the wizard flow (None if at the beginning)
    pub fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::ProductDetails => None,
            WizardStep::MarketingStrategy => Some(WizardStep::ProductDetails),
            WizardStep::CreativeAssets => Some(WizardStep::MarketingStrategy),
            WizardStep::LaunchTimeline => Some(WizardStep::CreativeAssets),
            WizardStep::DistributionPlan => Some(WizardStep::LaunchTimeline),
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::ProductDetails
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for WizardStep {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "product_details" => Ok(WizardStep::ProductDetails),
            "marketing_strategy" => Ok(WizardStep::MarketingStrategy),
            "creative_assets" => Ok(WizardStep::CreativeAssets),
            "launch_timeline" => Ok(WizardStep::LaunchTimeline),
            "distribution_plan" => Ok(WizardStep::DistributionPlan),
            _ => Err(format!("Unknown wizard step: {}", s)),
        }
    }
}

// ============================================================================
// Plan Sections
// ============================================================================

/// Section edited at step 1: what the product is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProductDetails {
    pub name: String,
    pub description: String,
    /// One of the fixed product category ids ("software", "hardware", ...).
    pub category: String,
    pub target_audience: String,
}

impl ProductDetails {
    /// Step 1 gate: name and description filled in.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }
}

/// Section edited at step 2: how the launch is promoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MarketingStrategy {
    pub objective: String,
    /// Marketing channel ids from the fixed catalog.
    pub channels: Vec<String>,
    pub budget: String,
    pub timeline: String,
}

impl MarketingStrategy {
    /// Step 2 gate: an objective and at least one channel.
    pub fn is_complete(&self) -> bool {
        !self.objective.is_empty() && !self.channels.is_empty()
    }
}

/// Section edited at step 3: what assets exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CreativeAssets {
    pub logo: bool,
    pub images: bool,
    pub videos: bool,
    pub descriptions: String,
}

impl CreativeAssets {
    /// Step 3 gate: some visual asset (logo or images) plus descriptions.
    /// Videos deliberately do not participate; they are nice-to-have.
    pub fn is_complete(&self) -> bool {
        (self.logo || self.images) && !self.descriptions.is_empty()
    }
}

/// Section edited at step 4: when the launch happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LaunchTimeline {
    pub prelaunch_date: Option<NaiveDate>,
    pub launch_date: Option<NaiveDate>,
    /// Post-launch activity ids from the fixed catalog.
    pub post_launch_activities: Vec<String>,
}

impl LaunchTimeline {
    /// Step 4 gate: a launch date is scheduled.
    pub fn is_complete(&self) -> bool {
        self.launch_date.is_some()
    }
}

/// Section edited at step 5: how the product reaches customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DistributionPlan {
    /// Distribution channel ids from the fixed catalog.
    pub channels: Vec<String>,
    pub partnerships: String,
    pub pricing: String,
}

impl DistributionPlan {
    /// Step 5 gate: at least one channel and a pricing strategy.
    pub fn is_complete(&self) -> bool {
        !self.channels.is_empty() && !self.pricing.is_empty()
    }
}

// ============================================================================
// LaunchPlan - Accumulating Draft
// ============================================================================

/// The accumulating launch plan draft. All five sections are always present;
/// a fresh plan simply has them empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LaunchPlan {
    pub product_details: ProductDetails,
    pub marketing_strategy: MarketingStrategy,
    pub creative_assets: CreativeAssets,
    pub launch_timeline: LaunchTimeline,
    pub distribution_plan: DistributionPlan,
}

impl LaunchPlan {
    /// Create a new empty launch plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one section wholesale, leaving the other four untouched.
    pub fn apply(&mut self, section: SectionData) {
        match section {
            SectionData::ProductDetails(data) => self.product_details = data,
            SectionData::MarketingStrategy(data) => self.marketing_strategy = data,
            SectionData::CreativeAssets(data) => self.creative_assets = data,
            SectionData::LaunchTimeline(data) => self.launch_timeline = data,
            SectionData::DistributionPlan(data) => self.distribution_plan = data,
        }
    }

    /// Whether the given step's gate passes, evaluated live against the
    /// current section contents.
    pub fn step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::ProductDetails => self.product_details.is_complete(),
            WizardStep::MarketingStrategy => self.marketing_strategy.is_complete(),
            WizardStep::CreativeAssets => self.creative_assets.is_complete(),
            WizardStep::LaunchTimeline => self.launch_timeline.is_complete(),
            WizardStep::DistributionPlan => self.distribution_plan.is_complete(),
        }
    }

    /// Whether every step's gate passes.
    pub fn is_complete(&self) -> bool {
        WizardStep::all().iter().all(|s| self.step_complete(*s))
    }
}

// ============================================================================
// SectionData - Per-Section Input
// ============================================================================

/// Typed per-section replacement payload for wizard updates.
/// Each variant carries the full new value of one section; submitting one
/// never touches the other sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum SectionData {
    ProductDetails(ProductDetails),
    MarketingStrategy(MarketingStrategy),
    CreativeAssets(CreativeAssets),
    LaunchTimeline(LaunchTimeline),
    DistributionPlan(DistributionPlan),
}

impl SectionData {
    /// Get the wizard step this section belongs to
    pub fn step(&self) -> WizardStep {
        match self {
            SectionData::ProductDetails(_) => WizardStep::ProductDetails,
            SectionData::MarketingStrategy(_) => WizardStep::MarketingStrategy,
            SectionData::CreativeAssets(_) => WizardStep::CreativeAssets,
            SectionData::LaunchTimeline(_) => WizardStep::LaunchTimeline,
            SectionData::DistributionPlan(_) => WizardStep::DistributionPlan,
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur during wizard operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    /// A gated advance was attempted while the current step's predicate
    /// fails. Advisory: the store is left untouched.
    #[error("Cannot advance from incomplete step: {step}")]
    IncompleteStep { step: WizardStep },
}

// ============================================================================
// Tests
// ============================================================================

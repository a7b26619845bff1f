//! Fixed option catalogs for the launch wizard.
//!
//! The wizard's multi-select fields (marketing channels, post-launch
//! activities, distribution channels) and the product category select draw
//! from these catalogs. Plan sections store the stable ids; labels are for
//! display. The catalogs never change at runtime.

/// A labeled choice in a fixed wizard catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// Channels offered on the marketing strategy step.
pub const MARKETING_CHANNELS: &[CatalogEntry] = &[
    CatalogEntry { id: "social_media", label: "Social Media" },
    CatalogEntry { id: "email", label: "Email Marketing" },
    CatalogEntry { id: "content", label: "Content Marketing" },
    CatalogEntry { id: "ads", label: "Paid Advertising" },
    CatalogEntry { id: "pr", label: "PR & Media" },
    CatalogEntry { id: "events", label: "Events & Webinars" },
    CatalogEntry { id: "influencers", label: "Influencer Marketing" },
    CatalogEntry { id: "seo", label: "SEO" },
];

/// Activities offered on the launch timeline step.
pub const POST_LAUNCH_ACTIVITIES: &[CatalogEntry] = &[
    CatalogEntry { id: "follow_up", label: "Customer Follow-up" },
    CatalogEntry { id: "feedback", label: "Collect User Feedback" },
    CatalogEntry { id: "updates", label: "Product Updates/Improvements" },
    CatalogEntry { id: "social", label: "Social Media Engagement" },
    CatalogEntry { id: "reviews", label: "Request Reviews/Testimonials" },
    CatalogEntry { id: "promotion", label: "Ongoing Promotion" },
];

/// Channels offered on the distribution plan step.
pub const DISTRIBUTION_CHANNELS: &[CatalogEntry] = &[
    CatalogEntry { id: "website", label: "Company Website" },
    CatalogEntry { id: "marketplace", label: "Online Marketplaces" },
    CatalogEntry { id: "retail", label: "Retail Stores" },
    CatalogEntry { id: "distributors", label: "Distributors/Resellers" },
    CatalogEntry { id: "direct_sales", label: "Direct Sales Team" },
    CatalogEntry { id: "affiliate", label: "Affiliate Program" },
];

/// Categories offered on the product details step.
pub const PRODUCT_CATEGORIES: &[CatalogEntry] = &[
    CatalogEntry { id: "software", label: "Software" },
    CatalogEntry { id: "hardware", label: "Hardware" },
    CatalogEntry { id: "services", label: "Services" },
    CatalogEntry { id: "consumer_goods", label: "Consumer Goods" },
    CatalogEntry { id: "food_beverage", label: "Food & Beverage" },
    CatalogEntry { id: "other", label: "Other" },
];

pub const MARKETING_CHANNEL_COUNT: usize = MARKETING_CHANNELS.len();
pub const POST_LAUNCH_ACTIVITY_COUNT: usize = POST_LAUNCH_ACTIVITIES.len();
pub const DISTRIBUTION_CHANNEL_COUNT: usize = DISTRIBUTION_CHANNELS.len();
pub const PRODUCT_CATEGORY_COUNT: usize = PRODUCT_CATEGORIES.len();

/// Look up the display label for an id within a catalog.
pub fn label_for(catalog: &'static [CatalogEntry], id: &str) -> Option<&'static str> {
    catalog.iter().find(|e| e.id == id).map(|e| e.label)
}

/// Whether an id belongs to a catalog.
pub fn contains(catalog: &'static [CatalogEntry], id: &str) -> bool {
    catalog.iter().any(|e| e.id == id)
}

// ============================================================================
// Tests
// ============================================================================

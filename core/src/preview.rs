// Preview derivation: a read-only projection of the draft

use serde::Serialize;

use crate::config::EditorConfig;
use crate::models::{CampaignDraft, DiscountTier, DiscountType, TierId};

/// Column headings of the preview table
pub const PREVIEW_HEADINGS: [&str; 4] = ["Title", "Discount Type", "Quantity", "Amount"];

/// One preview table row per tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRow {
    #[serde(skip)]
    pub key: TierId,
    pub title: String,
    pub discount_type: String,
    pub quantity: u32,
    pub amount: String,
}

impl PreviewRow {
    fn from_tier(tier: &DiscountTier) -> Self {
        Self {
            key: tier.id,
            title: tier.title.clone(),
            discount_type: tier.discount_type.label().to_string(),
            quantity: tier.quantity,
            amount: format_amount(&tier.amount, tier.discount_type),
        }
    }
}

/// Everything the preview card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewModel {
    pub title: String,
    pub description: String,
    pub rows: Vec<PreviewRow>,
}

/// Derive the preview with the default placeholders
pub fn derive_preview(draft: &CampaignDraft) -> PreviewModel {
    derive_preview_with(draft, &EditorConfig::default())
}

/// Derive the preview; empty title and description fall back to the
/// configured placeholders
pub fn derive_preview_with(draft: &CampaignDraft, config: &EditorConfig) -> PreviewModel {
    PreviewModel {
        title: or_placeholder(&draft.title, &config.preview_title_placeholder),
        description: or_placeholder(
            &draft.description,
            &config.preview_description_placeholder,
        ),
        rows: draft.tiers.iter().map(PreviewRow::from_tier).collect(),
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Render an amount for the preview table
///
/// Percent tiers get a `" %"` suffix, per-item tiers a `" $"` suffix and
/// untyped tiers show the raw string. There is no placeholder for a blank
/// amount: an untyped blank amount renders as an empty cell.
pub fn format_amount(amount: &str, discount_type: DiscountType) -> String {
    match discount_type.unit() {
        Some(unit) => format!("{} {}", amount, unit),
        None => amount.to_string(),
    }
}

// Core data models for the volume discount editor

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::EditorConfig;

/// Tier ID (UUID v4)
///
/// Only used as a stable render key. Operations address tiers by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierId(pub uuid::Uuid);

impl TierId {
    /// Generate a new random tier ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for TierId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How a tier discounts the order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DiscountType {
    #[default]
    #[serde(rename = "None")]
    None,

    #[serde(rename = "% discount")]
    PercentOff,

    #[serde(rename = "Discount / each")]
    AmountOffEach,
}

impl DiscountType {
    /// All variants in select-box order
    pub const ALL: [DiscountType; 3] = [
        DiscountType::None,
        DiscountType::PercentOff,
        DiscountType::AmountOffEach,
    ];

    /// Literal label shown in the select box and the preview table
    pub fn label(self) -> &'static str {
        match self {
            DiscountType::None => "None",
            DiscountType::PercentOff => "% discount",
            DiscountType::AmountOffEach => "Discount / each",
        }
    }

    /// Unit shown after the amount input, `None` for untyped tiers
    pub fn unit(self) -> Option<&'static str> {
        match self {
            DiscountType::None => None,
            DiscountType::PercentOff => Some("%"),
            DiscountType::AmountOffEach => Some("$"),
        }
    }

    /// Whether the tier carries an amount that must be validated
    pub fn requires_amount(self) -> bool {
        self != DiscountType::None
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a select value is not a known discount label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown discount type: {0}")]
pub struct UnknownDiscountType(pub String);

impl FromStr for DiscountType {
    type Err = UnknownDiscountType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiscountType::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| UnknownDiscountType(s.to_string()))
    }
}

/// One quantity-break rule ("option" in the UI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountTier {
    /// Render key, assigned at creation
    #[serde(default)]
    pub id: TierId,

    pub title: String,

    pub subtitle: String,

    pub label: String,

    /// Minimum quantity for the rule to apply
    pub quantity: u32,

    pub discount_type: DiscountType,

    /// Raw amount as typed; only checked when saving
    pub amount: String,
}

impl DiscountTier {
    /// Create an empty tier for the given quantity threshold
    pub fn with_quantity(quantity: u32) -> Self {
        Self {
            id: TierId::new(),
            title: String::new(),
            subtitle: String::new(),
            label: String::new(),
            quantity,
            discount_type: DiscountType::None,
            amount: String::new(),
        }
    }
}

/// The campaign being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub campaign_name: String,

    pub title: String,

    pub description: String,

    /// Ordered rules; order drives the form and the preview
    #[serde(rename = "options")]
    pub tiers: Vec<DiscountTier>,
}

impl CampaignDraft {
    /// Create a draft with the default seeded tiers (quantities 1 and 2)
    pub fn new() -> Self {
        Self::seeded(&EditorConfig::default())
    }

    /// Create a draft with one empty tier per configured seed quantity
    pub fn seeded(config: &EditorConfig) -> Self {
        Self {
            campaign_name: String::new(),
            title: String::new(),
            description: String::new(),
            tiers: config
                .seed_quantities
                .iter()
                .map(|&quantity| DiscountTier::with_quantity(quantity))
                .collect(),
        }
    }

    /// Quantity threshold for a newly appended tier
    pub fn next_quantity(&self) -> u32 {
        self.tiers
            .last()
            .map_or(0, |tier| tier.quantity)
            .saturating_add(1)
    }

    /// Validate the draft for saving
    pub fn validate(&self) -> crate::validation::ValidationErrors {
        crate::validation::validate_draft(self)
    }
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Status level for messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusLevel {
    /// Completed normally
    Info,
    /// Rejected, the user can fix the input and retry
    Warning,
    /// Failed outside the user's control
    Error,
}

/// Result codes for editor operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ResultCode {
    SaveSuccess,

    ValidationFailed { error_count: usize },

    StoreFailed { reason: String },
}

impl ResultCode {
    /// User-facing message for this code
    pub fn to_message(&self) -> String {
        match self {
            ResultCode::SaveSuccess => "API called successfully!".to_string(),
            ResultCode::ValidationFailed { error_count } => format!(
                "Please fix the {} highlighted field(s) before saving",
                error_count
            ),
            ResultCode::StoreFailed { reason } => {
                format!("Saving the campaign failed: {}", reason)
            }
        }
    }

    /// Default status level for this code
    pub fn level(&self) -> StatusLevel {
        match self {
            ResultCode::SaveSuccess => StatusLevel::Info,
            ResultCode::ValidationFailed { .. } => StatusLevel::Warning,
            ResultCode::StoreFailed { .. } => StatusLevel::Error,
        }
    }
}

/// Processing result information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Status level (INFO/WARNING/ERROR)
    pub level: StatusLevel,

    pub code: ResultCode,
}

impl ProcessResult {
    /// Successful result
    pub fn success(code: ResultCode) -> Self {
        Self {
            level: StatusLevel::Info,
            code,
        }
    }

    /// Failed result, level derived from the code
    pub fn error(code: ResultCode) -> Self {
        Self {
            level: code.level(),
            code,
        }
    }

    pub fn message(&self) -> String {
        self.code.to_message()
    }
}

// Validation logic for campaign drafts

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

use crate::models::{CampaignDraft, DiscountTier, ResultCode, StatusLevel};

pub const CAMPAIGN_NAME_REQUIRED: &str = "Campaign Name is required";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const RULE_REQUIRED: &str = "At least one rule is required";
pub const QUANTITY_NOT_NUMBER: &str = "Quantity must be a number";
pub const AMOUNT_NOT_NUMBER: &str = "Amount must be a number";

/// Form field an error is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    CampaignName,
    Title,
    /// The tier list as a whole
    Options,
    TierTitle(usize),
    TierQuantity(usize),
    TierAmount(usize),
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::CampaignName => f.write_str("campaignName"),
            FieldKey::Title => f.write_str("title"),
            FieldKey::Options => f.write_str("options"),
            FieldKey::TierTitle(index) => write!(f, "title_{}", index),
            FieldKey::TierQuantity(index) => write!(f, "quantity_{}", index),
            FieldKey::TierAmount(index) => write!(f, "amount_{}", index),
        }
    }
}

/// Field errors collected in one validation pass
///
/// Entries keep the order they were found in: general fields first, then
/// tiers by index. Serializes as a `{ "key": "message" }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(FieldKey, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any earlier message for the same field
    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((key, message)),
        }
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, message)| (*key, message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert to a result code for the message area
    pub fn to_result_code(&self) -> ResultCode {
        ResultCode::ValidationFailed {
            error_count: self.len(),
        }
    }

    /// Validation failures are always recoverable by the user
    pub fn status_level(&self) -> StatusLevel {
        StatusLevel::Warning
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) failed validation", self.len())
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, message) in &self.entries {
            map.serialize_entry(&key.to_string(), message)?;
        }
        map.end()
    }
}

/// Validate a draft for saving
///
/// # Rules
/// - Campaign name and title must not be blank
/// - At least one tier must exist
/// - Each tier needs a non-blank title and a quantity (zero counts as missing)
/// - Typed tiers (not `None`) need a numeric amount
///
/// Every rule is checked; nothing short-circuits.
pub fn validate_draft(draft: &CampaignDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.campaign_name.trim().is_empty() {
        errors.insert(FieldKey::CampaignName, CAMPAIGN_NAME_REQUIRED);
    }
    if draft.title.trim().is_empty() {
        errors.insert(FieldKey::Title, TITLE_REQUIRED);
    }
    if draft.tiers.is_empty() {
        errors.insert(FieldKey::Options, RULE_REQUIRED);
    }

    for (index, tier) in draft.tiers.iter().enumerate() {
        validate_tier(index, tier, &mut errors);
    }

    errors
}

fn validate_tier(index: usize, tier: &DiscountTier, errors: &mut ValidationErrors) {
    if tier.title.trim().is_empty() {
        errors.insert(FieldKey::TierTitle(index), TITLE_REQUIRED);
    }
    if tier.quantity == 0 {
        errors.insert(FieldKey::TierQuantity(index), QUANTITY_NOT_NUMBER);
    }
    if tier.discount_type.requires_amount() && parse_amount(&tier.amount).is_none() {
        errors.insert(FieldKey::TierAmount(index), AMOUNT_NOT_NUMBER);
    }
}

/// Parse a raw amount; blank or non-finite input is `None`
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

// Editor reducer: every form mutation is an EditorAction applied to a draft

use crate::models::{CampaignDraft, DiscountTier, DiscountType};

/// A single field edit on one tier, carrying the raw input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierField {
    Title(String),
    Subtitle(String),
    Label(String),
    /// Raw quantity input, coerced with [`parse_quantity`]
    Quantity(String),
    DiscountType(DiscountType),
    /// Raw amount input, stored as typed
    Amount(String),
}

impl TierField {
    /// Field name as used in error keys and logs
    pub fn name(&self) -> &'static str {
        match self {
            TierField::Title(_) => "title",
            TierField::Subtitle(_) => "subtitle",
            TierField::Label(_) => "label",
            TierField::Quantity(_) => "quantity",
            TierField::DiscountType(_) => "discountType",
            TierField::Amount(_) => "amount",
        }
    }

    fn write_to(self, tier: &mut DiscountTier) {
        match self {
            TierField::Title(value) => tier.title = value,
            TierField::Subtitle(value) => tier.subtitle = value,
            TierField::Label(value) => tier.label = value,
            TierField::Quantity(value) => tier.quantity = parse_quantity(&value),
            TierField::DiscountType(value) => tier.discount_type = value,
            TierField::Amount(value) => tier.amount = value,
        }
    }
}

/// Mutations the editor can perform on a draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    SetCampaignName(String),
    SetTitle(String),
    SetDescription(String),
    /// Append an empty tier one above the last quantity
    AddTier,
    /// Remove the tier at a zero-based index; out of range is ignored
    RemoveTier(usize),
    /// Replace one field of the tier at an index; out of range is ignored
    UpdateTier { index: usize, field: TierField },
}

impl CampaignDraft {
    /// Apply an action in place. Never fails: bad input is coerced or left
    /// for validation, bad indices are ignored.
    pub fn apply(&mut self, action: EditorAction) {
        tracing::debug!(?action, "applying editor action");

        match action {
            EditorAction::SetCampaignName(value) => self.campaign_name = value,
            EditorAction::SetTitle(value) => self.title = value,
            EditorAction::SetDescription(value) => self.description = value,
            EditorAction::AddTier => {
                let tier = DiscountTier::with_quantity(self.next_quantity());
                self.tiers.push(tier);
            }
            EditorAction::RemoveTier(index) => {
                if index < self.tiers.len() {
                    self.tiers.remove(index);
                } else {
                    tracing::debug!(index, len = self.tiers.len(), "ignoring removal of missing tier");
                }
            }
            EditorAction::UpdateTier { index, field } => match self.tiers.get_mut(index) {
                Some(tier) => field.write_to(tier),
                None => {
                    tracing::debug!(index, field = field.name(), "ignoring update of missing tier");
                }
            },
        }
    }
}

/// Pure reducer: consume a draft and return the updated one
pub fn apply(mut draft: CampaignDraft, action: EditorAction) -> CampaignDraft {
    draft.apply(action);
    draft
}

/// Coerce quantity input to a positive integer
///
/// # Rules
/// - Leading whitespace is skipped and an optional sign is read
/// - The longest run of digits that follows is the value ("12abc" is 12)
/// - Anything that does not yield a positive `u32` becomes 1
///   (empty, non-numeric, zero, negative or overflowing input)
pub fn parse_quantity(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..digits_end].parse::<u32>() {
        Ok(value) if value > 0 && !negative => value,
        _ => 1,
    }
}

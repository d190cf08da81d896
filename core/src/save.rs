// Save hand-off: validate, then pass the draft to a campaign store

use serde::{Deserialize, Serialize};

use crate::models::{CampaignDraft, ProcessResult, ResultCode};
use crate::validation::ValidationErrors;

/// Acknowledgement returned by a store after accepting a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAck {
    pub campaign_name: String,

    pub tier_count: usize,

    /// Save timestamp (Unix timestamp)
    pub saved_at: i64,
}

/// Store-side errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("the campaign store rejected the draft: {0}")]
    Rejected(String),

    #[error("could not serialize the draft: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Save errors
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("the draft is invalid: {0}")]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SaveError {
    /// Convert to ResultCode
    pub fn to_result_code(&self) -> ResultCode {
        match self {
            SaveError::Invalid(errors) => errors.to_result_code(),
            SaveError::Store(e) => ResultCode::StoreFailed {
                reason: e.to_string(),
            },
        }
    }

    /// Field errors to show beside the form, empty for store failures
    pub fn field_errors(&self) -> ValidationErrors {
        match self {
            SaveError::Invalid(errors) => errors.clone(),
            SaveError::Store(_) => ValidationErrors::new(),
        }
    }
}

/// Persistence collaborator for validated drafts
pub trait CampaignStore {
    fn save(&self, draft: &CampaignDraft) -> Result<SaveAck, StoreError>;
}

/// Store that only logs the payload and acknowledges it
///
/// Stands in for the campaign backend, which lives outside this workspace.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcknowledgingStore;

impl AcknowledgingStore {
    pub fn new() -> Self {
        Self
    }
}

impl CampaignStore for AcknowledgingStore {
    fn save(&self, draft: &CampaignDraft) -> Result<SaveAck, StoreError> {
        let payload = serde_json::to_string(draft)?;
        tracing::debug!(%payload, "campaign payload");

        let ack = SaveAck {
            campaign_name: draft.campaign_name.clone(),
            tier_count: draft.tiers.len(),
            saved_at: chrono::Utc::now().timestamp(),
        };
        tracing::info!(
            campaign = %ack.campaign_name,
            tiers = ack.tier_count,
            "campaign saved"
        );
        Ok(ack)
    }
}

/// Validate the draft and hand it to the store
///
/// An invalid draft never reaches the store.
pub fn save_campaign<S: CampaignStore + ?Sized>(
    draft: &CampaignDraft,
    store: &S,
) -> Result<SaveAck, SaveError> {
    let errors = draft.validate();
    if !errors.is_empty() {
        tracing::warn!(error_count = errors.len(), "save rejected by validation");
        return Err(SaveError::Invalid(errors));
    }

    Ok(store.save(draft)?)
}

/// Map a save outcome to the message shown after saving
pub fn save_outcome_to_result(outcome: &Result<SaveAck, SaveError>) -> ProcessResult {
    match outcome {
        Ok(_) => ProcessResult::success(ResultCode::SaveSuccess),
        Err(e) => ProcessResult::error(e.to_result_code()),
    }
}

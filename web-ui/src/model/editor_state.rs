// Editor page state driven by a Yew reducer

use std::rc::Rc;
use volume_discount_core::{
    save_outcome_to_result, CampaignDraft, EditorAction, EditorConfig, FieldKey,
    ProcessResult, SaveAck, SaveError, ValidationErrors,
};
use yew::prelude::*;

/// Everything the editor page renders from
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub draft: CampaignDraft,

    /// Errors from the last save attempt; edits do not clear them
    pub errors: ValidationErrors,

    /// Outcome of the last save attempt
    pub notice: Option<ProcessResult>,
}

impl EditorState {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            draft: CampaignDraft::seeded(config),
            errors: ValidationErrors::new(),
            notice: None,
        }
    }

    /// Error message for a field as a prop value
    pub fn error_for(&self, key: FieldKey) -> Option<AttrValue> {
        error_attr(&self.errors, key)
    }
}

/// Look up a field error as a prop value
pub fn error_attr(errors: &ValidationErrors, key: FieldKey) -> Option<AttrValue> {
    errors
        .get(key)
        .map(|message| AttrValue::from(message.to_string()))
}

/// Messages accepted by the editor reducer
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMsg {
    Edit(EditorAction),
    SaveCompleted {
        errors: ValidationErrors,
        result: ProcessResult,
    },
}

impl EditorMsg {
    /// Build the message for a finished save attempt
    pub fn saved(outcome: &Result<SaveAck, SaveError>) -> Self {
        let errors = match outcome {
            Ok(_) => ValidationErrors::new(),
            Err(e) => e.field_errors(),
        };
        EditorMsg::SaveCompleted {
            errors,
            result: save_outcome_to_result(outcome),
        }
    }
}

impl Reducible for EditorState {
    type Action = EditorMsg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            EditorMsg::Edit(action) => next.draft.apply(action),
            EditorMsg::SaveCompleted { errors, result } => {
                next.errors = errors;
                next.notice = Some(result);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volume_discount_core::{
        save_campaign, AcknowledgingStore, ResultCode, StatusLevel, TierField,
    };

    fn reduce(state: EditorState, msg: EditorMsg) -> EditorState {
        (*Rc::new(state).reduce(msg)).clone()
    }

    fn save(state: EditorState) -> EditorState {
        let outcome = save_campaign(&state.draft, &AcknowledgingStore::new());
        reduce(state, EditorMsg::saved(&outcome))
    }

    #[test]
    fn test_new_state_is_seeded_and_clean() {
        let state = EditorState::new(&EditorConfig::default());

        assert_eq!(state.draft.tiers.len(), 2);
        assert!(state.errors.is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_edit_updates_draft() {
        let state = EditorState::new(&EditorConfig::default());
        let state = reduce(state, EditorMsg::Edit(EditorAction::AddTier));

        assert_eq!(state.draft.tiers.len(), 3);
        assert_eq!(state.draft.tiers[2].quantity, 3);
    }

    #[test]
    fn test_failed_save_shows_field_errors() {
        let state = save(EditorState::new(&EditorConfig::default()));

        assert_eq!(
            state.error_for(FieldKey::CampaignName),
            Some(AttrValue::from("Campaign Name is required"))
        );
        assert!(state.error_for(FieldKey::TierTitle(0)).is_some());
        let notice = state.notice.expect("notice after save");
        assert_eq!(notice.level, StatusLevel::Warning);
    }

    #[test]
    fn test_errors_survive_edits_until_next_save() {
        let state = save(EditorState::new(&EditorConfig::default()));
        let state = reduce(
            state,
            EditorMsg::Edit(EditorAction::SetCampaignName("Spring sale".into())),
        );

        assert!(state.errors.contains(FieldKey::CampaignName));
    }

    #[test]
    fn test_successful_save_clears_errors() {
        let mut state = save(EditorState::new(&EditorConfig::default()));
        for action in [
            EditorAction::SetCampaignName("Spring sale".into()),
            EditorAction::SetTitle("Buy more".into()),
            EditorAction::UpdateTier {
                index: 0,
                field: TierField::Title("Single".into()),
            },
            EditorAction::UpdateTier {
                index: 1,
                field: TierField::Title("Duo".into()),
            },
        ] {
            state = reduce(state, EditorMsg::Edit(action));
        }

        let state = save(state);

        assert!(state.errors.is_empty());
        assert_eq!(
            state.notice.map(|notice| notice.code),
            Some(ResultCode::SaveSuccess)
        );
        assert_eq!(state.draft.campaign_name, "Spring sale");
    }
}

// Web UI library for the volume discount editor
//
// This crate provides the Yew components and UI state for the
// "Create volume discount" page.

use yew::prelude::*;

pub mod components;
pub mod messages;
pub mod model;

// Re-export components
pub use components::*;
pub use model::{EditorMsg, EditorState};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub config: volume_discount_core::EditorConfig,
}

/// Editor page: owns the draft and wires every card to the reducer
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    use volume_discount_core::{derive_preview_with, save_campaign, AcknowledgingStore, EditorAction, FieldKey};

    let state = {
        let config = props.config.clone();
        use_reducer(move || EditorState::new(&config))
    };

    let on_action = {
        let state = state.clone();
        Callback::from(move |action: EditorAction| {
            state.dispatch(EditorMsg::Edit(action));
        })
    };

    let on_save = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let outcome = save_campaign(&state.draft, &AcknowledgingStore::new());
            state.dispatch(EditorMsg::saved(&outcome));
        })
    };

    let preview = derive_preview_with(&state.draft, &props.config);
    let (message, message_class) = messages::notice_view(state.notice.as_ref());

    html! {
        <div class="page">
            <h1 class="page-title">{ "Create volume discount" }</h1>

            // Outcome of the last save
            <div class="message-area">
                <div class={message_class}>{ message }</div>
            </div>

            <div class="page-grid">
                <GeneralForm
                    campaign_name={state.draft.campaign_name.clone()}
                    title={state.draft.title.clone()}
                    description={state.draft.description.clone()}
                    campaign_name_error={state.error_for(FieldKey::CampaignName)}
                    title_error={state.error_for(FieldKey::Title)}
                    on_action={on_action.clone()}
                />

                <Preview preview={preview} />

                <RuleList
                    tiers={state.draft.tiers.clone()}
                    errors={state.errors.clone()}
                    on_action={on_action}
                    on_save={on_save}
                />
            </div>
        </div>
    }
}

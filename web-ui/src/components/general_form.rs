// General card: campaign name, title and description

use volume_discount_core::EditorAction;
use yew::prelude::*;

use super::TextField;

#[derive(Properties, PartialEq)]
pub struct GeneralFormProps {
    pub campaign_name: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub campaign_name_error: Option<AttrValue>,
    #[prop_or_default]
    pub title_error: Option<AttrValue>,
    pub on_action: Callback<EditorAction>,
}

#[function_component(GeneralForm)]
pub fn general_form(props: &GeneralFormProps) -> Html {
    let on_campaign_name = props.on_action.reform(EditorAction::SetCampaignName);
    let on_title = props.on_action.reform(EditorAction::SetTitle);
    let on_description = props.on_action.reform(EditorAction::SetDescription);

    html! {
        <div class="card general-card">
            <h2 class="card-heading">{ "General" }</h2>
            <form class="form-layout" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <TextField
                    label="Campaign"
                    value={props.campaign_name.clone()}
                    on_change={on_campaign_name}
                    error={props.campaign_name_error.clone()}
                    required=true
                />
                <TextField
                    label="Title"
                    value={props.title.clone()}
                    on_change={on_title}
                    error={props.title_error.clone()}
                    required=true
                />
                <TextField
                    label="Description"
                    value={props.description.clone()}
                    on_change={on_description}
                />
            </form>
        </div>
    }
}

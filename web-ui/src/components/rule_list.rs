// Volume discount rule card: the tier list with add and save actions

use volume_discount_core::{DiscountTier, EditorAction, FieldKey, TierField, ValidationErrors};
use yew::prelude::*;

use super::{SaveButton, TierCard};
use crate::model::editor_state::error_attr;

#[derive(Properties, PartialEq)]
pub struct RuleListProps {
    pub tiers: Vec<DiscountTier>,
    pub errors: ValidationErrors,
    pub on_action: Callback<EditorAction>,
    pub on_save: Callback<()>,
}

#[function_component(RuleList)]
pub fn rule_list(props: &RuleListProps) -> Html {
    let on_add = props.on_action.reform(|_: MouseEvent| EditorAction::AddTier);

    let render_tier = |(index, tier): (usize, &DiscountTier)| {
        let on_edit = props
            .on_action
            .reform(move |field: TierField| EditorAction::UpdateTier { index, field });
        let on_remove = props
            .on_action
            .reform(move |_: ()| EditorAction::RemoveTier(index));

        html! {
            <TierCard
                key={tier.id.to_string()}
                index={index}
                tier={tier.clone()}
                title_error={error_attr(&props.errors, FieldKey::TierTitle(index))}
                quantity_error={error_attr(&props.errors, FieldKey::TierQuantity(index))}
                amount_error={error_attr(&props.errors, FieldKey::TierAmount(index))}
                on_edit={on_edit}
                on_remove={on_remove}
            />
        }
    };

    html! {
        <div class="card rule-card">
            <h2 class="card-heading">{ "Volume discount rule" }</h2>
            <div class="tier-list">
                { for props.tiers.iter().enumerate().map(render_tier) }
            </div>
            if let Some(error) = props.errors.get(FieldKey::Options) {
                <div class="field-error">{ error.to_string() }</div>
            }
            <button class="add-option-btn" type="button" onclick={on_add}>
                { "+ Add option" }
            </button>
            <SaveButton on_save={props.on_save.clone()} />
        </div>
    }
}

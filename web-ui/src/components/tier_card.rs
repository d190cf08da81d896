// One "OPTION n" block of the volume discount rule card

use volume_discount_core::{DiscountTier, DiscountType, TierField};
use yew::prelude::*;

use super::TextField;

#[derive(Properties, PartialEq)]
pub struct TierCardProps {
    /// Zero-based position, shown one-based
    pub index: usize,
    pub tier: DiscountTier,
    #[prop_or_default]
    pub title_error: Option<AttrValue>,
    #[prop_or_default]
    pub quantity_error: Option<AttrValue>,
    #[prop_or_default]
    pub amount_error: Option<AttrValue>,
    pub on_edit: Callback<TierField>,
    pub on_remove: Callback<()>,
}

#[function_component(TierCard)]
pub fn tier_card(props: &TierCardProps) -> Html {
    let tier = &props.tier;

    let on_discount_type = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<DiscountType>() {
                Ok(kind) => on_edit.emit(TierField::DiscountType(kind)),
                Err(e) => tracing::warn!("ignoring discount type change: {}", e),
            }
        })
    };

    let on_remove = props.on_remove.reform(|_: MouseEvent| ());

    html! {
        <div class="tier-card">
            <div class="tier-header">
                <span class="tier-badge">{ format!("OPTION {}", props.index + 1) }</span>
                <button
                    class="tier-delete"
                    title="Delete option"
                    aria-label="Delete option"
                    onclick={on_remove}
                >
                    { "×" }
                </button>
            </div>
            <div class="form-layout condensed">
                <TextField
                    label="Title"
                    value={tier.title.clone()}
                    on_change={props.on_edit.reform(TierField::Title)}
                    error={props.title_error.clone()}
                    required=true
                />
                <TextField
                    label="Subtitle"
                    value={tier.subtitle.clone()}
                    on_change={props.on_edit.reform(TierField::Subtitle)}
                />
                <TextField
                    label="Label (Optional)"
                    value={tier.label.clone()}
                    on_change={props.on_edit.reform(TierField::Label)}
                />
                <TextField
                    label="Quantity"
                    input_type="number"
                    value={tier.quantity.to_string()}
                    on_change={props.on_edit.reform(TierField::Quantity)}
                    error={props.quantity_error.clone()}
                    required=true
                />
                <div class="form-field">
                    <label class="form-label">
                        { "Discount type" }
                        <span class="required-mark">{ " *" }</span>
                    </label>
                    <select class="form-select" onchange={on_discount_type}>
                        { for DiscountType::ALL.iter().map(|kind| html! {
                            <option
                                value={kind.label()}
                                selected={*kind == tier.discount_type}
                            >
                                { kind.label() }
                            </option>
                        }) }
                    </select>
                </div>
                if let Some(unit) = tier.discount_type.unit() {
                    <TextField
                        label="Amount"
                        input_type="number"
                        value={tier.amount.clone()}
                        suffix={unit}
                        on_change={props.on_edit.reform(TierField::Amount)}
                        error={props.amount_error.clone()}
                    />
                }
            </div>
        </div>
    }
}

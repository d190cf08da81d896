// Save button component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SaveButtonProps {
    pub on_save: Callback<()>,
}

/// Validation and the store hand-off happen in the parent; this only
/// reports the click.
#[function_component(SaveButton)]
pub fn save_button(props: &SaveButtonProps) -> Html {
    let on_click = props.on_save.reform(|_: MouseEvent| ());

    html! {
        <button
            class="save-btn"
            type="button"
            onclick={on_click}
        >
            { "Save" }
        </button>
    }
}

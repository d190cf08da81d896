// Labelled input with inline error

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Unit shown after the input, e.g. "%"
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class={classes!("form-field", props.error.is_some().then_some("has-error"))}>
            <label class="form-label">
                { props.label.clone() }
                if props.required {
                    <span class="required-mark">{ " *" }</span>
                }
            </label>
            <div class="input-wrapper">
                <input
                    class="form-input"
                    type={props.input_type.clone()}
                    value={props.value.clone()}
                    oninput={on_input}
                    autocomplete="off"
                />
                if let Some(suffix) = &props.suffix {
                    <span class="input-suffix">{ suffix.clone() }</span>
                }
            </div>
            if let Some(error) = &props.error {
                <div class="field-error">{ error.clone() }</div>
            }
        </div>
    }
}

// Preview card: derived title, description and tier table

use volume_discount_core::{PreviewModel, PREVIEW_HEADINGS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PreviewProps {
    pub preview: PreviewModel,
}

#[function_component(Preview)]
pub fn preview(props: &PreviewProps) -> Html {
    let preview = &props.preview;

    html! {
        <div class="card preview-card">
            <h2 class="card-heading">{ "Preview" }</h2>
            <h3 class="preview-title">{ preview.title.clone() }</h3>
            <p class="preview-description">{ preview.description.clone() }</p>
            <table class="preview-table">
                <thead>
                    <tr>
                        { for PREVIEW_HEADINGS.iter().map(|heading| html! { <th>{ *heading }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for preview.rows.iter().map(|row| html! {
                        <tr key={row.key.to_string()}>
                            <td>{ row.title.clone() }</td>
                            <td>{ row.discount_type.clone() }</td>
                            <td class="numeric">{ row.quantity }</td>
                            <td>{ row.amount.clone() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

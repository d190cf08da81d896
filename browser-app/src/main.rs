// Volume Discount Editor Browser Application

use volume_discount_core::EditorConfig;
use volume_discount_web_ui::{App, AppLayout};
use yew::prelude::*;

#[function_component(Main)]
fn main_component() -> Html {
    html! {
        <AppLayout>
            <App config={EditorConfig::default()} />
        </AppLayout>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("starting volume discount editor");

    yew::Renderer::<Main>::new().render();
}

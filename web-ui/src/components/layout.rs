// Page shell shared by every screen

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppLayoutProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    html! {
        <div class="app-container" lang="en">
            { props.children.clone() }
        </div>
    }
}

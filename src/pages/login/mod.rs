mod components;
mod panel;
mod utils;

use leptos::*;

use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <LoginPanel/> }
}

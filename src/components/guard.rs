use leptos::*;

use crate::state::auth::use_session;
use crate::utils::nav;

/// Gate for routes that require an established session. Without a stored
/// token the user is sent back to the entry route; the server remains the
/// authority on whether the token is still valid.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let authenticated = session.is_authenticated();

    create_effect(move |_| {
        if !authenticated {
            nav::redirect("/");
        }
    });

    view! {
        <Show when=move || authenticated fallback=|| ()>
            {children()}
        </Show>
    }
}

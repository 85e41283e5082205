use leptos::*;

use crate::api::{ApiClient, ApiError, LoginRequest};
use crate::session::Session;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
}

/// Provides the session, the API client built on it, and the auth signal
/// pair to the whole component tree. The session is restored from browser
/// storage exactly once, at app start.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = match use_context::<Session>() {
        Some(existing) => existing,
        None => {
            let session = Session::restore();
            provide_context(session.clone());
            session
        }
    };
    if use_context::<ApiClient>().is_none() {
        provide_context(ApiClient::new(session.clone()));
    }

    let ctx = create_signal(AuthState {
        is_authenticated: session.is_authenticated(),
    });
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(Session::ephemeral)
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session()))
}

pub async fn login_request(
    api: &ApiClient,
    request: LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    api.login(request).await?;
    set_auth_state.update(|state| state.is_authenticated = true);
    Ok(())
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api();

    create_action(move |request: &LoginRequest| {
        let api = api.clone();
        let payload = request.clone();
        async move { login_request(&api, payload, set_auth).await }
    })
}

/// Client-side session termination: drop the stored token and reset auth
/// state. The server is not called; navigation is left to the caller so a
/// confirmation notice can be shown first.
pub fn logout(session: &Session, set_auth_state: WriteSignal<AuthState>) {
    session.clear();
    set_auth_state.update(|state| state.is_authenticated = false);
}

use leptos::*;

use crate::api::types::LoginRequest;
use crate::api::ApiError;
use crate::components::feedback::{MessageBanner, MessageState};
use crate::components::layout::Card;
use crate::pages::login::components::form::LoginForm;
use crate::pages::login::utils::validate_credentials;
use crate::state::auth::use_login_action;
use crate::utils::nav::redirect_after_delay;

const REDIRECT_DELAY_MS: u32 = 1_000;

type LoginAction = Action<LoginRequest, Result<(), ApiError>>;

/// Validates and dispatches one login attempt. Invalid input sets the notice
/// and never reaches the network; an in-flight attempt blocks re-entry.
fn submit_credentials(
    login: LoginAction,
    notice: RwSignal<MessageState>,
    email: String,
    password: String,
) {
    if login.pending().get_untracked() {
        return;
    }
    notice.update(|n| n.clear());
    if let Err(message) = validate_credentials(&email, &password) {
        let err = ApiError::validation(message);
        notice.update(|n| n.set_api_error(&err, "Something went wrong"));
        return;
    }
    login.dispatch(LoginRequest { email, password });
}

#[component]
pub fn LoginPanel() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let notice = create_rw_signal(MessageState::default());

    let login = use_login_action();
    let submitting = login.pending();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_credentials(
            login,
            notice,
            email.get_untracked(),
            password.get_untracked(),
        );
    };

    create_effect(move |_| match login.value().get() {
        Some(Ok(())) => {
            notice.update(|n| n.set_success("Login successful"));
            redirect_after_delay("/dashboard", REDIRECT_DELAY_MS);
        }
        Some(Err(err)) => {
            notice.update(|n| n.set_error(err.message_or("Something went wrong")));
        }
        None => {}
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-300 p-6">
            <div class="w-full max-w-md">
                <Card>
                    <h2 class="text-2xl font-semibold text-center text-gray-700 mb-2">
                        "Welcome Back"
                    </h2>
                    <p class="text-center text-gray-500 mb-6">
                        "Login to manage your attendance & tasks"
                    </p>
                    <MessageBanner message=notice/>
                    <LoginForm
                        email=email
                        password=password
                        submitting=submitting
                        on_submit=on_submit
                    />
                </Card>
            </div>
        </div>
    }
}

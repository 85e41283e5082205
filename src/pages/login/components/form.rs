use leptos::ev::SubmitEvent;
use leptos::*;

/// Controlled email/password form. Submission handling lives in the panel.
#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Email"</label>
                <input
                    type="email"
                    class="w-full border rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Password"</label>
                <input
                    type="password"
                    class="w-full border rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <button
                type="submit"
                class="w-full bg-blue-600 text-white rounded-lg py-2 font-semibold hover:bg-blue-700 disabled:opacity-50"
                disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Logging in..." } else { "Login" }}
            </button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_both_fields_and_submit_button() {
        let html = render_to_string(|| {
            let email = create_rw_signal(String::new());
            let password = create_rw_signal(String::new());
            view! {
                <LoginForm
                    email=email
                    password=password
                    submitting=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Login"));
    }

    #[test]
    fn disables_button_while_submitting() {
        let html = render_to_string(|| {
            let email = create_rw_signal(String::new());
            let password = create_rw_signal(String::new());
            view! {
                <LoginForm
                    email=email
                    password=password
                    submitting=Signal::derive(|| true)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("disabled"));
        assert!(html.contains("Logging in..."));
    }
}

use leptos::*;

use crate::components::feedback::{MessageBanner, MessageState};
use crate::components::layout::{Card, Layout};
use crate::pages::attendance::AttendancePanel;
use crate::pages::tasks::TasksPanel;
use crate::session::Session;
use crate::state::auth::{logout, use_auth, use_session, AuthState};
use crate::utils::nav::redirect_after_delay;

const LOGOUT_REDIRECT_DELAY_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Attendance,
    Tasks,
}

impl DashboardTab {
    fn label(self) -> &'static str {
        match self {
            Self::Attendance => "Attendance",
            Self::Tasks => "Tasks",
        }
    }
}

/// Ends the session, confirms it to the user, and returns to the entry
/// route once the notice has had a moment on screen.
fn handle_logout(
    session: &Session,
    set_auth: WriteSignal<AuthState>,
    notice: RwSignal<MessageState>,
) {
    logout(session, set_auth);
    notice.update(|n| n.set_success("Logged out successfully"));
    redirect_after_delay("/", LOGOUT_REDIRECT_DELAY_MS);
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let active_tab = create_rw_signal(DashboardTab::Attendance);
    let session = use_session();
    let (_auth, set_auth) = use_auth();
    let notice = create_rw_signal(MessageState::default());

    let on_logout = move |_| handle_logout(&session, set_auth, notice);

    view! {
        <Layout>
            <Card>
                <div class="flex flex-col sm:flex-row justify-between items-center mb-8 gap-4">
                    <h2 class="text-2xl font-semibold text-gray-700">"Employee Dashboard"</h2>
                    <button
                        class="bg-red-500 hover:bg-red-600 text-white px-4 py-2 rounded-lg shadow-sm transition"
                        on:click=on_logout
                    >
                        "Logout"
                    </button>
                </div>
                <MessageBanner message=notice/>
                <div class="flex justify-center gap-4 mb-6">
                    <TabButton tab=DashboardTab::Attendance active_tab/>
                    <TabButton tab=DashboardTab::Tasks active_tab/>
                </div>
                <div class="mt-4">
                    {move || match active_tab.get() {
                        DashboardTab::Attendance => view! { <AttendancePanel/> }.into_view(),
                        DashboardTab::Tasks => view! { <TasksPanel/> }.into_view(),
                    }}
                </div>
            </Card>
        </Layout>
    }
}

#[component]
fn TabButton(tab: DashboardTab, active_tab: RwSignal<DashboardTab>) -> impl IntoView {
    let class = move || {
        if active_tab.get() == tab {
            "px-5 py-2 rounded-lg transition font-medium bg-blue-500 text-white shadow-sm"
        } else {
            "px-5 py-2 rounded-lg transition font-medium bg-gray-200 text-gray-600 hover:bg-gray-300"
        }
    };
    view! {
        <button class=class on:click=move |_| active_tab.set(tab)>
            {tab.label()}
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::client::ApiClient;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn logging_out_clears_the_session_and_sets_the_confirmation_notice() {
        with_runtime(|| {
            let session = Session::ephemeral();
            session.store("tok");
            let (state, set_state) = create_signal(AuthState {
                is_authenticated: true,
            });
            let notice = create_rw_signal(MessageState::default());

            handle_logout(&session, set_state, notice);

            assert!(!session.is_authenticated());
            assert!(!state.get_untracked().is_authenticated);
            assert_eq!(
                notice.get_untracked().success.as_deref(),
                Some("Logged out successfully")
            );
        });
    }

    #[test]
    fn attendance_tab_is_active_by_default() {
        let html = render_to_string(|| {
            provide_context(ApiClient::new(Session::ephemeral()));
            view! { <DashboardPanel/> }
        });
        assert!(html.contains("Employee Dashboard"));
        assert!(html.contains("Logout"));
        // attendance content mounts first, tasks stay unmounted
        assert!(html.contains("Check In"));
        assert!(!html.contains("My Tasks"));
    }
}

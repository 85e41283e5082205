use leptos::*;

use crate::components::feedback::{EmptyState, ErrorMessage, LoadingSpinner, MessageBanner};
use crate::pages::attendance::components::history::AttendanceHistory;
use crate::pages::attendance::view_model::{
    use_attendance_model, ClockDirection, LOAD_ERROR_FALLBACK,
};

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let model = use_attendance_model();
    let records = model.records;
    let clock = model.clock;
    let busy = clock.pending();

    view! {
        <div class="text-gray-800">
            <div class="flex flex-col sm:flex-row justify-center gap-3 mb-6">
                <button
                    class="bg-green-500 hover:bg-green-600 text-white px-6 py-2 rounded-lg shadow-sm transition w-full sm:w-auto disabled:opacity-50"
                    disabled=move || busy.get()
                    on:click=move |_| {
                        if !busy.get_untracked() {
                            clock.dispatch(ClockDirection::In);
                        }
                    }
                >
                    "Check In"
                </button>
                <button
                    class="bg-blue-500 hover:bg-blue-600 text-white px-6 py-2 rounded-lg shadow-sm transition w-full sm:w-auto disabled:opacity-50"
                    disabled=move || busy.get()
                    on:click=move |_| {
                        if !busy.get_untracked() {
                            clock.dispatch(ClockDirection::Out);
                        }
                    }
                >
                    "Check Out"
                </button>
            </div>
            <MessageBanner message=model.notice/>
            {move || match records.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(err)) => {
                    view! { <ErrorMessage message=err.message_or(LOAD_ERROR_FALLBACK)/> }
                        .into_view()
                }
                Some(Ok(items)) if items.is_empty() => {
                    view! { <EmptyState title="No attendance records"/> }.into_view()
                }
                Some(Ok(items)) => view! { <AttendanceHistory records=items/> }.into_view(),
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::client::ApiClient;
    use crate::session::Session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_clock_controls_and_loading_state() {
        let html = render_to_string(|| {
            provide_context(ApiClient::new(Session::ephemeral()));
            view! { <AttendancePanel/> }
        });
        assert!(html.contains("Check In"));
        assert!(html.contains("Check Out"));
        assert!(html.contains("animate-spin"));
    }
}

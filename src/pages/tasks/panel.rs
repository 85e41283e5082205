use leptos::*;

use crate::components::feedback::{EmptyState, ErrorMessage, MessageBanner};
use crate::pages::tasks::components::list::TaskList;
use crate::pages::tasks::components::task_modal::TaskModal;
use crate::pages::tasks::view_model::{use_tasks_model, LOAD_ERROR_FALLBACK};

#[component]
pub fn TasksPanel() -> impl IntoView {
    let model = use_tasks_model();
    let tasks = model.tasks;

    view! {
        <div class="text-gray-800">
            <div class="flex flex-col sm:flex-row justify-between items-center mb-6 gap-3">
                <h2 class="text-xl font-semibold text-gray-700">"My Tasks"</h2>
                <button
                    class="bg-blue-500 hover:bg-blue-600 text-white px-4 py-2 rounded-lg shadow-sm transition w-full sm:w-auto"
                    on:click=move |_| model.open_create()
                >
                    "+ Add Task"
                </button>
            </div>
            <MessageBanner message=model.notice/>
            {move || match tasks.get() {
                None => view! { <p class="text-center text-gray-500">"Loading..."</p> }.into_view(),
                Some(Err(err)) => {
                    view! { <ErrorMessage message=err.message_or(LOAD_ERROR_FALLBACK)/> }
                        .into_view()
                }
                Some(Ok(items)) if items.is_empty() => {
                    view! { <EmptyState title="No tasks available"/> }.into_view()
                }
                Some(Ok(items)) => view! { <TaskList tasks=items model/> }.into_view(),
            }}
            <TaskModal model/>
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
    fn renders_header_add_button_and_loading_state() {
        let html = render_to_string(|| {
            provide_context(ApiClient::new(Session::ephemeral()));
            view! { <TasksPanel/> }
        });
        assert!(html.contains("My Tasks"));
        assert!(html.contains("+ Add Task"));
        assert!(html.contains("Loading..."));
    }
}

use leptos::*;

use crate::pages::tasks::view_model::TasksModel;

/// Create/edit dialog. Rendered only while a mode is selected; the form
/// signals live on the model so reopening in edit mode reseeds them.
#[component]
pub fn TaskModal(model: TasksModel) -> impl IntoView {
    let saving = model.save.pending();

    view! {
        <Show when=move || model.modal.get().is_some() fallback=|| ()>
            <div class="fixed inset-0 z-50 flex items-end sm:items-center justify-center bg-black/40 p-4">
                <div class="bg-white w-full sm:max-w-md rounded-t-2xl sm:rounded-xl shadow-xl max-h-[90vh] overflow-y-auto">
                    <div class="p-6">
                        <div class="flex justify-between items-center mb-4">
                            <h3 class="text-lg font-semibold text-gray-700">
                                {move || {
                                    model.modal.get().map(|mode| mode.heading()).unwrap_or_default()
                                }}
                            </h3>
                            <button
                                class="text-gray-400 hover:text-gray-600 text-xl"
                                on:click=move |_| model.close_modal()
                            >
                                "×"
                            </button>
                        </div>
                        <div class="space-y-4">
                            <div>
                                <label class="block text-sm text-gray-600 mb-1">"Task Title"</label>
                                <input
                                    type="text"
                                    placeholder="Enter task title"
                                    class="w-full border border-gray-300 px-4 py-2 rounded-lg focus:ring-2 focus:ring-blue-400 focus:outline-none"
                                    value=move || model.title.get()
                                    prop:value=move || model.title.get()
                                    on:input=move |ev| model.title.set(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label class="block text-sm text-gray-600 mb-1">"Description"</label>
                                <textarea
                                    rows="4"
                                    placeholder="Enter task description"
                                    class="w-full border border-gray-300 px-4 py-2 rounded-lg focus:ring-2 focus:ring-blue-400 focus:outline-none resize-none"
                                    prop:value=move || model.description.get()
                                    on:input=move |ev| model.description.set(event_target_value(&ev))
                                >
                                    {model.description.get_untracked()}
                                </textarea>
                            </div>
                            <div class="flex flex-col sm:flex-row justify-end gap-3 pt-2">
                                <button
                                    class="w-full sm:w-auto px-4 py-2 bg-gray-200 rounded-lg hover:bg-gray-300 transition"
                                    on:click=move |_| model.close_modal()
                                >
                                    "Cancel"
                                </button>
                                <button
                                    class="w-full sm:w-auto px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition disabled:opacity-50"
                                    disabled=move || saving.get()
                                    on:click=move |_| model.submit()
                                >
                                    {move || {
                                        model
                                            .modal
                                            .get()
                                            .map(|mode| mode.submit_label())
                                            .unwrap_or_default()
                                    }}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::client::ApiClient;
    use crate::pages::tasks::view_model::use_tasks_model;
    use crate::session::Session;
    use crate::test_support::fixtures;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn hidden_until_a_mode_is_selected() {
        let html = render_to_string(|| {
            provide_context(ApiClient::new(Session::ephemeral()));
            let model = use_tasks_model();
            view! { <TaskModal model/> }
        });
        assert!(!html.contains("Task Title"));
    }

    #[test]
    fn edit_mode_prefills_the_form_and_relabels_the_submit() {
        let html = render_to_string(|| {
            provide_context(ApiClient::new(Session::ephemeral()));
            let model = use_tasks_model();
            model.open_edit(&fixtures::described_task(
                "t-1",
                "Quarterly report",
                "Draft the numbers",
            ));
            view! { <TaskModal model/> }
        });
        assert!(html.contains("Edit Task"));
        assert!(html.contains("Quarterly report"));
        assert!(html.contains("Draft the numbers"));
        assert!(html.contains("Update"));
    }

    #[test]
    fn create_mode_uses_the_add_labels() {
        let html = render_to_string(|| {
            provide_context(ApiClient::new(Session::ephemeral()));
            let model = use_tasks_model();
            model.open_create();
            view! { <TaskModal model/> }
        });
        assert!(html.contains("Add Task"));
        assert!(html.contains("Add"));
    }
}

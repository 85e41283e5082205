use leptos::*;

use crate::api::types::{Task, TaskStatus};
use crate::pages::tasks::components::status_label::StatusBadge;
use crate::pages::tasks::utils::needs_toggle;
use crate::pages::tasks::view_model::TasksModel;

/// Desktop table plus mobile card layout for the same list. Only one row can
/// hold the description expansion at a time.
#[component]
pub fn TaskList(tasks: Vec<Task>, model: TasksModel) -> impl IntoView {
    let cards = tasks.clone();
    view! {
        <div class="hidden md:block overflow-x-auto rounded-xl border border-gray-200 bg-white shadow-sm">
            <table class="w-full text-left">
                <thead class="bg-gray-50 text-gray-600 text-sm">
                    <tr>
                        <th class="p-4">"Title"</th>
                        <th class="p-4">"Description"</th>
                        <th class="p-4">"Status"</th>
                        <th class="p-4 text-center">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {tasks
                        .into_iter()
                        .map(|task| view! { <TaskRow task model/> })
                        .collect_view()}
                </tbody>
            </table>
        </div>
        <div class="md:hidden space-y-4">
            {cards
                .into_iter()
                .map(|task| view! { <TaskCard task model/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn TaskRow(task: Task, model: TasksModel) -> impl IntoView {
    let edit_target = task.clone();
    let complete_id = task.id.clone();
    let is_pending = task.status == TaskStatus::Pending;
    let busy = model.complete.pending();

    view! {
        <tr class="border-t border-gray-100 hover:bg-gray-50 transition">
            <td class="p-4 font-medium text-gray-700">{task.title.clone()}</td>
            <td class="p-4 max-w-sm text-gray-600">
                <Description task=task.clone() model clamp="line-clamp-2"/>
            </td>
            <td class="p-4">
                <StatusBadge status=task.status/>
            </td>
            <td class="p-4 text-center">
                <div class="flex justify-center gap-2">
                    <button
                        class="px-3 py-1 bg-gray-200 hover:bg-gray-300 text-sm rounded-md transition"
                        on:click=move |_| model.open_edit(&edit_target)
                    >
                        "Edit"
                    </button>
                    <Show when=move || is_pending fallback=|| ()>
                        {
                            let complete_id = complete_id.clone();
                            view! {
                                <button
                                    class="px-3 py-1 bg-green-500 hover:bg-green-600 text-white text-sm rounded-md transition disabled:opacity-50"
                                    disabled=move || busy.get()
                                    on:click=move |_| model.mark_complete(complete_id.clone())
                                >
                                    "Complete"
                                </button>
                            }
                        }
                    </Show>
                </div>
            </td>
        </tr>
    }
}

#[component]
fn TaskCard(task: Task, model: TasksModel) -> impl IntoView {
    let edit_target = task.clone();
    let complete_id = task.id.clone();
    let is_pending = task.status == TaskStatus::Pending;
    let busy = model.complete.pending();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-4">
            <div class="mb-2">
                <h4 class="font-semibold text-gray-700">{task.title.clone()}</h4>
            </div>
            <div class="text-sm text-gray-600 mb-2">
                <Description task=task.clone() model clamp="line-clamp-3"/>
            </div>
            <div class="flex justify-between items-center mb-3">
                <StatusBadge status=task.status/>
            </div>
            <div class="flex gap-2">
                <button
                    class="flex-1 px-3 py-2 bg-gray-200 hover:bg-gray-300 text-sm rounded-md transition"
                    on:click=move |_| model.open_edit(&edit_target)
                >
                    "Edit"
                </button>
                <Show when=move || is_pending fallback=|| ()>
                    {
                        let complete_id = complete_id.clone();
                        view! {
                            <button
                                class="flex-1 px-3 py-2 bg-green-500 hover:bg-green-600 text-white text-sm rounded-md transition disabled:opacity-50"
                                disabled=move || busy.get()
                                on:click=move |_| model.mark_complete(complete_id.clone())
                            >
                                "Complete"
                            </button>
                        }
                    }
                </Show>
            </div>
        </div>
    }
}

/// Description text with the expand/collapse toggle. Collapsed text is CSS
/// clamped; the toggle only renders past the preview limit.
#[component]
fn Description(task: Task, model: TasksModel, clamp: &'static str) -> impl IntoView {
    let Some(description) = task.description else {
        return view! { <span>"—"</span> }.into_view();
    };
    let id = task.id;
    let expanded = {
        let id = id.clone();
        move || model.expanded.get().as_deref() == Some(id.as_str())
    };
    let toggle_label = {
        let expanded = expanded.clone();
        move || if expanded() { "Read Less" } else { "Read More" }
    };
    let paragraph_class = {
        let expanded = expanded.clone();
        move || {
            if expanded() {
                "whitespace-pre-wrap break-words".to_string()
            } else {
                format!("whitespace-pre-wrap break-words {clamp}")
            }
        }
    };
    let show_toggle = needs_toggle(&description);

    view! {
        <p class=paragraph_class>{description}</p>
        <Show when=move || show_toggle fallback=|| ()>
            {
                let id = id.clone();
                let toggle_label = toggle_label.clone();
                view! {
                    <button
                        class="text-blue-500 text-xs mt-1 hover:underline"
                        on:click=move |_| model.toggle(&id)
                    >
                        {toggle_label}
                    </button>
                }
            }
        </Show>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::client::ApiClient;
    use crate::pages::tasks::view_model::use_tasks_model;
    use crate::session::Session;
    use crate::test_support::fixtures;
    use crate::test_support::ssr::render_to_string;

    fn render_list(tasks: Vec<Task>) -> String {
        render_to_string(move || {
            provide_context(ApiClient::new(Session::ephemeral()));
            let model = use_tasks_model();
            view! { <TaskList tasks model/> }
        })
    }

    #[test]
    fn only_pending_tasks_offer_a_complete_control() {
        let html = render_list(vec![
            fixtures::pending_task("t-1", "Write minutes"),
            fixtures::completed_task("t-2", "File expenses"),
        ]);
        // one per layout (table row and mobile card)
        assert_eq!(html.matches("Complete").count(), 2);
    }

    #[test]
    fn long_descriptions_render_a_read_more_toggle() {
        let long = "x".repeat(120);
        let html = render_list(vec![fixtures::described_task("t-3", "Long one", &long)]);
        assert!(html.contains("Read More"));
    }

    #[test]
    fn short_descriptions_render_without_a_toggle() {
        let html = render_list(vec![fixtures::described_task("t-4", "Short one", "Tiny note")]);
        assert!(!html.contains("Read More"));
        assert!(html.contains("Tiny note"));
    }

    #[test]
    fn missing_description_renders_a_placeholder() {
        let html = render_list(vec![fixtures::pending_task("t-5", "Bare task")]);
        assert!(html.contains("—"));
    }
}

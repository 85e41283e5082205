use leptos::*;

use crate::api::types::{NewTask, Task, TaskPatch, TaskStatus};
use crate::api::ApiError;
use crate::components::feedback::MessageState;
use crate::pages::tasks::utils::{toggle_expanded, validate_title};
use crate::state::auth::use_api;

pub const LOAD_ERROR_FALLBACK: &str = "Failed to load tasks";
const SAVE_ERROR_FALLBACK: &str = "Operation failed";
const COMPLETE_ERROR_FALLBACK: &str = "Failed to update task";

/// What the modal is doing: creating a fresh task, or editing an existing one
/// whose fields seed the form.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalMode {
    Create,
    Edit(Task),
}

impl ModalMode {
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Create => "Add Task",
            Self::Edit(_) => "Edit Task",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Add",
            Self::Edit(_) => "Update",
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            Self::Create => "Task created",
            Self::Edit(_) => "Task updated",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub mode: ModalMode,
    pub title: String,
    pub description: String,
}

/// Signals and actions behind the tasks panel. One modal, one expanded row,
/// and a reload token bumped after every successful mutation.
#[derive(Clone, Copy)]
pub struct TasksModel {
    pub tasks: Resource<u32, Result<Vec<Task>, ApiError>>,
    pub modal: RwSignal<Option<ModalMode>>,
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub expanded: RwSignal<Option<String>>,
    pub notice: RwSignal<MessageState>,
    pub save: Action<SaveRequest, Result<&'static str, ApiError>>,
    pub complete: Action<String, Result<(), ApiError>>,
}

impl TasksModel {
    pub fn open_create(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.modal.set(Some(ModalMode::Create));
    }

    pub fn open_edit(&self, task: &Task) {
        self.title.set(task.title.clone());
        self.description
            .set(task.description.clone().unwrap_or_default());
        self.modal.set(Some(ModalMode::Edit(task.clone())));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    /// Validates the form and dispatches the save. No-ops while a save is
    /// already in flight.
    pub fn submit(&self) {
        if self.save.pending().get_untracked() {
            return;
        }
        let Some(mode) = self.modal.get_untracked() else {
            return;
        };
        let title = match validate_title(&self.title.get_untracked()) {
            Ok(title) => title,
            Err(message) => {
                let err = ApiError::validation(message);
                self.notice
                    .update(|n| n.set_api_error(&err, SAVE_ERROR_FALLBACK));
                return;
            }
        };
        self.save.dispatch(SaveRequest {
            mode,
            title,
            description: self.description.get_untracked(),
        });
    }

    pub fn mark_complete(&self, id: String) {
        if self.complete.pending().get_untracked() {
            return;
        }
        self.complete.dispatch(id);
    }

    pub fn toggle(&self, id: &str) {
        self.expanded
            .update(|current| *current = toggle_expanded(current.as_deref(), id));
    }
}

pub fn use_tasks_model() -> TasksModel {
    let api = use_api();
    let reload = create_rw_signal(0u32);
    let notice = create_rw_signal(MessageState::default());
    let modal = create_rw_signal(None::<ModalMode>);

    let tasks = create_resource(move || reload.get(), {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            async move { api.list_tasks().await }
        }
    });

    let save = create_action({
        let api = api.clone();
        move |request: &SaveRequest| {
            let api = api.clone();
            let request = request.clone();
            async move {
                let message = request.mode.success_message();
                match &request.mode {
                    ModalMode::Create => {
                        // an empty description is simply omitted on create
                        let description =
                            Some(request.description.clone()).filter(|d| !d.is_empty());
                        api.create_task(&NewTask {
                            title: request.title.clone(),
                            description,
                        })
                        .await?
                    }
                    ModalMode::Edit(task) => {
                        // edits always send the field so a description can be cleared
                        api.update_task(
                            &task.id,
                            &TaskPatch::content(
                                request.title.clone(),
                                Some(request.description.clone()),
                            ),
                        )
                        .await?
                    }
                }
                Ok(message)
            }
        }
    });

    let complete = create_action(move |id: &String| {
        let api = api.clone();
        let id = id.clone();
        async move {
            api.update_task(&id, &TaskPatch::status(TaskStatus::Completed))
                .await
        }
    });

    create_effect(move |_| match save.value().get() {
        Some(Ok(message)) => {
            notice.update(|n| n.set_success(message));
            modal.set(None);
            reload.update(|token| *token = token.wrapping_add(1));
        }
        Some(Err(err)) => {
            notice.update(|n| n.set_api_error(&err, SAVE_ERROR_FALLBACK));
        }
        None => {}
    });

    create_effect(move |_| match complete.value().get() {
        Some(Ok(())) => {
            notice.update(|n| n.set_success("Task completed"));
            reload.update(|token| *token = token.wrapping_add(1));
        }
        Some(Err(err)) => {
            notice.update(|n| n.set_api_error(&err, COMPLETE_ERROR_FALLBACK));
        }
        None => {}
    });

    TasksModel {
        tasks,
        modal,
        title: create_rw_signal(String::new()),
        description: create_rw_signal(String::new()),
        expanded: create_rw_signal(None),
        notice,
        save,
        complete,
    }
}

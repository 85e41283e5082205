pub mod list;
pub mod status_label;
pub mod task_modal;

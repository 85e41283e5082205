mod components;
mod panel;
mod utils;
mod view_model;

pub use panel::TasksPanel;

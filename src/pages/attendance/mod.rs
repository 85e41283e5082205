mod components;
mod panel;
mod view_model;

pub use panel::AttendancePanel;

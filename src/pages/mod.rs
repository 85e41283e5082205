pub mod attendance;
pub mod dashboard;
pub mod login;
pub mod tasks;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
mod test_support;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use session::Session;

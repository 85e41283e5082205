mod attendance;
pub mod client;
pub mod error;
mod tasks;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::*;

pub mod format;
pub mod nav;

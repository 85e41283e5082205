pub mod feedback;
pub mod guard;
pub mod layout;

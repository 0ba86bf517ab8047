pub mod form;
mod macros;
pub mod status;
pub mod submission;

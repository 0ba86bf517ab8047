pub mod commands;
pub mod environment;
pub mod ui;

pub mod commands;
pub mod operation;

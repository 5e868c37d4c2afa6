pub mod constants;
pub mod fs;
pub mod logger;
pub mod reader;


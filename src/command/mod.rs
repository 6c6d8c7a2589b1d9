pub mod commands;
pub mod fields;
pub mod guide;
pub mod parser;

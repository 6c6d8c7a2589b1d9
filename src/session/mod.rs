pub mod main_flow;
pub mod models;
pub mod prompter;

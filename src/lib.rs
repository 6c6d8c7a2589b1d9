pub mod command;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod session;
pub mod ui;

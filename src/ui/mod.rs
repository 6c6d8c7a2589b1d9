pub mod ansi;
pub mod chrome;
pub mod presenter;
pub mod table_printer;
pub mod width_util;

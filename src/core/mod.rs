pub mod cli;
pub mod context;
pub mod models;
pub mod persist;
pub mod roster;
pub mod samples;

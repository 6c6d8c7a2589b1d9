use crate::core::persist::{JsonStore, Store};
use crate::core::roster::Roster;
use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub roster: Roster,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub data_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    /// Loads the persisted roster once at startup. A corrupt snapshot aborts
    /// here; a missing one yields an empty roster.
    pub fn new_with_paths(data_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let roster = JsonStore::new(&data_path).load()?;

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);

        Ok(Self {
            roster,
            logger,
            startup_displayed: false,
            data_path,
            logs_dir,
        })
    }
}

use crate::core::models::{Company, Venue};
use crate::core::roster::Roster;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk snapshot of the roster. Field defaults keep old snapshots loadable
/// when a section is absent.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveFile {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub venues: Vec<Venue>,
}

/// Persistence seam. The session loop loads once at startup and saves after
/// every mutating command; everything else treats the snapshot as opaque.
pub trait Store {
    fn load(&self) -> Result<Roster>;
    fn save(&self, roster: &Roster) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonStore {
    /// A missing snapshot is a fresh start, not an error. A present but
    /// unreadable one is surfaced so startup can abort.
    fn load(&self) -> Result<Roster> {
        if !self.path.exists() {
            return Ok(Roster::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let file: SaveFile = serde_json::from_str(&contents)?;
        Ok(Roster::from_parts(file.companies, file.venues))
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        let file = SaveFile {
            companies: roster.companies().cloned().collect(),
            venues: roster.venues().cloned().collect(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

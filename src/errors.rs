use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Domain error set for the roster assistant.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing & Routing --------------------------------------------------
    /// Malformed input: missing tokens, bad tagged fields, invalid numbers.
    #[error("Parse error: {0}")]
    Parse(String),

    /// First token did not match any command family.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Roster -------------------------------------------------------------
    /// Indexed operation outside `[0, len)`. `position` is the 1-based number
    /// the user typed.
    #[error("Invalid index: no entry at position {position} (list has {len}).")]
    InvalidIndex { position: usize, len: usize },

    /// Indexed operation attempted against an empty list. Reported instead of
    /// `InvalidIndex` whenever both would apply.
    #[error("Nothing inside the company list.")]
    EmptyList,

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (snapshot read/write, log files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (snapshot decode/encode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }

    /// Helper for unknown command.
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }

    /// Build an `InvalidIndex` from a 0-based index and the list length.
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Error::InvalidIndex {
            position: index + 1,
            len,
        }
    }
}

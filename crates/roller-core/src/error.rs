//! Error types for the roller core.

use std::path::PathBuf;

/// Errors that can occur while evaluating rolls or persisting stats.
#[derive(Debug, thiserror::Error)]
pub enum RollerError {
    /// A dice pool with fewer than one die or fewer than one face.
    #[error("invalid dice pool {count}d{faces}: count and faces must both be at least 1")]
    InvalidArgument {
        /// Requested number of dice.
        count: u32,
        /// Requested number of faces.
        faces: u32,
    },

    /// A dice pool larger than the session allows.
    #[error("dice pool {count}d{faces} is too large: at most {max_dice} dice with {max_faces} faces")]
    PoolTooLarge {
        /// Requested number of dice.
        count: u32,
        /// Requested number of faces.
        faces: u32,
        /// Largest allowed dice count.
        max_dice: u32,
        /// Largest allowed face count.
        max_faces: u32,
    },

    /// A pool string that is not of the form `NdF`.
    #[error("invalid dice notation '{0}': expected NdF, e.g. 2d6")]
    InvalidDiceNotation(String),

    /// The stats file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    StorageRead {
        /// Location of the stats file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The stats file does not hold a list of `{name, value}` records.
    #[error("malformed stats file {}: {source}", path.display())]
    StorageCorrupt {
        /// Location of the stats file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The stats file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    StorageWrite {
        /// Location of the stats file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Serializing data to JSON failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A row index past the end of a collection.
    #[error("no {kind} at position {index} (have {len})")]
    IndexOutOfRange {
        /// Which collection was indexed ("stat", "dice row", "modifier").
        kind: &'static str,
        /// The requested index.
        index: usize,
        /// The collection length.
        len: usize,
    },

    /// A stat referenced by name does not exist.
    #[error("unknown stat: {0}")]
    UnknownStat(String),
}

/// Convenience result type for roller operations.
pub type RollerResult<T> = Result<T, RollerError>;

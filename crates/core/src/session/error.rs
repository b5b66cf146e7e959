//! Session error types.

use thiserror::Error;

/// Session-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No dataset has been uploaded yet (the idle state).
    #[error("No dataset has been uploaded for this session")]
    DatasetNotLoaded,

    /// An uploaded dataset contained no rows.
    #[error("Uploaded dataset contains no rows")]
    EmptyDataset,
}

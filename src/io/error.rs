//! Error types for net construction, maze generation and export

use std::fmt;
use std::path::PathBuf;

use crate::spatial::{Cell, Position};

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Configuration value validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Coordinate is outside the grid or inside an excluded block of the net
    OutsideNet {
        /// Offending `[x, y]` coordinate
        position: Position,
    },

    /// Edge tables are inconsistent with the folded cube
    ///
    /// Raised while building the edge table, or if a crossing cannot be resolved
    /// against a table that skipped validation.
    Topology {
        /// Description of the defect
        reason: String,
    },

    /// A cell was asked to change state in a way the grid forbids
    ///
    /// Only `Wall` cells may become `Passage`.
    InvalidTransition {
        /// Coordinate of the cell
        position: Position,
        /// State the cell was in
        from: Cell,
    },

    /// Failed to encode or save a generated image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutsideNet { position } => {
                write!(
                    f,
                    "Position ({}, {}) is not on the cube net",
                    position[0], position[1]
                )
            }
            Self::Topology { reason } => {
                write!(f, "Cube topology error: {reason}")
            }
            Self::InvalidTransition { position, from } => {
                write!(
                    f,
                    "Cell ({}, {}) cannot be carved from state {from}",
                    position[0], position[1]
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a topology error
pub fn topology_error(reason: &impl ToString) -> MazeError {
    MazeError::Topology {
        reason: reason.to_string(),
    }
}

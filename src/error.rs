//! Error types.

use crate::scene::ObjectId;
use thiserror::Error;

/// Errors surfaced by scene construction and object management.
///
/// Degenerate geometry is not an error. Rasterizers simply produce no points for it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The update pattern contained no points.
    #[error("update pattern is empty")]
    EmptyUpdatePattern,

    /// An update pattern point has a NaN or infinite coordinate.
    #[error("update pattern point {index} has a non-finite position")]
    NonFinitePoint { index: usize },

    /// Scene configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// A grid cell does not fit into the packed cell key.
    #[error("grid cell {coords:?} exceeds the addressable cell range")]
    CellOutOfRange { coords: [i64; 3] },

    /// Two update pattern points address the same LED.
    #[error("update pattern point {index} reuses a display routing")]
    DuplicateRouting { index: usize },

    /// Every object id has been handed out.
    #[error("object ids exhausted")]
    ObjectIdsExhausted,

    /// No live object has the given id.
    #[error("no object with id {0}")]
    UnknownObject(ObjectId),
}

pub type Result<T> = core::result::Result<T, Error>;

//! Update pattern points.
//!
//! The update pattern is the fixed set of physical positions the display is able to light over
//! one refresh cycle. It is produced by an external loader and handed to the
//! [`Scene`](crate::scene::Scene) once.

use crate::Vector3;

/// Hardware address of an update pattern point.
///
/// The core never interprets these fields. They are carried through to every
/// [`RenderedPoint`](crate::scene::RenderedPoint) so that the display layer can map a
/// turn-on/turn-off instruction back to hardware, and they serve as the identity of a point when
/// diffing renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayRouting {
    /// Angular slice (frame) of the refresh cycle.
    pub slice: u16,
    pub column: u16,
    pub row: u16,
    /// Display half and physical side selection bits.
    pub flags: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdatePatternPoint {
    pub routing: DisplayRouting,
    pub pos: Vector3,
    pub normal: Vector3,
}

impl UpdatePatternPoint {
    pub fn new(routing: DisplayRouting, pos: Vector3, normal: Vector3) -> Self {
        Self {
            routing,
            pos,
            normal,
        }
    }
}

//! Scene configuration.

use crate::error::{Error, Result};

/// Parameters fixed at [`Scene`](crate::scene::Scene) construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneConfig {
    /// Target average number of update pattern points per grid cell.
    pub points_per_cell: usize,
    /// Recursion depth of the ordered dither volume. The volume side is `2^dither_order`.
    pub dither_order: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            points_per_cell: 20,
            dither_order: 3,
        }
    }
}

impl SceneConfig {
    pub const MAX_DITHER_ORDER: u32 = 6;

    pub fn validate(&self) -> Result<()> {
        if self.points_per_cell == 0 {
            return Err(Error::InvalidConfig("points_per_cell must be positive"));
        }

        if !(1..=Self::MAX_DITHER_ORDER).contains(&self.dither_order) {
            return Err(Error::InvalidConfig("dither_order must be within 1..=6"));
        }

        Ok(())
    }
}

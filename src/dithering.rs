//! Defines dithering trait and implementations.

use crate::{
    color::Color1b,
    config::SceneConfig,
    error::{Error, Result},
    math::floor_cell,
    Vector3,
};
use alloc::vec::Vec;

/// Color dithering.
///
/// The display can only switch each color channel of a LED fully on or off. Dithering hides
/// this by spreading on/off decisions over neighbouring points so that, from a distance, the
/// density of lit channels approximates the requested intensity.
///
/// Update pattern points are not laid out on a 2D raster, therefore the dither phase is derived
/// from the physical 3D position of the point.
pub trait Dithering {
    /// Quantizes a continuous `0..=1` RGB color at the given world position.
    fn dither(&self, color: Vector3, pos: &Vector3) -> Color1b;
}

/// No dithering, every channel is thresholded at `0.5`.
impl Dithering for () {
    fn dither(&self, color: Vector3, _: &Vector3) -> Color1b {
        Color1b::new(color.x > 0.5, color.y > 0.5, color.z > 0.5)
    }
}

/// Ordered dithering with a 3D Bayer threshold volume.
///
/// The volume is built by recursively interleaving a 2x2x2 base pattern with itself, the same
/// way 2D Bayer matrices are built, only with 8 sub-cells per step instead of 4:
///
/// ```text
/// T(2s)[x][y][z] = 8 * T(s)[x % s][y % s][z % s] + BASE[x / s][y / s][z / s]
/// ```
///
/// Ranks are then normalized into `(0, 1)`. A channel is lit if its value exceeds the threshold
/// of the cell the point falls into, so fully saturated channels are always on and zero channels
/// are always off.
#[derive(Debug, Clone)]
pub struct OrderedDither {
    size: usize,
    thresholds: Vec<f32>,
}

impl OrderedDither {
    /// Base rank pattern, indexed `[x][y][z]`.
    pub const BASE: [[[u32; 2]; 2]; 2] = [[[0, 2], [5, 7]], [[6, 4], [3, 1]]];

    /// Cell offsets applied to each channel, decorrelating their on/off patterns.
    pub const CHANNEL_OFFSETS: [[i64; 3]; 3] = [[0, 0, 0], [1, 0, 0], [0, 0, 1]];

    /// Builds a volume of side `2^order`.
    ///
    /// `order` must lie within `1..=SceneConfig::MAX_DITHER_ORDER`. Past that, the largest
    /// normalized threshold rounds to `1.0` in `f32` and full intensity stops lighting every cell.
    pub fn new(order: u32) -> Result<Self> {
        if !(1..=SceneConfig::MAX_DITHER_ORDER).contains(&order) {
            return Err(Error::InvalidConfig("dither_order must be within 1..=6"));
        }

        Ok(Self::build(order))
    }

    fn build(order: u32) -> Self {
        let mut size = 2;
        let mut ranks: Vec<u32> = Self::BASE.iter().flatten().flatten().copied().collect();

        for _ in 1..order {
            let next = size * 2;
            let mut out = Vec::with_capacity(next * next * next);

            for x in 0..next {
                for y in 0..next {
                    for z in 0..next {
                        let inner = ranks[((x % size) * size + y % size) * size + z % size];
                        let base = Self::BASE[x / size][y / size][z / size];
                        out.push(8 * inner + base);
                    }
                }
            }

            ranks = out;
            size = next;
        }

        let levels = ranks.len() as f32;
        let thresholds = ranks
            .into_iter()
            .map(|r| (r as f32 + 0.5) / levels)
            .collect();

        Self { size, thresholds }
    }

    /// Side length of the threshold volume.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Threshold of an integer cell, wrapping around the volume.
    pub fn threshold(&self, cell: [i64; 3]) -> f32 {
        let s = self.size as i64;
        let [x, y, z] = cell.map(|c| c.rem_euclid(s) as usize);
        self.thresholds[(x * self.size + y) * self.size + z]
    }
}

impl Default for OrderedDither {
    fn default() -> Self {
        Self::build(3)
    }
}

impl Dithering for OrderedDither {
    fn dither(&self, color: Vector3, pos: &Vector3) -> Color1b {
        let cell = floor_cell(pos);

        let lit = |channel: usize| {
            let [ox, oy, oz] = Self::CHANNEL_OFFSETS[channel];
            let shifted = [cell[0] + ox, cell[1] + oy, cell[2] + oz];
            color[channel] > self.threshold(shifted)
        };

        Color1b::new(lit(0), lit(1), lit(2))
    }
}

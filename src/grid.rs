//! Spatial grid index over the update pattern.
//!
//! The update pattern never changes, so it is bucketed once into uniformly sized cells. Every
//! rasterizer first asks the grid which cells a primitive may touch (broad phase), and then only
//! tests the points stored in those cells.
//!
//! Cells are keyed by a packed integer. Each axis gets [`AXIS_BITS`] bits, holding the signed
//! cell coordinate biased by `2^(AXIS_BITS - 1)`. Coordinates that do not fit are reported
//! instead of silently aliasing onto other cells.

use crate::{
    error::{Error, Result},
    math::floor_cell,
    pattern::UpdatePatternPoint,
    Vector3,
};
use alloc::{
    collections::{BTreeMap, BTreeSet},
    vec::Vec,
};

pub const AXIS_BITS: u32 = 21;
const AXIS_BIAS: i64 = 1 << (AXIS_BITS - 1);
const AXIS_MASK: u64 = (1 << AXIS_BITS) - 1;

/// Packed cell key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(pub u64);

/// Packs signed cell coordinates into a [`CellIndex`].
///
/// Returns `None` if any coordinate falls outside of `[-2^20, 2^20)`.
pub fn pack_index(coords: [i64; 3]) -> Option<CellIndex> {
    let mut packed = 0u64;

    for c in coords {
        let biased = c.checked_add(AXIS_BIAS)?;
        if !(0..(1i64 << AXIS_BITS)).contains(&biased) {
            return None;
        }
        packed = (packed << AXIS_BITS) | biased as u64;
    }

    Some(CellIndex(packed))
}

/// Inverse of [`pack_index`].
pub fn unpack_index(CellIndex(packed): CellIndex) -> [i64; 3] {
    let axis = |shift: u32| ((packed >> shift) & AXIS_MASK) as i64 - AXIS_BIAS;
    [axis(2 * AXIS_BITS), axis(AXIS_BITS), axis(0)]
}

/// Geometry of the grid, derived once from the update pattern bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridParams {
    pub bounding_box_min: Vector3,
    pub bounding_box_max: Vector3,
    /// Number of cells along each axis.
    pub grid_size: u32,
    pub cell_sizes: Vector3,
}

impl GridParams {
    /// Derives grid parameters so that cells hold `points_per_cell` points on average.
    ///
    /// Axes with zero extent get a cell size of `1.0`.
    pub fn new(min: Vector3, max: Vector3, point_count: usize, points_per_cell: usize) -> Self {
        let cells = point_count as f32 / points_per_cell.max(1) as f32;
        let grid_size = (libm::ceilf(libm::cbrtf(cells)) as u32).max(1);

        let cell_sizes = (max - min).map(|extent| {
            if extent > 0.0 {
                extent / grid_size as f32
            } else {
                1.0
            }
        });

        Self {
            bounding_box_min: min,
            bounding_box_max: max,
            grid_size,
            cell_sizes,
        }
    }

    /// Unclamped integer cell coordinates of a position.
    pub fn cell_coords(&self, pos: &Vector3) -> [i64; 3] {
        floor_cell(&(pos - self.bounding_box_min).component_div(&self.cell_sizes))
    }

    /// Packed index of the cell containing `pos`.
    ///
    /// Positions outside of the bounding box still map to a cell, it just won't hold any points.
    /// `None` is only returned when the cell is too far away to be packed.
    pub fn calculate_index(&self, pos: &Vector3) -> Option<CellIndex> {
        pack_index(self.cell_coords(pos))
    }

    /// Enumerates all cells overlapping the box `[min - padding, max + padding]`.
    ///
    /// The range is clamped to the cells that can hold points at all, so the result is empty
    /// for boxes entirely outside of the update pattern.
    pub fn calculate_indices_from_bb(
        &self,
        min: &Vector3,
        max: &Vector3,
        padding: f32,
    ) -> Vec<CellIndex> {
        let pad = Vector3::repeat(padding);
        let top = self.grid_size as i64;

        let lo = self.cell_coords(&(min - pad)).map(|c| c.max(0));
        let hi = self.cell_coords(&(max + pad)).map(|c| c.min(top));

        if lo.iter().zip(&hi).any(|(lo, hi)| lo > hi) {
            return Vec::new();
        }

        let span = |axis: usize| (hi[axis] - lo[axis] + 1) as usize;
        let mut res = Vec::with_capacity(span(0) * span(1) * span(2));

        for ix in lo[0]..=hi[0] {
            for iy in lo[1]..=hi[1] {
                for iz in lo[2]..=hi[2] {
                    res.extend(pack_index([ix, iy, iz]));
                }
            }
        }

        res
    }
}

/// Update pattern points bucketed by grid cell.
#[derive(Debug, Clone)]
pub struct Grid {
    params: GridParams,
    cells: BTreeMap<CellIndex, Vec<UpdatePatternPoint>>,
    len: usize,
}

impl Grid {
    /// Buckets the update pattern.
    ///
    /// Fails on an empty pattern, on points with non-finite coordinates, or when two points share
    /// a display routing.
    pub fn build(points: Vec<UpdatePatternPoint>, points_per_cell: usize) -> Result<Self> {
        if points_per_cell == 0 {
            return Err(Error::InvalidConfig("points_per_cell must be positive"));
        }

        let first = points.first().ok_or(Error::EmptyUpdatePattern)?.pos;
        let mut min = first;
        let mut max = first;
        let mut routings = BTreeSet::new();

        for (index, pt) in points.iter().enumerate() {
            if !pt.pos.iter().all(|v| v.is_finite()) {
                return Err(Error::NonFinitePoint { index });
            }
            if !routings.insert(pt.routing) {
                return Err(Error::DuplicateRouting { index });
            }
            min = min.inf(&pt.pos);
            max = max.sup(&pt.pos);
        }

        let len = points.len();
        let params = GridParams::new(min, max, len, points_per_cell);
        let mut cells: BTreeMap<CellIndex, Vec<UpdatePatternPoint>> = BTreeMap::new();

        for pt in points {
            let coords = params.cell_coords(&pt.pos);
            let idx = pack_index(coords).ok_or(Error::CellOutOfRange { coords })?;
            cells.entry(idx).or_default().push(pt);
        }

        log::debug!(
            "built grid: {len} points in {} cells, grid size {}, cell sizes {:?}",
            cells.len(),
            params.grid_size,
            params.cell_sizes,
        );

        Ok(Self { params, cells, len })
    }

    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Points stored in a cell. Missing cells are empty.
    pub fn bucket(&self, idx: CellIndex) -> &[UpdatePatternPoint] {
        self.cells.get(&idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of update pattern points.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of non-empty cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn points(&self) -> impl Iterator<Item = &UpdatePatternPoint> {
        self.cells.values().flatten()
    }
}

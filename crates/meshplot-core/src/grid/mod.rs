//! Grids of cells and the neighbor lookups the surface builders rely on.
//!
//! Cells are numbered `0..num_cells()`. A missing neighbor is `None`; at the edge of a
//! grid, or next to a cell removed by a mask, that is the normal state of affairs.

mod cartgrid;
mod hexgrid;

pub use cartgrid::CartGrid;
pub use hexgrid::HexGrid;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Neighbor lookup by cell index.
pub trait Adjacency {
    /// The set of directions a cell can have neighbors in.
    type Direction: Copy;

    /// Returns the number of cells.
    fn num_cells(&self) -> usize;

    /// Returns the neighbor of `cell` in direction `dir`, if there is one.
    fn neighbor(&self, cell: usize, dir: Self::Direction) -> Option<usize>;
}

/// Placement of cells in the plane.
pub trait GridGeometry {
    /// Returns the center of `cell`.
    fn position(&self, cell: usize) -> Vec2;

    /// Returns `[xmin, xmax, ymin, ymax]` over the cell centers.
    fn extents(&self) -> [f32; 4];

    /// Returns the distance from a cell center to its outer edge along x and y.
    fn cell_half_size(&self) -> Vec2;
}

/// The eight neighbor directions of a rectangular cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CartDir {
    E,
    NE,
    N,
    NW,
    W,
    SW,
    S,
    SE,
}

impl CartDir {
    /// All directions, anticlockwise from east.
    pub const ALL: [CartDir; 8] = [
        CartDir::E,
        CartDir::NE,
        CartDir::N,
        CartDir::NW,
        CartDir::W,
        CartDir::SW,
        CartDir::S,
        CartDir::SE,
    ];

    /// Column and row step for this direction (row increases northwards).
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            CartDir::E => (1, 0),
            CartDir::NE => (1, 1),
            CartDir::N => (0, 1),
            CartDir::NW => (-1, 1),
            CartDir::W => (-1, 0),
            CartDir::SW => (-1, -1),
            CartDir::S => (0, -1),
            CartDir::SE => (1, -1),
        }
    }
}

/// The six neighbor directions of a pointy-top hexagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexDir {
    E,
    NE,
    NW,
    W,
    SW,
    SE,
}

impl HexDir {
    /// All directions, anticlockwise from east.
    pub const ALL: [HexDir; 6] = [
        HexDir::E,
        HexDir::NE,
        HexDir::NW,
        HexDir::W,
        HexDir::SW,
        HexDir::SE,
    ];

    /// Axial `(q, r)` step for this direction.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            HexDir::E => (1, 0),
            HexDir::NE => (0, 1),
            HexDir::NW => (-1, 1),
            HexDir::W => (-1, 0),
            HexDir::SW => (0, -1),
            HexDir::SE => (1, -1),
        }
    }
}

/// Extents of a set of points as `[xmin, xmax, ymin, ymax]`.
pub(crate) fn extents_of(points: impl Iterator<Item = Vec2>) -> [f32; 4] {
    let mut ext = [f32::MAX, f32::MIN, f32::MAX, f32::MIN];
    for p in points {
        ext[0] = ext[0].min(p.x);
        ext[1] = ext[1].max(p.x);
        ext[2] = ext[2].min(p.y);
        ext[3] = ext[3].max(p.y);
    }
    ext
}

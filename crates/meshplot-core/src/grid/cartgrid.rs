//! Rectangular grid of equally sized cells.

use glam::Vec2;

use super::{extents_of, Adjacency, CartDir, GridGeometry};
use crate::error::{MeshplotError, Result};

/// A rectangular grid of `width x height` slots with spacing `dx` by `dy`.
///
/// Cells are numbered row by row from the bottom-left slot, x varying fastest. A mask
/// can leave slots empty to describe irregular boundaries; the remaining cells are
/// renumbered densely in the same order.
#[derive(Debug, Clone)]
pub struct CartGrid {
    width: usize,
    height: usize,
    spacing: Vec2,
    origin: Vec2,
    /// Column and row of each cell.
    cells: Vec<(usize, usize)>,
    /// Cell index of each slot, `None` where masked out.
    slots: Vec<Option<usize>>,
    neighbors: Vec<[Option<usize>; 8]>,
}

impl CartGrid {
    /// Creates a fully populated grid whose bottom-left cell is centered at the origin.
    pub fn new(width: usize, height: usize, dx: f32, dy: f32) -> Result<Self> {
        Self::with_mask(width, height, dx, dy, &vec![true; width * height])
    }

    /// Creates a grid keeping only the slots where `mask` is true.
    pub fn with_mask(width: usize, height: usize, dx: f32, dy: f32, mask: &[bool]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MeshplotError::InvalidDimension(format!(
                "grid must have at least one row and column, got {width}x{height}"
            )));
        }
        if !(dx.is_finite() && dx > 0.0 && dy.is_finite() && dy > 0.0) {
            return Err(MeshplotError::InvalidDimension(format!(
                "grid spacing must be positive, got {dx} x {dy}"
            )));
        }
        if mask.len() != width * height {
            return Err(MeshplotError::SizeMismatch {
                expected: width * height,
                actual: mask.len(),
            });
        }

        let mut cells = Vec::new();
        let mut slots = vec![None; width * height];
        for row in 0..height {
            for col in 0..width {
                let slot = row * width + col;
                if mask[slot] {
                    slots[slot] = Some(cells.len());
                    cells.push((col, row));
                }
            }
        }
        if cells.is_empty() {
            return Err(MeshplotError::InvalidDimension(
                "mask leaves no cells".to_string(),
            ));
        }

        let mut grid = Self {
            width,
            height,
            spacing: Vec2::new(dx, dy),
            origin: Vec2::ZERO,
            cells,
            slots,
            neighbors: Vec::new(),
        };
        grid.compute_neighbors();
        Ok(grid)
    }

    /// Moves the grid so that slot (0, 0) is centered at `origin`.
    #[must_use]
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    fn compute_neighbors(&mut self) {
        self.neighbors = self
            .cells
            .iter()
            .map(|&(col, row)| {
                CartDir::ALL.map(|dir| {
                    let (dc, dr) = dir.offset();
                    self.slot_index(col as i64 + i64::from(dc), row as i64 + i64::from(dr))
                })
            })
            .collect();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn slot_index(&self, col: i64, row: i64) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return None;
        }
        self.slots[row as usize * self.width + col as usize]
    }

    /// Returns the number of slots along x.
    #[must_use]
    pub fn width_slots(&self) -> usize {
        self.width
    }

    /// Returns the number of slots along y.
    #[must_use]
    pub fn height_slots(&self) -> usize {
        self.height
    }

    /// Returns the cell spacing `(dx, dy)`.
    #[must_use]
    pub fn spacing(&self) -> Vec2 {
        self.spacing
    }

    /// Returns the cell at `(col, row)`, if that slot holds one.
    #[must_use]
    pub fn index_of(&self, col: usize, row: usize) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.slots[row * self.width + col]
    }

    /// Returns the column and row of `cell`.
    #[must_use]
    pub fn col_row(&self, cell: usize) -> (usize, usize) {
        self.cells[cell]
    }

    /// Horizontal distance between the outermost cell centers.
    #[must_use]
    pub fn width(&self) -> f32 {
        let ext = self.extents();
        ext[1] - ext[0]
    }

    /// Vertical distance between the outermost cell centers.
    #[must_use]
    pub fn depth(&self) -> f32 {
        let ext = self.extents();
        ext[3] - ext[2]
    }
}

impl Adjacency for CartGrid {
    type Direction = CartDir;

    fn num_cells(&self) -> usize {
        self.cells.len()
    }

    fn neighbor(&self, cell: usize, dir: CartDir) -> Option<usize> {
        self.neighbors[cell][dir as usize]
    }
}

impl GridGeometry for CartGrid {
    #[allow(clippy::cast_precision_loss)]
    fn position(&self, cell: usize) -> Vec2 {
        let (col, row) = self.cells[cell];
        self.origin + Vec2::new(col as f32, row as f32) * self.spacing
    }

    fn extents(&self) -> [f32; 4] {
        extents_of((0..self.cells.len()).map(|i| self.position(i)))
    }

    fn cell_half_size(&self) -> Vec2 {
        self.spacing * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let grid = CartGrid::new(4, 3, 0.5, 0.25).unwrap();
        assert_eq!(grid.num_cells(), 12);
        assert_eq!(grid.width_slots(), 4);
        assert_eq!(grid.height_slots(), 3);
        assert_eq!(grid.position(0), Vec2::ZERO);
        assert_eq!(grid.position(5), Vec2::new(0.5, 0.25));
        assert_eq!(grid.extents(), [0.0, 1.5, 0.0, 0.5]);
        assert_eq!(grid.width(), 1.5);
        assert_eq!(grid.depth(), 0.5);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            CartGrid::new(0, 3, 1.0, 1.0),
            Err(MeshplotError::InvalidDimension(_))
        ));
        assert!(CartGrid::new(3, 3, 0.0, 1.0).is_err());
        assert!(CartGrid::new(3, 3, 1.0, f32::NAN).is_err());
        assert!(matches!(
            CartGrid::with_mask(2, 2, 1.0, 1.0, &[true; 3]),
            Err(MeshplotError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
        assert!(CartGrid::with_mask(2, 2, 1.0, 1.0, &[false; 4]).is_err());
    }

    #[test]
    fn test_neighbors_of_center_and_corner() {
        let grid = CartGrid::new(3, 3, 1.0, 1.0).unwrap();
        // Center cell sees all eight
        for dir in CartDir::ALL {
            assert!(grid.neighbor(4, dir).is_some(), "{dir:?}");
        }
        assert_eq!(grid.neighbor(4, CartDir::E), Some(5));
        assert_eq!(grid.neighbor(4, CartDir::NE), Some(8));
        assert_eq!(grid.neighbor(4, CartDir::S), Some(1));
        assert_eq!(grid.neighbor(4, CartDir::SW), Some(0));

        // Bottom-left corner only has E, NE and N
        assert_eq!(grid.neighbor(0, CartDir::E), Some(1));
        assert_eq!(grid.neighbor(0, CartDir::NE), Some(4));
        assert_eq!(grid.neighbor(0, CartDir::N), Some(3));
        for dir in [CartDir::NW, CartDir::W, CartDir::SW, CartDir::S, CartDir::SE] {
            assert_eq!(grid.neighbor(0, dir), None);
        }
    }

    #[test]
    fn test_mask_renumbers_cells() {
        // Remove the center slot of a 3x3 grid
        let mut mask = [true; 9];
        mask[4] = false;
        let grid = CartGrid::with_mask(3, 3, 1.0, 1.0, &mask).unwrap();
        assert_eq!(grid.num_cells(), 8);
        assert_eq!(grid.index_of(1, 1), None);
        assert_eq!(grid.index_of(2, 1), Some(4));
        assert_eq!(grid.col_row(4), (2, 1));
        assert_eq!(grid.neighbor(3, CartDir::E), None);
        assert_eq!(grid.neighbor(0, CartDir::NE), None);
    }

    #[test]
    fn test_origin() {
        let grid = CartGrid::new(2, 2, 1.0, 1.0)
            .unwrap()
            .with_origin(Vec2::new(-1.0, 2.0));
        assert_eq!(grid.position(3), Vec2::new(0.0, 3.0));
        assert_eq!(grid.cell_half_size(), Vec2::new(0.5, 0.5));
    }
}

//! Grid of pointy-top hexagons in axial coordinates.

use std::collections::HashMap;

use glam::Vec2;

use super::{extents_of, Adjacency, GridGeometry, HexDir};
use crate::error::{MeshplotError, Result};

/// A patch of pointy-top hexagons with center-to-center spacing `d`.
///
/// Each hex has axial coordinates `(q, r)`; its center is at
/// `x = d * (q + r / 2)`, `y = d * sqrt(3) / 2 * r`. Rows of constant `r` run along x.
#[derive(Debug, Clone)]
pub struct HexGrid {
    d: f32,
    axial: Vec<(i32, i32)>,
    neighbors: Vec<[Option<usize>; 6]>,
}

impl HexGrid {
    /// Creates a grid from explicit axial coordinates, in the given order.
    pub fn from_axial(d: f32, axial: Vec<(i32, i32)>) -> Result<Self> {
        if !(d.is_finite() && d > 0.0) {
            return Err(MeshplotError::InvalidDimension(format!(
                "hex spacing must be positive, got {d}"
            )));
        }
        if axial.is_empty() {
            return Err(MeshplotError::InvalidDimension(
                "hex grid needs at least one hex".to_string(),
            ));
        }

        let lookup: HashMap<(i32, i32), usize> =
            axial.iter().enumerate().map(|(i, &qr)| (qr, i)).collect();
        if lookup.len() != axial.len() {
            return Err(MeshplotError::InvalidDimension(
                "duplicate axial coordinates".to_string(),
            ));
        }

        let neighbors = axial
            .iter()
            .map(|&(q, r)| {
                HexDir::ALL.map(|dir| {
                    let (dq, dr) = dir.offset();
                    lookup.get(&(q + dq, r + dr)).copied()
                })
            })
            .collect();

        Ok(Self {
            d,
            axial,
            neighbors,
        })
    }

    /// Creates `cols x rows` hexes in offset rows, every odd row shifted right by `d/2`.
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn rectangular(cols: usize, rows: usize, d: f32) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(MeshplotError::InvalidDimension(format!(
                "hex grid must have at least one row and column, got {cols}x{rows}"
            )));
        }
        let mut axial = Vec::with_capacity(cols * rows);
        for r in 0..rows as i32 {
            for c in 0..cols as i32 {
                axial.push((c - r.div_euclid(2), r));
            }
        }
        Self::from_axial(d, axial)
    }

    /// Creates a hexagon-shaped patch: one central hex and `rings` rings around it.
    pub fn hexagonal(rings: u32, d: f32) -> Result<Self> {
        let n = i32::try_from(rings).map_err(|_| {
            MeshplotError::InvalidDimension(format!("too many rings: {rings}"))
        })?;
        let mut axial = Vec::new();
        for r in -n..=n {
            for q in -n..=n {
                if (q + r).abs() <= n {
                    axial.push((q, r));
                }
            }
        }
        Self::from_axial(d, axial)
    }

    /// Returns the center-to-center spacing.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.d
    }

    /// Distance from a hex center to the middle of a side.
    #[must_use]
    pub fn short_radius(&self) -> f32 {
        self.d * 0.5
    }

    /// Distance from a hex center to a vertex.
    #[must_use]
    pub fn long_radius(&self) -> f32 {
        self.d / 3.0_f32.sqrt()
    }

    /// Returns the axial coordinates of `cell`.
    #[must_use]
    pub fn axial(&self, cell: usize) -> (i32, i32) {
        self.axial[cell]
    }
}

impl Adjacency for HexGrid {
    type Direction = HexDir;

    fn num_cells(&self) -> usize {
        self.axial.len()
    }

    fn neighbor(&self, cell: usize, dir: HexDir) -> Option<usize> {
        self.neighbors[cell][dir as usize]
    }
}

impl GridGeometry for HexGrid {
    #[allow(clippy::cast_precision_loss)]
    fn position(&self, cell: usize) -> Vec2 {
        let (q, r) = self.axial[cell];
        let (q, r) = (q as f32, r as f32);
        Vec2::new(self.d * (q + 0.5 * r), self.d * 3.0_f32.sqrt() * 0.5 * r)
    }

    fn extents(&self) -> [f32; 4] {
        extents_of((0..self.axial.len()).map(|i| self.position(i)))
    }

    fn cell_half_size(&self) -> Vec2 {
        Vec2::new(self.short_radius(), self.long_radius())
    }
}

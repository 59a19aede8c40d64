//! Corner heights for interpolated grid surfaces.
//!
//! A corner of a cell is shared with the neighbors on either side of it (and, on a
//! rectangular grid, the diagonal neighbor). Its height is the mean of whichever of
//! those cells exist, degrading to the cell's own value at the boundary. The neighbor
//! data is passed as `Option`s so each rule can be exercised without a grid.

use meshplot_core::Adjacency;

/// Height of a rectangular cell corner.
///
/// `horizontal` and `vertical` are the data of the edge neighbors that share the corner,
/// `diagonal` the datum of the cell across it. With all three present the corner is the
/// mean of four values. Otherwise the horizontal neighbor, then the vertical neighbor,
/// is averaged with the center. With neither, the corner takes the center value.
#[must_use]
pub fn rect_corner(
    center: f32,
    horizontal: Option<f32>,
    vertical: Option<f32>,
    diagonal: Option<f32>,
) -> f32 {
    match (horizontal, vertical, diagonal) {
        (Some(h), Some(v), Some(d)) => 0.25 * (center + h + v + d),
        (Some(h), _, _) => 0.5 * (center + h),
        (None, Some(v), _) => 0.5 * (center + v),
        (None, None, _) => center,
    }
}

/// Height of a hexagon corner shared with neighbors `first` and `second`.
///
/// Both present gives the mean of three values; otherwise `first`, then `second`, is
/// averaged with the center; with neither the corner takes the center value.
#[must_use]
pub fn hex_corner(center: f32, first: Option<f32>, second: Option<f32>) -> f32 {
    match (first, second) {
        (Some(a), Some(b)) => (center + a + b) / 3.0,
        (Some(a), None) => 0.5 * (center + a),
        (None, Some(b)) => 0.5 * (center + b),
        (None, None) => center,
    }
}

/// Looks up the datum of the neighbor of `cell` in `dir`.
pub(crate) fn neighbor_datum<G: Adjacency>(
    grid: &G,
    data: &[f32],
    cell: usize,
    dir: G::Direction,
) -> Option<f32> {
    grid.neighbor(cell, dir).map(|n| data[n])
}

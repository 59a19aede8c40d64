//! Mesh builders for meshplot.
//!
//! This crate provides the concrete visuals that turn data into triangles:
//! - Lines (flat, rounded, mitered polylines)
//! - Surfaces over cartesian grids
//! - Surfaces over hexagonal grids
//! - Rectangles and tubes

// Graphics code intentionally uses casts for indices, colors, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cart_grid_visual;
pub mod config;
pub mod hex_grid_visual;
pub mod interpolation;
pub mod line;
pub mod primitives;
pub mod rectangle;
mod surface;

pub use cart_grid_visual::CartGridVisual;
pub use config::{BorderConfig, GridVisMode, GridVisualConfig, BORDER_TUBE_SEGMENTS};
pub use hex_grid_visual::HexGridVisual;
pub use line::{
    flat_line, flat_line_rounded, joined_line, LineCaps, LinePath, LineStyle, LineVisual,
    MITER_LIMIT, ROUND_CAP_SEGMENTS,
};
pub use primitives::{flat_quad, tube, TubeVisual, MIN_TUBE_SEGMENTS};
pub use rectangle::{rectangle, RectangleConfig, RectangleVisual};

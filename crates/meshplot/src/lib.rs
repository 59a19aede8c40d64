//! meshplot: procedural mesh generation for scientific data visualization.
//!
//! meshplot turns data descriptions (a line between two points, a rectangle, a grid of
//! scalar values, a patch of hexagons) into flat vertex and index buffers ready for a
//! rasterizer. It does not open windows or talk to a GPU; a rendering layer uploads the
//! [`MeshBuffers`] it produces.
//!
//! # Quick Start
//!
//! ```no_run
//! use meshplot::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     // A 3x2 grid with one datum per cell
//!     let grid = CartGrid::new(3, 2, 1.0, 1.0)?;
//!     let data = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//!
//!     let config = GridVisualConfig::default()
//!         .with_centralize(true)
//!         .with_border(Some(BorderConfig::default()));
//!     let mut visual = CartGridVisual::with_config(&grid, config);
//!     visual.set_data(&data)?;
//!
//!     let mesh = visual.finalize()?;
//!     let _upload: Vec<u8> = mesh.vertex_bytes();
//!     Ok(())
//! }
//! ```
//!
//! # Builders
//!
//! Every visual implements [`MeshBuilder`]: configure it, call
//! [`MeshBuilder::finalize`], then read the buffers.
//!
//! - [`LineVisual`] - A mitered polyline ribbon
//! - [`CartGridVisual`] - A relief surface over a rectangular grid
//! - [`HexGridVisual`] - A relief surface over a hexagonal grid
//! - [`RectangleVisual`] - A flat rectangle
//! - [`TubeVisual`] - A capped cylinder
//!
//! The free functions in [`line`] and [`primitives`] append single shapes to an existing
//! [`MeshBuffers`].

// Re-export core types
pub use meshplot_core::{
    buffers::{GpuVertex, MeshBuffers},
    builder::MeshBuilder,
    color_maps::{ColorMap, ColorMapRegistry, ColorMapping},
    error::{MeshplotError, Result},
    grid::{Adjacency, CartDir, CartGrid, GridGeometry, HexDir, HexGrid},
    scale::{Scale, ScaleMode},
    Mat2, Vec2, Vec3,
};

// Re-export structures
pub use meshplot_structures::{
    interpolation, line, primitives, BorderConfig, CartGridVisual, GridVisMode,
    GridVisualConfig, HexGridVisual, LineCaps, LinePath, LineStyle, LineVisual,
    RectangleConfig, RectangleVisual, TubeVisual,
};

/// Initializes logging from the `RUST_LOG` environment variable.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::try_init();
    log::info!("meshplot {} logging initialized", env!("CARGO_PKG_VERSION"));
}

/// Builds `builder` if needed and returns a copy of its buffers.
///
/// Convenience for callers that hand meshes to another thread or keep them after the
/// builder is dropped.
pub fn build_mesh<B: MeshBuilder + ?Sized>(builder: &mut B) -> Result<MeshBuffers> {
    builder.finalize().cloned()
}

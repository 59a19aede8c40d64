//! Surface visual for data on a rectangular grid.

use glam::{Vec2, Vec3};
use meshplot_core::error::Result;
use meshplot_core::{
    Adjacency, CartDir, CartGrid, GridGeometry, MeshBuffers, MeshBuilder, Scale,
};

use crate::config::{centering_offset, GridVisMode, GridVisualConfig};
use crate::interpolation::{neighbor_datum, rect_corner};
use crate::surface::{check_data, push_cell_fan, CellValues};

/// Draws one datum per cell of a [`CartGrid`] as a colored relief surface.
///
/// The grid and the data are borrowed from the caller. Scales from the configuration are
/// copied into the visual; an autoscaled range is computed on the first build and kept
/// for later builds until [`CartGridVisual::reset_scales`] is called.
#[derive(Debug, Clone)]
pub struct CartGridVisual<'a> {
    grid: &'a CartGrid,
    data: Option<&'a [f32]>,
    config: GridVisualConfig,
    z_scale: Scale,
    color_scale: Scale,
    buffers: MeshBuffers,
    finalized: bool,
}

impl<'a> CartGridVisual<'a> {
    /// Creates a visual for `grid` with the default configuration.
    pub fn new(grid: &'a CartGrid) -> Self {
        Self::with_config(grid, GridVisualConfig::default())
    }

    /// Creates a visual for `grid` with `config`.
    pub fn with_config(grid: &'a CartGrid, config: GridVisualConfig) -> Self {
        Self {
            grid,
            data: None,
            z_scale: config.z_scale.clone(),
            color_scale: config.color_scale.clone(),
            config,
            buffers: MeshBuffers::new(),
            finalized: false,
        }
    }

    /// Returns the grid being visualized.
    pub fn grid(&self) -> &CartGrid {
        self.grid
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GridVisualConfig {
        &self.config
    }

    /// Replaces the configuration, including its scales.
    pub fn set_config(&mut self, config: GridVisualConfig) -> &mut Self {
        self.z_scale = config.z_scale.clone();
        self.color_scale = config.color_scale.clone();
        self.config = config;
        self.finalized = false;
        self
    }

    /// Sets the per-cell data: one finite value per cell.
    pub fn set_data(&mut self, data: &'a [f32]) -> Result<&mut Self> {
        check_data(data, self.grid.num_cells())?;
        self.data = Some(data);
        self.finalized = false;
        Ok(self)
    }

    /// Returns the z scale in use, with its parameters once a build has fixed them.
    pub fn z_scale(&self) -> &Scale {
        &self.z_scale
    }

    /// Returns the color scale in use.
    pub fn color_scale(&self) -> &Scale {
        &self.color_scale
    }

    /// Forgets autoscaled ranges so the next build derives them from the data again.
    pub fn reset_scales(&mut self) {
        self.z_scale.reset();
        self.color_scale.reset();
        self.finalized = false;
    }

    fn build_triangles(&mut self, cells: &CellValues, offset: Vec2) {
        let grid = self.grid;
        let n = grid.num_cells();
        for i in 0..n {
            let p = grid.position(i) + offset;
            self.buffers
                .push_vertex(p.extend(cells.heights[i]), Vec3::Z, cells.colors[i]);
        }

        for i in 0..n {
            let at = |dir| grid.neighbor(i, dir).map(|c| c as u32);
            let idx = i as u32;
            if let (Some(e), Some(ne)) = (at(CartDir::E), at(CartDir::NE)) {
                self.buffers.push_triangle(idx, e, ne);
            }
            if let (Some(w), Some(sw)) = (at(CartDir::W), at(CartDir::SW)) {
                self.buffers.push_triangle(idx, w, sw);
            }
        }
    }

    fn build_interpolated(&mut self, cells: &CellValues, offset: Vec2) {
        let grid = self.grid;
        let half = grid.cell_half_size();
        let h = &cells.heights;
        let num_cells = grid.num_cells();
        self.buffers = MeshBuffers::with_capacity(5 * num_cells, 4 * num_cells);

        for i in 0..num_cells {
            let c = h[i];
            let datum = |dir| neighbor_datum(grid, h, i, dir);
            let (e, ne, n, nw) = (
                datum(CartDir::E),
                datum(CartDir::NE),
                datum(CartDir::N),
                datum(CartDir::NW),
            );
            let (w, sw, s, se) = (
                datum(CartDir::W),
                datum(CartDir::SW),
                datum(CartDir::S),
                datum(CartDir::SE),
            );

            let p = grid.position(i) + offset;
            let corner =
                |dx: f32, dy: f32, z: f32| Vec3::new(p.x + dx * half.x, p.y + dy * half.y, z);
            let corners = [
                corner(1.0, 1.0, rect_corner(c, e, n, ne)),
                corner(1.0, -1.0, rect_corner(c, e, s, se)),
                corner(-1.0, -1.0, rect_corner(c, w, s, sw)),
                corner(-1.0, 1.0, rect_corner(c, w, n, nw)),
            ];
            push_cell_fan(&mut self.buffers, p.extend(c), &corners, cells.colors[i]);
        }
    }
}

impl MeshBuilder for CartGridVisual<'_> {
    fn type_name(&self) -> &'static str {
        "CartGridVisual"
    }

    fn build(&mut self) -> Result<()> {
        self.buffers.clear();
        self.finalized = false;

        let cells = CellValues::compute(
            self.data,
            self.grid.num_cells(),
            &mut self.z_scale,
            &mut self.color_scale,
            &self.config.color_map,
        )?;
        let offset = centering_offset(self.grid, self.config.centralize);

        match self.config.mode {
            GridVisMode::Triangles => self.build_triangles(&cells, offset),
            GridVisMode::Interpolated => self.build_interpolated(&cells, offset),
        }

        if let Some(border) = self.config.border {
            border.append_frame(&mut self.buffers, self.grid, offset)?;
        }

        self.finalized = true;
        log::debug!(
            "built cartesian grid surface ({:?}): {} cells, {} vertices, {} triangles",
            self.config.mode,
            self.grid.num_cells(),
            self.buffers.num_vertices(),
            self.buffers.num_triangles()
        );
        Ok(())
    }

    fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    fn is_finalized(&self) -> bool {
        self.finalized
    }
}

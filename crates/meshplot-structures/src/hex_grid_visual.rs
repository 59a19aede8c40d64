//! Surface visual for data on a hexagonal grid.

use glam::{Vec2, Vec3};
use meshplot_core::error::Result;
use meshplot_core::{Adjacency, GridGeometry, HexDir, HexGrid, MeshBuffers, MeshBuilder, Scale};

use crate::config::{centering_offset, GridVisMode, GridVisualConfig};
use crate::interpolation::{hex_corner, neighbor_datum};
use crate::surface::{check_data, push_cell_fan, CellValues};

/// Corners of a pointy-top hexagon, clockwise from north-east, each with the two
/// neighbors that share it. Offsets are in units of (short radius, long radius).
const HEX_CORNERS: [(f32, f32, HexDir, HexDir); 6] = [
    (1.0, 0.5, HexDir::E, HexDir::NE),
    (1.0, -0.5, HexDir::E, HexDir::SE),
    (0.0, -1.0, HexDir::SE, HexDir::SW),
    (-1.0, -0.5, HexDir::W, HexDir::SW),
    (-1.0, 0.5, HexDir::W, HexDir::NW),
    (0.0, 1.0, HexDir::NE, HexDir::NW),
];

/// Draws one datum per hex of a [`HexGrid`] as a colored relief surface.
///
/// Scale handling matches [`crate::CartGridVisual`]: autoscaled ranges are fixed by the
/// first build and kept until [`HexGridVisual::reset_scales`].
#[derive(Debug, Clone)]
pub struct HexGridVisual<'a> {
    grid: &'a HexGrid,
    data: Option<&'a [f32]>,
    config: GridVisualConfig,
    z_scale: Scale,
    color_scale: Scale,
    buffers: MeshBuffers,
    finalized: bool,
}

impl<'a> HexGridVisual<'a> {
    /// Creates a visual for `grid` with the default configuration.
    pub fn new(grid: &'a HexGrid) -> Self {
        Self::with_config(grid, GridVisualConfig::default())
    }

    /// Creates a visual for `grid` with `config`.
    pub fn with_config(grid: &'a HexGrid, config: GridVisualConfig) -> Self {
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
    pub fn grid(&self) -> &HexGrid {
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

    /// Sets the per-hex data: one finite value per hex.
    pub fn set_data(&mut self, data: &'a [f32]) -> Result<&mut Self> {
        check_data(data, self.grid.num_cells())?;
        self.data = Some(data);
        self.finalized = false;
        Ok(self)
    }

    /// Returns the z scale in use.
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
            if let (Some(e), Some(ne)) = (at(HexDir::E), at(HexDir::NE)) {
                self.buffers.push_triangle(idx, e, ne);
            }
            if let (Some(w), Some(sw)) = (at(HexDir::W), at(HexDir::SW)) {
                self.buffers.push_triangle(idx, w, sw);
            }
        }
    }

    fn build_interpolated(&mut self, cells: &CellValues, offset: Vec2) {
        let grid = self.grid;
        let radii = grid.cell_half_size();
        let h = &cells.heights;
        let n = grid.num_cells();
        self.buffers = MeshBuffers::with_capacity(7 * n, 6 * n);

        for i in 0..n {
            let c = h[i];
            let p = grid.position(i) + offset;
            let corners = HEX_CORNERS.map(|(sx, sy, first, second)| {
                let z = hex_corner(
                    c,
                    neighbor_datum(grid, h, i, first),
                    neighbor_datum(grid, h, i, second),
                );
                Vec3::new(p.x + sx * radii.x, p.y + sy * radii.y, z)
            });
            push_cell_fan(&mut self.buffers, p.extend(c), &corners, cells.colors[i]);
        }
    }
}

impl MeshBuilder for HexGridVisual<'_> {
    fn type_name(&self) -> &'static str {
        "HexGridVisual"
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
            "built hex grid surface ({:?}): {} hexes, {} vertices, {} triangles",
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

#[cfg(test)]
mod tests {
    use super::*;

    // hexagonal(1) order: (0,-1) (1,-1) (-1,0) (0,0) (1,0) (-1,1) (0,1)
    const DATA: [f32; 7] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

    fn corner_heights(mesh: &MeshBuffers, cell: usize) -> Vec<f32> {
        (1..=6).map(|k| mesh.positions[cell * 7 + k].z).collect()
    }

    #[test]
    fn test_interpolated_counts() {
        let grid = HexGrid::hexagonal(1, 1.0).unwrap();
        let mut vis = HexGridVisual::new(&grid);
        vis.set_data(&DATA).unwrap();
        let mesh = vis.finalize().unwrap();
        assert_eq!(mesh.num_vertices(), 7 * 7);
        assert_eq!(mesh.num_triangles(), 7 * 6);
        assert_eq!(&mesh.indices[..6], &[1, 0, 2, 2, 0, 3]);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.num_vertices()));
    }

    #[test]
    fn test_center_hex_corners_are_three_way_means() {
        let grid = HexGrid::hexagonal(1, 1.0).unwrap();
        let mut vis = HexGridVisual::new(&grid);
        vis.set_data(&DATA).unwrap();
        let mesh = vis.finalize().unwrap();
        // Neighbors of the center: E=5, NE=7, NW=6, W=3, SW=1, SE=2
        assert_eq!(
            corner_heights(mesh, 3),
            vec![
                (4.0_f32 + 5.0 + 7.0) / 3.0,
                (4.0 + 5.0 + 2.0) / 3.0,
                (4.0 + 2.0 + 1.0) / 3.0,
                (4.0 + 3.0 + 1.0) / 3.0,
                (4.0 + 3.0 + 6.0) / 3.0,
                (4.0 + 7.0 + 6.0) / 3.0,
            ]
        );
    }

    #[test]
    fn test_edge_hex_degrades() {
        let grid = HexGrid::hexagonal(1, 1.0).unwrap();
        let mut vis = HexGridVisual::new(&grid);
        vis.set_data(&DATA).unwrap();
        let mesh = vis.finalize().unwrap();
        // Hex (0,-1) has only E=2, NE=4 and NW=3
        assert_eq!(
            corner_heights(mesh, 0),
            vec![
                (1.0_f32 + 2.0 + 4.0) / 3.0,
                0.5 * (1.0 + 2.0),
                1.0,
                1.0,
                0.5 * (1.0 + 3.0),
                (1.0 + 4.0 + 3.0) / 3.0,
            ]
        );
    }

    #[test]
    fn test_corners_lie_on_the_hexagon() {
        let grid = HexGrid::hexagonal(1, 2.0).unwrap();
        let mut vis = HexGridVisual::new(&grid);
        vis.set_data(&DATA).unwrap();
        let mesh = vis.finalize().unwrap();
        let lr = grid.long_radius();
        for cell in 0..7 {
            let center = mesh.positions[cell * 7].truncate();
            for k in 1..=6 {
                let r = (mesh.positions[cell * 7 + k].truncate() - center).length();
                assert!((r - lr).abs() < 1e-5, "cell {cell} corner {k} at {r}");
            }
            assert!(mesh.normals[cell * 7].z > 0.0);
        }
    }

    #[test]
    fn test_triangles_mode() {
        let grid = HexGrid::hexagonal(1, 1.0).unwrap();
        let config = GridVisualConfig::default().with_mode(GridVisMode::Triangles);
        let mut vis = HexGridVisual::with_config(&grid, config);
        vis.set_data(&DATA).unwrap();
        let mesh = vis.finalize().unwrap();
        assert_eq!(mesh.num_vertices(), 7);
        // The six triangles around the center, each emitted once
        assert_eq!(mesh.num_triangles(), 6);
        for tri in mesh.indices.chunks(3) {
            assert!(tri.contains(&3));
            let [a, b, c] = [0, 1, 2].map(|k| mesh.positions[tri[k] as usize].truncate());
            assert!((b - a).perp_dot(c - a) > 0.0);
        }
    }

    #[test]
    fn test_single_hex() {
        let grid = HexGrid::from_axial(1.0, vec![(0, 0)]).unwrap();
        let data = [3.0];
        let mut vis = HexGridVisual::new(&grid);
        vis.set_data(&data).unwrap();
        let mesh = vis.finalize().unwrap();
        assert_eq!(mesh.num_triangles(), 6);
        assert!(mesh.positions.iter().all(|p| p.z == 3.0));
        assert!(mesh.normals.iter().all(|n| (*n - Vec3::Z).length() < 1e-6));

        let config = GridVisualConfig::default().with_mode(GridVisMode::Triangles);
        vis.set_config(config);
        assert!(vis.finalize().unwrap().num_triangles() == 0);
    }

    #[test]
    fn test_size_mismatch() {
        let grid = HexGrid::hexagonal(1, 1.0).unwrap();
        let data = [1.0; 6];
        let mut vis = HexGridVisual::new(&grid);
        assert!(matches!(
            vis.set_data(&data),
            Err(meshplot_core::MeshplotError::SizeMismatch {
                expected: 7,
                actual: 6
            })
        ));
    }

    #[test]
    fn test_non_finite_data_is_rejected() {
        let grid = HexGrid::hexagonal(1, 1.0).unwrap();
        let mut data = DATA;
        data[3] = f32::NEG_INFINITY;
        let mut vis = HexGridVisual::new(&grid);
        assert!(matches!(
            vis.set_data(&data),
            Err(meshplot_core::MeshplotError::NonFiniteData { cell: 3, .. })
        ));
        assert!(vis.mesh().is_none());
    }

    #[test]
    fn test_interpolated_buffers_are_preallocated() {
        let grid = HexGrid::hexagonal(1, 1.0).unwrap();
        let mut vis = HexGridVisual::new(&grid);
        vis.set_data(&DATA).unwrap();
        let mesh = vis.finalize().unwrap();
        assert_eq!(mesh.positions.capacity(), mesh.num_vertices());
        assert_eq!(mesh.indices.capacity(), mesh.indices.len());
    }

    #[test]
    fn test_centralize_rectangular_patch() {
        let grid = HexGrid::rectangular(4, 3, 1.0).unwrap();
        let data = [0.0; 12];
        let config = GridVisualConfig::default()
            .with_mode(GridVisMode::Triangles)
            .with_centralize(true);
        let mut vis = HexGridVisual::with_config(&grid, config);
        vis.set_data(&data).unwrap();
        let mesh = vis.finalize().unwrap();
        let (lo, hi) = mesh.bounding_box().unwrap();
        assert!((lo.x + hi.x).abs() < 1e-5);
        assert!((lo.y + hi.y).abs() < 1e-5);
    }
}

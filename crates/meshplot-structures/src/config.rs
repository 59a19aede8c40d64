//! Configuration shared by the grid visuals.

use glam::{Vec2, Vec3};
use meshplot_core::error::{check_thickness, Result};
use meshplot_core::{ColorMap, GridGeometry, MeshBuffers, Scale};
use serde::{Deserialize, Serialize};

use crate::primitives::tube;

/// Number of sides of the tubes that frame a grid.
pub const BORDER_TUBE_SEGMENTS: usize = 12;

/// How grid cells are turned into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GridVisMode {
    /// One vertex per cell center, joined to neighboring centers. Cheapest, but cells
    /// missing the required neighbors leave holes.
    Triangles,
    /// Each cell drawn as its own polygon, with corner heights averaged from neighbors
    /// and a single color per cell.
    #[default]
    Interpolated,
}

/// A frame drawn around the outside of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderConfig {
    /// Frame color.
    pub color: Vec3,
    /// Thickness as a multiple of the cell width.
    pub thickness: f32,
    /// Absolute thickness; overrides `thickness` when non-zero.
    pub thickness_fixed: f32,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            color: Vec3::splat(0.8),
            thickness: 0.33,
            thickness_fixed: 0.0,
        }
    }
}

impl BorderConfig {
    /// Resolves the absolute thickness for cells `cell_width` wide.
    #[must_use]
    pub fn resolved_thickness(&self, cell_width: f32) -> f32 {
        if self.thickness_fixed == 0.0 {
            cell_width * self.thickness
        } else {
            self.thickness_fixed
        }
    }

    /// Appends the four tubes of the frame around `grid`, shifted by `offset`.
    ///
    /// The frame sits half a thickness plus half a cell outside the outermost cell
    /// centers, raised by a tenth of a cell width.
    pub fn append_frame<G: GridGeometry>(
        &self,
        buf: &mut MeshBuffers,
        grid: &G,
        offset: Vec2,
    ) -> Result<()> {
        let half_cell = grid.cell_half_size();
        let cell_width = 2.0 * half_cell.x;
        let thickness = self.resolved_thickness(cell_width);
        check_thickness(thickness)?;

        let [xmin, xmax, ymin, ymax] = grid.extents();
        let pad = Vec2::splat(0.5 * thickness) + half_cell;
        let z = cell_width / 10.0;
        let left = xmin - pad.x + offset.x;
        let right = xmax + pad.x + offset.x;
        let bottom = ymin - pad.y + offset.y;
        let top = ymax + pad.y + offset.y;

        let lb = Vec3::new(left, bottom, z);
        let lt = Vec3::new(left, top, z);
        let rt = Vec3::new(right, top, z);
        let rb = Vec3::new(right, bottom, z);
        for (a, b) in [(lb, lt), (lt, rt), (rt, rb), (rb, lb)] {
            tube(buf, a, b, self.color, self.color, thickness, BORDER_TUBE_SEGMENTS)?;
        }
        Ok(())
    }
}

/// Everything a grid visual needs to know besides the grid and its data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridVisualConfig {
    /// Triangulation mode.
    pub mode: GridVisMode,
    /// Maps data to z. The identity by default; use [`Scale::null`] for flat images.
    pub z_scale: Scale,
    /// Maps data to `[0, 1]` for the color map.
    pub color_scale: Scale,
    /// Color map applied to the color-scaled data.
    pub color_map: ColorMap,
    /// Shift positions so the cell centers are symmetric about the origin.
    pub centralize: bool,
    /// Optional frame around the grid.
    pub border: Option<BorderConfig>,
}

impl Default for GridVisualConfig {
    fn default() -> Self {
        Self {
            mode: GridVisMode::default(),
            z_scale: Scale::identity(),
            color_scale: Scale::autoscale(),
            color_map: ColorMap::default(),
            centralize: false,
            border: None,
        }
    }
}

impl GridVisualConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the triangulation mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GridVisMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the z scale.
    #[must_use]
    pub fn with_z_scale(mut self, scale: Scale) -> Self {
        self.z_scale = scale;
        self
    }

    /// Sets the color scale.
    #[must_use]
    pub fn with_color_scale(mut self, scale: Scale) -> Self {
        self.color_scale = scale;
        self
    }

    /// Sets the color map.
    #[must_use]
    pub fn with_color_map(mut self, color_map: ColorMap) -> Self {
        self.color_map = color_map;
        self
    }

    /// Enables or disables centralization.
    #[must_use]
    pub fn with_centralize(mut self, centralize: bool) -> Self {
        self.centralize = centralize;
        self
    }

    /// Sets the border.
    #[must_use]
    pub fn with_border(mut self, border: Option<BorderConfig>) -> Self {
        self.border = border;
        self
    }
}

/// Offset that centers a grid's cell centers on the origin, or zero.
pub(crate) fn centering_offset<G: GridGeometry>(grid: &G, centralize: bool) -> Vec2 {
    if !centralize {
        return Vec2::ZERO;
    }
    let [xmin, xmax, ymin, ymax] = grid.extents();
    -0.5 * Vec2::new(xmin + xmax, ymin + ymax)
}

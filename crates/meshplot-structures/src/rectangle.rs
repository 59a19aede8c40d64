//! A flat rectangle in the x-y plane.

use glam::{Mat2, Vec2, Vec3};
use meshplot_core::error::Result;
use meshplot_core::{MeshBuffers, MeshBuilder};
use serde::{Deserialize, Serialize};

use crate::primitives::flat_quad;

/// Appends a `dims.x` by `dims.y` rectangle centered on `offset`, rotated by `angle_deg`
/// degrees anticlockwise about z.
pub fn rectangle(
    buf: &mut MeshBuffers,
    offset: Vec3,
    dims: Vec2,
    angle_deg: f32,
    color: Vec3,
) -> bool {
    let half = dims * 0.5;
    // Clockwise from the top-right corner
    let corners = [
        half,
        Vec2::new(half.x, -half.y),
        -half,
        Vec2::new(-half.x, half.y),
    ];
    let rotation = Mat2::from_angle(angle_deg.to_radians());
    let [c1, c2, c3, c4] = corners.map(|c| (rotation * c).extend(0.0) + offset);
    flat_quad(buf, c1, c2, c3, c4, color)
}

/// Parameters of a [`RectangleVisual`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleConfig {
    /// Center of the rectangle.
    pub offset: Vec3,
    /// Width and height.
    pub dims: Vec2,
    /// Rotation about z in degrees.
    pub angle: f32,
    /// Fill color.
    pub color: Vec3,
}

impl Default for RectangleConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            dims: Vec2::ONE,
            angle: 0.0,
            color: Vec3::ZERO,
        }
    }
}

/// A single flat rectangle.
#[derive(Debug, Clone, Default)]
pub struct RectangleVisual {
    config: RectangleConfig,
    buffers: MeshBuffers,
    finalized: bool,
}

impl RectangleVisual {
    /// Creates a rectangle visual.
    pub fn new(config: RectangleConfig) -> Self {
        Self {
            config,
            buffers: MeshBuffers::new(),
            finalized: false,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RectangleConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: RectangleConfig) -> &mut Self {
        self.config = config;
        self.finalized = false;
        self
    }
}

impl MeshBuilder for RectangleVisual {
    fn type_name(&self) -> &'static str {
        "RectangleVisual"
    }

    fn build(&mut self) -> Result<()> {
        self.buffers.clear();
        let c = self.config;
        if !rectangle(&mut self.buffers, c.offset, c.dims, c.angle, c.color) {
            log::warn!("rectangle with dims {:?} has no area, nothing to draw", c.dims);
        }
        self.finalized = true;
        Ok(())
    }

    fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    fn is_finalized(&self) -> bool {
        self.finalized
    }
}

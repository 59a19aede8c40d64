//! Closed primitive shapes: flat quads and tubes.
//!
//! These append to an existing [`MeshBuffers`], so larger visuals (grid borders, line
//! markers) can compose them. Degenerate input appends nothing and reports `false`.

use std::f32::consts::TAU;

use glam::Vec3;
use meshplot_core::error::{check_thickness, MeshplotError, Result};
use meshplot_core::{MeshBuffers, MeshBuilder};

/// Minimum number of sides for a tube.
pub const MIN_TUBE_SEGMENTS: usize = 3;

/// Appends a flat quad with corners given clockwise (as seen from the front).
///
/// The normal is `normalize((c2 - c3) x (c1 - c2))`; both triangles wind
/// counter-clockwise about it. Returns `false` for a quad with no area.
pub fn flat_quad(
    buf: &mut MeshBuffers,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
    c4: Vec3,
    color: Vec3,
) -> bool {
    let normal = (c2 - c3).cross(c1 - c2);
    let Some(normal) = normal.try_normalize() else {
        return false;
    };

    let i1 = buf.push_vertex(c1, normal, color);
    let i2 = buf.push_vertex(c2, normal, color);
    let i3 = buf.push_vertex(c3, normal, color);
    let i4 = buf.push_vertex(c4, normal, color);
    buf.push_triangle(i1, i3, i2);
    buf.push_triangle(i1, i4, i3);
    true
}

/// Appends a capped cylinder from `start` to `end`.
///
/// The shell is colored `color_start` at the start ring and `color_end` at the end ring,
/// so the color grades along the length. Shell normals point radially, cap normals along
/// the axis. Returns `Ok(false)` when the endpoints coincide.
pub fn tube(
    buf: &mut MeshBuffers,
    start: Vec3,
    end: Vec3,
    color_start: Vec3,
    color_end: Vec3,
    radius: f32,
    segments: usize,
) -> Result<bool> {
    check_thickness(radius)?;
    if segments < MIN_TUBE_SEGMENTS {
        return Err(MeshplotError::InvalidSegments {
            min: MIN_TUBE_SEGMENTS,
            actual: segments,
        });
    }
    let Some(axis) = (end - start).try_normalize() else {
        return Ok(false);
    };

    // (u, v, axis) is right-handed, so rings run anticlockwise about the axis
    let u = axis.any_orthonormal_vector();
    let v = axis.cross(u);
    let radials: Vec<Vec3> = (0..segments)
        .map(|k| {
            let (sin, cos) = (TAU * k as f32 / segments as f32).sin_cos();
            u * cos + v * sin
        })
        .collect();

    let n = segments as u32;

    // Shell
    let shell_start = buf.next_index();
    for &r in &radials {
        buf.push_vertex(start + r * radius, r, color_start);
    }
    let shell_end = buf.next_index();
    for &r in &radials {
        buf.push_vertex(end + r * radius, r, color_end);
    }
    for k in 0..n {
        let next = (k + 1) % n;
        let (a, b) = (shell_start + k, shell_start + next);
        let (c, d) = (shell_end + k, shell_end + next);
        buf.push_triangle(a, b, d);
        buf.push_triangle(a, d, c);
    }

    // Start cap faces backwards along the axis
    let center = buf.push_vertex(start, -axis, color_start);
    let ring = buf.next_index();
    for &r in &radials {
        buf.push_vertex(start + r * radius, -axis, color_start);
    }
    for k in 0..n {
        buf.push_triangle(center, ring + (k + 1) % n, ring + k);
    }

    // End cap
    let center = buf.push_vertex(end, axis, color_end);
    let ring = buf.next_index();
    for &r in &radials {
        buf.push_vertex(end + r * radius, axis, color_end);
    }
    for k in 0..n {
        buf.push_triangle(center, ring + k, ring + (k + 1) % n);
    }

    Ok(true)
}

/// A standalone tube between two points.
#[derive(Debug, Clone)]
pub struct TubeVisual {
    start: Vec3,
    end: Vec3,
    color_start: Vec3,
    color_end: Vec3,
    radius: f32,
    segments: usize,
    buffers: MeshBuffers,
    finalized: bool,
}

impl TubeVisual {
    /// Creates a single-colored tube with 12 sides.
    pub fn new(start: Vec3, end: Vec3, color: Vec3, radius: f32) -> Self {
        Self {
            start,
            end,
            color_start: color,
            color_end: color,
            radius,
            segments: 12,
            buffers: MeshBuffers::new(),
            finalized: false,
        }
    }

    /// Sets separate colors for the two ends.
    pub fn set_colors(&mut self, color_start: Vec3, color_end: Vec3) -> &mut Self {
        self.color_start = color_start;
        self.color_end = color_end;
        self.finalized = false;
        self
    }

    /// Sets the number of sides.
    pub fn set_segments(&mut self, segments: usize) -> &mut Self {
        self.segments = segments;
        self.finalized = false;
        self
    }

    /// Moves the endpoints.
    pub fn set_endpoints(&mut self, start: Vec3, end: Vec3) -> &mut Self {
        self.start = start;
        self.end = end;
        self.finalized = false;
        self
    }
}

impl MeshBuilder for TubeVisual {
    fn type_name(&self) -> &'static str {
        "TubeVisual"
    }

    fn build(&mut self) -> Result<()> {
        self.buffers.clear();
        self.finalized = false;
        tube(
            &mut self.buffers,
            self.start,
            self.end,
            self.color_start,
            self.color_end,
            self.radius,
            self.segments,
        )?;
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

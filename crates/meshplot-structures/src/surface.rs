//! Pieces shared by the cartesian and hexagonal surface builders.

use glam::Vec3;
use meshplot_core::error::{MeshplotError, Result};
use meshplot_core::{ColorMapping, MeshBuffers, Scale};

/// Per-cell height and color, derived from the raw data.
pub(crate) struct CellValues {
    pub heights: Vec<f32>,
    pub colors: Vec<Vec3>,
}

impl CellValues {
    /// Checks the data and runs both scales over it.
    pub fn compute(
        data: Option<&[f32]>,
        num_cells: usize,
        z_scale: &mut Scale,
        color_scale: &mut Scale,
        color_map: &impl ColorMapping,
    ) -> Result<Self> {
        let data = data.ok_or(MeshplotError::MissingData)?;
        check_data(data, num_cells)?;
        let heights = z_scale.transform(data);
        let colors = color_scale
            .transform(data)
            .into_iter()
            .map(|t| color_map.map(t))
            .collect();
        Ok(Self { heights, colors })
    }
}

/// Requires one finite datum per cell.
pub(crate) fn check_data(data: &[f32], num_cells: usize) -> Result<()> {
    if data.len() != num_cells {
        return Err(MeshplotError::SizeMismatch {
            expected: num_cells,
            actual: data.len(),
        });
    }
    match data.iter().position(|v| !v.is_finite()) {
        Some(cell) => Err(MeshplotError::NonFiniteData {
            cell,
            value: data[cell],
        }),
        None => Ok(()),
    }
}

/// Appends a flat-shaded fan: the center followed by `corners` in clockwise order.
///
/// The normal comes from the center and the first two corners and is shared by every
/// vertex of the cell. A fan with no area falls back to +Z.
pub(crate) fn push_cell_fan(buf: &mut MeshBuffers, center: Vec3, corners: &[Vec3], color: Vec3) {
    let plane1 = corners[0] - center;
    let plane2 = corners[1] - center;
    let normal = plane2.cross(plane1).try_normalize().unwrap_or(Vec3::Z);

    let c = buf.push_vertex(center, normal, color);
    for &corner in corners {
        buf.push_vertex(corner, normal, color);
    }
    let n = corners.len() as u32;
    for k in 0..n {
        buf.push_triangle(c + 1 + k, c, c + 1 + (k + 1) % n);
    }
}

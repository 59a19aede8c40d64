//! Vertex buffers produced by the mesh builders.
//!
//! A [`MeshBuffers`] holds four parallel arrays: positions, normals and colors share one
//! index space, and `indices` references that space three entries per triangle.

use glam::Vec3;

/// Output mesh of a builder, ready for upload by a rendering layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions in model space.
    pub positions: Vec<Vec3>,
    /// Unit normals, one per vertex.
    pub normals: Vec<Vec3>,
    /// RGB colors, one per vertex.
    pub colors: Vec<Vec3>,
    /// Triangle indices (every 3 consecutive indices form a triangle).
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates an empty set of buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty buffers with room for `vertices` vertices and `triangles` triangles.
    #[must_use]
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Empties every buffer, keeping the allocations.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.colors.clear();
        self.indices.clear();
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles in the mesh.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The index the next pushed vertex will receive.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn next_index(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Appends one vertex and returns its index.
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3, color: Vec3) -> u32 {
        let idx = self.next_index();
        self.positions.push(position);
        self.normals.push(normal);
        self.colors.push(color);
        idx
    }

    /// Appends one triangle.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Appends all of `other`, offsetting its indices past the current vertices.
    pub fn append(&mut self, other: &MeshBuffers) {
        let base = self.next_index();
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.colors.extend_from_slice(&other.colors);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Returns the axis-aligned bounds of the positions, or `None` when empty.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }

    /// Interleaves the parallel buffers into GPU vertices.
    #[must_use]
    pub fn interleaved(&self) -> Vec<GpuVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.colors)
            .map(|((p, n), c)| GpuVertex {
                position: p.to_array(),
                normal: n.to_array(),
                color: c.to_array(),
            })
            .collect()
    }

    /// Interleaved vertex data as raw bytes, in [`GpuVertex`] layout.
    #[must_use]
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.interleaved()).to_vec()
    }

    /// Index data as raw bytes.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// GPU-compatible interleaved vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    /// Position in model space.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// RGB color.
    pub color: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MeshBuffers {
        let mut buf = MeshBuffers::new();
        let a = buf.push_vertex(Vec3::ZERO, Vec3::Z, Vec3::ONE);
        let b = buf.push_vertex(Vec3::X, Vec3::Z, Vec3::ONE);
        let c = buf.push_vertex(Vec3::Y, Vec3::Z, Vec3::ONE);
        buf.push_triangle(a, b, c);
        buf
    }

    #[test]
    fn test_push_and_counts() {
        let buf = triangle();
        assert_eq!(buf.num_vertices(), 3);
        assert_eq!(buf.num_triangles(), 1);
        assert_eq!(buf.indices, vec![0, 1, 2]);
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut buf = triangle();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.num_vertices(), 0);
        assert!(buf.normals.is_empty());
        assert!(buf.colors.is_empty());
    }

    #[test]
    fn test_append_offsets_indices() {
        let mut buf = triangle();
        buf.append(&triangle());
        assert_eq!(buf.num_vertices(), 6);
        assert_eq!(buf.indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_bounding_box() {
        assert!(MeshBuffers::new().bounding_box().is_none());
        let (lo, hi) = triangle().bounding_box().unwrap();
        assert_eq!(lo, Vec3::ZERO);
        assert_eq!(hi, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_interleaved_layout() {
        let buf = triangle();
        let verts = buf.interleaved();
        assert_eq!(verts.len(), 3);
        assert_eq!(verts[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(verts[1].normal, [0.0, 0.0, 1.0]);
        assert_eq!(std::mem::size_of::<GpuVertex>(), 36);
        assert_eq!(buf.vertex_bytes().len(), 3 * 36);
        assert_eq!(buf.index_bytes().len(), 12);
    }
}

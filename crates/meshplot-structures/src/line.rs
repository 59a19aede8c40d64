//! Flat ribbons for line segments and polylines.
//!
//! A 3D segment has no unique perpendicular, so every function takes an `up` vector: the
//! ribbon lies in the plane through the segment perpendicular to `up`, spans
//! `up x dir` on either side of the centerline, and faces `up`.
//!
//! Each function returns `Ok(false)` and appends nothing when the segment has no length
//! or runs parallel to `up`.

use std::f32::consts::PI;

use glam::Vec3;
use meshplot_core::error::{check_thickness, MeshplotError, Result};
use meshplot_core::{MeshBuffers, MeshBuilder};
use serde::{Deserialize, Serialize};

/// Default number of triangles in a rounded cap.
pub const ROUND_CAP_SEGMENTS: usize = 12;

/// Longest miter offset at a joint, in half widths.
pub const MITER_LIMIT: f32 = 4.0;

/// Which ends of a line get a semicircular cap, and how finely it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCaps {
    /// Cap the first point.
    pub start: bool,
    /// Cap the last point.
    pub end: bool,
    /// Triangles per cap.
    pub segments: usize,
}

impl Default for LineCaps {
    fn default() -> Self {
        Self::none()
    }
}

impl LineCaps {
    /// Square ends.
    #[must_use]
    pub fn none() -> Self {
        Self {
            start: false,
            end: false,
            segments: ROUND_CAP_SEGMENTS,
        }
    }

    /// Rounded caps at both ends.
    #[must_use]
    pub fn round() -> Self {
        Self {
            start: true,
            end: true,
            segments: ROUND_CAP_SEGMENTS,
        }
    }
}

/// Appends a flat ribbon from `p0` to `p1`, `thickness` wide.
///
/// `overextend` moves each end outwards along the segment; a negative value shortens it.
pub fn flat_line(
    buf: &mut MeshBuffers,
    p0: Vec3,
    p1: Vec3,
    up: Vec3,
    color: Vec3,
    thickness: f32,
    overextend: f32,
) -> Result<bool> {
    check_thickness(thickness)?;
    let Some(frame) = Frame::new(p0, p1, up) else {
        return Ok(false);
    };
    let hw = 0.5 * thickness;
    let start = p0 - frame.dir * overextend;
    let end = p1 + frame.dir * overextend;
    let side = frame.left * hw;
    push_ribbon(buf, [start + side, start - side, end + side, end - side], frame.normal, color);
    Ok(true)
}

/// Appends a flat ribbon like [`flat_line`], with a semicircular fan on each end
/// selected in `caps`.
#[allow(clippy::too_many_arguments)]
pub fn flat_line_rounded(
    buf: &mut MeshBuffers,
    p0: Vec3,
    p1: Vec3,
    up: Vec3,
    color: Vec3,
    thickness: f32,
    overextend: f32,
    caps: LineCaps,
) -> Result<bool> {
    check_thickness(thickness)?;
    check_cap_segments(caps)?;
    let Some(frame) = Frame::new(p0, p1, up) else {
        return Ok(false);
    };
    flat_line(buf, p0, p1, up, color, thickness, overextend)?;

    let hw = 0.5 * thickness;
    if caps.start {
        let start = p0 - frame.dir * overextend;
        cap_fan(buf, start, frame.left * hw, -frame.dir * hw, frame.normal, color, caps.segments);
    }
    if caps.end {
        let end = p1 + frame.dir * overextend;
        cap_fan(buf, end, -frame.left * hw, frame.dir * hw, frame.normal, color, caps.segments);
    }
    Ok(true)
}

/// Appends the ribbon for the segment `p0`-`p1` of a polyline whose previous point is
/// `prev` and next point is `next`.
///
/// The edges at each end are mitered against the neighboring segment, so consecutive
/// calls along a path share their joint vertices exactly. Pass `prev == p0` or
/// `next == p1` for a free end.
#[allow(clippy::too_many_arguments)]
pub fn joined_line(
    buf: &mut MeshBuffers,
    p0: Vec3,
    p1: Vec3,
    prev: Vec3,
    next: Vec3,
    up: Vec3,
    color: Vec3,
    thickness: f32,
) -> Result<bool> {
    check_thickness(thickness)?;
    let Some(frame) = Frame::new(p0, p1, up) else {
        return Ok(false);
    };
    let hw = 0.5 * thickness;
    let plain = frame.left * hw;
    let start_side =
        miter_offset(unit_dir(prev, p0), Some(frame.dir), frame.normal, hw).unwrap_or(plain);
    let end_side =
        miter_offset(Some(frame.dir), unit_dir(p1, next), frame.normal, hw).unwrap_or(plain);
    push_ribbon(
        buf,
        [p0 + start_side, p0 - start_side, p1 + end_side, p1 - end_side],
        frame.normal,
        color,
    );
    Ok(true)
}

/// Direction, left-hand perpendicular and face normal of a segment.
struct Frame {
    dir: Vec3,
    left: Vec3,
    normal: Vec3,
}

impl Frame {
    fn new(p0: Vec3, p1: Vec3, up: Vec3) -> Option<Self> {
        let dir = unit_dir(p0, p1)?;
        let normal = up.try_normalize()?;
        let left = normal.cross(dir).try_normalize()?;
        Some(Self { dir, left, normal })
    }
}

fn unit_dir(from: Vec3, to: Vec3) -> Option<Vec3> {
    (to - from).try_normalize()
}

fn coincide(a: Vec3, b: Vec3) -> bool {
    unit_dir(a, b).is_none()
}

/// Offset from a joint to the left edge of the ribbon, for a path arriving along
/// `dir_in` and leaving along `dir_out`.
///
/// Both segments at a joint call this with the same arguments, which keeps their shared
/// vertices identical. Returns `None` at a free end or where the path folds back on
/// itself; the caller then uses its own perpendicular.
fn miter_offset(
    dir_in: Option<Vec3>,
    dir_out: Option<Vec3>,
    normal: Vec3,
    hw: f32,
) -> Option<Vec3> {
    let left_in = normal.cross(dir_in?).try_normalize()?;
    let left_out = normal.cross(dir_out?).try_normalize()?;
    let bisector = (left_in + left_out).try_normalize()?;
    let cos_half = bisector.dot(left_out);
    if cos_half <= 1.0 / MITER_LIMIT {
        return Some(bisector * hw * MITER_LIMIT);
    }
    Some(bisector * (hw / cos_half))
}

/// Pushes the four corners `[start_left, start_right, end_left, end_right]` and the two
/// triangles between them, anticlockwise about `normal`.
fn push_ribbon(buf: &mut MeshBuffers, corners: [Vec3; 4], normal: Vec3, color: Vec3) {
    let [sl, sr, el, er] = corners.map(|p| buf.push_vertex(p, normal, color));
    buf.push_triangle(sr, er, el);
    buf.push_triangle(sr, el, sl);
}

/// Pushes a half-disc fan around `center`, sweeping from `from` through `toward` to
/// `-from`.
fn cap_fan(
    buf: &mut MeshBuffers,
    center: Vec3,
    from: Vec3,
    toward: Vec3,
    normal: Vec3,
    color: Vec3,
    segments: usize,
) {
    let c = buf.push_vertex(center, normal, color);
    for k in 0..=segments {
        let (sin, cos) = (PI * k as f32 / segments as f32).sin_cos();
        buf.push_vertex(center + from * cos + toward * sin, normal, color);
    }
    for k in 0..segments as u32 {
        buf.push_triangle(c, c + 1 + k, c + 2 + k);
    }
}

fn check_cap_segments(caps: LineCaps) -> Result<()> {
    if (caps.start || caps.end) && caps.segments == 0 {
        return Err(MeshplotError::InvalidSegments {
            min: 1,
            actual: caps.segments,
        });
    }
    Ok(())
}

/// Appearance of a [`LineVisual`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Ribbon color.
    pub color: Vec3,
    /// Ribbon width.
    pub thickness: f32,
    /// Normal of the plane the ribbon is drawn in.
    pub up: Vec3,
    /// End caps of an open path.
    pub caps: LineCaps,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Vec3::ZERO,
            thickness: 0.05,
            up: Vec3::Z,
            caps: LineCaps::none(),
        }
    }
}

/// An ordered sequence of connected points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    /// Points along the path.
    pub points: Vec<Vec3>,
    /// Join the last point back to the first.
    pub closed: bool,
}

impl LinePath {
    /// Creates an open path.
    pub fn open(points: Vec<Vec3>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Creates a closed path.
    pub fn closed(points: Vec<Vec3>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Returns the path with repeated points removed.
    ///
    /// A point that coincides with the one before it is dropped, and so are trailing
    /// points of a closed path that coincide with its first point.
    #[must_use]
    pub fn deduplicated(&self) -> Self {
        let mut points: Vec<Vec3> = Vec::with_capacity(self.points.len());
        for &p in &self.points {
            if !points.last().is_some_and(|&q| coincide(q, p)) {
                points.push(p);
            }
        }
        if self.closed {
            while points.len() > 1 && points.last().is_some_and(|&q| coincide(q, points[0])) {
                points.pop();
            }
        }
        Self {
            points,
            closed: self.closed,
        }
    }

    /// Returns whether the path is drawn as a loop. Fewer than three distinct points
    /// never form one.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.closed && self.deduplicated().points.len() > 2
    }

    /// Number of segments drawn, not counting repeated points.
    #[must_use]
    pub fn num_segments(&self) -> usize {
        let distinct = self.deduplicated();
        match distinct.points.len() {
            0 | 1 => 0,
            n if distinct.closed && n > 2 => n,
            n => n - 1,
        }
    }

    /// Returns `(p0, p1, prev, next)` for segment `i` of a deduplicated path; free ends
    /// repeat their own point.
    fn segment(&self, i: usize) -> (Vec3, Vec3, Vec3, Vec3) {
        let pts = &self.points;
        let n = pts.len();
        if self.closed && n > 2 {
            (pts[i], pts[(i + 1) % n], pts[(i + n - 1) % n], pts[(i + 2) % n])
        } else {
            let prev = if i > 0 { pts[i - 1] } else { pts[i] };
            let next = pts.get(i + 2).copied().unwrap_or(pts[i + 1]);
            (pts[i], pts[i + 1], prev, next)
        }
    }
}

/// A polyline drawn as one mitered ribbon.
#[derive(Debug, Clone, Default)]
pub struct LineVisual {
    path: LinePath,
    style: LineStyle,
    buffers: MeshBuffers,
    finalized: bool,
}

impl LineVisual {
    /// Creates a line visual.
    pub fn new(path: LinePath, style: LineStyle) -> Self {
        Self {
            path,
            style,
            buffers: MeshBuffers::new(),
            finalized: false,
        }
    }

    /// Returns the path.
    pub fn path(&self) -> &LinePath {
        &self.path
    }

    /// Replaces the path.
    pub fn set_path(&mut self, path: LinePath) -> &mut Self {
        self.path = path;
        self.finalized = false;
        self
    }

    /// Returns the style.
    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// Replaces the style.
    pub fn set_style(&mut self, style: LineStyle) -> &mut Self {
        self.style = style;
        self.finalized = false;
        self
    }

    fn append_caps(&mut self, path: &LinePath) {
        let s = self.style;
        let pts = &path.points;
        if path.is_loop() || pts.len() < 2 {
            return;
        }
        let (hw, segments) = (0.5 * s.thickness, s.caps.segments);
        let last = pts.len() - 1;
        if s.caps.start {
            if let Some(f) = Frame::new(pts[0], pts[1], s.up) {
                let (from, toward) = (f.left * hw, -f.dir * hw);
                cap_fan(&mut self.buffers, pts[0], from, toward, f.normal, s.color, segments);
            }
        }
        if s.caps.end {
            if let Some(f) = Frame::new(pts[last - 1], pts[last], s.up) {
                let (from, toward) = (-f.left * hw, f.dir * hw);
                cap_fan(&mut self.buffers, pts[last], from, toward, f.normal, s.color, segments);
            }
        }
    }
}

impl MeshBuilder for LineVisual {
    fn type_name(&self) -> &'static str {
        "LineVisual"
    }

    fn build(&mut self) -> Result<()> {
        self.buffers.clear();
        self.finalized = false;
        let s = self.style;
        check_thickness(s.thickness)?;
        check_cap_segments(s.caps)?;

        let path = self.path.deduplicated();
        let num_segments = path.num_segments();
        for i in 0..num_segments {
            let (p0, p1, prev, next) = path.segment(i);
            if !joined_line(&mut self.buffers, p0, p1, prev, next, s.up, s.color, s.thickness)? {
                log::warn!("skipping segment {i} of line ({p0} to {p1}): parallel to up");
            }
        }
        self.append_caps(&path);

        self.finalized = true;
        log::debug!(
            "built line: {} segments, {} vertices, {} triangles",
            num_segments,
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

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a} != {b}");
    }

    /// Signed area of every triangle projected along `up`.
    fn all_anticlockwise(buf: &MeshBuffers, up: Vec3) -> bool {
        buf.indices.chunks(3).all(|t| {
            let [a, b, c] = [0, 1, 2].map(|k| buf.positions[t[k] as usize]);
            (b - a).cross(c - a).dot(up) > 0.0
        })
    }

    #[test]
    fn test_flat_line() {
        let mut buf = MeshBuffers::new();
        assert!(flat_line(&mut buf, Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::ONE, 0.2, 0.0).unwrap());
        assert_eq!(buf.num_vertices(), 4);
        assert_eq!(buf.num_triangles(), 2);
        assert_close(buf.positions[0], Vec3::new(0.0, 0.1, 0.0));
        assert_close(buf.positions[1], Vec3::new(0.0, -0.1, 0.0));
        assert_close(buf.positions[2], Vec3::new(1.0, 0.1, 0.0));
        assert_close(buf.positions[3], Vec3::new(1.0, -0.1, 0.0));
        assert!(buf.normals.iter().all(|n| *n == Vec3::Z));
        assert!(all_anticlockwise(&buf, Vec3::Z));
    }

    #[test]
    fn test_overextend() {
        let mut buf = MeshBuffers::new();
        flat_line(&mut buf, Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::ONE, 0.2, 0.5).unwrap();
        let (lo, hi) = buf.bounding_box().unwrap();
        assert!((lo.x + 0.5).abs() < 1e-6 && (hi.x - 1.5).abs() < 1e-6);

        buf.clear();
        flat_line(&mut buf, Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::ONE, 0.2, -0.25).unwrap();
        let (lo, hi) = buf.bounding_box().unwrap();
        assert!((lo.x - 0.25).abs() < 1e-6 && (hi.x - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_segments_emit_nothing() {
        let mut buf = MeshBuffers::new();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(!flat_line(&mut buf, p, p, Vec3::Z, Vec3::ONE, 0.1, 0.0).unwrap());
        let caps = LineCaps::round();
        assert!(!flat_line_rounded(&mut buf, p, p, Vec3::Z, Vec3::ONE, 0.1, 0.0, caps).unwrap());
        assert!(!joined_line(&mut buf, p, p, p, p, Vec3::Z, Vec3::ONE, 0.1).unwrap());
        // Parallel to up
        assert!(!flat_line(&mut buf, Vec3::ZERO, Vec3::Z, Vec3::Z, Vec3::ONE, 0.1, 0.0).unwrap());
        assert_eq!(buf.num_vertices(), 0);
        assert!(buf.indices.is_empty());
    }

    #[test]
    fn test_invalid_thickness() {
        let mut buf = MeshBuffers::new();
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                flat_line(&mut buf, Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::ONE, bad, 0.0),
                Err(MeshplotError::InvalidThickness(_))
            ));
        }
        assert!(buf.is_empty());
    }

    #[test]
    fn test_winding_follows_up() {
        let mut buf = MeshBuffers::new();
        let p0 = Vec3::new(0.3, -1.0, 2.0);
        let p1 = Vec3::new(-0.7, 2.0, 2.0);
        flat_line(&mut buf, p0, p1, -Vec3::Z, Vec3::ONE, 0.3, 0.0).unwrap();
        assert!(all_anticlockwise(&buf, -Vec3::Z));
        assert!(buf.positions.iter().all(|p| (p.z - 2.0).abs() < 1e-6));
        assert!(buf.normals.iter().all(|n| *n == -Vec3::Z));
    }

    #[test]
    fn test_rounded_caps() {
        let mut buf = MeshBuffers::new();
        let caps = LineCaps {
            start: true,
            end: false,
            segments: 6,
        };
        flat_line_rounded(&mut buf, Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::ONE, 0.2, 0.0, caps)
            .unwrap();
        assert_eq!(buf.num_vertices(), 4 + 1 + 7);
        assert_eq!(buf.num_triangles(), 2 + 6);

        buf.clear();
        let caps = LineCaps::round();
        flat_line_rounded(&mut buf, Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::ONE, 0.2, 0.0, caps)
            .unwrap();
        assert_eq!(buf.num_triangles(), 2 + 2 * ROUND_CAP_SEGMENTS);
        assert!(all_anticlockwise(&buf, Vec3::Z));
        // The caps reach half the thickness past each end
        let (lo, hi) = buf.bounding_box().unwrap();
        assert!((lo.x + 0.1).abs() < 1e-6 && (hi.x - 1.1).abs() < 1e-6);
        assert!((hi.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_cap_without_segments_is_rejected() {
        let mut buf = MeshBuffers::new();
        let caps = LineCaps {
            segments: 0,
            ..LineCaps::round()
        };
        assert!(matches!(
            flat_line_rounded(&mut buf, Vec3::ZERO, Vec3::X, Vec3::Z, Vec3::ONE, 0.2, 0.0, caps),
            Err(MeshplotError::InvalidSegments { min: 1, actual: 0 })
        ));
    }

    #[test]
    fn test_straight_joints_coincide() {
        let pts = [0.0, 1.0, 2.0, 3.0].map(|x| Vec3::new(x, 0.0, 0.0));
        let mut buf = MeshBuffers::new();
        for i in 0..3 {
            let prev = if i > 0 { pts[i - 1] } else { pts[i] };
            let next = if i < 2 { pts[i + 2] } else { pts[i + 1] };
            joined_line(&mut buf, pts[i], pts[i + 1], prev, next, Vec3::Z, Vec3::ONE, 0.1).unwrap();
        }
        assert_eq!(buf.num_vertices(), 12);
        for joint in 0..2 {
            let (a, b) = (joint * 4, (joint + 1) * 4);
            // End edge of one segment is the start edge of the next
            assert_eq!(buf.positions[a + 2], buf.positions[b]);
            assert_eq!(buf.positions[a + 3], buf.positions[b + 1]);
        }
        assert_close(buf.positions[2], Vec3::new(1.0, 0.05, 0.0));
    }

    #[test]
    fn test_right_angle_miter() {
        let (a, b, c) = (Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0));
        let mut buf = MeshBuffers::new();
        joined_line(&mut buf, a, b, a, c, Vec3::Z, Vec3::ONE, 0.2).unwrap();
        joined_line(&mut buf, b, c, a, c, Vec3::Z, Vec3::ONE, 0.2).unwrap();
        // Turning left: the left edge meets on the inside of the corner, the right edge on
        // the outside
        assert_close(buf.positions[2], Vec3::new(0.9, 0.1, 0.0));
        assert_close(buf.positions[3], Vec3::new(1.1, -0.1, 0.0));
        assert_eq!(buf.positions[2], buf.positions[4]);
        assert_eq!(buf.positions[3], buf.positions[5]);
        assert!(all_anticlockwise(&buf, Vec3::Z));
    }

    #[test]
    fn test_sharp_turn_is_limited() {
        let (a, b) = (Vec3::ZERO, Vec3::X);
        let c = Vec3::new(0.0, 0.01, 0.0);
        let mut buf = MeshBuffers::new();
        joined_line(&mut buf, a, b, a, c, Vec3::Z, Vec3::ONE, 0.2).unwrap();
        let offset = (buf.positions[2] - b).length();
        assert!(offset <= 0.1 * MITER_LIMIT + 1e-5);
    }

    #[test]
    fn test_fold_back_uses_perpendicular() {
        let (a, b) = (Vec3::ZERO, Vec3::X);
        let mut buf = MeshBuffers::new();
        joined_line(&mut buf, a, b, a, a, Vec3::Z, Vec3::ONE, 0.2).unwrap();
        assert_close(buf.positions[2], Vec3::new(1.0, 0.1, 0.0));
    }

    #[test]
    fn test_open_path_visual() {
        let path = LinePath::open(vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)]);
        let mut lv = LineVisual::new(path, LineStyle::default());
        let mesh = lv.finalize().unwrap();
        assert_eq!(mesh.num_vertices(), 8);
        assert_eq!(mesh.num_triangles(), 4);
        assert_eq!(mesh.positions[2], mesh.positions[4]);
    }

    #[test]
    fn test_closed_path_visual() {
        let square = vec![
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::Y,
        ];
        let mut lv = LineVisual::new(LinePath::closed(square), LineStyle::default());
        let mesh = lv.finalize().unwrap();
        assert_eq!(mesh.num_triangles(), 8);
        // The last segment closes onto the first
        assert_eq!(mesh.positions[12 + 2], mesh.positions[0]);
        assert_eq!(mesh.positions[12 + 3], mesh.positions[1]);
        assert!(all_anticlockwise(mesh, Vec3::Z));
    }

    #[test]
    fn test_path_caps_and_degenerate_points() {
        let pts = vec![Vec3::ZERO, Vec3::X, Vec3::X, Vec3::new(2.0, 0.0, 0.0)];
        let style = LineStyle {
            caps: LineCaps::round(),
            ..Default::default()
        };
        let mut lv = LineVisual::new(LinePath::open(pts), style);
        let mesh = lv.finalize().unwrap();
        // Repeated point skipped; two ribbons and two caps
        assert_eq!(mesh.num_triangles(), 2 * 2 + 2 * ROUND_CAP_SEGMENTS);
    }

    #[test]
    fn test_repeated_turn_point_keeps_the_miter() {
        let (a, b, c) = (Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0));
        let style = LineStyle {
            thickness: 0.2,
            ..Default::default()
        };
        let mut lv = LineVisual::new(LinePath::open(vec![a, b, b, c]), style);
        let mesh = lv.finalize().unwrap();
        assert_eq!(mesh.num_vertices(), 8);
        // Both ribbons share the mitered joint at b
        assert_close(mesh.positions[2], Vec3::new(0.9, 0.1, 0.0));
        assert_close(mesh.positions[3], Vec3::new(1.1, -0.1, 0.0));
        assert_eq!(mesh.positions[2], mesh.positions[4]);
        assert_eq!(mesh.positions[3], mesh.positions[5]);
    }

    #[test]
    fn test_closed_path_repeating_its_start() {
        let square = vec![
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::Y,
            Vec3::ZERO,
        ];
        let path = LinePath::closed(square);
        assert_eq!(path.deduplicated().points.len(), 4);
        assert_eq!(path.num_segments(), 4);

        let mut lv = LineVisual::new(path, LineStyle::default());
        let mesh = lv.finalize().unwrap();
        assert_eq!(mesh.num_triangles(), 8);
        // The corner at the origin is mitered on both sides
        assert_eq!(mesh.positions[12 + 2], mesh.positions[0]);
        assert_eq!(mesh.positions[12 + 3], mesh.positions[1]);
        assert_close(mesh.positions[0], Vec3::new(0.025, 0.025, 0.0));
    }

    #[test]
    fn test_end_cap_after_repeated_last_point() {
        let pts = vec![Vec3::ZERO, Vec3::X, Vec3::X];
        let style = LineStyle {
            caps: LineCaps::round(),
            ..Default::default()
        };
        let mut lv = LineVisual::new(LinePath::open(pts), style);
        let mesh = lv.finalize().unwrap();
        assert_eq!(mesh.num_triangles(), 2 + 2 * ROUND_CAP_SEGMENTS);
    }

    #[test]
    fn test_short_paths() {
        let mut lv = LineVisual::new(LinePath::open(vec![Vec3::ONE]), LineStyle::default());
        assert!(lv.finalize().unwrap().is_empty());
        let path = LinePath::closed(vec![Vec3::ZERO, Vec3::X]);
        assert!(!path.is_loop());
        assert_eq!(path.num_segments(), 1);
    }

    #[test]
    fn test_style_json() {
        let style = LineStyle {
            caps: LineCaps::round(),
            ..Default::default()
        };
        let json = serde_json::to_string(&style).unwrap();
        let back: LineStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }
}

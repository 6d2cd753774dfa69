//! Primitive rasterizers.
//!
//! Rasterizing a primitive means finding the update pattern points that lie inside (or close
//! enough to) it. Every primitive works in two phases:
//!
//! 1. Broad phase: the [`Grid`] enumerates cells overlapping the primitive's padded bounding box.
//! 2. Narrow phase: an exact point test is run against every point stored in those cells.
//!
//! Composite shapes (wireframes, meshes, text) are decomposed into capsules and triangles. The
//! output may therefore contain the same point more than once. [`Scene`](crate::scene::Scene)
//! deduplicates per object.

use crate::{
    dithering::Dithering,
    font,
    geometry::*,
    grid::{CellIndex, Grid},
    math::{arrange_bounding_box, bounding_box, dist2},
    pattern::UpdatePatternPoint,
    scene::{ClippingBehavior, Instruction, ObjectId, RenderedPoint},
    Vector3,
};
use alloc::vec::Vec;

/// Per-object attributes stamped onto every emitted point.
#[derive(Debug, Clone, Copy)]
pub struct PointStyle {
    pub object_id: ObjectId,
    pub color: Vector3,
    pub clipping: ClippingBehavior,
}

/// Narrow phase test for a capsule.
#[derive(Debug, Clone, Copy)]
pub struct CapsuleTest {
    start: Vector3,
    end: Vector3,
    axis: Vector3,
    len2: f32,
}

impl CapsuleTest {
    /// Returns `None` for a zero length axis.
    pub fn new(start: Vector3, end: Vector3) -> Option<Self> {
        let axis = end - start;
        let len2 = axis.norm_squared();

        if len2 <= 0.0 {
            return None;
        }

        Some(Self {
            start,
            end,
            axis,
            len2,
        })
    }

    /// Squared distance from `p` to the segment.
    pub fn distance2(&self, p: &Vector3) -> f32 {
        let v1 = p - self.start;

        if v1.dot(&self.axis) <= 0.0 {
            // Behind the start cap
            dist2(p, &self.start)
        } else if (p - self.end).dot(&self.axis) >= 0.0 {
            // Past the end cap
            dist2(p, &self.end)
        } else {
            self.axis.cross(&v1).norm_squared() / self.len2
        }
    }
}

/// Narrow phase test for a thick triangle.
#[derive(Debug, Clone, Copy)]
pub struct TriangleTest {
    /// Edge start vertices
    starts: [Vector3; 3],
    edges: [Vector3; 3],
    edge_len2: [f32; 3],
    /// Outward facing, in-plane edge normals
    edge_normals: [Vector3; 3],
    normal: Vector3,
    normal_len2: f32,
}

impl TriangleTest {
    /// Returns `None` for a zero area triangle.
    pub fn new(v1: Vector3, v2: Vector3, v3: Vector3) -> Option<Self> {
        let starts = [v1, v2, v3];
        let edges = [v2 - v1, v3 - v2, v1 - v3];

        let normal = edges[0].cross(&(v3 - v1));
        let normal_len2 = normal.norm_squared();

        if normal_len2 <= 0.0 {
            return None;
        }

        Some(Self {
            starts,
            edges,
            edge_len2: edges.map(|e| e.norm_squared()),
            edge_normals: edges.map(|e| e.cross(&normal)),
            normal,
            normal_len2,
        })
    }

    /// Whether `p` projects onto the inside of the triangle.
    pub fn is_inside(&self, p: &Vector3) -> bool {
        (0..3).all(|i| self.edge_normals[i].dot(&(p - self.starts[i])) <= 0.0)
    }

    /// Squared distance from `p` to the triangle.
    pub fn distance2(&self, p: &Vector3) -> f32 {
        if self.is_inside(p) {
            let d = self.normal.dot(&(p - self.starts[0]));
            return d * d / self.normal_len2;
        }

        (0..3)
            .map(|i| {
                let rel = p - self.starts[i];
                let t = if self.edge_len2[i] > 0.0 {
                    (self.edges[i].dot(&rel) / self.edge_len2[i]).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                (self.edges[i] * t - rel).norm_squared()
            })
            .fold(f32::INFINITY, f32::min)
    }
}

/// Whether `p` is strictly inside the box.
#[inline]
fn strictly_inside(min: &Vector3, max: &Vector3, p: &Vector3) -> bool {
    (0..3).all(|i| min[i] < p[i] && p[i] < max[i])
}

/// Twelve edges of an axis aligned box, as corner pairs.
///
/// Corners are encoded with 3 bits (x, y, z), each selecting the min or max coordinate. Edges
/// connect corners differing in exactly one bit, which excludes face and space diagonals.
pub fn cuboid_edges(min: &Vector3, max: &Vector3) -> [(Vector3, Vector3); 12] {
    let corner = |code: usize| {
        Vector3::new(
            if code & 1 != 0 { max.x } else { min.x },
            if code & 2 != 0 { max.y } else { min.y },
            if code & 4 != 0 { max.z } else { min.z },
        )
    };

    let mut edges = [(Vector3::zeros(), Vector3::zeros()); 12];
    let mut n = 0;

    for code in 0..8 {
        for bit in [1, 2, 4] {
            if code & bit == 0 {
                edges[n] = (corner(code), corner(code | bit));
                n += 1;
            }
        }
    }

    edges
}

/// Converts world space primitives into lit update pattern points.
pub struct Rasterizer<'a, D: ?Sized> {
    grid: &'a Grid,
    dithering: &'a D,
}

impl<'a, D: Dithering + ?Sized> Rasterizer<'a, D> {
    pub fn new(grid: &'a Grid, dithering: &'a D) -> Self {
        Self { grid, dithering }
    }

    /// Rasterizes a geometry, appending matched points to `out`.
    ///
    /// Primitives are expected in world space (see [`Geometry::transformed`]). Meshes and text
    /// are transformed here with `transformation`.
    pub fn draw(
        &self,
        geometry: &Geometry,
        transformation: &Transformation,
        style: &PointStyle,
        out: &mut Vec<RenderedPoint>,
    ) {
        match geometry {
            Geometry::Particle(p) => self.draw_particle(p, style, out),
            Geometry::Capsule(c) => self.draw_capsule(c, style, out),
            Geometry::Triangle(t) => self.draw_triangle(t, style, out),
            Geometry::Sphere(s) => self.draw_sphere(s, style, out),
            Geometry::Cuboid(c) => self.draw_cuboid(c, style, out),
            Geometry::Mesh(m) => self.draw_mesh(m, transformation, style, out),
            Geometry::Text(t) => self.draw_text(t, transformation, style, out),
        }
    }

    fn emit(&self, pt: &UpdatePatternPoint, style: &PointStyle, out: &mut Vec<RenderedPoint>) {
        out.push(RenderedPoint {
            object_id: style.object_id,
            routing: pt.routing,
            pos: pt.pos,
            normal: pt.normal,
            color: self.dithering.dither(style.color, &pt.pos),
            clipping: style.clipping,
            instruction: Instruction::On,
        });
    }

    fn scan(
        &self,
        cells: impl IntoIterator<Item = CellIndex>,
        style: &PointStyle,
        out: &mut Vec<RenderedPoint>,
        mut hit: impl FnMut(&Vector3) -> bool,
    ) {
        for idx in cells {
            for pt in self.grid.bucket(idx) {
                if hit(&pt.pos) {
                    self.emit(pt, style, out);
                }
            }
        }
    }

    /// Small particles fall into a single cell, which is then the only one searched.
    pub fn draw_particle(&self, p: &Particle, style: &PointStyle, out: &mut Vec<RenderedPoint>) {
        if !(p.radius > 0.0) {
            return;
        }

        let radius2 = p.radius * p.radius;
        let cells = self
            .grid
            .params()
            .calculate_indices_from_bb(&p.pos, &p.pos, p.radius);

        self.scan(cells, style, out, |pos| dist2(pos, &p.pos) <= radius2);
    }

    pub fn draw_capsule(&self, c: &Capsule, style: &PointStyle, out: &mut Vec<RenderedPoint>) {
        if !(c.radius > 0.0) {
            return;
        }

        let Some(test) = CapsuleTest::new(c.start, c.end) else {
            return;
        };

        let radius2 = c.radius * c.radius;
        let (min, max) = arrange_bounding_box(&c.start, &c.end);
        let cells = self
            .grid
            .params()
            .calculate_indices_from_bb(&min, &max, c.radius);

        self.scan(cells, style, out, |pos| test.distance2(pos) <= radius2);
    }

    pub fn draw_triangle(&self, t: &Triangle, style: &PointStyle, out: &mut Vec<RenderedPoint>) {
        let Some(test) = TriangleTest::new(t.v1, t.v2, t.v3) else {
            return;
        };

        let Some((min, max)) = bounding_box(&[t.v1, t.v2, t.v3]) else {
            return;
        };

        let thickness2 = t.thickness * t.thickness;
        let cells = self
            .grid
            .params()
            .calculate_indices_from_bb(&min, &max, t.thickness);

        self.scan(cells, style, out, |pos| test.distance2(pos) < thickness2);
    }

    pub fn draw_sphere(&self, s: &Sphere, style: &PointStyle, out: &mut Vec<RenderedPoint>) {
        if !(s.radius > 0.0) {
            return;
        }

        let radius2 = s.radius * s.radius;
        // Inner cutoff of the hollow shell
        let hollow = (s.thickness > 0.0).then(|| 2.0 * s.radius * s.thickness - radius2);

        let cells = self
            .grid
            .params()
            .calculate_indices_from_bb(&s.pos, &s.pos, s.radius);

        self.scan(cells, style, out, |pos| {
            let d2 = dist2(pos, &s.pos);
            d2 <= radius2 && hollow.map_or(true, |inner| d2 >= inner)
        });
    }

    pub fn draw_cuboid(&self, c: &Cuboid, style: &PointStyle, out: &mut Vec<RenderedPoint>) {
        let (min, max) = arrange_bounding_box(&c.v1, &c.v2);

        if c.is_wireframe {
            for (start, end) in cuboid_edges(&min, &max) {
                self.draw_capsule(
                    &Capsule {
                        start,
                        end,
                        radius: c.thickness,
                    },
                    style,
                    out,
                );
            }
            return;
        }

        let shell = Vector3::repeat(c.thickness);
        let (inner_min, inner_max) = (min + shell, max - shell);
        let cells = self.grid.params().calculate_indices_from_bb(&min, &max, 0.0);

        self.scan(cells, style, out, |pos| {
            strictly_inside(&min, &max, pos)
                && !(c.thickness > 0.0 && strictly_inside(&inner_min, &inner_max, pos))
        });
    }

    pub fn draw_mesh(
        &self,
        m: &MeshGeometry,
        transformation: &Transformation,
        style: &PointStyle,
        out: &mut Vec<RenderedPoint>,
    ) {
        let t = transformation.compile();
        let mesh = &m.mesh;
        let world = |idx: usize| mesh.vertices.get(idx).map(|v| t.point(v));

        if m.is_wireframe {
            for (a, b) in mesh.edges() {
                let (Some(start), Some(end)) = (world(a), world(b)) else {
                    log::warn!("mesh edge ({a}, {b}) references a missing vertex, skipping");
                    continue;
                };

                self.draw_capsule(
                    &Capsule {
                        start,
                        end,
                        radius: m.thickness,
                    },
                    style,
                    out,
                );
            }
        } else {
            for face in &mesh.faces {
                let Some([v1, v2, v3]) = mesh.face_vertices(face) else {
                    log::warn!("mesh face {face:?} references a missing vertex, skipping");
                    continue;
                };

                self.draw_triangle(
                    &Triangle {
                        v1: t.point(&v1),
                        v2: t.point(&v2),
                        v3: t.point(&v3),
                        thickness: m.thickness,
                    },
                    style,
                    out,
                );
            }
        }
    }

    pub fn draw_text(
        &self,
        text: &Text,
        transformation: &Transformation,
        style: &PointStyle,
        out: &mut Vec<RenderedPoint>,
    ) {
        let t = transformation.compile();
        let size = text.glyph_size;

        let map = |x: f32, y: f32| {
            t.point(&(text.anchor + text.orientation.map(x * size, y * size)))
        };

        for (i, c) in text.text.chars().enumerate() {
            let cursor = i as f32 * font::ADVANCE;

            for [x1, y1, x2, y2] in font::glyph(c) {
                self.draw_capsule(
                    &Capsule {
                        start: map(cursor + x1, *y1),
                        end: map(cursor + x2, *y2),
                        radius: text.thickness,
                    },
                    style,
                    out,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color1b, testing::lattice};
    use alloc::{collections::BTreeSet, sync::Arc, vec};

    fn style() -> PointStyle {
        PointStyle {
            object_id: 7,
            color: Vector3::new(1.0, 0.0, 0.0),
            clipping: ClippingBehavior::Add,
        }
    }

    fn grid() -> Grid {
        Grid::build(lattice(6), 10).unwrap()
    }

    fn draw(grid: &Grid, g: Geometry) -> Vec<RenderedPoint> {
        let mut out = Vec::new();
        let t = Transformation::default();
        Rasterizer::new(grid, &()).draw(&g, &t, &style(), &mut out);
        out
    }

    fn positions(out: &[RenderedPoint]) -> BTreeSet<[i32; 3]> {
        out.iter()
            .map(|p| [p.pos.x as i32, p.pos.y as i32, p.pos.z as i32])
            .collect()
    }

    fn brute_force(grid: &Grid, hit: impl Fn(&Vector3) -> bool) -> BTreeSet<[i32; 3]> {
        grid.points()
            .filter(|p| hit(&p.pos))
            .map(|p| [p.pos.x as i32, p.pos.y as i32, p.pos.z as i32])
            .collect()
    }

    #[test]
    fn capsule_distance() {
        let test = CapsuleTest::new(Vector3::zeros(), Vector3::new(4.0, 0.0, 0.0)).unwrap();
        assert_eq!(test.distance2(&Vector3::new(2.0, 0.0, 0.0)), 0.0);
        assert_eq!(test.distance2(&Vector3::new(2.0, 3.0, 0.0)), 9.0);
        assert_eq!(test.distance2(&Vector3::new(-1.0, 1.0, 0.0)), 2.0);
        assert_eq!(test.distance2(&Vector3::new(6.0, 0.0, 0.0)), 4.0);
        assert!(CapsuleTest::new(Vector3::zeros(), Vector3::zeros()).is_none());
    }

    #[test]
    fn triangle_distance() {
        let test = TriangleTest::new(
            Vector3::zeros(),
            Vector3::new(4.0, 0.0, 0.0),
            Vector3::new(0.0, 4.0, 0.0),
        )
        .unwrap();

        // Above the interior
        assert!(test.is_inside(&Vector3::new(1.0, 1.0, 2.0)));
        assert_eq!(test.distance2(&Vector3::new(1.0, 1.0, 2.0)), 4.0);
        // Outside, nearest to an edge
        assert!(!test.is_inside(&Vector3::new(2.0, -1.0, 0.0)));
        assert_eq!(test.distance2(&Vector3::new(2.0, -1.0, 0.0)), 1.0);
        // Outside, nearest to a vertex
        assert_eq!(test.distance2(&Vector3::new(-1.0, -1.0, 0.0)), 2.0);

        assert!(TriangleTest::new(
            Vector3::zeros(),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(2.0, 2.0, 2.0)
        )
        .is_none());
    }

    #[test]
    fn particle_matches_brute_force() {
        let grid = grid();

        for (pos, radius) in [
            (Vector3::new(0.2, 0.1, -0.3), 0.9),
            (Vector3::new(0.1, -0.1, 0.05), 0.3),
            (Vector3::new(-5.5, 5.5, 5.9), 2.5),
        ] {
            let out = draw(&grid, Geometry::Particle(Particle { pos, radius }));
            let expected = brute_force(&grid, |p| dist2(p, &pos) <= radius * radius);
            assert!(!expected.is_empty());
            assert_eq!(positions(&out), expected);
            assert_eq!(out.len(), expected.len());
            assert!(out.iter().all(|p| p.color == Color1b::RED && p.object_id == 7));
        }

        // A particle inside one cell only searches that cell.
        let p = Vector3::new(0.1, -0.1, 0.05);
        let params = grid.params();
        assert_eq!(
            params.calculate_indices_from_bb(&p, &p, 0.3),
            [params.calculate_index(&p).unwrap()]
        );
    }

    #[test]
    fn capsule_matches_brute_force() {
        let grid = grid();
        let start = Vector3::new(-4.2, -1.1, 0.3);
        let end = Vector3::new(3.7, 2.4, -1.6);
        let radius = 1.7;
        let out = draw(&grid, Geometry::Capsule(Capsule { start, end, radius }));

        let test = CapsuleTest::new(start, end).unwrap();
        let expected = brute_force(&grid, |p| test.distance2(p) <= radius * radius);
        assert!(!expected.is_empty());
        assert_eq!(positions(&out), expected);
        assert_eq!(out.len(), expected.len());
    }

    #[test]
    fn capsule_midpoint_and_cap() {
        let grid = grid();
        let out = draw(
            &grid,
            Geometry::Capsule(Capsule {
                start: Vector3::new(-2.0, 0.0, 0.0),
                end: Vector3::new(2.0, 0.0, 0.0),
                radius: 0.5,
            }),
        );
        let got = positions(&out);
        assert!(got.contains(&[0, 0, 0]));
        // 1.0 past the end cap, beyond the radius
        assert!(!got.contains(&[3, 0, 0]));
        assert_eq!(got.len(), 5);
    }

    #[test]
    fn triangle_matches_brute_force() {
        let grid = grid();
        let (v1, v2, v3) = (
            Vector3::new(-4.5, -3.2, -1.0),
            Vector3::new(4.1, -2.0, 1.5),
            Vector3::new(0.3, 4.4, 0.2),
        );
        let out = draw(
            &grid,
            Geometry::Triangle(Triangle {
                v1,
                v2,
                v3,
                thickness: 0.8,
            }),
        );

        let test = TriangleTest::new(v1, v2, v3).unwrap();
        let expected = brute_force(&grid, |p| test.distance2(p) < 0.64);
        assert!(!expected.is_empty());
        assert_eq!(positions(&out), expected);
    }

    #[test]
    fn sphere_solid_and_hollow() {
        let grid = grid();
        let pos = Vector3::new(0.1, -0.2, 0.3);

        let solid = draw(
            &grid,
            Geometry::Sphere(Sphere {
                pos,
                radius: 4.2,
                thickness: 0.0,
            }),
        );
        let expected = brute_force(&grid, |p| dist2(p, &pos) <= 4.2 * 4.2);
        assert_eq!(positions(&solid), expected);

        let hollow = draw(
            &grid,
            Geometry::Sphere(Sphere {
                pos,
                radius: 4.2,
                thickness: 3.0,
            }),
        );
        let inner = 2.0 * 4.2 * 3.0 - 4.2 * 4.2;
        let expected = brute_force(&grid, |p| {
            let d2 = dist2(p, &pos);
            d2 <= 4.2 * 4.2 && d2 >= inner
        });
        assert_eq!(positions(&hollow), expected);
        assert!(hollow.len() < solid.len());
        assert!(!positions(&hollow).contains(&[0, 0, 0]));
    }

    #[test]
    fn cuboid_solid_and_shell() {
        let grid = grid();
        let v1 = Vector3::new(2.5, 2.5, 2.5);
        let v2 = Vector3::new(-2.5, -2.5, -2.5);

        let solid = draw(
            &grid,
            Geometry::Cuboid(Cuboid {
                v1,
                v2,
                thickness: 0.0,
                is_wireframe: false,
            }),
        );
        assert_eq!(solid.len(), 125);

        let shell = draw(
            &grid,
            Geometry::Cuboid(Cuboid {
                v1,
                v2,
                thickness: 1.0,
                is_wireframe: false,
            }),
        );
        // Inner 3x3x3 core removed
        assert_eq!(shell.len(), 125 - 27);
    }

    #[test]
    fn cuboid_wireframe_skips_diagonals() {
        let min = Vector3::zeros();
        let max = Vector3::new(1.0, 2.0, 3.0);
        let edges = cuboid_edges(&min, &max);

        for (a, b) in edges {
            let differing = (0..3).filter(|&i| a[i] != b[i]).count();
            assert_eq!(differing, 1);
        }

        let grid = grid();
        let out = draw(
            &grid,
            Geometry::Cuboid(Cuboid {
                v1: Vector3::new(-3.0, -3.0, -3.0),
                v2: Vector3::new(3.0, 3.0, 3.0),
                thickness: 0.5,
                is_wireframe: true,
            }),
        );
        let got = positions(&out);
        // 12 edges of 7 points, corners shared by 3 edges
        assert_eq!(got.len(), 12 * 5 + 8);
        assert!(!got.contains(&[0, 0, 0]));
        assert!(!got.contains(&[0, 0, 3]));
    }

    #[test]
    fn degenerate_geometry_is_empty() {
        let grid = grid();
        let p = Vector3::new(1.0, 1.0, 1.0);

        for g in [
            Geometry::Capsule(Capsule {
                start: p,
                end: p,
                radius: 2.0,
            }),
            Geometry::Triangle(Triangle {
                v1: p,
                v2: p * 2.0,
                v3: p * 3.0,
                thickness: 2.0,
            }),
            Geometry::Particle(Particle { pos: p, radius: 0.0 }),
            Geometry::Sphere(Sphere {
                pos: p,
                radius: 0.0,
                thickness: 0.0,
            }),
        ] {
            assert!(draw(&grid, g).is_empty());
        }
    }

    #[test]
    fn mesh_wireframe_and_solid() {
        let grid = grid();
        let mesh = Arc::new(Mesh::new(
            vec![
                Vector3::new(-2.0, -2.0, 0.0),
                Vector3::new(2.0, -2.0, 0.0),
                Vector3::new(2.0, 2.0, 0.0),
                Vector3::new(-2.0, 2.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3], [0, 2, 99]],
        ));

        let solid = draw(
            &grid,
            Geometry::Mesh(MeshGeometry {
                mesh: mesh.clone(),
                is_wireframe: false,
                thickness: 0.5,
            }),
        );
        // The 5x5 square in the z = 0 plane, with the shared diagonal drawn twice.
        assert_eq!(positions(&solid).len(), 25);

        let wire = positions(&draw(
            &grid,
            Geometry::Mesh(MeshGeometry {
                mesh,
                is_wireframe: true,
                thickness: 0.1,
            }),
        ));
        assert!(wire.contains(&[0, 0, 0]));
        assert!(wire.contains(&[-2, 0, 0]));
        assert!(!wire.contains(&[1, 0, 0]));
    }

    #[test]
    fn mesh_follows_transformation() {
        let grid = grid();
        let mesh = Arc::new(Mesh::new(
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        ));
        let t = Transformation {
            translation: Vector3::new(0.0, 0.0, 3.0),
            scale: Vector3::new(2.0, 2.0, 1.0),
            ..Default::default()
        };

        let mut out = Vec::new();
        Rasterizer::new(&grid, &()).draw(
            &Geometry::Mesh(MeshGeometry {
                mesh,
                is_wireframe: false,
                thickness: 0.5,
            }),
            &t,
            &style(),
            &mut out,
        );

        let got = positions(&out);
        assert!(got.contains(&[2, 0, 3]));
        assert!(got.contains(&[1, 1, 3]));
        assert!(got.iter().all(|p| p[2] == 3));
    }

    #[test]
    fn text_lays_out_along_orientation() {
        let grid = grid();
        let out = draw(
            &grid,
            Geometry::Text(Text {
                text: "L".into(),
                anchor: Vector3::new(0.0, -2.0, 0.0),
                glyph_size: 4.0,
                thickness: 0.3,
                orientation: TextOrientation::NegZ,
            }),
        );

        // NegZ maps glyph (x, y) to world (x, -y): "L" is a vertical bar at x = 0 going down
        // from the anchor, and a horizontal bar along y = -2.
        let got = positions(&out);
        assert!(got.contains(&[0, -2, 0]));
        assert!(got.contains(&[0, -6, 0]));
        assert!(got.contains(&[4, -2, 0]));
        assert!(!got.contains(&[4, -6, 0]));
        assert!(got.iter().all(|p| p[2] == 0));

        let blank = draw(
            &grid,
            Geometry::Text(Text {
                text: "  ".into(),
                anchor: Vector3::zeros(),
                glyph_size: 4.0,
                thickness: 0.3,
                orientation: TextOrientation::PosX,
            }),
        );
        assert!(blank.is_empty());
    }
}

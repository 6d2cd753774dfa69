//! Geometry model.
//!
//! All coordinates are in object space. An [`Object`](crate::scene::Object) pairs a
//! [`Geometry`] with a [`Transformation`], which is applied right before rasterization.

use crate::{
    math::{bounding_box, create_transform, transform_about},
    Transform, Vector3,
};
use alloc::{collections::BTreeSet, sync::Arc, vec::Vec};

/// Translation, Euler XYZ rotation (radians) and scale about a pivot point.
///
/// Rotation and scale are applied about `pivot`, translation is independent of it:
/// `pivot + M · (v - pivot)`, where `M = T · Rx · Ry · Rz · S`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transformation {
    pub translation: Vector3,
    pub rotation: Vector3,
    pub scale: Vector3,
    pub pivot: Vector3,
}

impl Default for Transformation {
    fn default() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            pivot: Vector3::zeros(),
        }
    }
}

impl Transformation {
    pub fn matrix(&self) -> Transform {
        create_transform(self.translation, self.rotation, self.scale)
    }

    /// Largest absolute scale component.
    ///
    /// Round primitives cannot represent non-uniform scale, so their radii use this instead.
    pub fn max_scale(&self) -> f32 {
        self.scale.iter().fold(0.0f32, |m, s| m.max(libm::fabsf(*s)))
    }

    /// Prepares the transformation for repeated point application.
    pub fn compile(&self) -> CompiledTransform {
        CompiledTransform {
            matrix: self.matrix(),
            pivot: self.pivot,
            max_scale: self.max_scale(),
        }
    }
}

/// A [`Transformation`] with its matrix already composed.
#[derive(Debug, Clone, Copy)]
pub struct CompiledTransform {
    matrix: Transform,
    pivot: Vector3,
    max_scale: f32,
}

impl CompiledTransform {
    pub fn point(&self, p: &Vector3) -> Vector3 {
        transform_about(&self.matrix, &self.pivot, p)
    }

    pub fn length(&self, l: f32) -> f32 {
        l * self.max_scale
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    pub pos: Vector3,
    pub radius: f32,
}

/// A line segment with round caps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capsule {
    pub start: Vector3,
    pub end: Vector3,
    pub radius: f32,
}

/// A triangle, lit up to `thickness` away from its surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    pub v1: Vector3,
    pub v2: Vector3,
    pub v3: Vector3,
    pub thickness: f32,
}

/// Solid ball for `thickness == 0`, hollow shell otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    pub pos: Vector3,
    pub radius: f32,
    pub thickness: f32,
}

/// Axis aligned box spanned by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cuboid {
    pub v1: Vector3,
    pub v2: Vector3,
    /// Wall thickness of a hollow box, or edge radius of a wireframe. `0` is a solid box.
    pub thickness: f32,
    pub is_wireframe: bool,
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    pub vertices: Vec<Vector3>,
    pub faces: Vec<[usize; 3]>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vector3>, faces: Vec<[usize; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Moves the mesh so that its bounding box is centered at the origin.
    pub fn center(&mut self) {
        let Some((min, max)) = bounding_box(&self.vertices) else {
            return;
        };

        let mid = (min + max) / 2.0;

        for v in &mut self.vertices {
            *v -= mid;
        }
    }

    /// Unique undirected edges of all faces, as sorted vertex index pairs.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = BTreeSet::new();

        for [a, b, c] in &self.faces {
            for (i, j) in [(*a, *b), (*b, *c), (*c, *a)] {
                if i != j {
                    edges.insert((i.min(j), i.max(j)));
                }
            }
        }

        edges.into_iter().collect()
    }

    /// Vertices of a face, or `None` if it references a missing vertex.
    pub fn face_vertices(&self, face: &[usize; 3]) -> Option<[Vector3; 3]> {
        let [a, b, c] = *face;
        Some([
            *self.vertices.get(a)?,
            *self.vertices.get(b)?,
            *self.vertices.get(c)?,
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshGeometry {
    pub mesh: Arc<Mesh>,
    pub is_wireframe: bool,
    /// Edge radius for wireframes, surface thickness for solid meshes. In world units.
    pub thickness: f32,
}

/// Axis the text faces, i.e. which two world axes glyph x/y are laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextOrientation {
    #[default]
    PosZ,
    NegZ,
    PosX,
    NegX,
    PosY,
    NegY,
}

impl TextOrientation {
    /// Maps glyph space `(x, y)` to a world space offset.
    pub fn map(&self, x: f32, y: f32) -> Vector3 {
        match self {
            Self::PosZ => Vector3::new(-x, -y, 0.0),
            Self::NegZ => Vector3::new(x, -y, 0.0),
            Self::PosX => Vector3::new(0.0, -x, y),
            Self::NegX => Vector3::new(0.0, x, y),
            Self::PosY => Vector3::new(-x, 0.0, y),
            Self::NegY => Vector3::new(x, 0.0, y),
        }
    }
}

/// Monospaced stroke text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text {
    pub text: Arc<str>,
    /// Bottom left corner of the first glyph.
    pub anchor: Vector3,
    /// Side length of a glyph cell.
    pub glyph_size: f32,
    /// Stroke radius, in world units.
    pub thickness: f32,
    pub orientation: TextOrientation,
}

/// Describes an object shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    Particle(Particle),
    Capsule(Capsule),
    Triangle(Triangle),
    Sphere(Sphere),
    Cuboid(Cuboid),
    Mesh(MeshGeometry),
    Text(Text),
}

impl Geometry {
    /// Applies a transformation to every position of the geometry.
    ///
    /// Radii and thicknesses are scaled by [`Transformation::max_scale`]. Meshes and text are
    /// returned unchanged, because their rasterizer transforms each vertex/stroke itself.
    pub fn transformed(&self, transformation: &Transformation) -> Geometry {
        let t = transformation.compile();

        match self {
            Self::Particle(Particle { pos, radius }) => Self::Particle(Particle {
                pos: t.point(pos),
                radius: t.length(*radius),
            }),
            Self::Capsule(Capsule { start, end, radius }) => Self::Capsule(Capsule {
                start: t.point(start),
                end: t.point(end),
                radius: t.length(*radius),
            }),
            Self::Triangle(Triangle {
                v1,
                v2,
                v3,
                thickness,
            }) => Self::Triangle(Triangle {
                v1: t.point(v1),
                v2: t.point(v2),
                v3: t.point(v3),
                thickness: t.length(*thickness),
            }),
            Self::Sphere(Sphere {
                pos,
                radius,
                thickness,
            }) => Self::Sphere(Sphere {
                pos: t.point(pos),
                radius: t.length(*radius),
                thickness: t.length(*thickness),
            }),
            Self::Cuboid(Cuboid {
                v1,
                v2,
                thickness,
                is_wireframe,
            }) => Self::Cuboid(Cuboid {
                v1: t.point(v1),
                v2: t.point(v2),
                thickness: t.length(*thickness),
                is_wireframe: *is_wireframe,
            }),
            Self::Mesh(_) | Self::Text(_) => self.clone(),
        }
    }
}

impl From<Particle> for Geometry {
    fn from(v: Particle) -> Self {
        Self::Particle(v)
    }
}

impl From<Capsule> for Geometry {
    fn from(v: Capsule) -> Self {
        Self::Capsule(v)
    }
}

impl From<Triangle> for Geometry {
    fn from(v: Triangle) -> Self {
        Self::Triangle(v)
    }
}

impl From<Sphere> for Geometry {
    fn from(v: Sphere) -> Self {
        Self::Sphere(v)
    }
}

impl From<Cuboid> for Geometry {
    fn from(v: Cuboid) -> Self {
        Self::Cuboid(v)
    }
}

impl From<MeshGeometry> for Geometry {
    fn from(v: MeshGeometry) -> Self {
        Self::Mesh(v)
    }
}

impl From<Text> for Geometry {
    fn from(v: Text) -> Self {
        Self::Text(v)
    }
}

//! Vector and matrix helpers shared by the grid and the rasterizers.

use crate::{Matrix4, Transform, Vector3};
use nalgebra as na;

/// Squared euclidean distance.
#[inline]
pub fn dist2(a: &Vector3, b: &Vector3) -> f32 {
    (a - b).norm_squared()
}

/// Orders two opposite corners into `(min, max)`.
#[inline]
pub fn arrange_bounding_box(a: &Vector3, b: &Vector3) -> (Vector3, Vector3) {
    (a.inf(b), a.sup(b))
}

/// Computes bounding box
///
/// Returns `None` for an empty list.
pub fn bounding_box(v: &[Vector3]) -> Option<(Vector3, Vector3)> {
    let first = v.first()?;
    Some(
        v.iter()
            .fold((*first, *first), |(min, max), v| (min.inf(v), max.sup(v))),
    )
}

/// Floors every component into an integer cell coordinate.
#[inline]
pub fn floor_cell(v: &Vector3) -> [i64; 3] {
    [
        libm::floorf(v.x) as i64,
        libm::floorf(v.y) as i64,
        libm::floorf(v.z) as i64,
    ]
}

/// Rotation matrix for Euler angles applied as `Rx · Ry · Rz`.
pub fn euler_xyz(rotation: &Vector3) -> Matrix4 {
    let rx = na::Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x);
    let ry = na::Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y);
    let rz = na::Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z);
    (rx * ry * rz).to_homogeneous()
}

pub fn create_transform(translation: Vector3, rotation: Vector3, scale: Vector3) -> Transform {
    let translation = na::Translation3::from(translation).to_homogeneous();
    let rotation_matrix = euler_xyz(&rotation);
    let scale_matrix = Matrix4::new_nonuniform_scaling(&scale);

    // T * R * S, so scale is applied first and translation stays independent of both.
    Transform::from_matrix_unchecked(translation * rotation_matrix * scale_matrix)
}

/// Applies `pivot + M · (point - pivot)`.
#[inline]
pub fn transform_about(transform: &Transform, pivot: &Vector3, point: &Vector3) -> Vector3 {
    pivot + transform.transform_point(&na::Point3::from(point - pivot)).coords
}

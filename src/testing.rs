use crate::{
    pattern::{DisplayRouting, UpdatePatternPoint},
    Vector3,
};
use alloc::vec::Vec;

/// Unit spaced lattice covering `[-n, n]` on every axis.
pub(crate) fn lattice(n: i32) -> Vec<UpdatePatternPoint> {
    let mut pts = Vec::new();

    for x in -n..=n {
        for y in -n..=n {
            for z in -n..=n {
                pts.push(UpdatePatternPoint::new(
                    DisplayRouting {
                        slice: (x + n) as u16,
                        column: (y + n) as u16,
                        row: (z + n) as u16,
                        flags: 0,
                    },
                    Vector3::new(x as f32, y as f32, z as f32),
                    Vector3::new(0.0, 0.0, 1.0),
                ));
            }
        }
    }

    pts
}

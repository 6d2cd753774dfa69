//! Extra display side structures.
//!
//! The core only produces [`Render`]s. Everything here consumes them: resolving overlapping
//! objects into a single color per point, previewing a volume on a terminal, or dumping frames
//! to point cloud files.

use crate::scene::Render;

pub mod composite;
pub mod preview;
#[cfg(feature = "std")]
pub mod ply;

/// Consumer of renders.
///
/// Publishing is one way. The scene never waits for a sink, and a sink must not expect to be
/// called for every frame of a scene it did not observe from the start.
pub trait RenderSink {
    type Error;

    fn publish(&mut self, render: &Render) -> Result<(), Self::Error>;
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    type Error = T::Error;

    fn publish(&mut self, render: &Render) -> Result<(), Self::Error> {
        (**self).publish(render)
    }
}

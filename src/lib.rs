//! # voxrend
//!
//! ```text
//!        .  :  .            .  :  .
//!     .  :  |  :  .      .  :  |  :  .
//!   .  : | @@@@@ | :  .  :  | ### |  :  .
//!  .  :| @@@@@@@@@ |:    :| ##   ## |:  .
//!  .  :| @@@voxrend@@@ |:| #########|:  .
//!  .  :| @@@@@@@@@ |:    :| ##   ## |:  .
//!   .  : | @@@@@ | :  .  :  | ### |  :  .
//!     .  :  |  :  .      .  :  |  :  .
//! ```
//!
//! ## Rasterizer for volumetric LED displays
//!
//! `voxrend` is a `no_std` compatible scene rasterization core for displays that sweep a set of
//! LEDs through space. Such a display cannot light arbitrary positions: over one refresh cycle
//! it can only reach a fixed set of physical points, the *update pattern*. Rendering a scene
//! thus means deciding, for each of these points, whether it is lit and in which color.
//!
//! Rendering happens in several stages:
//!
//! - The update pattern is bucketed into a uniform [`grid`] once.
//! - Each changed object is [transformed](geometry::Transformation) into world space and
//!   [rasterized](raster) against the grid.
//! - Every matched point is quantized to 1 bit per channel with a 3D [`dithering`] pattern.
//! - The new point set of each object is diffed against its previous one, so that a
//!   [`Render`](scene::Render) only carries the turn-on and turn-off instructions that changed.
//!
//! Entrypoint to rendering is the [`Scene`](scene::Scene) struct.
//!
//! The [`extra`] module holds display side helpers: composing overlapping objects, a terminal
//! preview (with `crossterm` feature), and point cloud dumps (with `std` feature).
//!
//! ## Example
//!
//! Please see [`demos/volume.rs`](demos/volume.rs) for usage sample.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use nalgebra as na;

pub mod color;
pub mod config;
pub mod dithering;
pub mod error;
pub mod extra;
pub mod font;
pub mod geometry;
pub mod grid;
pub mod math;
pub mod pattern;
pub mod raster;
pub mod scene;

#[cfg(test)]
mod testing;

pub use config::SceneConfig;
pub use error::{Error, Result};
pub use scene::{ClippingBehavior, ObjectId, Render, RenderedPoint, Scene};

pub type Transform = na::Transform3<f32>;
pub type Vector3 = na::Vector3<f32>;
pub type Matrix4 = na::Matrix4<f32>;

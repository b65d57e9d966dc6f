//! Wheel model shared by the spin controller and the renderer.
//!
//! - `geometry`: segment layout and angle mapping
//! - `animation`: eased rotation of an in-flight spin
//! - `pointer`: the fixed triangle pointer

pub mod animation;
pub mod geometry;
pub mod pointer;

pub use animation::Animation;
pub use geometry::Fill;
pub use pointer::{Bounds, Pointer};

//! Application state management module.
//!
//! This module contains the core state of the application:
//! - `spin`: the spin controller and the wheel state it owns
//! - `random`: random sources the controller draws from
//! - `State`: everything the UI loop holds and the renderer reads

pub mod random;
pub mod spin;

#[cfg(test)]
pub use random::FixedSource;
pub use random::{RngSource, SpinSource};
pub use spin::Phase;

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;

//! Reusable UI widget components.
//!
//! This module contains reusable widget components such as spinners, large
//! digits and styling utilities.

pub mod big_text;
pub mod spinner;
pub mod styling;

#![forbid(unsafe_code)]

//! Core geometric primitives shared by the cleave layout solver.

pub mod geometry;

pub use geometry::{Rect, Sides, Size};

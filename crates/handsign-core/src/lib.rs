//! handsign Core - Fundamental types and primitives
//!
//! This crate defines the types shared by every handsign crate:
//! - Landmarks and 21-point landmark frames (HandLandmark, Landmark, LandmarkFrame)
//! - Gesture labels (Gesture)
//! - Planar geometry over landmarks (extension, folding, distances, angles)
//! - Error types

pub mod error;
pub mod geometry;
pub mod gesture;
pub mod landmark;

pub use error::*;
pub use geometry::*;
pub use gesture::*;
pub use landmark::*;

//! handsign Samples - Labelled landmark frames on disk
//!
//! Recorded poses are kept as one JSON file per sample, grouped in one
//! directory per gesture, so they can be reloaded to check the classifier
//! against real captures.

pub mod config;
pub mod dataset;
pub mod error;
pub mod sample;
pub mod store;

pub use config::*;
pub use dataset::*;
pub use error::*;
pub use sample::*;
pub use store::*;

//! handsign Classify - Single-frame hand gesture classification
//!
//! Maps one 21-point landmark frame to exactly one [`Gesture`] by testing a
//! fixed, priority-ordered list of geometric predicates:
//! - `thresholds`: empirically tuned margins, kept as named constants
//! - `predicates`: one pure test per gesture
//! - `priority`: the ordered (gesture, predicate) list, first match wins
//! - `classifier`: stateless dispatch, frame validation
//! - `poses`: hand-built reference frames for each static gesture
//!
//! ```rust
//! use handsign_classify::{classify, poses};
//! use handsign_core::Gesture;
//!
//! assert_eq!(classify(&poses::hello()), Gesture::Hello);
//! ```
//!
//! [`Gesture`]: handsign_core::Gesture

pub mod classifier;
pub mod poses;
pub mod predicates;
pub mod priority;
pub mod thresholds;

pub use classifier::*;
pub use predicates::Predicate;
pub use priority::*;

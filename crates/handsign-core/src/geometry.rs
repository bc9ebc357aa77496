//! Planar geometry over landmarks
//!
//! Image y grows downward, so a fingertip "above" its joint has the
//! smaller y. Every test here is a strict comparison; coincident points are
//! neither extended nor folded.

use crate::Landmark;

/// Euclidean distance in the image plane (z ignored)
#[inline]
pub fn planar_distance(a: &Landmark, b: &Landmark) -> f64 {
    a.planar_distance(b)
}

/// Absolute horizontal offset between two landmarks
#[inline]
pub fn horizontal_offset(a: &Landmark, b: &Landmark) -> f64 {
    (a.x - b.x).abs()
}

/// Tip is above its joint
#[inline]
pub fn is_extended(tip: &Landmark, joint: &Landmark) -> bool {
    tip.y < joint.y
}

/// Tip is above its joint by more than `margin`
#[inline]
pub fn is_extended_by(tip: &Landmark, joint: &Landmark, margin: f64) -> bool {
    tip.y < joint.y - margin
}

/// Tip is below its joint
#[inline]
pub fn is_folded(tip: &Landmark, joint: &Landmark) -> bool {
    tip.y > joint.y
}

/// Tip is below its joint by more than `margin`.
///
/// A negative margin turns this into a tolerance: the tip may sit up to
/// `-margin` above the joint and still count as folded.
#[inline]
pub fn is_folded_by(tip: &Landmark, joint: &Landmark, margin: f64) -> bool {
    tip.y > joint.y + margin
}

/// Direction of the joint-to-tip vector in radians, in (-π, π]
#[inline]
pub fn pointing_angle(tip: &Landmark, joint: &Landmark) -> f64 {
    (tip.y - joint.y).atan2(tip.x - joint.x)
}

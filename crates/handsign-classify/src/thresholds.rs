//! Gesture thresholds
//!
//! Margins are in normalized image units (the frame spans 0.0 to 1.0) except
//! where noted. They were tuned by hand against live camera input and some
//! are deliberately asymmetric; changing any of them moves a classification
//! boundary.

// I Love You

/// Thumb counts as extended sideways when its tip is this far from its IP joint in x
pub const THUMB_SIDEWAYS_OFFSET: f64 = 0.1;

// Good / Bad

/// Thumb tip must be farther than this from the middle finger base
pub const THUMB_CLEAR_OF_PALM: f64 = 0.2;

/// Minimum thumb tip to thumb base distance
pub const THUMB_MIN_LENGTH: f64 = 0.12;

/// Thumb tip must rise (or drop) past its base by more than this
pub const THUMB_BEYOND_BASE: f64 = 0.08;

/// Thumb tip must rise (or drop) past the wrist by more than this
pub const THUMB_BEYOND_WRIST: f64 = 0.05;

// Yes

/// Thumb tip must be closer than this to the middle finger base
pub const FIST_THUMB_TUCK: f64 = 0.08;

/// Fingertips may sit this far above the middle finger base and still count as folded
pub const FIST_FOLD_TOLERANCE: f64 = 0.02;

/// Maximum horizontal spread between index and pinky tips
pub const FIST_MAX_SPREAD: f64 = 0.2;

// I/I'm

/// Thumb tip must be closer than this to the index finger base
pub const POINT_THUMB_TUCK: f64 = 0.15;

/// Index tip must rise past its PIP joint by more than this
pub const POINT_EXTENSION: f64 = 0.05;

/// Index PIP joint minus tip height must exceed this
pub const POINT_CLEAR_EXTENSION: f64 = 0.08;

/// Maximum horizontal drift between index tip and PIP joint
pub const POINT_MAX_DRIFT: f64 = 0.05;

// No

/// Index and middle tips must rise past their PIP joints by more than this
pub const PAIR_EXTENSION: f64 = 0.05;

/// Index and middle tips must rise past their base joints by more than this
pub const PAIR_CLEAR_EXTENSION: f64 = 0.1;

/// Maximum horizontal gap between index and middle tips
pub const PAIR_MAX_GAP: f64 = 0.08;

/// Maximum difference between index and middle pointing angles, in radians
pub const PAIR_MAX_ANGLE: f64 = 0.3;

// Okay

/// Thumb and index tips closer than this close the loop
pub const OKAY_LOOP_DISTANCE: f64 = 0.05;

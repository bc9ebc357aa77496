//! Hand landmarks and landmark frames
//!
//! A frame is the 21-point snapshot of one hand produced by the upstream
//! pose estimator. Index meaning is anatomical and fixed: wrist first, then
//! thumb, index, middle, ring and pinky, each running base to tip.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{HandsignError, HandsignResult};

/// Number of landmarks in a well-formed frame
pub const LANDMARK_COUNT: usize = 21;

/// Anatomical landmark identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HandLandmark {
    Wrist = 0,

    // Thumb
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,

    // Index finger
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,

    // Middle finger
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,

    // Ring finger
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,

    // Pinky
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    /// All landmarks in index order
    pub fn all() -> &'static [HandLandmark] {
        &[
            HandLandmark::Wrist,
            HandLandmark::ThumbCmc,
            HandLandmark::ThumbMcp,
            HandLandmark::ThumbIp,
            HandLandmark::ThumbTip,
            HandLandmark::IndexMcp,
            HandLandmark::IndexPip,
            HandLandmark::IndexDip,
            HandLandmark::IndexTip,
            HandLandmark::MiddleMcp,
            HandLandmark::MiddlePip,
            HandLandmark::MiddleDip,
            HandLandmark::MiddleTip,
            HandLandmark::RingMcp,
            HandLandmark::RingPip,
            HandLandmark::RingDip,
            HandLandmark::RingTip,
            HandLandmark::PinkyMcp,
            HandLandmark::PinkyPip,
            HandLandmark::PinkyDip,
            HandLandmark::PinkyTip,
        ]
    }

    /// Number of landmarks
    pub fn count() -> usize {
        LANDMARK_COUNT
    }

    /// Position of this landmark in a frame
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse from a frame index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

/// Non-thumb fingers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers, index to pinky
    pub fn all() -> &'static [Finger] {
        &[Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky]
    }

    /// Base (metacarpophalangeal) joint
    pub fn mcp(self) -> HandLandmark {
        match self {
            Finger::Index => HandLandmark::IndexMcp,
            Finger::Middle => HandLandmark::MiddleMcp,
            Finger::Ring => HandLandmark::RingMcp,
            Finger::Pinky => HandLandmark::PinkyMcp,
        }
    }

    /// Proximal interphalangeal joint
    pub fn pip(self) -> HandLandmark {
        match self {
            Finger::Index => HandLandmark::IndexPip,
            Finger::Middle => HandLandmark::MiddlePip,
            Finger::Ring => HandLandmark::RingPip,
            Finger::Pinky => HandLandmark::PinkyPip,
        }
    }

    pub fn tip(self) -> HandLandmark {
        match self {
            Finger::Index => HandLandmark::IndexTip,
            Finger::Middle => HandLandmark::MiddleTip,
            Finger::Ring => HandLandmark::RingTip,
            Finger::Pinky => HandLandmark::PinkyTip,
        }
    }
}

/// A single hand landmark.
///
/// `x` and `y` are normalized to the image (0,0 top-left, 1,1 bottom-right).
/// `z` is a relative depth estimate; smaller is closer to the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Distance to another landmark in the image plane (z ignored)
    pub fn planar_distance(&self, other: &Landmark) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One frame of hand landmarks.
///
/// Always holds exactly [`LANDMARK_COUNT`] points; conversion from a slice or
/// vector of any other length fails with [`HandsignError::InvalidFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkFrame {
    points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkFrame {
    /// Create a frame from a fixed-size array
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Frame with every landmark at the origin
    pub fn zeroed() -> Self {
        Self::new([Landmark::zero(); LANDMARK_COUNT])
    }

    /// Create a frame from an arbitrary slice of landmarks
    pub fn from_slice(points: &[Landmark]) -> HandsignResult<Self> {
        let points: [Landmark; LANDMARK_COUNT] =
            points.try_into().map_err(|_| HandsignError::InvalidFrame {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            })?;
        Ok(Self { points })
    }

    /// Landmark by anatomical identifier
    #[inline]
    pub fn get(&self, landmark: HandLandmark) -> &Landmark {
        &self.points[landmark.index()]
    }

    /// Replace a landmark, returning the updated frame
    pub fn with(mut self, landmark: HandLandmark, point: Landmark) -> Self {
        self.points[landmark.index()] = point;
        self
    }

    /// Set a landmark in place
    pub fn set(&mut self, landmark: HandLandmark, point: Landmark) {
        self.points[landmark.index()] = point;
    }

    /// All landmarks in index order
    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    /// Iterate over (identifier, landmark) pairs
    pub fn iter(&self) -> impl Iterator<Item = (HandLandmark, &Landmark)> {
        HandLandmark::all().iter().copied().zip(self.points.iter())
    }

    /// True when every landmark shares one image-plane position.
    ///
    /// Such a frame carries no hand geometry (e.g. an all-zero placeholder).
    pub fn is_degenerate(&self) -> bool {
        let first = self.points[0];
        self.points
            .iter()
            .all(|p| p.x == first.x && p.y == first.y)
    }
}

impl Default for LandmarkFrame {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Index<HandLandmark> for LandmarkFrame {
    type Output = Landmark;

    fn index(&self, landmark: HandLandmark) -> &Landmark {
        self.get(landmark)
    }
}

impl TryFrom<&[Landmark]> for LandmarkFrame {
    type Error = HandsignError;

    fn try_from(points: &[Landmark]) -> HandsignResult<Self> {
        Self::from_slice(points)
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkFrame {
    type Error = HandsignError;

    fn try_from(points: Vec<Landmark>) -> HandsignResult<Self> {
        Self::from_slice(&points)
    }
}

impl From<LandmarkFrame> for Vec<Landmark> {
    fn from(frame: LandmarkFrame) -> Self {
        frame.points.to_vec()
    }
}

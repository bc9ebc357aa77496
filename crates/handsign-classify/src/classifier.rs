//! Gesture classifier
//!
//! Stateless dispatch over a [`PriorityList`]. One frame in, one label out:
//! no history, no smoothing, no confidence score.

use handsign_core::{Gesture, HandsignResult, Landmark, LandmarkFrame};
use tracing::{debug, trace};

use crate::PriorityList;

/// Maps landmark frames to gesture labels
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    priority: PriorityList,
}

impl GestureClassifier {
    /// Classifier with the standard priority order
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier with a custom priority order
    pub fn with_priority(priority: PriorityList) -> Self {
        Self { priority }
    }

    pub fn priority(&self) -> &PriorityList {
        &self.priority
    }

    /// Classify one frame.
    ///
    /// A degenerate frame (every landmark at one point) is `Gesture::None`.
    pub fn classify(&self, frame: &LandmarkFrame) -> Gesture {
        if frame.is_degenerate() {
            debug!("degenerate landmark frame, no hand geometry");
            return Gesture::None;
        }

        let gesture = self.priority.evaluate(frame);
        trace!(%gesture, "classified frame");
        gesture
    }

    /// Classify a raw landmark slice.
    ///
    /// Fails with `InvalidFrame` unless exactly 21 landmarks are given.
    pub fn classify_points(&self, points: &[Landmark]) -> HandsignResult<Gesture> {
        let frame = LandmarkFrame::from_slice(points)?;
        Ok(self.classify(&frame))
    }

    /// Every gesture whose predicate holds, in priority order.
    ///
    /// The first element, if any, is what [`classify`](Self::classify) returns.
    pub fn matching(&self, frame: &LandmarkFrame) -> Vec<Gesture> {
        if frame.is_degenerate() {
            return Vec::new();
        }
        self.priority.matching(frame)
    }
}

/// Classify one frame with the standard priority order
pub fn classify(frame: &LandmarkFrame) -> Gesture {
    GestureClassifier::new().classify(frame)
}

/// Classify a raw landmark slice with the standard priority order
pub fn classify_points(points: &[Landmark]) -> HandsignResult<Gesture> {
    GestureClassifier::new().classify_points(points)
}

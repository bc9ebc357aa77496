//! Labelled landmark samples

use chrono::{SecondsFormat, Utc};
use handsign_core::{Gesture, Landmark, LandmarkFrame};
use serde::{Deserialize, Serialize};

use crate::SampleResult;

/// One labelled frame, as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub gesture: Gesture,

    /// RFC 3339 capture time, UTC, millisecond precision
    pub timestamp: String,

    pub landmarks: LandmarkFrame,
}

impl Sample {
    /// Sample captured now
    pub fn new(gesture: Gesture, landmarks: LandmarkFrame) -> Self {
        Self::with_timestamp(
            gesture,
            landmarks,
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }

    /// Sample captured now from raw landmarks; fails unless there are 21
    pub fn from_points(gesture: Gesture, points: &[Landmark]) -> SampleResult<Self> {
        Ok(Self::new(gesture, LandmarkFrame::from_slice(points)?))
    }

    pub fn with_timestamp(
        gesture: Gesture,
        landmarks: LandmarkFrame,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            gesture,
            timestamp: timestamp.into(),
            landmarks,
        }
    }
}

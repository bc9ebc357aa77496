//! Reference poses
//!
//! One hand-built frame per static gesture, laid out like a right hand held
//! up in front of the camera. Each frame satisfies its own predicate and none
//! ranked ahead of it. Used by the benches and the CLI's `pose` command, and
//! as a starting point for building test frames.

use handsign_core::{Finger, Gesture, HandLandmark, Landmark, LandmarkFrame};

const PALM_DEPTH: f64 = -0.05;

/// Wrist, thumb base and finger bases of an upright hand.
///
/// Fingers are left at the origin; place them with [`extend`] or [`fold`].
pub fn palm() -> LandmarkFrame {
    LandmarkFrame::zeroed()
        .with(HandLandmark::Wrist, Landmark::new(0.50, 0.90, 0.0))
        .with(HandLandmark::ThumbCmc, Landmark::new(0.40, 0.82, -0.02))
        .with(HandLandmark::ThumbMcp, Landmark::new(0.34, 0.74, -0.03))
        .with(HandLandmark::IndexMcp, Landmark::new(0.42, 0.60, PALM_DEPTH))
        .with(HandLandmark::MiddleMcp, Landmark::new(0.48, 0.58, PALM_DEPTH))
        .with(HandLandmark::RingMcp, Landmark::new(0.54, 0.60, PALM_DEPTH))
        .with(HandLandmark::PinkyMcp, Landmark::new(0.60, 0.64, PALM_DEPTH))
}

/// Straighten a finger upward from its base
pub fn extend(frame: LandmarkFrame, finger: Finger) -> LandmarkFrame {
    let base = *frame.get(finger.mcp());
    frame
        .with(finger.pip(), Landmark::new(base.x, base.y - 0.12, base.z))
        .with(dip(finger), Landmark::new(base.x, base.y - 0.20, base.z))
        .with(finger.tip(), Landmark::new(base.x, base.y - 0.27, base.z))
}

/// Curl a finger into the palm, tip ending below its base
pub fn fold(frame: LandmarkFrame, finger: Finger) -> LandmarkFrame {
    let base = *frame.get(finger.mcp());
    frame
        .with(finger.pip(), Landmark::new(base.x, base.y - 0.04, base.z))
        .with(dip(finger), Landmark::new(base.x, base.y + 0.02, base.z))
        .with(finger.tip(), Landmark::new(base.x, base.y + 0.06, base.z))
}

fn dip(finger: Finger) -> HandLandmark {
    match finger {
        Finger::Index => HandLandmark::IndexDip,
        Finger::Middle => HandLandmark::MiddleDip,
        Finger::Ring => HandLandmark::RingDip,
        Finger::Pinky => HandLandmark::PinkyDip,
    }
}

fn thumb_out(frame: LandmarkFrame) -> LandmarkFrame {
    frame
        .with(HandLandmark::ThumbIp, Landmark::new(0.28, 0.68, -0.03))
        .with(HandLandmark::ThumbTip, Landmark::new(0.22, 0.62, -0.03))
}

fn thumb_tucked(frame: LandmarkFrame) -> LandmarkFrame {
    frame
        .with(HandLandmark::ThumbIp, Landmark::new(0.40, 0.66, -0.06))
        .with(HandLandmark::ThumbTip, Landmark::new(0.46, 0.62, -0.07))
}

fn with_fingers(
    mut frame: LandmarkFrame,
    shape: impl Fn(LandmarkFrame, Finger) -> LandmarkFrame,
    fingers: &[Finger],
) -> LandmarkFrame {
    for finger in fingers {
        frame = shape(frame, *finger);
    }
    frame
}

/// Open palm, every finger up, thumb out to the side
pub fn hello() -> LandmarkFrame {
    thumb_out(with_fingers(palm(), extend, Finger::all()))
}

pub fn i_love_you() -> LandmarkFrame {
    let frame = with_fingers(palm(), extend, &[Finger::Index, Finger::Pinky]);
    thumb_out(with_fingers(frame, fold, &[Finger::Middle, Finger::Ring]))
}

/// Index curled onto the thumb tip, remaining fingers up
pub fn okay() -> LandmarkFrame {
    with_fingers(palm(), extend, &[Finger::Middle, Finger::Ring, Finger::Pinky])
        .with(HandLandmark::IndexPip, Landmark::new(0.38, 0.52, PALM_DEPTH))
        .with(HandLandmark::IndexDip, Landmark::new(0.34, 0.52, PALM_DEPTH))
        .with(HandLandmark::IndexTip, Landmark::new(0.33, 0.57, PALM_DEPTH))
        .with(HandLandmark::ThumbIp, Landmark::new(0.32, 0.66, -0.03))
        .with(HandLandmark::ThumbTip, Landmark::new(0.33, 0.59, -0.04))
}

/// Closed fist, thumb across the fingers
pub fn yes() -> LandmarkFrame {
    thumb_tucked(with_fingers(palm(), fold, Finger::all()))
}

/// Thumbs up
pub fn good() -> LandmarkFrame {
    with_fingers(palm(), fold, Finger::all())
        .with(HandLandmark::ThumbMcp, Landmark::new(0.40, 0.62, -0.03))
        .with(HandLandmark::ThumbIp, Landmark::new(0.39, 0.48, -0.03))
        .with(HandLandmark::ThumbTip, Landmark::new(0.38, 0.36, -0.03))
}

/// Thumbs down: fist held with the wrist up and the thumb hanging below
pub fn bad() -> LandmarkFrame {
    let frame = LandmarkFrame::zeroed()
        .with(HandLandmark::Wrist, Landmark::new(0.50, 0.40, 0.0))
        .with(HandLandmark::ThumbCmc, Landmark::new(0.44, 0.48, -0.02))
        .with(HandLandmark::ThumbMcp, Landmark::new(0.40, 0.58, -0.03))
        .with(HandLandmark::ThumbIp, Landmark::new(0.40, 0.68, -0.03))
        .with(HandLandmark::ThumbTip, Landmark::new(0.40, 0.78, -0.03))
        .with(HandLandmark::IndexMcp, Landmark::new(0.44, 0.56, PALM_DEPTH))
        .with(HandLandmark::MiddleMcp, Landmark::new(0.50, 0.55, PALM_DEPTH))
        .with(HandLandmark::RingMcp, Landmark::new(0.56, 0.56, PALM_DEPTH))
        .with(HandLandmark::PinkyMcp, Landmark::new(0.61, 0.58, PALM_DEPTH));

    Finger::all().iter().fold(frame, |frame, finger| {
        let base = *frame.get(finger.mcp());
        frame
            .with(finger.pip(), Landmark::new(base.x, base.y + 0.08, base.z))
            .with(dip(*finger), Landmark::new(base.x, base.y + 0.10, base.z))
            .with(finger.tip(), Landmark::new(base.x, base.y + 0.06, base.z))
    })
}

/// Index finger straight up, the rest curled, thumb tucked
pub fn i_me() -> LandmarkFrame {
    let frame = extend(palm(), Finger::Index);
    thumb_tucked(with_fingers(
        frame,
        fold,
        &[Finger::Middle, Finger::Ring, Finger::Pinky],
    ))
}

/// Index and middle up side by side, ring and pinky curled
pub fn no() -> LandmarkFrame {
    let frame = with_fingers(palm(), extend, &[Finger::Index, Finger::Middle]);
    thumb_tucked(with_fingers(frame, fold, &[Finger::Ring, Finger::Pinky]))
}

/// Reference frame for a gesture.
///
/// Returns `None` for labels with no single-frame pose (`ThankYou`, `None`).
pub fn reference(gesture: Gesture) -> Option<LandmarkFrame> {
    match gesture {
        Gesture::ILoveYou => Some(i_love_you()),
        Gesture::Hello => Some(hello()),
        Gesture::Good => Some(good()),
        Gesture::Bad => Some(bad()),
        Gesture::Yes => Some(yes()),
        Gesture::IMe => Some(i_me()),
        Gesture::No => Some(no()),
        Gesture::Okay => Some(okay()),
        Gesture::ThankYou | Gesture::None => None,
    }
}

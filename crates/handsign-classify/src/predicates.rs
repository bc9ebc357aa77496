//! Gesture predicates
//!
//! One pure test per gesture. Each takes a well-formed frame and answers
//! whether the hand matches that gesture's geometric signature. Predicates
//! overlap; the priority list decides which one wins.

use handsign_core::{
    horizontal_offset, is_extended, is_extended_by, is_folded, is_folded_by, planar_distance,
    pointing_angle, Finger, HandLandmark, LandmarkFrame,
};

use crate::thresholds::*;

/// A gesture test over one frame
pub type Predicate = fn(&LandmarkFrame) -> bool;

fn tip_above_pip(frame: &LandmarkFrame, finger: Finger) -> bool {
    is_extended(frame.get(finger.tip()), frame.get(finger.pip()))
}

fn tip_below_pip(frame: &LandmarkFrame, finger: Finger) -> bool {
    is_folded(frame.get(finger.tip()), frame.get(finger.pip()))
}

fn tip_below_mcp(frame: &LandmarkFrame, finger: Finger) -> bool {
    is_folded(frame.get(finger.tip()), frame.get(finger.mcp()))
}

/// Thumb, index and pinky extended; middle and ring folded.
pub fn is_i_love_you(frame: &LandmarkFrame) -> bool {
    let thumb_tip = frame.get(HandLandmark::ThumbTip);
    let thumb_ip = frame.get(HandLandmark::ThumbIp);

    // Thumb may point up or out to the side
    let thumb_extended = is_extended(thumb_tip, thumb_ip)
        || horizontal_offset(thumb_tip, thumb_ip) > THUMB_SIDEWAYS_OFFSET;

    thumb_extended
        && tip_above_pip(frame, Finger::Index)
        && tip_below_pip(frame, Finger::Middle)
        && tip_below_pip(frame, Finger::Ring)
        && tip_above_pip(frame, Finger::Pinky)
}

/// Open palm: all four fingers extended with the palm facing the camera.
pub fn is_hello(frame: &LandmarkFrame) -> bool {
    // Middle finger base closer to the camera than the wrist
    let palm_forward = frame.get(HandLandmark::MiddleMcp).z < frame.get(HandLandmark::Wrist).z;

    Finger::all().iter().all(|f| tip_above_pip(frame, *f)) && palm_forward
}

/// Thumb well away from the palm, fully extended, every finger folded.
fn thumb_alone_extended(frame: &LandmarkFrame) -> bool {
    let thumb_tip = frame.get(HandLandmark::ThumbTip);
    let thumb_mcp = frame.get(HandLandmark::ThumbMcp);
    let palm = frame.get(HandLandmark::MiddleMcp);

    planar_distance(thumb_tip, palm) > THUMB_CLEAR_OF_PALM
        && planar_distance(thumb_tip, thumb_mcp) > THUMB_MIN_LENGTH
        && Finger::all().iter().all(|f| tip_below_mcp(frame, *f))
}

/// Thumbs up.
pub fn is_good(frame: &LandmarkFrame) -> bool {
    let thumb_tip = frame.get(HandLandmark::ThumbTip);
    let thumb_mcp = frame.get(HandLandmark::ThumbMcp);
    let wrist = frame.get(HandLandmark::Wrist);

    thumb_alone_extended(frame)
        && is_extended_by(thumb_tip, thumb_mcp, THUMB_BEYOND_BASE)
        && is_extended_by(thumb_tip, wrist, THUMB_BEYOND_WRIST)
}

/// Thumbs down.
pub fn is_bad(frame: &LandmarkFrame) -> bool {
    let thumb_tip = frame.get(HandLandmark::ThumbTip);
    let thumb_mcp = frame.get(HandLandmark::ThumbMcp);
    let wrist = frame.get(HandLandmark::Wrist);

    thumb_alone_extended(frame)
        && is_folded_by(thumb_tip, thumb_mcp, THUMB_BEYOND_BASE)
        && is_folded_by(thumb_tip, wrist, THUMB_BEYOND_WRIST)
}

/// Closed fist in any orientation.
///
/// The tight thumb check keeps thumbs up/down out.
pub fn is_yes(frame: &LandmarkFrame) -> bool {
    let thumb_tip = frame.get(HandLandmark::ThumbTip);
    let palm = frame.get(HandLandmark::MiddleMcp);

    let thumb_tucked = planar_distance(thumb_tip, palm) < FIST_THUMB_TUCK;
    let fingers_curled = Finger::all()
        .iter()
        .all(|f| is_folded_by(frame.get(f.tip()), palm, -FIST_FOLD_TOLERANCE));
    let fingers_bunched = horizontal_offset(
        frame.get(HandLandmark::IndexTip),
        frame.get(HandLandmark::PinkyTip),
    ) < FIST_MAX_SPREAD;

    thumb_tucked && fingers_curled && fingers_bunched
}

/// Index finger pointing straight up, other fingers and thumb folded.
pub fn is_i_me(frame: &LandmarkFrame) -> bool {
    let thumb_tip = frame.get(HandLandmark::ThumbTip);
    let index_mcp = frame.get(HandLandmark::IndexMcp);
    let index_pip = frame.get(HandLandmark::IndexPip);
    let index_tip = frame.get(HandLandmark::IndexTip);

    let thumb_tucked = planar_distance(thumb_tip, index_mcp) < POINT_THUMB_TUCK;
    let index_extended = is_extended_by(index_tip, index_pip, POINT_EXTENSION)
        && index_pip.y - index_tip.y > POINT_CLEAR_EXTENSION;
    let index_upright = horizontal_offset(index_tip, index_pip) < POINT_MAX_DRIFT;

    thumb_tucked
        && index_extended
        && index_upright
        && tip_below_mcp(frame, Finger::Middle)
        && tip_below_mcp(frame, Finger::Ring)
        && tip_below_mcp(frame, Finger::Pinky)
}

/// Index and middle fingers raised together and parallel.
pub fn is_no(frame: &LandmarkFrame) -> bool {
    let raised = |finger: Finger| {
        let tip = frame.get(finger.tip());
        is_extended_by(tip, frame.get(finger.pip()), PAIR_EXTENSION)
            && is_extended_by(tip, frame.get(finger.mcp()), PAIR_CLEAR_EXTENSION)
    };

    let index_tip = frame.get(HandLandmark::IndexTip);
    let middle_tip = frame.get(HandLandmark::MiddleTip);

    let together = horizontal_offset(index_tip, middle_tip) < PAIR_MAX_GAP;
    let index_angle = pointing_angle(index_tip, frame.get(HandLandmark::IndexPip));
    let middle_angle = pointing_angle(middle_tip, frame.get(HandLandmark::MiddlePip));
    let parallel = (index_angle - middle_angle).abs() < PAIR_MAX_ANGLE;

    raised(Finger::Index)
        && raised(Finger::Middle)
        && tip_below_mcp(frame, Finger::Ring)
        && tip_below_mcp(frame, Finger::Pinky)
        && together
        && parallel
}

/// Thumb and index tips closed into a loop, other fingers extended.
pub fn is_okay(frame: &LandmarkFrame) -> bool {
    let loop_closed = planar_distance(
        frame.get(HandLandmark::ThumbTip),
        frame.get(HandLandmark::IndexTip),
    ) < OKAY_LOOP_DISTANCE;

    loop_closed
        && tip_above_pip(frame, Finger::Middle)
        && tip_above_pip(frame, Finger::Ring)
        && tip_above_pip(frame, Finger::Pinky)
}

/// Never true for a single frame.
///
/// Thank You is an open hand moving away from the chin, which takes motion
/// across frames and face landmarks. A tracker outside the classifier watches
/// for the Hello pose and decides this label itself.
pub fn is_thank_you(_frame: &LandmarkFrame) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poses;
    use handsign_core::Landmark;

    fn moved(frame: LandmarkFrame, landmark: HandLandmark, x: f64, y: f64) -> LandmarkFrame {
        let z = frame.get(landmark).z;
        frame.with(landmark, Landmark::new(x, y, z))
    }

    #[test]
    fn test_reference_poses_match_their_predicate() {
        assert!(is_i_love_you(&poses::i_love_you()));
        assert!(is_hello(&poses::hello()));
        assert!(is_good(&poses::good()));
        assert!(is_bad(&poses::bad()));
        assert!(is_yes(&poses::yes()));
        assert!(is_i_me(&poses::i_me()));
        assert!(is_no(&poses::no()));
        assert!(is_okay(&poses::okay()));
    }

    #[test]
    fn test_i_love_you_scenario() {
        let frame = LandmarkFrame::zeroed()
            .with(HandLandmark::ThumbTip, Landmark::new(0.3, 0.2, 0.0))
            .with(HandLandmark::ThumbIp, Landmark::new(0.32, 0.35, 0.0))
            .with(HandLandmark::IndexTip, Landmark::new(0.35, 0.1, 0.0))
            .with(HandLandmark::IndexPip, Landmark::new(0.35, 0.3, 0.0))
            .with(HandLandmark::MiddleTip, Landmark::new(0.4, 0.5, 0.0))
            .with(HandLandmark::MiddlePip, Landmark::new(0.4, 0.3, 0.0))
            .with(HandLandmark::RingTip, Landmark::new(0.45, 0.5, 0.0))
            .with(HandLandmark::RingPip, Landmark::new(0.45, 0.3, 0.0))
            .with(HandLandmark::PinkyTip, Landmark::new(0.5, 0.15, 0.0))
            .with(HandLandmark::PinkyPip, Landmark::new(0.5, 0.35, 0.0));
        assert!(is_i_love_you(&frame));
    }

    #[test]
    fn test_i_love_you_sideways_thumb() {
        // Thumb tip below its joint but well out to the side
        let frame = moved(poses::i_love_you(), HandLandmark::ThumbTip, 0.15, 0.70);
        assert!(is_i_love_you(&frame));

        // Below and too close in x
        let frame = moved(poses::i_love_you(), HandLandmark::ThumbTip, 0.27, 0.70);
        assert!(!is_i_love_you(&frame));
    }

    #[test]
    fn test_i_love_you_needs_folded_middle() {
        let frame = poses::extend(poses::i_love_you(), Finger::Middle);
        assert!(!is_i_love_you(&frame));
    }

    #[test]
    fn test_hello_needs_palm_forward() {
        let mut frame = poses::hello();
        let wrist = *frame.get(HandLandmark::Wrist);
        frame.set(HandLandmark::Wrist, Landmark::new(wrist.x, wrist.y, -0.2));
        assert!(!is_hello(&frame));
    }

    #[test]
    fn test_okay_loop_boundary() {
        let index_tip = *poses::okay().get(HandLandmark::IndexTip);

        let closed = moved(
            poses::okay(),
            HandLandmark::ThumbTip,
            index_tip.x + 0.049,
            index_tip.y,
        );
        assert!(is_okay(&closed));

        let open = moved(
            poses::okay(),
            HandLandmark::ThumbTip,
            index_tip.x + 0.051,
            index_tip.y,
        );
        assert!(!is_okay(&open));
    }

    #[test]
    fn test_yes_thumb_tuck_boundary() {
        let palm = *poses::yes().get(HandLandmark::MiddleMcp);

        let tucked = moved(poses::yes(), HandLandmark::ThumbTip, palm.x - 0.079, palm.y);
        assert!(is_yes(&tucked));

        let loose = moved(poses::yes(), HandLandmark::ThumbTip, palm.x - 0.081, palm.y);
        assert!(!is_yes(&loose));
    }

    #[test]
    fn test_yes_fold_tolerance() {
        let palm = *poses::yes().get(HandLandmark::MiddleMcp);

        // A fingertip slightly above the palm base still counts as curled
        let frame = moved(poses::yes(), HandLandmark::RingTip, 0.54, palm.y - 0.01);
        assert!(is_yes(&frame));

        let frame = moved(poses::yes(), HandLandmark::RingTip, 0.54, palm.y - 0.03);
        assert!(!is_yes(&frame));
    }

    #[test]
    fn test_yes_rejects_splayed_fingers() {
        let frame = moved(poses::yes(), HandLandmark::PinkyTip, 0.70, 0.70);
        assert!(!is_yes(&frame));
    }

    #[test]
    fn test_good_and_bad_are_mirrors() {
        assert!(!is_bad(&poses::good()));
        assert!(!is_good(&poses::bad()));
    }

    #[test]
    fn test_good_thumb_must_clear_palm() {
        // Thumb tip 0.19 above the palm base: raised, but too close
        let palm = *poses::good().get(HandLandmark::MiddleMcp);
        let frame = moved(poses::good(), HandLandmark::ThumbTip, palm.x, palm.y - 0.19);
        assert!(!is_good(&frame));

        let frame = moved(poses::good(), HandLandmark::ThumbTip, palm.x, palm.y - 0.21);
        assert!(is_good(&frame));
    }

    #[test]
    fn test_good_needs_folded_fingers() {
        let frame = poses::extend(poses::good(), Finger::Pinky);
        assert!(!is_good(&frame));
    }

    #[test]
    fn test_bad_thumb_must_drop_past_wrist() {
        // Wrist lowered to just above the thumb tip
        let frame = moved(poses::bad(), HandLandmark::Wrist, 0.50, 0.74);
        assert!(!is_bad(&frame));
    }

    #[test]
    fn test_i_me_drift_boundary() {
        let pip = *poses::i_me().get(HandLandmark::IndexPip);
        let tip = *poses::i_me().get(HandLandmark::IndexTip);

        let upright = moved(poses::i_me(), HandLandmark::IndexTip, pip.x + 0.049, tip.y);
        assert!(is_i_me(&upright));

        let leaning = moved(poses::i_me(), HandLandmark::IndexTip, pip.x + 0.051, tip.y);
        assert!(!is_i_me(&leaning));
    }

    #[test]
    fn test_i_me_needs_clear_extension() {
        // 0.07 above the joint passes the first margin but not the second
        let pip = *poses::i_me().get(HandLandmark::IndexPip);
        let frame = moved(poses::i_me(), HandLandmark::IndexTip, pip.x, pip.y - 0.07);
        assert!(!is_i_me(&frame));
    }

    #[test]
    fn test_i_me_thumb_must_be_tucked() {
        let frame = moved(poses::i_me(), HandLandmark::ThumbTip, 0.20, 0.62);
        assert!(!is_i_me(&frame));
    }

    #[test]
    fn test_no_gap_boundary() {
        let index_tip = *poses::no().get(HandLandmark::IndexTip);
        let middle_tip = *poses::no().get(HandLandmark::MiddleTip);
        let middle_pip = *poses::no().get(HandLandmark::MiddlePip);

        // Shift the whole middle finger sideways so it stays parallel
        let shifted = |dx: f64| {
            let frame = moved(poses::no(), HandLandmark::MiddleTip, index_tip.x + dx, middle_tip.y);
            moved(frame, HandLandmark::MiddlePip, index_tip.x + dx, middle_pip.y)
        };
        assert!(is_no(&shifted(0.079)));
        assert!(!is_no(&shifted(0.081)));
    }

    #[test]
    fn test_no_needs_parallel_fingers() {
        // Middle tip leaning toward the index: gap small, angle wide
        let middle_pip = *poses::no().get(HandLandmark::MiddlePip);
        let frame = moved(poses::no(), HandLandmark::MiddleTip, middle_pip.x - 0.06, 0.32);
        assert!(!is_no(&frame));
    }

    #[test]
    fn test_thank_you_never_matches() {
        assert!(!is_thank_you(&poses::hello()));
        assert!(!is_thank_you(&LandmarkFrame::zeroed()));
    }
}

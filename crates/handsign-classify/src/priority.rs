//! Priority list
//!
//! Ordered (gesture, predicate) pairs. Specific shapes come before looser
//! ones that could also match them, so the first hit wins:
//! 1. I Love You
//! 2. Okay
//! 3. Yes (fist, ahead of thumbs up/down)
//! 4. Good
//! 5. Bad
//! 6. I/I'm
//! 7. No
//! 8. Thank You (never matches a single frame)
//! 9. Hello (least specific)
//!
//! Nothing matching means `Gesture::None`.

use std::borrow::Cow;
use std::fmt;

use handsign_core::{Gesture, LandmarkFrame};

use crate::predicates::{self, Predicate};

/// One entry of the priority list
#[derive(Clone, Copy)]
pub struct PriorityEntry {
    pub gesture: Gesture,
    pub predicate: Predicate,
}

impl PriorityEntry {
    pub const fn new(gesture: Gesture, predicate: Predicate) -> Self {
        Self { gesture, predicate }
    }

    /// Does the frame satisfy this entry's predicate?
    #[inline]
    pub fn matches(&self, frame: &LandmarkFrame) -> bool {
        (self.predicate)(frame)
    }
}

impl fmt::Debug for PriorityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityEntry")
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

/// Standard evaluation order
pub static STANDARD_PRIORITY: [PriorityEntry; 9] = [
    PriorityEntry::new(Gesture::ILoveYou, predicates::is_i_love_you),
    PriorityEntry::new(Gesture::Okay, predicates::is_okay),
    PriorityEntry::new(Gesture::Yes, predicates::is_yes),
    PriorityEntry::new(Gesture::Good, predicates::is_good),
    PriorityEntry::new(Gesture::Bad, predicates::is_bad),
    PriorityEntry::new(Gesture::IMe, predicates::is_i_me),
    PriorityEntry::new(Gesture::No, predicates::is_no),
    PriorityEntry::new(Gesture::ThankYou, predicates::is_thank_you),
    PriorityEntry::new(Gesture::Hello, predicates::is_hello),
];

/// Ordered list of gesture predicates, evaluated first match wins
#[derive(Debug, Clone)]
pub struct PriorityList {
    entries: Cow<'static, [PriorityEntry]>,
}

impl PriorityList {
    /// The standard gesture order
    pub fn standard() -> Self {
        Self {
            entries: Cow::Borrowed(&STANDARD_PRIORITY),
        }
    }

    /// Build a list with a custom order
    pub fn from_entries(entries: Vec<PriorityEntry>) -> Self {
        Self {
            entries: Cow::Owned(entries),
        }
    }

    /// Entries in evaluation order
    pub fn entries(&self) -> &[PriorityEntry] {
        &self.entries
    }

    /// Gestures in evaluation order
    pub fn gestures(&self) -> impl Iterator<Item = Gesture> + '_ {
        self.entries.iter().map(|e| e.gesture)
    }

    /// Rank of a gesture (0 = checked first)
    pub fn rank(&self, gesture: Gesture) -> Option<usize> {
        self.entries.iter().position(|e| e.gesture == gesture)
    }

    /// First matching gesture, or `Gesture::None`
    pub fn evaluate(&self, frame: &LandmarkFrame) -> Gesture {
        self.entries
            .iter()
            .find(|e| e.matches(frame))
            .map(|e| e.gesture)
            .unwrap_or(Gesture::None)
    }

    /// Every matching gesture, in evaluation order
    pub fn matching(&self, frame: &LandmarkFrame) -> Vec<Gesture> {
        self.entries
            .iter()
            .filter(|e| e.matches(frame))
            .map(|e| e.gesture)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PriorityList {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poses;
    use handsign_core::{Finger, HandLandmark};

    #[test]
    fn test_standard_order() {
        let order: Vec<Gesture> = PriorityList::standard().gestures().collect();
        assert_eq!(
            order,
            vec![
                Gesture::ILoveYou,
                Gesture::Okay,
                Gesture::Yes,
                Gesture::Good,
                Gesture::Bad,
                Gesture::IMe,
                Gesture::No,
                Gesture::ThankYou,
                Gesture::Hello,
            ]
        );
    }

    #[test]
    fn test_fist_ranked_before_thumbs() {
        let list = PriorityList::standard();
        assert!(list.rank(Gesture::Yes) < list.rank(Gesture::Good));
        assert!(list.rank(Gesture::Yes) < list.rank(Gesture::Bad));
        assert_eq!(list.rank(Gesture::Hello), Some(list.len() - 1));
        assert_eq!(list.rank(Gesture::None), None);
    }

    #[test]
    fn test_every_label_but_none_is_listed() {
        let list = PriorityList::standard();
        for gesture in Gesture::all() {
            assert_eq!(list.rank(*gesture).is_some(), gesture.is_some());
        }
    }

    #[test]
    fn test_custom_order_changes_winner() {
        // The Okay pose with every finger raised also reads as Hello
        let frame = poses::extend(poses::okay(), Finger::Index);
        let frame = frame.with(HandLandmark::ThumbTip, *frame.get(HandLandmark::IndexTip));

        let standard = PriorityList::standard();
        assert_eq!(standard.matching(&frame), vec![Gesture::Okay, Gesture::Hello]);
        assert_eq!(standard.evaluate(&frame), Gesture::Okay);

        let reversed = PriorityList::from_entries(vec![
            PriorityEntry::new(Gesture::Hello, predicates::is_hello),
            PriorityEntry::new(Gesture::Okay, predicates::is_okay),
        ]);
        assert_eq!(reversed.evaluate(&frame), Gesture::Hello);
    }

    #[test]
    fn test_empty_list_falls_back_to_none() {
        let list = PriorityList::from_entries(Vec::new());
        assert!(list.is_empty());
        assert_eq!(list.evaluate(&poses::hello()), Gesture::None);
    }
}

//! Gesture labels
//!
//! The closed set of hand signs the classifier can report. Labels are
//! sign-language inspired; `None` is the sentinel for "no gesture".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::HandsignError;

/// Gesture label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Gesture {
    /// Thumb, index and pinky extended; middle and ring folded
    ILoveYou,
    /// Open palm facing the camera
    Hello,
    /// Thumbs up
    Good,
    /// Thumbs down
    Bad,
    /// Closed fist
    Yes,
    /// Index finger pointing straight up
    IMe,
    /// Index and middle fingers extended together
    No,
    /// Thumb and index tips touching, other fingers extended
    Okay,
    /// Open hand moving away from the chin.
    /// Needs motion across frames, never produced from a single frame.
    ThankYou,
    /// No gesture detected
    #[default]
    None,
}

impl Gesture {
    /// All labels
    pub fn all() -> &'static [Gesture] {
        &[
            Gesture::ILoveYou,
            Gesture::Hello,
            Gesture::Good,
            Gesture::Bad,
            Gesture::Yes,
            Gesture::IMe,
            Gesture::No,
            Gesture::Okay,
            Gesture::ThankYou,
            Gesture::None,
        ]
    }

    /// Human readable name, also used for persistence
    pub fn name(self) -> &'static str {
        match self {
            Gesture::ILoveYou => "I Love You",
            Gesture::Hello => "Hello",
            Gesture::Good => "Good",
            Gesture::Bad => "Bad",
            Gesture::Yes => "Yes",
            Gesture::IMe => "I/I'm",
            Gesture::No => "No",
            Gesture::Okay => "Okay",
            Gesture::ThankYou => "Thank You",
            Gesture::None => "None",
        }
    }

    /// Upper snake case identifier
    pub fn ident(self) -> &'static str {
        match self {
            Gesture::ILoveYou => "I_LOVE_YOU",
            Gesture::Hello => "HELLO",
            Gesture::Good => "GOOD",
            Gesture::Bad => "BAD",
            Gesture::Yes => "YES",
            Gesture::IMe => "I_ME",
            Gesture::No => "NO",
            Gesture::Okay => "OKAY",
            Gesture::ThankYou => "THANK_YOU",
            Gesture::None => "NONE",
        }
    }

    /// Hand shape this label stands for
    pub fn description(self) -> &'static str {
        match self {
            Gesture::ILoveYou => "thumb, index and pinky extended; middle and ring folded",
            Gesture::Hello => "open palm facing forward",
            Gesture::Good => "thumb up, other fingers folded",
            Gesture::Bad => "thumb down, other fingers folded",
            Gesture::Yes => "closed fist",
            Gesture::IMe => "index finger pointing up, other fingers folded",
            Gesture::No => "index and middle fingers extended together",
            Gesture::Okay => "thumb and index forming a circle, other fingers extended",
            Gesture::ThankYou => "open hand moving forward from the chin",
            Gesture::None => "no gesture",
        }
    }

    /// Can this label be produced from a single frame?
    pub fn is_static(self) -> bool {
        !matches!(self, Gesture::ThankYou)
    }

    /// Is this an actual gesture (not the sentinel)?
    pub fn is_some(self) -> bool {
        self != Gesture::None
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gesture {
    type Err = HandsignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Gesture::all()
            .iter()
            .copied()
            .find(|g| g.name().eq_ignore_ascii_case(s) || g.ident().eq_ignore_ascii_case(s))
            .ok_or_else(|| HandsignError::UnknownGesture(s.to_string()))
    }
}

impl Serialize for Gesture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Gesture {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for gesture in Gesture::all() {
            assert_eq!(gesture.name().parse::<Gesture>().unwrap(), *gesture);
            assert_eq!(gesture.ident().parse::<Gesture>().unwrap(), *gesture);
        }
    }

    #[test]
    fn test_parse_is_forgiving() {
        assert_eq!("i/i'm".parse::<Gesture>().unwrap(), Gesture::IMe);
        assert_eq!(" thank_you ".parse::<Gesture>().unwrap(), Gesture::ThankYou);
        assert_eq!(
            "wave".parse::<Gesture>(),
            Err(HandsignError::UnknownGesture("wave".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Gesture::ILoveYou.to_string(), "I Love You");
        assert_eq!(Gesture::IMe.to_string(), "I/I'm");
        assert_eq!(Gesture::default(), Gesture::None);
    }

    #[test]
    fn test_static_labels() {
        assert!(!Gesture::ThankYou.is_static());
        assert!(Gesture::Hello.is_static());
        assert!(!Gesture::None.is_some());
        assert!(Gesture::Yes.is_some());
    }

    #[test]
    fn test_serde_uses_name() {
        let json = serde_json::to_string(&Gesture::IMe).unwrap();
        assert_eq!(json, r#""I/I'm""#);
        let back: Gesture = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Gesture::IMe);
        assert!(serde_json::from_str::<Gesture>(r#""Wave""#).is_err());
    }
}

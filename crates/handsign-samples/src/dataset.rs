//! Loaded samples grouped by gesture, and classifier evaluation over them

use std::collections::BTreeMap;

use handsign_core::{Gesture, LandmarkFrame};

/// Frames grouped by their recorded label
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    samples: BTreeMap<Gesture, Vec<LandmarkFrame>>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, gesture: Gesture, frame: LandmarkFrame) {
        self.samples.entry(gesture).or_default().push(frame);
    }

    /// Frames recorded for one gesture
    pub fn frames(&self, gesture: Gesture) -> &[LandmarkFrame] {
        self.samples.get(&gesture).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Gestures with at least one sample
    pub fn gestures(&self) -> impl Iterator<Item = Gesture> + '_ {
        self.samples.keys().copied()
    }

    /// Sample count per gesture
    pub fn counts(&self) -> BTreeMap<Gesture, usize> {
        self.samples.iter().map(|(g, f)| (*g, f.len())).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Gesture, &LandmarkFrame)> {
        self.samples
            .iter()
            .flat_map(|(g, frames)| frames.iter().map(move |f| (*g, f)))
    }

    /// Run `classify` over every sample and compare with its label
    pub fn evaluate<F>(&self, classify: F) -> Evaluation
    where
        F: Fn(&LandmarkFrame) -> Gesture,
    {
        let mut evaluation = Evaluation::default();
        for (expected, frame) in self.iter() {
            evaluation.record(expected, classify(frame));
        }
        evaluation
    }
}

/// Per-gesture classification results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureScore {
    pub hits: usize,
    pub total: usize,
}

impl GestureScore {
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.hits as f64 / self.total as f64
    }
}

/// Outcome of classifying a dataset
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    pub scores: BTreeMap<Gesture, GestureScore>,

    /// (expected, predicted) pairs that disagreed, with counts
    pub confusions: BTreeMap<(Gesture, Gesture), usize>,
}

impl Evaluation {
    fn record(&mut self, expected: Gesture, predicted: Gesture) {
        let score = self.scores.entry(expected).or_default();
        score.total += 1;
        if expected == predicted {
            score.hits += 1;
        } else {
            *self.confusions.entry((expected, predicted)).or_default() += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.scores.values().map(|s| s.total).sum()
    }

    pub fn hits(&self) -> usize {
        self.scores.values().map(|s| s.hits).sum()
    }

    /// Overall accuracy in [0, 1]; 0 for an empty dataset
    pub fn accuracy(&self) -> f64 {
        GestureScore {
            hits: self.hits(),
            total: self.total(),
        }
        .accuracy()
    }
}

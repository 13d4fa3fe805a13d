//! Static hand gesture recognition.
//!
//! Gestures are matched against [`GESTURE_RULES`], an ordered list where the
//! first matching rule wins. Several patterns overlap (for instance "OK"
//! ignores the thumb), so the order is part of the behaviour and must not be
//! replaced by a lookup keyed on finger states.

use std::fmt;

use log::debug;

use crate::{
    constants::THUMB_NEAR_INDEX_DISTANCE,
    finger_state::{FingerState, FingerStates},
    geometry::distance,
    labels::{label_or_sentinel, Label},
    landmarks::{index, HandLandmarks, Landmark, NormalizedRect},
    Result,
};

use crate::finger_state::FingerState::{Close, Open};

/// Recognized static hand shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Five,
    Four,
    Tree,
    Two,
    One,
    Yeah,
    Rock,
    Spiderman,
    Fist,
    Ok,
}

impl Label for Gesture {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Five => "FIVE",
            Self::Four => "FOUR",
            Self::Tree => "TREE",
            Self::Two => "TWO",
            Self::One => "ONE",
            Self::Yeah => "YEAH",
            Self::Rock => "ROCK",
            Self::Spiderman => "SPIDERMAN",
            Self::Fist => "FIST",
            Self::Ok => "OK",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs a gesture rule may inspect
#[derive(Debug, Clone, Copy)]
pub struct GestureInput<'a> {
    pub fingers: FingerStates,
    pub hand: HandLandmarks<'a>,
}

impl GestureInput<'_> {
    fn fingers_are(&self, thumb: FingerState, rest: [FingerState; 4]) -> bool {
        self.fingers.thumb == thumb && self.four_fingers_are(rest)
    }

    fn four_fingers_are(&self, [index_finger, middle, ring, pinky]: [FingerState; 4]) -> bool {
        self.fingers.index == index_finger
            && self.fingers.middle == middle
            && self.fingers.ring == ring
            && self.fingers.pinky == pinky
    }

    /// Whether the thumb tip touches the index finger tip
    #[must_use]
    pub fn thumb_near_index(&self) -> bool {
        distance(
            self.hand.get(index::THUMB_TIP),
            self.hand.get(index::INDEX_FINGER_TIP),
        ) < THUMB_NEAR_INDEX_DISTANCE
    }
}

/// A single entry of the ordered rule table
pub struct GestureRule {
    pub gesture: Gesture,
    pub matches: fn(&GestureInput<'_>) -> bool,
}

/// Gesture rules in priority order; evaluation stops at the first match.
pub const GESTURE_RULES: [GestureRule; 10] = [
    GestureRule {
        gesture: Gesture::Five,
        matches: |i| i.fingers_are(Open, [Open, Open, Open, Open]),
    },
    GestureRule {
        gesture: Gesture::Four,
        matches: |i| i.fingers_are(Close, [Open, Open, Open, Open]),
    },
    GestureRule {
        gesture: Gesture::Tree,
        matches: |i| i.fingers_are(Open, [Open, Open, Close, Close]),
    },
    GestureRule {
        gesture: Gesture::Two,
        matches: |i| i.fingers_are(Open, [Open, Close, Close, Close]),
    },
    GestureRule {
        gesture: Gesture::One,
        matches: |i| i.fingers_are(Close, [Open, Close, Close, Close]),
    },
    GestureRule {
        gesture: Gesture::Yeah,
        matches: |i| i.fingers_are(Close, [Open, Open, Close, Close]),
    },
    GestureRule {
        gesture: Gesture::Rock,
        matches: |i| i.fingers_are(Close, [Open, Close, Close, Open]),
    },
    GestureRule {
        gesture: Gesture::Spiderman,
        matches: |i| i.fingers_are(Open, [Open, Close, Close, Open]),
    },
    GestureRule {
        gesture: Gesture::Fist,
        matches: |i| i.fingers_are(Close, [Close, Close, Close, Close]),
    },
    GestureRule {
        gesture: Gesture::Ok,
        matches: |i| i.four_fingers_are([Close, Open, Open, Open]) && i.thumb_near_index(),
    },
];

/// Match finger states against [`GESTURE_RULES`]
#[must_use]
pub fn match_gesture(input: &GestureInput<'_>) -> Option<Gesture> {
    GESTURE_RULES
        .iter()
        .find(|rule| (rule.matches)(input))
        .map(|rule| rule.gesture)
}

/// Stateless per-frame gesture recognizer.
///
/// Holds no history, so one instance can serve any number of hands.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureRecognizer;

impl GestureRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Recognize the static gesture of one hand in one frame.
    ///
    /// Returns `Ok(None)` when no hand is present in `rect` or no rule
    /// matched. A hand rectangle below the detection size short-circuits
    /// before the landmarks are inspected at all.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the landmark list is empty or does
    /// not hold exactly 21 points
    pub fn recognize(&self, landmarks: &[Landmark], rect: &NormalizedRect) -> Result<Option<Gesture>> {
        if !rect.contains_hand() {
            return Ok(None);
        }

        let hand = HandLandmarks::new(landmarks)?;
        let fingers = FingerStates::classify(&hand);
        let gesture = match_gesture(&GestureInput { fingers, hand });

        debug!("Finger states: {} -> {}", fingers, label_or_sentinel(gesture));

        Ok(gesture)
    }
}

//! Per-finger OPEN / CLOSE classification.
//!
//! Each finger is judged from three consecutive joints. The thumb folds
//! sideways so it is tested on the x-axis; the other four fingers are tested
//! on the y-axis. A finger is OPEN when the coordinate decreases from joint
//! to joint towards the tip by more than the margin, CLOSE when it increases,
//! and UNKNOWN otherwise.

use std::fmt;

use crate::{
    constants::{FINGER_CLOSE_MARGIN, FINGER_OPEN_MARGIN},
    landmarks::{index, HandLandmarks},
};

/// Flexion of a single finger in the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FingerState {
    /// Joints are not monotonic beyond the margin
    #[default]
    Unknown,
    /// Finger extended
    Open,
    /// Finger curled towards the palm
    Close,
}

impl FingerState {
    /// Classify from one coordinate of three joints ordered from palm to tip
    #[must_use]
    pub fn from_joints(base: f32, middle: f32, tip: f32) -> Self {
        if middle + FINGER_OPEN_MARGIN < base && tip + FINGER_OPEN_MARGIN < middle {
            Self::Open
        } else if base + FINGER_CLOSE_MARGIN < middle && middle + FINGER_CLOSE_MARGIN < tip {
            Self::Close
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Open => "OPEN",
            Self::Close => "CLOSE",
        }
    }
}

impl fmt::Display for FingerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// States of all five fingers, thumb first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FingerStates {
    pub thumb: FingerState,
    pub index: FingerState,
    pub middle: FingerState,
    pub ring: FingerState,
    pub pinky: FingerState,
}

impl FingerStates {
    #[must_use]
    pub const fn new(
        thumb: FingerState,
        index: FingerState,
        middle: FingerState,
        ring: FingerState,
        pinky: FingerState,
    ) -> Self {
        Self {
            thumb,
            index,
            middle,
            ring,
            pinky,
        }
    }

    /// Classify every finger of a validated hand
    #[must_use]
    pub fn classify(hand: &HandLandmarks<'_>) -> Self {
        let along_x = |a: usize, b: usize, c: usize| {
            FingerState::from_joints(hand.get(a).x, hand.get(b).x, hand.get(c).x)
        };
        let along_y = |a: usize, b: usize, c: usize| {
            FingerState::from_joints(hand.get(a).y, hand.get(b).y, hand.get(c).y)
        };

        Self {
            thumb: along_x(index::THUMB_MCP, index::THUMB_IP, index::THUMB_TIP),
            index: along_y(
                index::INDEX_FINGER_PIP,
                index::INDEX_FINGER_DIP,
                index::INDEX_FINGER_TIP,
            ),
            middle: along_y(
                index::MIDDLE_FINGER_PIP,
                index::MIDDLE_FINGER_DIP,
                index::MIDDLE_FINGER_TIP,
            ),
            ring: along_y(
                index::RING_FINGER_PIP,
                index::RING_FINGER_DIP,
                index::RING_FINGER_TIP,
            ),
            pinky: along_y(index::PINKY_PIP, index::PINKY_DIP, index::PINKY_TIP),
        }
    }

    /// Same state on every finger
    #[must_use]
    pub const fn all(state: FingerState) -> Self {
        Self::new(state, state, state, state, state)
    }

    #[must_use]
    pub const fn as_array(&self) -> [FingerState; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }
}

impl fmt::Display for FingerStates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thumb={} index={} middle={} ring={} pinky={}",
            self.thumb, self.index, self.middle, self.ring, self.pinky
        )
    }
}

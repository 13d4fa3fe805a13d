//! Per-hand ownership of recognizer state.
//!
//! Static gestures are stateless, but movement recognition keeps a history
//! per hand. [`HandTrackers`] gives every hand identity its own
//! [`MotionTracker`] and refuses frames that arrive out of timestamp order,
//! which would otherwise silently corrupt that history.

use std::{collections::HashMap, fmt};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    constants::DEFAULT_MAX_HANDS,
    gesture::{Gesture, GestureRecognizer},
    labels::{label_or_sentinel, serialize_label},
    motion_tracker::{MotionLabels, MotionTracker},
    recording::HandFrame,
    Error, Result,
};

/// Identity of a tracked hand, as assigned by the upstream detector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandId(pub u32);

impl fmt::Display for HandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every label produced for one hand in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameOutput {
    pub timestamp: i64,
    pub hand: HandId,
    #[serde(serialize_with = "serialize_label")]
    pub gesture: Option<Gesture>,
    #[serde(flatten)]
    pub motion: MotionLabels,
}

impl FrameOutput {
    /// Whether every label is the sentinel
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.gesture.is_none() && self.motion.is_idle()
    }
}

impl fmt::Display for FrameOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.timestamp,
            self.hand,
            label_or_sentinel(self.gesture),
            label_or_sentinel(self.motion.scroll),
            label_or_sentinel(self.motion.zoom),
            label_or_sentinel(self.motion.slide)
        )
    }
}

/// Recognizer state owned by a single hand
#[derive(Debug, Clone, Default)]
pub struct HandTracker {
    motion: MotionTracker,
    last_timestamp: Option<i64>,
}

impl HandTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run both recognizers on the next frame of this hand
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfOrderFrame` for a timestamp older than the last
    /// accepted one and `Error::InvalidInput` for a malformed landmark list.
    /// In both cases the tracker state is left unchanged.
    pub fn process(&mut self, frame: &HandFrame, recognizer: &GestureRecognizer) -> Result<FrameOutput> {
        if let Some(previous) = self.last_timestamp {
            if frame.timestamp < previous {
                return Err(Error::OutOfOrderFrame {
                    hand: frame.hand,
                    previous,
                    current: frame.timestamp,
                });
            }
        }

        // Stateless, so it runs first: a rejection here must not advance the motion history
        let gesture = recognizer.recognize(&frame.landmarks, &frame.rect)?;
        let motion = self.motion.update(&frame.landmarks, &frame.rect)?;
        self.last_timestamp = Some(frame.timestamp);

        Ok(FrameOutput {
            timestamp: frame.timestamp,
            hand: frame.hand,
            gesture,
            motion,
        })
    }

    #[must_use]
    pub fn motion(&self) -> &MotionTracker {
        &self.motion
    }

    #[must_use]
    pub fn last_timestamp(&self) -> Option<i64> {
        self.last_timestamp
    }
}

/// Registry of per-hand trackers
#[derive(Debug, Clone)]
pub struct HandTrackers {
    recognizer: GestureRecognizer,
    hands: HashMap<HandId, HandTracker>,
    max_hands: usize,
}

impl Default for HandTrackers {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HANDS)
    }
}

impl HandTrackers {
    /// Create an empty registry accepting at most `max_hands` identities
    #[must_use]
    pub fn new(max_hands: usize) -> Self {
        Self {
            recognizer: GestureRecognizer::new(),
            hands: HashMap::new(),
            max_hands,
        }
    }

    /// Route a frame to its hand's tracker, creating the tracker on first sight
    ///
    /// # Errors
    ///
    /// Returns `Error::TooManyHands` if the frame introduces a hand beyond
    /// the limit, otherwise any error of [`HandTracker::process`]
    pub fn process(&mut self, frame: &HandFrame) -> Result<FrameOutput> {
        if !self.hands.contains_key(&frame.hand) {
            if self.hands.len() >= self.max_hands {
                return Err(Error::TooManyHands { limit: self.max_hands });
            }
            info!("Tracking new hand {}", frame.hand);
        }

        let tracker = self.hands.entry(frame.hand).or_default();
        tracker.process(frame, &self.recognizer)
    }

    /// Drop the history of a hand the detector lost track of
    pub fn forget(&mut self, hand: HandId) -> bool {
        let removed = self.hands.remove(&hand).is_some();
        if removed {
            info!("Stopped tracking hand {}", hand);
        }
        removed
    }

    #[must_use]
    pub fn get(&self, hand: HandId) -> Option<&HandTracker> {
        self.hands.get(&hand)
    }

    /// Identities currently tracked, in ascending order
    #[must_use]
    pub fn hands(&self) -> Vec<HandId> {
        let mut ids: Vec<HandId> = self.hands.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    #[must_use]
    pub fn max_hands(&self) -> usize {
        self.max_hands
    }
}

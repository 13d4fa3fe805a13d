//! Hand movement recognition across consecutive frames.
//!
//! The tracker remembers the hand rectangle center, its height, and the
//! wrist to middle-finger orientation of the previous frame, and derives
//! three independent labels from the change:
//!
//! - scroll: the rectangle center moved by more than 2% of the hand height
//! - zoom: the rectangle height changed by more than 3% of itself
//! - slide: an upright hand rotated by more than 12 degrees (sampled on
//!   even frames only to suppress jitter)
//!
//! One tracker must be owned per tracked hand; feeding two hands into the
//! same tracker mixes their histories.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::{
    constants::{
        REFERENCE_VECTOR_LENGTH, SCROLL_DISTANCE_FACTOR, SLIDE_ANGLE_THRESHOLD_DEGREES,
        SLIDE_UPRIGHT_MAX_DEGREES, SLIDE_UPRIGHT_MIN_DEGREES, ZOOM_HEIGHT_FACTOR,
    },
    geometry::{angle, distance},
    labels::{label_or_sentinel, serialize_label, Label},
    landmarks::{index, HandLandmarks, Landmark, NormalizedRect},
    Result,
};

/// Direction the whole hand moved in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Right,
    Up,
    Left,
    Down,
}

impl ScrollDirection {
    /// Bucket a movement direction into four 90 degree sectors centered on the axes
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees {
            -45..=44 => Self::Right,
            45..=134 => Self::Up,
            -135..=-46 => Self::Down,
            _ => Self::Left,
        }
    }
}

impl Label for ScrollDirection {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Right => "Scrolling right",
            Self::Up => "Scrolling up",
            Self::Left => "Scrolling left",
            Self::Down => "Scrolling down",
        }
    }
}

/// Whether the hand moved towards or away from the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    In,
    Out,
}

impl Label for ZoomDirection {
    fn as_str(&self) -> &'static str {
        match self {
            Self::In => "Zoom in",
            Self::Out => "Zoom out",
        }
    }
}

/// Direction an upright hand tilted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    Left,
    Right,
}

impl Label for SlideDirection {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Slide left",
            Self::Right => "Slide right",
        }
    }
}

/// The three motion labels of one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MotionLabels {
    #[serde(serialize_with = "serialize_label")]
    pub scroll: Option<ScrollDirection>,
    #[serde(serialize_with = "serialize_label")]
    pub zoom: Option<ZoomDirection>,
    #[serde(serialize_with = "serialize_label")]
    pub slide: Option<SlideDirection>,
}

impl MotionLabels {
    /// Whether no movement of any kind was recognized
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.scroll.is_none() && self.zoom.is_none() && self.slide.is_none()
    }
}

impl fmt::Display for MotionLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scroll={} zoom={} slide={}",
            label_or_sentinel(self.scroll),
            label_or_sentinel(self.zoom),
            label_or_sentinel(self.slide)
        )
    }
}

/// Values remembered from earlier frames; `None` until first measured
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionTrackerState {
    /// Hand rectangle center of the previous frame
    pub previous_center: Option<Landmark>,
    /// Wrist to middle-finger MCP angle (degrees) of the last sampled frame
    pub previous_angle: Option<i32>,
    /// Hand rectangle height of the previous frame
    pub previous_height: Option<f32>,
}

/// Stateful movement recognizer for a single hand
#[derive(Debug, Clone, Default)]
pub struct MotionTracker {
    state: MotionTrackerState,
    frame_counter: u64,
}

impl MotionTracker {
    /// Create a tracker with no history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next frame of this hand and classify its movement.
    ///
    /// Frames must arrive in timestamp order. The landmarks are validated
    /// before anything else, so a rejected frame leaves the history untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the landmark list is empty or does
    /// not hold exactly 21 points
    pub fn update(&mut self, landmarks: &[Landmark], rect: &NormalizedRect) -> Result<MotionLabels> {
        let hand = HandLandmarks::new(landmarks)?;
        self.frame_counter += 1;

        let labels = MotionLabels {
            scroll: self.update_scroll(rect),
            zoom: self.update_zoom(rect.height),
            slide: if self.frame_counter % 2 == 0 {
                self.update_slide(&hand)
            } else {
                None
            },
        };

        debug!("Frame {}: {}", self.frame_counter, labels);
        Ok(labels)
    }

    /// History carried into the next frame
    #[must_use]
    pub fn state(&self) -> &MotionTrackerState {
        &self.state
    }

    /// Number of frames processed so far
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }

    fn update_scroll(&mut self, rect: &NormalizedRect) -> Option<ScrollDirection> {
        let center = rect.center();

        let scroll = self.state.previous_center.and_then(|previous| {
            // Scaled by hand size so near and far hands need the same gesture
            let threshold = SCROLL_DISTANCE_FACTOR * rect.height;
            if distance(center, previous) > threshold {
                let reference = previous.offset(REFERENCE_VECTOR_LENGTH, 0.0);
                Some(ScrollDirection::from_degrees(angle(center, previous, reference)))
            } else {
                None
            }
        });

        self.state.previous_center = Some(center);
        scroll
    }

    fn update_zoom(&mut self, height: f32) -> Option<ZoomDirection> {
        let zoom = self.state.previous_height.and_then(|previous| {
            let threshold = height * ZOOM_HEIGHT_FACTOR;
            if height < previous - threshold {
                Some(ZoomDirection::Out)
            } else if height > previous + threshold {
                Some(ZoomDirection::In)
            } else {
                None
            }
        });

        self.state.previous_height = Some(height);
        zoom
    }

    fn update_slide(&mut self, hand: &HandLandmarks<'_>) -> Option<SlideDirection> {
        let wrist = hand.wrist();
        let middle_mcp = hand.get(index::MIDDLE_FINGER_MCP);
        let current = angle(middle_mcp, wrist, wrist.offset(REFERENCE_VECTOR_LENGTH, 0.0));

        let upright = SLIDE_UPRIGHT_MIN_DEGREES..=SLIDE_UPRIGHT_MAX_DEGREES;
        let slide = self
            .state
            .previous_angle
            .filter(|previous| upright.contains(previous))
            .and_then(|previous| {
                if current > previous + SLIDE_ANGLE_THRESHOLD_DEGREES {
                    Some(SlideDirection::Left)
                } else if current < previous - SLIDE_ANGLE_THRESHOLD_DEGREES {
                    Some(SlideDirection::Right)
                } else {
                    None
                }
            });

        self.state.previous_angle = Some(current);
        slide
    }
}

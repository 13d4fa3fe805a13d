//! Hand gesture and hand movement recognition from 21-point hand landmarks.
//!
//! This library turns the per-frame output of a hand landmark detector (21
//! normalized keypoints plus the hand bounding rectangle) into discrete
//! labels:
//! - a static gesture such as `"FIVE"`, `"FIST"` or `"OK"`, decided from the
//!   open/closed state of each finger
//! - three independent movement labels (scroll, zoom, slide) decided from
//!   how the hand rectangle and orientation change between frames
//!
//! Anything that is not recognized is reported as the `"___"` sentinel.
//!
//! # Examples
//!
//! ## Static Gestures
//!
//! ```
//! use hand_gesture_recognition::{
//!     gesture::GestureRecognizer,
//!     labels::label_or_sentinel,
//!     landmarks::{Landmark, NormalizedRect},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let recognizer = GestureRecognizer::new();
//! let rect = NormalizedRect::new(0.5, 0.5, 0.3, 0.4);
//! let landmarks = vec![Landmark::new(0.5, 0.5); 21];
//!
//! let gesture = recognizer.recognize(&landmarks, &rect)?;
//! println!("Gesture: {}", label_or_sentinel(gesture));
//! # Ok(())
//! # }
//! ```
//!
//! ## Movement Tracking
//!
//! ```
//! use hand_gesture_recognition::{
//!     landmarks::{Landmark, NormalizedRect},
//!     motion_tracker::{MotionTracker, ScrollDirection},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // One tracker per hand
//! let mut tracker = MotionTracker::new();
//! let landmarks = vec![Landmark::new(0.5, 0.5); 21];
//!
//! tracker.update(&landmarks, &NormalizedRect::new(0.40, 0.5, 0.3, 1.0))?;
//! let labels = tracker.update(&landmarks, &NormalizedRect::new(0.45, 0.5, 0.3, 1.0))?;
//! assert_eq!(labels.scroll, Some(ScrollDirection::Right));
//! # Ok(())
//! # }
//! ```
//!
//! ## Multiple Hands
//!
//! ```
//! use hand_gesture_recognition::{
//!     hand_tracker::{HandId, HandTrackers},
//!     landmarks::{Landmark, NormalizedRect},
//!     recording::HandFrame,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut trackers = HandTrackers::new(2);
//! let frame = HandFrame {
//!     timestamp: 0,
//!     hand: HandId(1),
//!     rect: NormalizedRect::new(0.5, 0.5, 0.3, 0.4),
//!     landmarks: vec![Landmark::new(0.5, 0.5); 21],
//! };
//!
//! let output = trackers.process(&frame)?;
//! println!("{output}");
//! # Ok(())
//! # }
//! ```

/// Main application module
pub mod app;

/// Command-line arguments
pub mod cli;

/// Configuration management
pub mod config;

/// Fixed recognition thresholds
pub mod constants;

/// Error types and result handling
pub mod error;

/// Per-finger open/close classification
pub mod finger_state;

/// Distance and angle primitives
pub mod geometry;

/// Static gesture recognition
pub mod gesture;

/// Per-hand ownership of recognizer state
pub mod hand_tracker;

/// Output labels and the "nothing recognized" sentinel
pub mod labels;

/// Landmark and rectangle types
pub mod landmarks;

/// Frame-to-frame movement recognition
pub mod motion_tracker;

/// Recorded landmark streams
pub mod recording;

pub use error::{Error, Result};

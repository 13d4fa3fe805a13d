//! Hand landmark and bounding rectangle types.
//!
//! Landmarks follow the MediaPipe hand model: index 0 is the wrist and each
//! finger owns four consecutive indices from the palm outwards.

use serde::{Deserialize, Serialize};

use crate::{
    constants::{MIN_HAND_RECT_SIZE, NUM_HAND_LANDMARKS},
    Error, Result,
};

/// Anatomical landmark indices
pub mod index {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_MCP: usize = 5;
    pub const INDEX_FINGER_PIP: usize = 6;
    pub const INDEX_FINGER_DIP: usize = 7;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_MCP: usize = 9;
    pub const MIDDLE_FINGER_PIP: usize = 10;
    pub const MIDDLE_FINGER_DIP: usize = 11;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_MCP: usize = 13;
    pub const RING_FINGER_PIP: usize = 14;
    pub const RING_FINGER_DIP: usize = 15;
    pub const RING_FINGER_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// A single normalized 2D hand keypoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// X coordinate (0.0 to 1.0, normalized to image width)
    pub x: f32,
    /// Y coordinate (0.0 to 1.0, normalized to image height)
    pub y: f32,
}

impl Landmark {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point shifted by `(dx, dy)`
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(f32, f32)> for Landmark {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Normalized bounding rectangle of the detected hand
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    pub x_center: f32,
    pub y_center: f32,
    pub width: f32,
    pub height: f32,
}

impl NormalizedRect {
    #[must_use]
    pub const fn new(x_center: f32, y_center: f32, width: f32, height: f32) -> Self {
        Self {
            x_center,
            y_center,
            width,
            height,
        }
    }

    /// Center of the rectangle as a point
    #[must_use]
    pub const fn center(&self) -> Landmark {
        Landmark::new(self.x_center, self.y_center)
    }

    /// Whether the rectangle is large enough to hold a confidently detected hand
    #[must_use]
    pub fn contains_hand(&self) -> bool {
        !(self.width < MIN_HAND_RECT_SIZE || self.height < MIN_HAND_RECT_SIZE)
    }
}

/// A landmark list that has been checked to hold exactly one full hand.
///
/// Construction is the only place the length contract is enforced, so every
/// accessor can index without bounds failures.
#[derive(Debug, Clone, Copy)]
pub struct HandLandmarks<'a> {
    points: &'a [Landmark; NUM_HAND_LANDMARKS],
}

impl<'a> HandLandmarks<'a> {
    /// Validate a raw landmark slice
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the slice is empty or does not hold
    /// exactly 21 landmarks
    pub fn new(landmarks: &'a [Landmark]) -> Result<Self> {
        if landmarks.is_empty() {
            return Err(Error::InvalidInput("Input landmark vector is empty".to_string()));
        }

        let points: &'a [Landmark; NUM_HAND_LANDMARKS] = landmarks.try_into().map_err(|_| {
            Error::InvalidInput(format!(
                "Expected {NUM_HAND_LANDMARKS} hand landmarks, got {}",
                landmarks.len()
            ))
        })?;

        Ok(Self { points })
    }

    /// Landmark at a fixed anatomical index (see [`index`])
    #[must_use]
    pub fn get(&self, i: usize) -> Landmark {
        self.points[i]
    }

    #[must_use]
    pub fn wrist(&self) -> Landmark {
        self.points[index::WRIST]
    }

    #[must_use]
    pub fn as_slice(&self) -> &'a [Landmark] {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_landmarks_rejected() {
        let result = HandLandmarks::new(&[]);
        match result {
            Err(Error::InvalidInput(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidInput"),
        }
    }

    #[test]
    fn test_short_landmarks_rejected() {
        let points = vec![Landmark::default(); 20];
        match HandLandmarks::new(&points) {
            Err(Error::InvalidInput(msg)) => assert!(msg.contains("got 20")),
            _ => panic!("Expected InvalidInput"),
        }
    }

    #[test]
    fn test_long_landmarks_rejected() {
        let points = vec![Landmark::default(); 22];
        assert!(HandLandmarks::new(&points).is_err());
    }

    #[test]
    fn test_full_hand_accepted() {
        let points: Vec<Landmark> = (0..21).map(|i| Landmark::new(i as f32 * 0.01, 0.5)).collect();
        let hand = HandLandmarks::new(&points).unwrap();
        assert_eq!(hand.wrist(), Landmark::new(0.0, 0.5));
        assert_eq!(hand.get(index::PINKY_TIP), points[20]);
        assert_eq!(hand.as_slice().len(), 21);
    }

    #[test]
    fn test_rect_contains_hand() {
        assert!(NormalizedRect::new(0.5, 0.5, 0.2, 0.3).contains_hand());
        assert!(NormalizedRect::new(0.5, 0.5, 0.01, 0.01).contains_hand());
        assert!(!NormalizedRect::new(0.5, 0.5, 0.009, 0.3).contains_hand());
        assert!(!NormalizedRect::new(0.5, 0.5, 0.3, 0.0).contains_hand());
    }
}

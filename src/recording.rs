//! Recorded landmark streams.
//!
//! A recording stands in for the upstream hand landmark detector: a YAML
//! list of frames, each carrying a timestamp, an optional hand id, the hand
//! rectangle, and the 21 landmarks.
//!
//! ```yaml
//! frames:
//!   - timestamp: 0
//!     hand: 0
//!     rect: { x_center: 0.5, y_center: 0.5, width: 0.3, height: 0.4 }
//!     landmarks:
//!       - { x: 0.50, y: 0.80 }
//!       # ... 20 more points
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    hand_tracker::HandId,
    landmarks::{Landmark, NormalizedRect},
    Error, Result,
};

/// Detector output for one hand in one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    /// Monotonically increasing frame timestamp
    pub timestamp: i64,
    /// Identity of the tracked hand
    #[serde(default)]
    pub hand: HandId,
    /// Bounding rectangle of the hand
    pub rect: NormalizedRect,
    /// Hand keypoints in anatomical order
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
}

/// An ordered sequence of detector frames
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub frames: Vec<HandFrame>,
}

impl Recording {
    /// Parse a recording from YAML text
    ///
    /// # Errors
    ///
    /// Returns `Error::RecordingError` if the text is not a valid recording
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| Error::RecordingError(format!("Failed to parse recording: {e}")))
    }

    /// Load a recording from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::IoError(format!("Failed to read recording {}: {e}", path.display())))?;

        Self::from_yaml_str(&content)
    }

    /// Save the recording as YAML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;
        Ok(())
    }

    /// Number of distinct hands appearing in the recording
    #[must_use]
    pub fn hand_count(&self) -> usize {
        let mut hands: Vec<HandId> = self.frames.iter().map(|f| f.hand).collect();
        hands.sort_unstable();
        hands.dedup();
        hands.len()
    }
}

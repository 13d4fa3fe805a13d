//! Fixed thresholds used by the recognizers.
//!
//! All distances are in normalized image coordinates ([0, 1] on both axes).

/// Number of landmarks produced by the hand landmark model
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Label emitted when nothing was recognized
pub const SENTINEL_LABEL: &str = "___";

/// Rectangles narrower or shorter than this are treated as "no hand detected"
pub const MIN_HAND_RECT_SIZE: f32 = 0.01;

/// Margin between consecutive finger joints for an OPEN verdict
pub const FINGER_OPEN_MARGIN: f32 = 0.01;

/// Margin between consecutive finger joints for a CLOSE verdict
pub const FINGER_CLOSE_MARGIN: f32 = 0.01;

/// Thumb tip to index tip distance below which the two are touching
pub const THUMB_NEAR_INDEX_DISTANCE: f32 = 0.1;

/// Length of the horizontal reference vector used for angle measurements
pub const REFERENCE_VECTOR_LENGTH: f32 = 0.1;

/// Center displacement, as a fraction of hand height, that counts as a scroll
pub const SCROLL_DISTANCE_FACTOR: f32 = 0.02;

/// Height change, as a fraction of hand height, that counts as a zoom
pub const ZOOM_HEIGHT_FACTOR: f32 = 0.03;

/// Lower bound (inclusive, degrees) of the upright hand orientation
pub const SLIDE_UPRIGHT_MIN_DEGREES: i32 = 80;

/// Upper bound (inclusive, degrees) of the upright hand orientation
pub const SLIDE_UPRIGHT_MAX_DEGREES: i32 = 100;

/// Rotation (degrees) between sampled frames that counts as a slide
pub const SLIDE_ANGLE_THRESHOLD_DEGREES: i32 = 12;

/// Default upper bound on simultaneously tracked hands
pub const DEFAULT_MAX_HANDS: usize = 2;

//! Helper functions for building synthetic hands in tests

#![allow(dead_code)]

use hand_gesture_recognition::{
    finger_state::{FingerState, FingerStates},
    hand_tracker::HandId,
    landmarks::{index, Landmark, NormalizedRect},
    recording::HandFrame,
};

/// Rectangle of a comfortably detected hand
pub const HAND_RECT: NormalizedRect = NormalizedRect::new(0.5, 0.5, 0.3, 0.4);

const WRIST: Landmark = Landmark::new(0.5, 0.9);

/// Column of each non-thumb finger: (mcp index, x)
const FINGER_COLUMNS: [(usize, f32); 4] = [
    (index::INDEX_FINGER_MCP, 0.45),
    (index::MIDDLE_FINGER_MCP, 0.52),
    (index::RING_FINGER_MCP, 0.59),
    (index::PINKY_MCP, 0.66),
];

/// Joint coordinates (base, middle, tip) that classify as `state`.
/// Open fingers shrink towards the tip, closed ones grow.
fn joints(state: FingerState, base: f32) -> [f32; 3] {
    match state {
        FingerState::Open => [base, base - 0.05, base - 0.10],
        FingerState::Close => [base, base + 0.05, base + 0.10],
        FingerState::Unknown => [base, base, base],
    }
}

/// Build 21 landmarks whose finger states classify as `states`.
///
/// Thumb and index tips are always at least 0.1 apart; use
/// [`touch_thumb_to_index`] to bring them together.
pub fn hand_with_states(states: FingerStates) -> Vec<Landmark> {
    let mut points = vec![WRIST; 21];

    points[index::THUMB_CMC] = Landmark::new(0.42, 0.8);
    let [t2, t3, t4] = joints(states.thumb, 0.40);
    points[index::THUMB_MCP] = Landmark::new(t2, 0.75);
    points[index::THUMB_IP] = Landmark::new(t3, 0.75);
    points[index::THUMB_TIP] = Landmark::new(t4, 0.75);

    let others = [states.index, states.middle, states.ring, states.pinky];
    for ((mcp, x), state) in FINGER_COLUMNS.iter().zip(others) {
        let [base, middle, tip] = joints(state, 0.5);
        points[*mcp] = Landmark::new(*x, 0.6);
        points[mcp + 1] = Landmark::new(*x, base);
        points[mcp + 2] = Landmark::new(*x, middle);
        points[mcp + 3] = Landmark::new(*x, tip);
    }

    points
}

/// Move the thumb tip right next to the index finger tip
pub fn touch_thumb_to_index(points: &mut [Landmark]) {
    points[index::THUMB_TIP] = points[index::INDEX_FINGER_TIP].offset(0.02, 0.0);
}

/// Hand whose wrist to middle finger MCP direction is `degrees` from the x-axis
pub fn hand_at_angle(degrees: f32) -> Vec<Landmark> {
    let mut points = hand_with_states(FingerStates::all(FingerState::Open));
    let radians = degrees.to_radians();
    points[index::WRIST] = WRIST;
    points[index::MIDDLE_FINGER_MCP] = WRIST.offset(0.2 * radians.cos(), -0.2 * radians.sin());
    points
}

/// Hand rectangle centered at `(x, y)` with the given height
pub fn rect_at(x: f32, y: f32, height: f32) -> NormalizedRect {
    NormalizedRect::new(x, y, 0.3, height)
}

/// Detector frame for hand 0
pub fn frame(timestamp: i64, rect: NormalizedRect, landmarks: Vec<Landmark>) -> HandFrame {
    HandFrame {
        timestamp,
        hand: HandId(0),
        rect,
        landmarks,
    }
}

//! Planar geometry on normalized landmarks.

use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::landmarks::Landmark;

fn to_vector(point: Landmark) -> Vector2<f32> {
    Vector2::new(point.x, point.y)
}

/// Euclidean distance between two points
#[must_use]
pub fn distance(a: Landmark, b: Landmark) -> f32 {
    (to_vector(a) - to_vector(b)).norm()
}

/// Signed angle in radians at `vertex` between the vectors `a -> vertex` and
/// `c -> vertex`, in `[-PI, PI]`.
///
/// With `c = vertex + (0.1, 0)` this is the direction of `a` seen from
/// `vertex`: `0` to the right, `+PI/2` straight above (y grows downwards).
#[must_use]
pub fn angle_radians(a: Landmark, vertex: Landmark, c: Landmark) -> f32 {
    let ab = to_vector(vertex) - to_vector(a);
    let cb = to_vector(vertex) - to_vector(c);

    let dot = ab.dot(&cb);
    let cross = ab.perp(&cb);

    cross.atan2(dot)
}

/// Convert radians to whole degrees, rounding half up
#[must_use]
#[allow(clippy::cast_possible_truncation)] // |degrees| <= 180 after atan2
pub fn radians_to_degrees(radians: f32) -> i32 {
    (f64::from(radians) * 180.0 / PI + 0.5).floor() as i32
}

/// Signed angle of [`angle_radians`] in whole degrees
#[must_use]
pub fn angle(a: Landmark, vertex: Landmark, c: Landmark) -> i32 {
    radians_to_degrees(angle_radians(a, vertex, c))
}

//! 2D vector type used for positions, velocities and accelerations.
//!
//! Arithmetic (`+`, `-`, scalar `*`), `length` and `distance` come from glam.
//! The zero vector has length zero; nothing here can fail.

/// Point/vector in world coordinates, double precision
pub type Vector2 = glam::DVec2;

/// Shorthand constructor
#[inline]
pub fn vec2(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

/// True when both components are finite
#[inline]
pub fn is_finite(v: Vector2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

//! Immutable 2-D vector used for positions, velocities and impulses
//!
//! Scene coordinates: x grows to the right, y grows downward.
//! Every operation returns a new value; nothing mutates in place.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::DivisionError;

/// A two-component `f64` vector with exact component-wise equality
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector of the given length pointing at `angle` radians from +x
    pub fn from_angle(angle: f64, magnitude: f64) -> Self {
        (DVec2::from_angle(angle) * magnitude).into()
    }

    /// Unit vector pointing at `angle` radians from +x
    pub fn unit_from_angle(angle: f64) -> Self {
        Self::from_angle(angle, 1.0)
    }

    /// Divide both components by `scalar`, refusing to divide by zero
    pub fn try_div(self, scalar: f64) -> Result<Self, DivisionError> {
        if scalar == 0.0 {
            return Err(DivisionError { vector: self });
        }
        Ok(Self::new(self.x / scalar, self.y / scalar))
    }

    /// Euclidean length
    #[inline]
    pub fn magnitude(self) -> f64 {
        DVec2::from(self).length()
    }

    /// Squared length (no sqrt, for comparisons)
    #[inline]
    pub fn magnitude_sq(self) -> f64 {
        DVec2::from(self).length_squared()
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        DVec2::from(self).dot(other.into())
    }

    /// Angle from +x in radians; the zero vector yields 0
    #[inline]
    pub fn angle_rad(self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn angle_deg(self) -> f64 {
        self.angle_rad().to_degrees()
    }

    /// Unit vector in the same direction, or the zero vector when the length is exactly 0
    pub fn normalized(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / mag, self.y / mag)
    }

    #[inline]
    pub fn distance_to(self, other: Self) -> f64 {
        DVec2::from(self).distance(other.into())
    }

    #[inline]
    pub fn distance_sq_to(self, other: Self) -> f64 {
        DVec2::from(self).distance_squared(other.into())
    }

    /// Cap the length at `max_magnitude`, keeping direction.
    ///
    /// Vectors already within the cap come back unchanged.
    pub fn clamped(self, max_magnitude: f64) -> Self {
        if self.magnitude_sq() <= max_magnitude * max_magnitude {
            return self;
        }
        self.normalized() * max_magnitude
    }
}

impl From<DVec2> for Vector2 {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for DVec2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    #[inline]
    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Equality is exact float equality. NaN components never compare equal,
// which is the only way `Eq` reflexivity can be violated.
impl Eq for Vector2 {}

impl Hash for Vector2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // +0.0 and -0.0 compare equal, so they must hash equal too
        (self.x + 0.0).to_bits().hash(state);
        (self.y + 0.0).to_bits().hash(state);
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 5.0);
        assert_eq!(a + b, Vector2::new(4.0, 7.0));
        assert_eq!(b - a, Vector2::new(2.0, 3.0));
        assert_eq!(a * 3.0, Vector2::new(3.0, 6.0));
        assert_eq!(3.0 * a, Vector2::new(3.0, 6.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn test_operations_leave_operands_untouched() {
        let a = Vector2::new(1.0, 2.0);
        let _ = a + Vector2::new(10.0, 10.0);
        let _ = a.normalized();
        assert_eq!(a, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_try_div() {
        let v = Vector2::new(6.0, -4.0);
        assert_eq!(v.try_div(2.0), Ok(Vector2::new(3.0, -2.0)));
    }

    #[test]
    fn test_try_div_by_zero_fails() {
        let v = Vector2::new(6.0, -4.0);
        let err = v.try_div(0.0).unwrap_err();
        assert_eq!(err.vector, v);
        assert!(v.try_div(-0.0).is_err());
    }

    #[test]
    fn test_magnitude() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_sq(), 25.0);
        assert_eq!(Vector2::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_dot() {
        assert_eq!(Vector2::new(1.0, 2.0).dot(Vector2::new(3.0, 4.0)), 11.0);
        assert_eq!(Vector2::new(1.0, 0.0).dot(Vector2::new(0.0, 1.0)), 0.0);
    }

    #[test]
    fn test_angles() {
        assert_eq!(Vector2::new(1.0, 0.0).angle_rad(), 0.0);
        assert!((Vector2::new(0.0, 1.0).angle_rad() - FRAC_PI_2).abs() < 1e-12);
        assert!((Vector2::new(-1.0, 0.0).angle_deg() - 180.0).abs() < 1e-12);
        assert_eq!(Vector2::ZERO.angle_rad(), 0.0);
    }

    #[test]
    fn test_from_angle() {
        let v = Vector2::from_angle(PI, 2.0);
        assert!((v.x + 2.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);

        let u = Vector2::unit_from_angle(FRAC_PI_2);
        assert!(u.x.abs() < 1e-12);
        assert!((u.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized() {
        let n = Vector2::new(3.0, 4.0).normalized();
        assert!((n.x - 0.6).abs() < 1e-12);
        assert!((n.y - 0.8).abs() < 1e-12);
        assert!((n.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_zero_is_zero() {
        assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
    }

    #[test]
    fn test_distance() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(4.0, 5.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.distance_sq_to(b), 25.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn test_clamped_under_limit_unchanged() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.clamped(10.0), v);
        // Exactly at the cap is also unchanged
        assert_eq!(v.clamped(5.0), v);
    }

    #[test]
    fn test_clamped_over_limit() {
        let v = Vector2::new(30.0, 40.0).clamped(5.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-12);
        assert!((v.x - 3.0).abs() < 1e-12);
        assert!((v.y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut seen = HashMap::new();
        seen.insert(Vector2::new(1.0, 2.0), "a");
        seen.insert(Vector2::new(1.0, 2.0), "b");
        seen.insert(Vector2::new(2.0, 1.0), "c");
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[&Vector2::new(1.0, 2.0)], "b");
    }

    #[test]
    fn test_signed_zero_hashes_equal() {
        let mut seen = HashMap::new();
        seen.insert(Vector2::new(0.0, 0.0), 1);
        assert_eq!(seen.get(&Vector2::new(-0.0, -0.0)), Some(&1));
    }

    #[test]
    fn test_glam_round_trip() {
        let v = Vector2::new(1.5, -2.5);
        let g: DVec2 = v.into();
        assert_eq!(Vector2::from(g), v);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(1.0, -2.5).to_string(), "(1.000, -2.500)");
    }
}

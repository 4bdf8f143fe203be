//! Ball entity
//!
//! A ball knows its physical state and how to bounce off the play-area edges.
//! Radius, mass and colour are fixed at creation; only position and velocity
//! change afterwards.

use std::f64::consts::{PI, TAU};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vector::Vector2;
use crate::config::PhysicsConfig;
use crate::consts::MASS_DENSITY;

/// RGB fill colour (presentation only, ignored by the physics)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

/// Which edges a wall bounce touched this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub floor: bool,
}

/// A circular body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ball {
    id: u64,
    /// Centre in scene coordinates
    pub position: Vector2,
    /// px/frame
    pub velocity: Vector2,
    radius: f64,
    mass: f64,
    color: Rgb,
}

impl Ball {
    /// Create a ball; mass is derived from the radius.
    ///
    /// `radius` must be positive.
    pub fn new(id: u64, position: Vector2, velocity: Vector2, radius: f64, color: Rgb) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive, got {radius}");
        Self {
            id,
            position,
            velocity,
            radius,
            mass: MASS_DENSITY * PI * radius * radius,
            color,
        }
    }

    /// Create a ball with a random radius in the configured range.
    ///
    /// Without an explicit velocity, direction is uniform over the full circle
    /// and speed uniform in the configured spawn-speed range.
    pub fn random<R: Rng + ?Sized>(
        id: u64,
        position: Vector2,
        color: Rgb,
        velocity: Option<Vector2>,
        config: &PhysicsConfig,
        rng: &mut R,
    ) -> Self {
        let radius = rng.random_range(config.min_radius..=config.max_radius);
        let velocity = velocity.unwrap_or_else(|| {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(config.min_speed..=config.max_speed);
            Vector2::from_angle(angle, speed)
        });
        Self::new(id, position, velocity, radius, color)
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// ½ m v²
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_sq()
    }

    #[inline]
    pub fn momentum(&self) -> Vector2 {
        self.velocity * self.mass
    }

    /// True when `point` lies within this ball (edge inclusive)
    #[inline]
    pub fn contains(&self, point: Vector2) -> bool {
        point.distance_to(self.position) <= self.radius
    }

    /// Bottom edge within 1 px of the floor at `floor_y`
    #[inline]
    pub fn is_on_floor(&self, floor_y: f64) -> bool {
        self.position.y + self.radius >= floor_y - 1.0
    }

    /// Advance one frame along the current velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.position = self.position + self.velocity;
    }

    /// Add an instantaneous velocity change
    #[inline]
    pub fn apply_impulse(&mut self, delta: Vector2) {
        self.velocity = self.velocity + delta;
    }

    #[inline]
    pub fn clamp_speed(&mut self, max_speed: f64) {
        self.velocity = self.velocity.clamped(max_speed);
    }

    /// Bounce off the `width` x `height` box. Returns true on a left-wall hit.
    pub fn bounce_off_walls(&mut self, width: f64, height: f64) -> bool {
        self.reflect_in_bounds(width, height).left
    }

    /// Gravity-mode bounce; also reports floor hits so the caller can damp
    pub fn bounce_off_walls_gravity(&mut self, width: f64, height: f64) -> WallHits {
        self.reflect_in_bounds(width, height)
    }

    /// Flip each velocity component whose leading edge has crossed a boundary
    /// while still heading into it, and pin the ball to that boundary.
    fn reflect_in_bounds(&mut self, width: f64, height: f64) -> WallHits {
        let mut hits = WallHits::default();
        let r = self.radius;
        let Vector2 { x: mut px, y: mut py } = self.position;
        let Vector2 { x: mut vx, y: mut vy } = self.velocity;

        if px - r <= 0.0 && vx < 0.0 {
            vx = -vx;
            px = r;
            hits.left = true;
        } else if px + r >= width && vx > 0.0 {
            vx = -vx;
            px = width - r;
        }

        if py - r <= 0.0 && vy < 0.0 {
            vy = -vy;
            py = r;
        } else if py + r >= height && vy > 0.0 {
            vy = -vy;
            py = height - r;
            hits.floor = true;
        }

        self.position = Vector2::new(px, py);
        self.velocity = Vector2::new(vx, vy);
        hits
    }
}

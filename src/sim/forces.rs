//! Per-frame forces and impulses
//!
//! Every function here is pure: it takes a velocity (and sometimes a mass or
//! position) and returns a new vector. Coefficients come from the config.

use super::vector::Vector2;
use crate::config::PhysicsConfig;

/// No-gravity surface friction: `v * friction^sqrt(mass)`.
///
/// Heavier balls press harder on the surface and slow down faster.
pub fn apply_surface_friction(velocity: Vector2, mass: f64, config: &PhysicsConfig) -> Vector2 {
    velocity * config.surface_friction.powf(mass.sqrt())
}

/// One frame of downward acceleration
#[inline]
pub fn apply_gravity(velocity: Vector2, config: &PhysicsConfig) -> Vector2 {
    velocity + Vector2::new(0.0, config.gravity_accel)
}

/// Uniform drag used in gravity mode
#[inline]
pub fn apply_air_resistance(velocity: Vector2, config: &PhysicsConfig) -> Vector2 {
    velocity * config.air_resistance
}

/// Damp the horizontal component only
#[inline]
pub fn apply_floor_friction(velocity: Vector2, config: &PhysicsConfig) -> Vector2 {
    Vector2::new(velocity.x * config.floor_friction, velocity.y)
}

/// Damp the vertical component only (call right after the floor flip)
#[inline]
pub fn apply_bounce_restitution(velocity: Vector2, config: &PhysicsConfig) -> Vector2 {
    Vector2::new(velocity.x, velocity.y * config.bounce_restitution)
}

/// Left-wall boost: scale x by the boost factor, never exceeding the speed cap.
///
/// Velocities already at or above the cap are only clamped.
pub fn compute_wall_boost(velocity: Vector2, config: &PhysicsConfig) -> Vector2 {
    let cap = config.max_speed_cap;
    if velocity.magnitude() >= cap {
        return velocity.clamped(cap);
    }
    Vector2::new(velocity.x * config.left_wall_boost, velocity.y).clamped(cap)
}

/// Radial shockwave impulse with `strength / distance` falloff.
///
/// Zero beyond the shockwave radius. Distances under 1 px are treated as 1 px,
/// and a ball sitting exactly on the origin gets no push at all since the
/// direction is undefined.
pub fn compute_shockwave_impulse(
    ball_pos: Vector2,
    origin: Vector2,
    config: &PhysicsConfig,
) -> Vector2 {
    let delta = ball_pos - origin;
    let dist = delta.magnitude();
    if dist > config.shockwave_radius {
        return Vector2::ZERO;
    }
    let safe_dist = dist.max(1.0);
    let strength = config.shockwave_strength / safe_dist;
    delta.normalized() * strength
}

//! Circle-circle collision detection and response
//!
//! Detection is a per-frame overlap test; fast balls can tunnel through each
//! other. Response is a 1-D elastic exchange along the contact normal followed
//! by a positional push that leaves the pair strictly apart.

use super::vector::Vector2;

/// Extra separation added to each ball on top of half the overlap, so the pair
/// does not re-trigger on the next frame
pub const SEPARATION_MARGIN: f64 = 0.5;

/// Physical state of one side of a collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBody {
    pub position: Vector2,
    pub velocity: Vector2,
    pub mass: f64,
    pub radius: f64,
}

/// Post-collision velocities and separated positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResponse {
    pub vel_a: Vector2,
    pub vel_b: Vector2,
    pub pos_a: Vector2,
    pub pos_b: Vector2,
}

/// True when the circles strictly overlap (touching does not count)
#[inline]
pub fn detect_collision(pos_a: Vector2, radius_a: f64, pos_b: Vector2, radius_b: f64) -> bool {
    let min_dist = radius_a + radius_b;
    pos_a.distance_sq_to(pos_b) < min_dist * min_dist
}

/// Resolve a collision between `a` and `b`.
///
/// Velocities change only when the pair is approaching along the normal.
/// Overlap is corrected either way. Coincident centres separate along +x.
pub fn resolve_collision(a: &CollisionBody, b: &CollisionBody) -> CollisionResponse {
    let offset = a.position - b.position;
    let dist = offset.magnitude();
    let (n, dist) = if dist == 0.0 {
        (Vector2::new(1.0, 0.0), 1.0)
    } else {
        (offset.normalized(), dist)
    };

    // Relative velocity of A w.r.t. B along the normal (B -> A)
    let vel_along_normal = (a.velocity - b.velocity).dot(n);

    let (vel_a, vel_b) = if vel_along_normal > 0.0 {
        // Already separating
        (a.velocity, b.velocity)
    } else {
        let impulse = 2.0 * vel_along_normal / (a.mass + b.mass);
        (
            a.velocity - n * (impulse * b.mass),
            b.velocity + n * (impulse * a.mass),
        )
    };

    let overlap = (a.radius + b.radius) - dist;
    let (pos_a, pos_b) = if overlap > 0.0 {
        let correction = n * (overlap / 2.0 + SEPARATION_MARGIN);
        (a.position + correction, b.position - correction)
    } else {
        (a.position, b.position)
    };

    CollisionResponse {
        vel_a,
        vel_b,
        pos_a,
        pos_b,
    }
}

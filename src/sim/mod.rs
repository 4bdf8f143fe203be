//! Simulation core
//!
//! Pure, frame-stepped physics with no rendering or input dependencies:
//! - Single-threaded; one `update()` call is one frame
//! - Seeded RNG for reproducible spawns
//! - Stable iteration order (ball insertion order)

pub mod ball;
pub mod collision;
pub mod forces;
pub mod state;
mod tick;
pub mod vector;

pub use ball::{Ball, Rgb, WallHits};
pub use collision::{CollisionBody, CollisionResponse, detect_collision, resolve_collision};
pub use forces::{
    apply_air_resistance, apply_bounce_restitution, apply_floor_friction, apply_gravity,
    apply_surface_friction, compute_shockwave_impulse, compute_wall_boost,
};
pub use state::{ShockwaveEffect, Simulation, SimulationSnapshot, SpawnRecord};
pub use vector::Vector2;

//! Skunk - a 2-D bouncing ball physics toy
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (vectors, forces, collisions, balls, orchestration)
//! - `config`: Read-only physics tuning, loadable from JSON
//! - `error`: Error types
//! - `logging`: `env_logger` setup for binaries
//!
//! Rendering and input are not part of this crate. A presentation layer reads
//! [`sim::Simulation`] state and calls its public operations between frames.

pub mod config;
pub mod error;
pub mod logging;
pub mod sim;

pub use config::PhysicsConfig;
pub use error::{ConfigError, DivisionError};
pub use sim::{Ball, Rgb, Simulation, Vector2};

/// Default tuning constants (all physics units are px and frames)
pub mod consts {
    use crate::sim::Rgb;

    /// Window dimensions
    pub const WINDOW_WIDTH: f64 = 800.0;
    pub const WINDOW_HEIGHT: f64 = 450.0;
    /// Status strip reserved at the bottom of the window
    pub const STATUS_BAR_HEIGHT: f64 = 30.0;
    /// Target frame rate of the presentation loop
    pub const FPS: u32 = 60;

    /// Ball radius range for random spawns
    pub const MIN_RADIUS: f64 = 12.0;
    pub const MAX_RADIUS: f64 = 30.0;
    /// Speed range for random spawns (px/frame)
    pub const MIN_SPEED: f64 = 0.5;
    pub const MAX_SPEED: f64 = 3.0;

    /// mass = MASS_DENSITY * pi * r^2
    pub const MASS_DENSITY: f64 = 1.0;

    /// Per-frame velocity multiplier in no-gravity mode (raised to sqrt(mass))
    pub const SURFACE_FRICTION: f64 = 0.9999;
    /// Downward acceleration (px/frame^2)
    pub const GRAVITY_ACCEL: f64 = 0.15;
    /// Fraction of vertical speed kept after a floor bounce
    pub const BOUNCE_RESTITUTION: f64 = 0.85;
    /// Horizontal damping on a floor bounce
    pub const FLOOR_FRICTION: f64 = 0.99;
    /// Per-frame drag in gravity mode
    pub const AIR_RESISTANCE: f64 = 0.9995;
    /// x multiplier on left-wall bounce
    pub const LEFT_WALL_BOOST: f64 = 1.12;
    /// Absolute speed limit
    pub const MAX_SPEED_CAP: f64 = 5.0;

    /// Shockwave impulse numerator (impulse = strength / distance)
    pub const SHOCKWAVE_STRENGTH: f64 = 800.0;
    /// Beyond this radius the wave has no effect
    pub const SHOCKWAVE_RADIUS: f64 = 400.0;

    /// Frames the left wall glows after a boost (~0.5 s at 60 FPS)
    pub const WALL_GLOW_DURATION: f64 = 30.0;
    /// Frames a shockwave ring stays visible
    pub const SHOCKWAVE_VISUAL_DURATION: u32 = 20;

    /// Ball colours
    pub const BALL_LEFT: Rgb = Rgb::new(0x4B, 0x2E, 0x83);
    pub const BALL_OTHER: Rgb = Rgb::new(0xB7, 0xA5, 0x7A);
}

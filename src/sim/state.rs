//! Simulation state and user actions
//!
//! The simulation exclusively owns every ball. The presentation layer gets
//! read-only views and calls the operations here between frames; the
//! per-frame pipeline itself lives in `tick.rs`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::ball::{Ball, Rgb};
use super::forces::compute_shockwave_impulse;
use super::vector::Vector2;
use crate::config::PhysicsConfig;
use crate::error::ConfigResult;

/// An expanding shockwave ring (visual only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShockwaveEffect {
    pub origin: Vector2,
    /// Frames since the shockwave fired
    pub age: u32,
}

/// How a ball looked when it was spawned
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpawnRecord {
    pub id: u64,
    pub position: Vector2,
    pub velocity: Vector2,
    pub radius: f64,
    pub color: Rgb,
}

/// Serializable view of the whole simulation
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSnapshot {
    pub frame: u64,
    pub gravity_on: bool,
    pub paused: bool,
    pub wall_glow_timer: f64,
    pub total_energy: f64,
    pub total_momentum: Vector2,
    pub balls: Vec<Ball>,
    pub shockwave_effects: Vec<ShockwaveEffect>,
}

/// Top-level simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(super) config: PhysicsConfig,
    /// Insertion order; pairwise collisions run in this order
    pub(super) balls: Vec<Ball>,
    pub(super) gravity_on: bool,
    pub(super) paused: bool,
    /// Frames of left-wall glow remaining (never negative)
    pub(super) wall_glow_timer: f64,
    pub(super) shockwave_effects: Vec<ShockwaveEffect>,
    /// Unpaused frames since creation or the last reset
    pub(super) frame: u64,
    spawn_history: Vec<SpawnRecord>,
    rng: Pcg32,
    seed: u64,
    next_id: u64,
}

impl Simulation {
    /// New empty simulation with an entropy-seeded spawn RNG
    pub fn new(config: PhysicsConfig) -> ConfigResult<Self> {
        Self::with_seed(config, rand::random())
    }

    /// New empty simulation with a fixed spawn seed (reproducible spawns).
    ///
    /// The config is validated here, so a hand-built config with an inverted
    /// range is rejected up front instead of failing inside `spawn`.
    pub fn with_seed(config: PhysicsConfig, seed: u64) -> ConfigResult<Self> {
        config.validate()?;
        log::debug!("Simulation created with seed {}", seed);
        Ok(Self {
            config,
            balls: Vec::new(),
            gravity_on: false,
            paused: false,
            wall_glow_timer: 0.0,
            shockwave_effects: Vec::new(),
            frame: 0,
            spawn_history: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            next_id: 1,
        })
    }

    // === Ball management ===

    /// Spawn a ball at `position` unless it would overlap an existing one.
    ///
    /// The first check uses the average radius because the real radius is
    /// random; the ball is then generated and checked again with its actual
    /// radius. Either check can reject. `velocity` of `None` means random.
    pub fn spawn(
        &mut self,
        position: Vector2,
        color: Rgb,
        velocity: Option<Vector2>,
    ) -> Option<&Ball> {
        let test_radius = self.config.average_radius();
        if self.overlaps_any(position, test_radius) {
            log::debug!("Spawn at {} rejected by pre-check", position);
            return None;
        }

        let ball = Ball::random(
            self.next_id,
            position,
            color,
            velocity,
            &self.config,
            &mut self.rng,
        );
        if self.overlaps_any(position, ball.radius()) {
            log::debug!(
                "Spawn at {} rejected: radius {:.1} overlaps",
                position,
                ball.radius()
            );
            return None;
        }

        self.next_id = self.next_id.wrapping_add(1);
        self.spawn_history.push(SpawnRecord {
            id: ball.id(),
            position: ball.position,
            velocity: ball.velocity,
            radius: ball.radius(),
            color: ball.color(),
        });
        log::debug!(
            "Spawned ball {} at {} (r={:.1}, v={})",
            ball.id(),
            ball.position,
            ball.radius(),
            ball.velocity
        );
        self.balls.push(ball);
        self.balls.last()
    }

    fn overlaps_any(&self, position: Vector2, radius: f64) -> bool {
        self.balls
            .iter()
            .any(|b| position.distance_to(b.position) < radius + b.radius())
    }

    /// Remove a ball by id. Absent ids are a no-op.
    pub fn remove(&mut self, id: u64) -> Option<Ball> {
        let index = self.balls.iter().position(|b| b.id() == id)?;
        log::debug!("Removed ball {}", id);
        Some(self.balls.remove(index))
    }

    /// Clear all balls and effects and restore default mode flags
    pub fn reset(&mut self) {
        self.balls.clear();
        self.gravity_on = false;
        self.paused = false;
        self.wall_glow_timer = 0.0;
        self.shockwave_effects.clear();
        self.spawn_history.clear();
        self.frame = 0;
        log::info!("Simulation reset");
    }

    // === User actions ===

    /// Push every ball away from `origin` and start a shockwave ring there
    pub fn apply_shockwave(&mut self, origin: Vector2) {
        let cap = self.config.max_speed_cap;
        for ball in &mut self.balls {
            let impulse = compute_shockwave_impulse(ball.position, origin, &self.config);
            ball.apply_impulse(impulse);
            ball.clamp_speed(cap);
        }
        self.shockwave_effects.push(ShockwaveEffect { origin, age: 0 });
        log::info!("Shockwave at {} hit {} balls", origin, self.balls.len());
    }

    pub fn toggle_gravity(&mut self) {
        self.gravity_on = !self.gravity_on;
        log::info!("Gravity {}", if self.gravity_on { "on" } else { "off" });
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
    }

    // === Queries ===

    #[inline]
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// All balls in insertion order
    #[inline]
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn ball(&self, id: u64) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id() == id)
    }

    #[inline]
    pub fn gravity_on(&self) -> bool {
        self.gravity_on
    }

    #[inline]
    pub fn paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn wall_glow_timer(&self) -> f64 {
        self.wall_glow_timer
    }

    #[inline]
    pub fn shockwave_effects(&self) -> &[ShockwaveEffect] {
        &self.shockwave_effects
    }

    /// Successful spawns since the last reset, oldest first
    #[inline]
    pub fn spawn_history(&self) -> &[SpawnRecord] {
        &self.spawn_history
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sum of kinetic energy over all balls
    pub fn total_energy(&self) -> f64 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }

    pub fn total_momentum(&self) -> Vector2 {
        self.balls
            .iter()
            .fold(Vector2::ZERO, |acc, b| acc + b.momentum())
    }

    /// First ball (insertion order) whose disc contains `position`
    pub fn ball_at(&self, position: Vector2) -> Option<&Ball> {
        self.balls.iter().find(|b| b.contains(position))
    }

    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            frame: self.frame,
            gravity_on: self.gravity_on,
            paused: self.paused,
            wall_glow_timer: self.wall_glow_timer,
            total_energy: self.total_energy(),
            total_momentum: self.total_momentum(),
            balls: self.balls.clone(),
            shockwave_effects: self.shockwave_effects.clone(),
        }
    }

    /// Insert a pre-built ball without overlap checks (tests only)
    #[cfg(test)]
    pub(crate) fn insert_ball(
        &mut self,
        position: Vector2,
        velocity: Vector2,
        radius: f64,
    ) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.balls
            .push(Ball::new(id, position, velocity, radius, crate::consts::BALL_LEFT));
        id
    }
}

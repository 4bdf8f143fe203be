//! Physics tuning
//!
//! Built once at startup (defaults or a JSON file) and then treated as
//! read-only. The simulation owns one copy and lends it out by reference.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};

/// All tunable physics parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // === Play area ===
    pub window_width: f64,
    pub window_height: f64,
    /// Strip at the bottom of the window that balls never enter
    pub status_bar_height: f64,

    // === Spawning ===
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_speed: f64,
    pub max_speed: f64,

    // === Forces ===
    pub surface_friction: f64,
    pub gravity_accel: f64,
    pub bounce_restitution: f64,
    pub floor_friction: f64,
    pub air_resistance: f64,
    pub left_wall_boost: f64,
    pub max_speed_cap: f64,
    pub shockwave_strength: f64,
    pub shockwave_radius: f64,

    // === Effect timers (frames) ===
    pub wall_glow_duration: f64,
    pub shockwave_visual_duration: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            status_bar_height: STATUS_BAR_HEIGHT,

            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,

            surface_friction: SURFACE_FRICTION,
            gravity_accel: GRAVITY_ACCEL,
            bounce_restitution: BOUNCE_RESTITUTION,
            floor_friction: FLOOR_FRICTION,
            air_resistance: AIR_RESISTANCE,
            left_wall_boost: LEFT_WALL_BOOST,
            max_speed_cap: MAX_SPEED_CAP,
            shockwave_strength: SHOCKWAVE_STRENGTH,
            shockwave_radius: SHOCKWAVE_RADIUS,

            wall_glow_duration: WALL_GLOW_DURATION,
            shockwave_visual_duration: SHOCKWAVE_VISUAL_DURATION,
        }
    }
}

impl PhysicsConfig {
    /// Right boundary of the play area
    #[inline]
    pub fn play_area_width(&self) -> f64 {
        self.window_width
    }

    /// Bottom boundary of the play area (window minus status strip)
    #[inline]
    pub fn play_area_height(&self) -> f64 {
        self.window_height - self.status_bar_height
    }

    /// Radius used for the conservative spawn pre-check
    #[inline]
    pub fn average_radius(&self) -> f64 {
        (self.min_radius + self.max_radius) / 2.0
    }

    /// Parse a (possibly partial) JSON document; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded physics config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON (handy for writing a starter config)
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the physics cannot run with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.window_width <= 0.0 {
            return Err(ConfigError::invalid("window_width", self.window_width, "> 0"));
        }
        if self.play_area_height() <= 0.0 {
            return Err(ConfigError::invalid(
                "status_bar_height",
                self.status_bar_height,
                "< window_height",
            ));
        }
        if self.min_radius <= 0.0 {
            return Err(ConfigError::invalid("min_radius", self.min_radius, "> 0"));
        }
        if self.max_radius < self.min_radius {
            return Err(ConfigError::invalid("max_radius", self.max_radius, ">= min_radius"));
        }
        if 2.0 * self.max_radius > self.play_area_width().min(self.play_area_height()) {
            return Err(ConfigError::invalid(
                "max_radius",
                self.max_radius,
                "a diameter that fits inside the play area",
            ));
        }
        if self.min_speed < 0.0 {
            return Err(ConfigError::invalid("min_speed", self.min_speed, ">= 0"));
        }
        if self.max_speed < self.min_speed {
            return Err(ConfigError::invalid("max_speed", self.max_speed, ">= min_speed"));
        }
        if self.max_speed_cap <= 0.0 {
            return Err(ConfigError::invalid("max_speed_cap", self.max_speed_cap, "> 0"));
        }
        for (name, value) in [
            ("surface_friction", self.surface_friction),
            ("bounce_restitution", self.bounce_restitution),
            ("floor_friction", self.floor_friction),
            ("air_resistance", self.air_resistance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(name, value, "[0.0, 1.0]"));
            }
        }
        if self.left_wall_boost < 0.0 {
            return Err(ConfigError::invalid("left_wall_boost", self.left_wall_boost, ">= 0"));
        }
        if self.shockwave_radius < 0.0 {
            return Err(ConfigError::invalid("shockwave_radius", self.shockwave_radius, ">= 0"));
        }
        if self.wall_glow_duration < 0.0 {
            return Err(ConfigError::invalid(
                "wall_glow_duration",
                self.wall_glow_duration,
                ">= 0",
            ));
        }
        Ok(())
    }
}

//! Per-frame simulation step
//!
//! One call to [`Simulation::update`] advances exactly one frame:
//! forces, integration and wall handling for every ball, then the pairwise
//! collision pass, then effect timers.

use super::ball::Ball;
use super::collision::{CollisionBody, detect_collision, resolve_collision};
use super::forces::{
    apply_air_resistance, apply_bounce_restitution, apply_floor_friction, apply_gravity,
    apply_surface_friction, compute_wall_boost,
};
use super::state::Simulation;

impl Simulation {
    /// Advance one frame. Does nothing at all while paused.
    pub fn update(&mut self) {
        if self.paused {
            return;
        }
        self.frame += 1;

        self.step_balls();
        self.collide_pairs();
        self.decay_effects();
    }

    /// Forces, integration, walls and speed cap for each ball
    fn step_balls(&mut self) {
        let config = &self.config;
        let width = config.play_area_width();
        let height = config.play_area_height();

        for ball in &mut self.balls {
            if self.gravity_on {
                ball.velocity = apply_gravity(ball.velocity, config);
                ball.velocity = apply_air_resistance(ball.velocity, config);
            } else {
                ball.velocity = apply_surface_friction(ball.velocity, ball.mass(), config);
            }

            ball.integrate();

            let hit_left = if self.gravity_on {
                let hits = ball.bounce_off_walls_gravity(width, height);
                if hits.floor {
                    ball.velocity = apply_bounce_restitution(ball.velocity, config);
                    ball.velocity = apply_floor_friction(ball.velocity, config);
                }
                hits.left
            } else {
                ball.bounce_off_walls(width, height)
            };

            if hit_left {
                ball.velocity = compute_wall_boost(ball.velocity, config);
                self.wall_glow_timer = config.wall_glow_duration;
                log::trace!("Ball {} boosted off left wall to {}", ball.id(), ball.velocity);
            }

            ball.clamp_speed(config.max_speed_cap);
        }
    }

    /// Resolve every overlapping pair (i < j) in insertion order.
    ///
    /// Pairs are handled one at a time, so a ball touching two others is
    /// resolved against each in turn.
    fn collide_pairs(&mut self) {
        let n = self.balls.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (head, tail) = self.balls.split_at_mut(j);
                let (a, b) = (&mut head[i], &mut tail[0]);
                if !detect_collision(a.position, a.radius(), b.position, b.radius()) {
                    continue;
                }
                let response = resolve_collision(&collision_body(a), &collision_body(b));
                a.velocity = response.vel_a;
                b.velocity = response.vel_b;
                a.position = response.pos_a;
                b.position = response.pos_b;
                log::trace!("Collision between balls {} and {}", a.id(), b.id());
            }
        }
    }

    /// Count down the wall glow and age shockwave rings
    fn decay_effects(&mut self) {
        if self.wall_glow_timer > 0.0 {
            self.wall_glow_timer = (self.wall_glow_timer - 1.0).max(0.0);
        }

        let duration = self.config.shockwave_visual_duration;
        for effect in &mut self.shockwave_effects {
            effect.age += 1;
        }
        self.shockwave_effects.retain(|e| e.age < duration);
    }
}

fn collision_body(ball: &Ball) -> CollisionBody {
    CollisionBody {
        position: ball.position,
        velocity: ball.velocity,
        mass: ball.mass(),
        radius: ball.radius(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;
    use crate::consts::BALL_LEFT;
    use crate::sim::Vector2;

    fn sim() -> Simulation {
        Simulation::with_seed(PhysicsConfig::default(), 12345).unwrap()
    }

    #[test]
    fn test_update_moves_balls() {
        let mut sim = sim();
        let id = sim.insert_ball(Vector2::new(100.0, 100.0), Vector2::new(2.0, 1.0), 10.0);
        sim.update();

        let ball = sim.ball(id).unwrap();
        let factor = sim.config().surface_friction.powf(ball.mass().sqrt());
        assert!((ball.position.x - (100.0 + 2.0 * factor)).abs() < 1e-9);
        assert!((ball.position.y - (100.0 + 1.0 * factor)).abs() < 1e-9);
        assert_eq!(sim.frame(), 1);
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut sim = sim();
        let id = sim.insert_ball(Vector2::new(100.0, 100.0), Vector2::ZERO, 10.0);
        sim.toggle_gravity();
        sim.update();

        let config = sim.config().clone();
        let ball = sim.ball(id).unwrap();
        let vy = config.gravity_accel * config.air_resistance;
        assert!((ball.velocity.y - vy).abs() < 1e-12);
        assert_eq!(ball.velocity.x, 0.0);
        assert!((ball.position.y - (100.0 + vy)).abs() < 1e-12);
    }

    #[test]
    fn test_floor_bounce_applies_restitution_and_friction() {
        let mut sim = sim();
        sim.toggle_gravity();
        let config = sim.config().clone();
        let floor = config.play_area_height();
        let id = sim.insert_ball(Vector2::new(400.0, floor - 12.0), Vector2::new(2.0, 3.0), 10.0);
        sim.update();

        let ball = sim.ball(id).unwrap();
        let vx = 2.0 * config.air_resistance * config.floor_friction;
        let vy = -(3.0 + config.gravity_accel) * config.air_resistance * config.bounce_restitution;
        assert!((ball.velocity.x - vx).abs() < 1e-12);
        assert!((ball.velocity.y - vy).abs() < 1e-12);
        assert_eq!(ball.position.y, floor - 10.0);
    }

    #[test]
    fn test_left_wall_boost_and_glow() {
        let mut sim = sim();
        let id = sim.insert_ball(Vector2::new(11.0, 200.0), Vector2::new(-2.0, 0.0), 10.0);
        sim.update();

        let config = sim.config().clone();
        let ball = sim.ball(id).unwrap();
        assert!(ball.velocity.x > 0.0);
        assert_eq!(ball.position.x, 10.0);
        // Friction, flip, then boost
        let factor = config.surface_friction.powf(ball.mass().sqrt());
        assert!((ball.velocity.x - 2.0 * factor * config.left_wall_boost).abs() < 1e-9);
        // Glow is set to full and decremented once in the same frame
        assert_eq!(sim.wall_glow_timer(), config.wall_glow_duration - 1.0);
    }

    #[test]
    fn test_wall_glow_counts_down_and_floors_at_zero() {
        let mut sim = sim();
        sim.wall_glow_timer = 3.0;
        sim.update();
        assert_eq!(sim.wall_glow_timer(), 2.0);
        sim.update();
        sim.update();
        assert_eq!(sim.wall_glow_timer(), 0.0);
        sim.update();
        assert_eq!(sim.wall_glow_timer(), 0.0);
    }

    #[test]
    fn test_fractional_glow_never_negative() {
        let mut sim = sim();
        sim.wall_glow_timer = 0.5;
        sim.update();
        assert_eq!(sim.wall_glow_timer(), 0.0);
    }

    #[test]
    fn test_shockwave_effect_ages_and_expires() {
        let mut sim = sim();
        let duration = sim.config().shockwave_visual_duration;
        sim.apply_shockwave(Vector2::new(100.0, 100.0));

        for expected_age in 1..duration {
            sim.update();
            assert_eq!(sim.shockwave_effects().len(), 1);
            assert_eq!(sim.shockwave_effects()[0].age, expected_age);
        }
        sim.update();
        assert!(sim.shockwave_effects().is_empty());
    }

    #[test]
    fn test_effects_expire_independently() {
        let mut sim = sim();
        let duration = sim.config().shockwave_visual_duration;
        sim.apply_shockwave(Vector2::new(100.0, 100.0));
        for _ in 0..5 {
            sim.update();
        }
        sim.apply_shockwave(Vector2::new(200.0, 100.0));
        for _ in 5..duration {
            sim.update();
        }
        let remaining = sim.shockwave_effects();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].origin, Vector2::new(200.0, 100.0));
        assert_eq!(remaining[0].age, duration - 5);
    }

    #[test]
    fn test_paused_update_is_noop() {
        let mut sim = sim();
        sim.spawn(Vector2::new(100.0, 100.0), BALL_LEFT, None);
        sim.spawn(Vector2::new(400.0, 200.0), BALL_LEFT, None);
        sim.apply_shockwave(Vector2::new(50.0, 50.0));
        sim.wall_glow_timer = 10.0;
        sim.toggle_pause();

        let before = sim.snapshot();
        for _ in 0..50 {
            sim.update();
        }
        let after = sim.snapshot();
        assert_eq!(before.balls, after.balls);
        assert_eq!(before.shockwave_effects, after.shockwave_effects);
        assert_eq!(before.wall_glow_timer, after.wall_glow_timer);
        assert_eq!(before.frame, after.frame);
    }

    #[test]
    fn test_head_on_collision_in_update() {
        let mut sim = sim();
        // Overlapping after one step of integration, approaching
        let a = sim.insert_ball(Vector2::new(300.0, 200.0), Vector2::new(3.0, 0.0), 15.0);
        let b = sim.insert_ball(Vector2::new(329.0, 200.0), Vector2::new(-3.0, 0.0), 15.0);
        let momentum_before = sim.total_momentum();
        sim.update();

        let (ba, bb) = (sim.ball(a).unwrap(), sim.ball(b).unwrap());
        assert!(ba.velocity.x < 0.0);
        assert!(bb.velocity.x > 0.0);
        assert!(ba.position.distance_to(bb.position) >= 30.0);

        // Friction is the only loss; equal masses keep the total at zero
        let momentum_after = sim.total_momentum();
        assert!((momentum_after.x - momentum_before.x).abs() < 1e-6);
    }

    #[test]
    fn test_no_ball_escapes_play_area() {
        let mut sim = sim();
        for (i, x) in [100.0, 250.0, 400.0, 550.0, 700.0].into_iter().enumerate() {
            let y = 100.0 + 50.0 * i as f64;
            sim.spawn(Vector2::new(x, y), BALL_LEFT, Some(Vector2::new(4.0, -3.0)));
        }
        sim.toggle_gravity();
        let width = sim.config().play_area_width();
        let height = sim.config().play_area_height();
        for _ in 0..600 {
            sim.update();
            for ball in sim.balls() {
                // Pair correction may nudge a ball past a wall; the wall pass
                // pins it back on the next frame
                let margin = 2.0 * ball.radius();
                assert!(ball.position.x > -margin && ball.position.x < width + margin);
                assert!(ball.position.y > -margin && ball.position.y < height + margin);
            }
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut s1 = sim();
        let mut s2 = sim();
        for s in [&mut s1, &mut s2] {
            s.spawn(Vector2::new(100.0, 100.0), BALL_LEFT, None);
            s.spawn(Vector2::new(300.0, 200.0), BALL_LEFT, None);
            s.spawn(Vector2::new(600.0, 300.0), BALL_LEFT, None);
            for frame in 0..300 {
                if frame == 100 {
                    s.apply_shockwave(Vector2::new(400.0, 200.0));
                }
                s.update();
            }
        }
        assert_eq!(s1.balls(), s2.balls());
        assert_eq!(s1.frame(), 300);
    }
}

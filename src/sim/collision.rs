//! Collision detection and response for axis-aligned geometry
//!
//! The ball is a circle; walls and paddles are axis-aligned. Every check
//! returns a normal and penetration so the caller can both reflect the
//! velocity and push the ball back out.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::settings::Settings;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal, pointing back into the playfield
    pub normal: Vec2,
    /// Distance the ball must move along `normal` to stop overlapping
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    fn contact(normal: Vec2, penetration: f32) -> Self {
        Self {
            hit: true,
            normal,
            penetration,
        }
    }
}

/// Check the ball against the top and bottom walls
pub fn ball_wall_collision(ball: &Ball, settings: &Settings) -> CollisionResult {
    let top = ball.pos.y - ball.radius;
    if top < 0.0 {
        return CollisionResult::contact(Vec2::Y, -top);
    }

    let bottom = ball.pos.y + ball.radius;
    if bottom > settings.court_height {
        return CollisionResult::contact(Vec2::NEG_Y, bottom - settings.court_height);
    }

    CollisionResult::miss()
}

/// Check the ball against a paddle face
///
/// The ball's leading edge must reach the paddle face while its center is
/// inside the paddle's vertical span and it is travelling toward the paddle.
/// A ball that has already been pushed out and reflected can never re-trigger.
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> CollisionResult {
    if ball.pos.y < paddle.y || ball.pos.y > paddle.bottom() {
        return CollisionResult::miss();
    }

    match paddle.side {
        Side::Left => {
            let approaching = ball.vel.x < 0.0;
            let penetration = paddle.face_x() - (ball.pos.x - ball.radius);
            if approaching && penetration >= 0.0 {
                return CollisionResult::contact(Vec2::X, penetration);
            }
        }
        Side::Right => {
            let approaching = ball.vel.x > 0.0;
            let penetration = (ball.pos.x + ball.radius) - paddle.face_x();
            if approaching && penetration >= 0.0 {
                return CollisionResult::contact(Vec2::NEG_X, penetration);
            }
        }
    }

    CollisionResult::miss()
}

/// Whether the ball center has crossed either goal line
#[inline]
pub fn ball_past_goal(ball: &Ball, settings: &Settings) -> bool {
    ball.pos.x < 0.0 || ball.pos.x > settings.court_width
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n. With axis-aligned normals this only
/// flips the sign of one component.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Push the ball out of a surface and reflect it if it is moving inward
pub fn resolve(ball: &mut Ball, result: &CollisionResult) {
    ball.pos += result.normal * result.penetration;
    if ball.vel.dot(result.normal) < 0.0 {
        ball.vel = reflect_velocity(ball.vel, result.normal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 10.0,
        }
    }

    fn left_paddle() -> Paddle {
        Paddle {
            side: Side::Left,
            x: 20.0,
            y: 160.0,
            width: 10.0,
            height: 80.0,
        }
    }

    fn right_paddle() -> Paddle {
        Paddle {
            side: Side::Right,
            x: 770.0,
            y: 160.0,
            width: 10.0,
            height: 80.0,
        }
    }

    #[test]
    fn test_wall_collision() {
        let settings = Settings::default();

        let result = ball_wall_collision(&ball(100.0, 200.0, 3.0, 3.0), &settings);
        assert!(!result.hit);

        let result = ball_wall_collision(&ball(100.0, 4.0, 3.0, -3.0), &settings);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::Y);
        assert_eq!(result.penetration, 6.0);

        let result = ball_wall_collision(&ball(100.0, 395.0, 3.0, 3.0), &settings);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::NEG_Y);
        assert_eq!(result.penetration, 5.0);
    }

    #[test]
    fn test_resolve_wall_corrects_position() {
        let settings = Settings::default();
        let mut b = ball(100.0, -20.0, 3.0, -3.0);
        let result = ball_wall_collision(&b, &settings);
        resolve(&mut b, &result);
        assert_eq!(b.pos.y, 10.0);
        assert_eq!(b.vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_left_paddle_hit() {
        let b = ball(28.0, 200.0, -3.0, 0.0);
        let result = ball_paddle_collision(&b, &left_paddle());
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::X);
        assert_eq!(result.penetration, 12.0);
    }

    #[test]
    fn test_left_paddle_ignores_receding_ball() {
        let b = ball(28.0, 200.0, 3.0, 0.0);
        assert!(!ball_paddle_collision(&b, &left_paddle()).hit);
    }

    #[test]
    fn test_left_paddle_catches_ball_behind_face() {
        // Center already past the back edge, still inside the vertical span
        let b = ball(16.0, 200.0, -25.0, 0.0);
        let result = ball_paddle_collision(&b, &left_paddle());
        assert!(result.hit);
        assert_eq!(result.penetration, 24.0);
    }

    #[test]
    fn test_paddle_miss_outside_span() {
        let b = ball(28.0, 150.0, -3.0, 0.0);
        assert!(!ball_paddle_collision(&b, &left_paddle()).hit);
        let b = ball(28.0, 241.0, -3.0, 0.0);
        assert!(!ball_paddle_collision(&b, &left_paddle()).hit);
    }

    #[test]
    fn test_right_paddle_hit() {
        let b = ball(765.0, 170.0, 3.0, -3.0);
        let result = ball_paddle_collision(&b, &right_paddle());
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::NEG_X);
        assert_eq!(result.penetration, 5.0);

        let mut b = b;
        resolve(&mut b, &result);
        assert_eq!(b.pos.x, 760.0);
        assert_eq!(b.vel, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_reflect_velocity() {
        let reflected = reflect_velocity(Vec2::new(3.0, -3.0), Vec2::Y);
        assert_eq!(reflected, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_ball_past_goal() {
        let settings = Settings::default();
        assert!(ball_past_goal(&ball(-1.0, 200.0, -3.0, 0.0), &settings));
        assert!(ball_past_goal(&ball(801.0, 200.0, 3.0, 0.0), &settings));
        assert!(!ball_past_goal(&ball(5.0, 200.0, -3.0, 0.0), &settings));
    }
}

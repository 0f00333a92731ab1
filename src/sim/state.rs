//! Match state and core simulation types
//!
//! A `State` is a complete snapshot of the match; the engine replaces it
//! once per tick and never mutates it behind the driver's back.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::settings::Settings;

/// Something that happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Ball struck a paddle
    Hit,
    /// Ball passed a goal line and was served again
    Score,
}

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Player paddle
    Left,
    /// Bot paddle
    Right,
}

/// Axis-aligned rectangle handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A paddle (top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Create a paddle for `side`, vertically centered on the court
    pub fn centered(side: Side, settings: &Settings) -> Self {
        let x = match side {
            Side::Left => settings.left_paddle_x(),
            Side::Right => settings.right_paddle_x(),
        };
        Self {
            side,
            x,
            y: settings.max_paddle_y() / 2.0,
            width: settings.paddle_width,
            height: settings.paddle_height,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Face the ball bounces off
    #[inline]
    pub fn face_x(&self) -> f32 {
        match self.side {
            Side::Left => self.x + self.width,
            Side::Right => self.x,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Keep a paddle top edge inside `[0, court_height - paddle_height]`
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32, court_height: f32) -> f32 {
    y.clamp(0.0, (court_height - paddle_height).max(0.0))
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Displacement per tick; each axis keeps the serve magnitude
    pub vel: Vec2,
    pub radius: f32,
}

/// Recenter a ball and give each axis an independent random direction
pub fn serve<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Ball {
    let sign_x = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let sign_y = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    Ball {
        pos: settings.center(),
        vel: Vec2::new(sign_x, sign_y) * settings.serve_speed,
        radius: settings.ball_radius,
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Court and tuning, validated at construction
    pub settings: Settings,
    /// Seed the serve RNG started from
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player paddle (left)
    pub player: Paddle,
    /// Bot paddle (right)
    pub bot: Paddle,
    pub ball: Ball,
    /// Serve direction source, advanced only on serves
    pub(crate) rng: Pcg32,
}

/// Create the opening state: paddles centered, ball freshly served
pub fn initial_state(settings: Settings, seed: u64) -> Result<State> {
    settings.validate()?;

    let mut rng = Pcg32::seed_from_u64(seed);
    let ball = serve(&settings, &mut rng);
    log::info!(
        "New match on {}x{} court (seed {}), serve toward ({:+}, {:+})",
        settings.court_width,
        settings.court_height,
        seed,
        ball.vel.x,
        ball.vel.y
    );

    Ok(State {
        settings,
        seed,
        time_ticks: 0,
        player: Paddle::centered(Side::Left, &settings),
        bot: Paddle::centered(Side::Right, &settings),
        ball,
        rng,
    })
}

impl State {
    /// Serve a new ball from this state's own RNG
    pub fn serve(&mut self) {
        self.ball = serve(&self.settings, &mut self.rng);
        log::debug!(
            "Serve at tick {}: direction ({:+}, {:+})",
            self.time_ticks,
            self.ball.vel.x,
            self.ball.vel.y
        );
    }

    /// Player paddle rectangle for rendering
    pub fn left_rect(&self) -> Rect {
        self.player.rect()
    }

    /// Bot paddle rectangle for rendering
    pub fn right_rect(&self) -> Rect {
        self.bot.rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn test_initial_state_centers_paddles() {
        let state = initial_state(Settings::default(), 1).unwrap();
        assert_eq!(state.player.y, 160.0);
        assert_eq!(state.bot.y, 160.0);
        assert_eq!(state.player.center_y(), 200.0);
        assert_eq!(state.player.x, 20.0);
        assert_eq!(state.bot.x, 770.0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_initial_state_serves_from_center() {
        let state = initial_state(Settings::default(), 7).unwrap();
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel.x.abs(), 3.0);
        assert_eq!(state.ball.vel.y.abs(), 3.0);
        assert_eq!(state.ball.radius, 10.0);
    }

    #[test]
    fn test_initial_state_rejects_bad_court() {
        let settings = Settings {
            court_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            initial_state(settings, 1),
            Err(SimError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = initial_state(Settings::default(), 42).unwrap();
        let b = initial_state(Settings::default(), 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serve_covers_all_directions() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let ball = serve(&settings, &mut rng);
            seen.insert((ball.vel.x > 0.0, ball.vel.y > 0.0));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_clamp_paddle_y() {
        assert_eq!(clamp_paddle_y(-5.0, 80.0, 400.0), 0.0);
        assert_eq!(clamp_paddle_y(500.0, 80.0, 400.0), 320.0);
        assert_eq!(clamp_paddle_y(100.0, 80.0, 400.0), 100.0);
    }

    #[test]
    fn test_paddle_faces() {
        let settings = Settings::default();
        assert_eq!(Paddle::centered(Side::Left, &settings).face_x(), 30.0);
        assert_eq!(Paddle::centered(Side::Right, &settings).face_x(), 770.0);
    }
}

//! Court and tuning settings
//!
//! Fixed for the lifetime of a match. Any subset of fields may be supplied
//! as JSON; missing fields fall back to the defaults in [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};

/// Match settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Court ===
    pub court_width: f32,
    pub court_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each goal line and the back of its paddle
    pub paddle_margin: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed magnitude of a freshly served ball
    pub serve_speed: f32,

    // === Bot ===
    /// How far the bot paddle may move per tick
    pub bot_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,

            ball_radius: BALL_RADIUS,
            serve_speed: SERVE_SPEED,

            bot_speed: BOT_SPEED,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject geometry that cannot host a match
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("serve_speed", self.serve_speed),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        for (name, value) in [("paddle_margin", self.paddle_margin), ("bot_speed", self.bot_speed)] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be non-negative, got {value}")));
            }
        }

        if self.paddle_height > self.court_height {
            return Err(invalid(format!(
                "paddle height {} exceeds court height {}",
                self.paddle_height, self.court_height
            )));
        }

        if self.ball_radius * 2.0 >= self.court_height {
            return Err(invalid(format!(
                "ball diameter {} does not fit court height {}",
                self.ball_radius * 2.0,
                self.court_height
            )));
        }

        if self.serve_speed >= self.court_width {
            return Err(invalid(format!(
                "serve speed {} would cross the {} wide court in one tick",
                self.serve_speed, self.court_width
            )));
        }

        // Paddle faces must leave room for the ball between them
        if self.left_paddle_x() + self.paddle_width + self.ball_radius * 2.0 >= self.right_paddle_x() {
            return Err(invalid(format!(
                "court width {} too narrow for paddles and ball",
                self.court_width
            )));
        }

        Ok(())
    }

    /// Horizontal position of the player (left) paddle
    #[inline]
    pub fn left_paddle_x(&self) -> f32 {
        self.paddle_margin
    }

    /// Horizontal position of the bot (right) paddle
    #[inline]
    pub fn right_paddle_x(&self) -> f32 {
        self.court_width - self.paddle_margin - self.paddle_width
    }

    /// Largest legal paddle top edge
    #[inline]
    pub fn max_paddle_y(&self) -> f32 {
        (self.court_height - self.paddle_height).max(0.0)
    }

    /// Court center (serve position)
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }
}

fn invalid(message: String) -> SimError {
    log::warn!("Rejected settings: {}", message);
    SimError::InvalidConfiguration(message)
}

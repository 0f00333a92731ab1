//! Pixel Pong - classic two-paddle Pong against a scripted opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, bot, scoring)
//! - `driver`: Fixed-timestep loop that feeds the simulation and forwards events
//! - `settings`: Data-driven court and tuning parameters
//! - `error`: Configuration errors

pub mod driver;
pub mod error;
pub mod settings;
pub mod sim;

pub use driver::{AssetGate, Driver, Presenter, Sound, TickInput};
pub use error::SimError;
pub use settings::Settings;
pub use sim::{Event, State, StepOutcome, initial_state, step};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Distance multiplier applied per tick (1.0 = speeds are "per tick")
    pub const TICK_SCALE: f32 = 1.0;
    /// Largest tick scale a single step will honour
    pub const MAX_TICK_SCALE: f32 = 8.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame gap the driver will try to catch up on (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Court dimensions
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between a goal line and the back of its paddle
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis ball speed assigned on every serve (units per tick)
    pub const SERVE_SPEED: f32 = 3.0;

    /// Bot paddle tracking speed (units per tick)
    pub const BOT_SPEED: f32 = 4.0;
}

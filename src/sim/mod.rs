//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod bot;
pub mod collision;
pub mod state;
pub mod tick;

pub use bot::bot_target_y;
pub use collision::{CollisionResult, ball_paddle_collision, ball_wall_collision};
pub use state::{Ball, Event, Paddle, Rect, Side, State, clamp_paddle_y, initial_state, serve};
pub use tick::{StepOutcome, advance, step};

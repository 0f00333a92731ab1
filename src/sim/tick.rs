//! Fixed timestep simulation tick
//!
//! Advances a match by exactly one tick. Order within a tick:
//! paddles, ball translation, walls, paddles, goal lines.

use super::bot::bot_target_y;
use super::collision::{ball_paddle_collision, ball_past_goal, ball_wall_collision, resolve};
use super::state::{Event, State, clamp_paddle_y};
use crate::consts::MAX_TICK_SCALE;

/// New snapshot plus what happened while producing it
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub state: State,
    /// `[]`, `[Hit]` or `[Score]`
    pub events: Vec<Event>,
}

/// Produce the next snapshot without touching `state`
///
/// `player_target_y` is where the player wants the paddle's center; it may
/// lie outside the court. `tick` scales the ball and bot displacement
/// (1.0 for the fixed-step loop) and is clamped to `[0, MAX_TICK_SCALE]`.
pub fn step(state: &State, player_target_y: f32, tick: f32) -> StepOutcome {
    let mut next = state.clone();
    let events = advance(&mut next, player_target_y, tick);
    StepOutcome { state: next, events }
}

/// Advance `state` in place by one tick, returning the events it produced
pub fn advance(state: &mut State, player_target_y: f32, tick: f32) -> Vec<Event> {
    let dt = if tick.is_finite() { tick.clamp(0.0, MAX_TICK_SCALE) } else { 0.0 };
    let settings = state.settings;
    let mut events = Vec::with_capacity(1);

    state.time_ticks += 1;

    // Paddles
    if player_target_y.is_finite() {
        state.player.y = player_target_y - state.player.height / 2.0;
    }
    state.player.y = clamp_paddle_y(state.player.y, state.player.height, settings.court_height);

    let bot_y = bot_target_y(
        state.ball.pos.y,
        state.bot.y,
        state.bot.height,
        settings.bot_speed * dt,
    );
    state.bot.y = clamp_paddle_y(bot_y, state.bot.height, settings.court_height);

    // Ball
    state.ball.pos += state.ball.vel * dt;

    let wall = ball_wall_collision(&state.ball, &settings);
    if wall.hit {
        resolve(&mut state.ball, &wall);
    }

    // Left paddle wins if both would overlap
    let paddle_hit = [state.player, state.bot]
        .iter()
        .map(|paddle| ball_paddle_collision(&state.ball, paddle))
        .find(|result| result.hit);

    if let Some(result) = paddle_hit {
        resolve(&mut state.ball, &result);
        events.push(Event::Hit);
    } else if ball_past_goal(&state.ball, &settings) {
        if state.ball.pos.x < 0.0 {
            log::debug!("Bot scored at tick {}", state.time_ticks);
        } else {
            log::debug!("Player scored at tick {}", state.time_ticks);
        }
        state.serve();
        events.push(Event::Score);
    }

    events
}

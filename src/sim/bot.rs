//! Bot paddle control
//!
//! Proportional tracking with no prediction and no dead zone: the paddle
//! steps a fixed distance toward the ball's height every tick.

/// Next top edge for the bot paddle (unclamped; the engine clamps it)
pub fn bot_target_y(ball_y: f32, paddle_y: f32, paddle_height: f32, bot_speed: f32) -> f32 {
    let center = paddle_y + paddle_height / 2.0;
    if ball_y < center {
        paddle_y - bot_speed
    } else if ball_y > center {
        paddle_y + bot_speed
    } else {
        paddle_y
    }
}

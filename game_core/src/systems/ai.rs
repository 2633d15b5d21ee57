use crate::{Config, Paddle};

/// Move the AI paddle one step towards the ball's height.
///
/// A plain tracker: no prediction, no randomness. Moves by the paddle speed
/// when the ball is above or below the paddle centre, then clamps into the
/// play area.
pub fn track_ball(paddle: &mut Paddle, ball_y: f32, config: &Config) {
    let center = paddle.center_y(config.paddle_height);
    if ball_y > center {
        paddle.y += config.paddle_speed;
    } else if ball_y < center {
        paddle.y -= config.paddle_speed;
    }

    paddle.y = config.clamp_paddle_y(paddle.y);
}

use crate::{Ball, Config, Events, Paddle};

/// Bounce off the top and bottom walls. The ball is not pushed back inside,
/// so it may overlap a wall by up to one frame of travel.
pub fn check_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    let r = config.ball_radius;
    if ball.pos.y - r < 0.0 || ball.pos.y + r > config.area_height {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Bounce off either paddle.
///
/// The horizontal test uses the ball's leading edge, the vertical test uses
/// the ball's centre against the paddle span (exclusive at both ends).
pub fn check_paddles(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    config: &Config,
    events: &mut Events,
) {
    let r = config.ball_radius;
    let hits_left =
        ball.pos.x - r < config.paddle_width && left.spans(ball.pos.y, config.paddle_height);
    let hits_right = ball.pos.x + r > config.area_width - config.paddle_width
        && right.spans(ball.pos.y, config.paddle_height);

    if hits_left || hits_right {
        ball.vel.x = -ball.vel.x;
        events.ball_hit_paddle = true;
    }
}

use crate::{Ball, Config, Events, Score, Side};
use log::debug;

/// Check if ball left the play area (scoring). Both edges are tested every
/// tick; at most one can fire.
pub fn check_scoring(ball: &mut Ball, score: &mut Score, config: &Config, events: &mut Events) {
    let r = config.ball_radius;

    if ball.pos.x - r < 0.0 {
        // Right player scores
        score.award(Side::Right);
        events.right_scored = true;
        ball.serve(config.center());
        debug!("player 2 scored ({} - {})", score.player1, score.player2);
    }
    if ball.pos.x + r > config.area_width {
        // Left player scores
        score.award(Side::Left);
        events.left_scored = true;
        ball.serve(config.center());
        debug!("player 1 scored ({} - {})", score.player1, score.player2);
    }
}

use crate::{track_ball, Ball, Config, Controls, Mode, Paddle, Simulation};

/// Move a human paddle. A step that would leave the play area is skipped
/// entirely rather than clamped.
pub fn steer_paddle(paddle: &mut Paddle, up: bool, down: bool, config: &Config) {
    if up && paddle.y - config.paddle_speed >= 0.0 {
        paddle.y -= config.paddle_speed;
    }
    if down && paddle.y + config.paddle_speed <= config.max_paddle_y() {
        paddle.y += config.paddle_speed;
    }
}

/// Apply paddle movement: left from keys or AI, right always from keys
pub fn move_paddles(sim: &mut Simulation, controls: &Controls, mode: Mode) {
    match mode {
        Mode::VsAi => track_ball(&mut sim.left, sim.ball.pos.y, &sim.config),
        Mode::TwoPlayer => steer_paddle(&mut sim.left, controls.p1_up, controls.p1_down, &sim.config),
    }
    steer_paddle(&mut sim.right, controls.p2_up, controls.p2_down, &sim.config);
}

/// Move ball by one frame of velocity
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;
    use glam::Vec2;

    #[test]
    fn test_steer_up_and_down() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Right, 250.0);

        steer_paddle(&mut paddle, true, false, &config);
        assert_eq!(paddle.y, 242.0);

        steer_paddle(&mut paddle, false, true, &config);
        assert_eq!(paddle.y, 250.0);
    }

    #[test]
    fn test_both_keys_cancel_out() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Right, 250.0);
        steer_paddle(&mut paddle, true, true, &config);
        assert_eq!(paddle.y, 250.0);
    }

    #[test]
    fn test_step_past_top_is_suppressed() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, 2.0);
        steer_paddle(&mut paddle, true, false, &config);
        assert_eq!(paddle.y, 2.0, "Would overshoot to -6, so no movement");

        let mut paddle = Paddle::new(Side::Left, 8.0);
        steer_paddle(&mut paddle, true, false, &config);
        assert_eq!(paddle.y, 0.0, "Exactly reaching the wall is allowed");
    }

    #[test]
    fn test_step_past_bottom_is_suppressed() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, 498.0);
        steer_paddle(&mut paddle, false, true, &config);
        assert_eq!(paddle.y, 498.0);
    }

    #[test]
    fn test_ai_mode_ignores_player_one_keys() {
        let mut sim = Simulation::new(Config::new());
        sim.ball.pos = Vec2::new(400.0, 300.0);
        let controls = Controls {
            p1_up: true,
            ..Controls::default()
        };

        move_paddles(&mut sim, &controls, Mode::VsAi);

        assert_eq!(sim.left.y, 250.0, "Ball level with centre, AI holds");
    }

    #[test]
    fn test_right_paddle_is_human_in_ai_mode() {
        let mut sim = Simulation::new(Config::new());
        let controls = Controls {
            p2_down: true,
            ..Controls::default()
        };

        move_paddles(&mut sim, &controls, Mode::VsAi);

        assert_eq!(sim.right.y, 258.0);
    }

    #[test]
    fn test_move_ball() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(-5.0, 5.0));
        move_ball(&mut ball);
        assert_eq!(ball.pos, Vec2::new(395.0, 305.0));
    }
}

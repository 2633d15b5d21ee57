use crate::{Ball, Config, Events, Paddle, Score, Side};

/// Everything one game of Pong needs to advance and draw itself
#[derive(Debug, Clone)]
pub struct Simulation {
    pub config: Config,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub events: Events,
}

impl Simulation {
    pub fn new(config: Config) -> Self {
        let paddle_y = config.initial_paddle_y();
        let ball = Ball::new(config.center(), config.ball_velocity);

        Self {
            left: Paddle::new(Side::Left, paddle_y),
            right: Paddle::new(Side::Right, paddle_y),
            ball,
            score: Score::new(),
            events: Events::new(),
            config,
        }
    }

    /// Zero both scores and serve from the centre. Paddles stay where they are
    /// and the high score is kept.
    pub fn reset(&mut self) {
        self.score.reset();
        self.ball.serve(self.config.center());
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

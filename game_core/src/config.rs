use crate::{Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub area_width: f32,
    pub area_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_velocity: Vec2,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            area_width: Params::AREA_WIDTH,
            area_height: Params::AREA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_velocity: Vec2::new(Params::BALL_SPEED_X, Params::BALL_SPEED_Y),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X of the paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.area_width - self.paddle_width,
        }
    }

    /// Lowest allowed top edge for a paddle
    pub fn max_paddle_y(&self) -> f32 {
        self.area_height - self.paddle_height
    }

    /// Clamp paddle top edge to the play area
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y().max(0.0))
    }

    /// Both paddles start vertically centred
    pub fn initial_paddle_y(&self) -> f32 {
        self.area_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.area_width / 2.0, self.area_height / 2.0)
    }
}

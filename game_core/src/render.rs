//! Scene building: what a frame shows, independent of any drawing surface.

use crate::{Params, Score, Simulation, Side};
use glam::Vec2;

/// One filled shape in logical play-area coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect {
        color: &'static str,
        pos: Vec2,  // top-left
        size: Vec2,
    },
    Circle {
        color: &'static str,
        center: Vec2,
        radius: f32,
    },
}

/// Values for the three score readouts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player1: u32,
    pub player2: u32,
    pub high: u32,
}

impl Scoreboard {
    pub fn from_score(score: &Score) -> Self {
        Self {
            player1: score.player1,
            player2: score.player2,
            high: score.high_display(),
        }
    }
}

/// A complete frame: clear the area, paint the shapes, update the readouts
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub area: Vec2,
    pub shapes: Vec<Shape>,
    pub scoreboard: Scoreboard,
}

/// Build the scene for the current state. Has no effect on the simulation.
pub fn render(sim: &Simulation) -> Scene {
    let config = &sim.config;
    let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);

    let shapes = vec![
        Shape::Rect {
            color: Params::DRAW_COLOR,
            pos: Vec2::new(config.paddle_x(Side::Left), sim.left.y),
            size: paddle_size,
        },
        Shape::Rect {
            color: Params::DRAW_COLOR,
            pos: Vec2::new(config.paddle_x(Side::Right), sim.right.y),
            size: paddle_size,
        },
        Shape::Circle {
            color: Params::DRAW_COLOR,
            center: sim.ball.pos,
            radius: config.ball_radius,
        },
    ];

    Scene {
        area: Vec2::new(config.area_width, config.area_height),
        shapes,
        scoreboard: Scoreboard::from_score(&sim.score),
    }
}

use glam::Vec2;

/// Which end of the court a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,  // player 1, W/S or AI
    Right, // player 2, arrow keys
}

/// Paddle - only the top edge moves, x is fixed by side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Vertical centre of the paddle
    pub fn center_y(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }

    /// True when `y` lies strictly inside the paddle's vertical span
    pub fn spans(&self, y: f32, height: f32) -> bool {
        y > self.y && y < self.y + height
    }
}

/// Ball - position is the centre of the circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve from the centre in the opposite horizontal direction
    pub fn serve(&mut self, center: Vec2) {
        self.pos = center;
        self.vel.x = -self.vel.x;
    }
}

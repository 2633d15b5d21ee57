use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player1: u32, // Left paddle
    pub player2: u32, // Right paddle
    pub high: u32,    // Best single score seen since load
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award a point to whoever defends `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.player1 += 1,
            Side::Right => self.player2 += 1,
        }
    }

    /// Fold the current scores into the high score
    pub fn update_high(&mut self) {
        self.high = self.high.max(self.player1).max(self.player2);
    }

    /// Value shown in the high-score readout
    pub fn high_display(&self) -> u32 {
        self.player1.max(self.player2).max(self.high)
    }

    /// Zero both players; the high score survives
    pub fn reset(&mut self) {
        self.player1 = 0;
        self.player2 = 0;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

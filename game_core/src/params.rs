/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Logical play area (4:3)
    pub const AREA_WIDTH: f32 = 800.0;
    pub const AREA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 8.0; // pixels per frame

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 5.0; // pixels per frame
    pub const BALL_SPEED_Y: f32 = 5.0;

    // Display fitting, as fractions of the viewport
    pub const VIEWPORT_WIDTH_FRACTION: f32 = 0.9;
    pub const VIEWPORT_HEIGHT_FRACTION: f32 = 0.7;

    // Everything is painted in one colour
    pub const DRAW_COLOR: &'static str = "#fff";
}

/// Game tuning parameters for tilt pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield geometry, normalized: x in [-1, 1], y in [0, 1]
    pub const BALL_WIDTH: f32 = 0.025;
    pub const PADDLE_WIDTH: f32 = 0.025;
    pub const PADDLE_HEIGHT: f32 = 0.15;

    // Bounce tuning
    pub const MAX_DEFLECT: f32 = 75.0;
    pub const SPEED_DECAY: f32 = 0.02;

    // Control input
    pub const MAX_TILT_ANGLE: i32 = 75;

    // Score
    pub const WIN_SCORE: u8 = 10;

    // Out-of-bounds lines past the paddles
    pub const OUT_LEFT: f32 = -1.3;
    pub const OUT_RIGHT: f32 = 1.3;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub ball_width: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub max_deflect: f32,
    pub speed_decay: f32,
    pub max_tilt_angle: i32,
    pub win_score: u8,
    pub out_left: f32,
    pub out_right: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ball_width: Params::BALL_WIDTH,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            max_deflect: Params::MAX_DEFLECT,
            speed_decay: Params::SPEED_DECAY,
            max_tilt_angle: Params::MAX_TILT_ANGLE,
            win_score: Params::WIN_SCORE,
            out_left: Params::OUT_LEFT,
            out_right: Params::OUT_RIGHT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertical translation of a paddle's bottom edge for a tilt angle.
    ///
    /// Linear in the angle with no clamping of its own: an angle above
    /// MAX_TILT_ANGLE places the paddle partially off-screen, which is
    /// intentional headroom.
    pub fn paddle_offset(&self, angle: i32) -> f32 {
        angle as f32 * ((1.0 - self.paddle_height) / self.max_tilt_angle as f32)
    }

    /// Ball position at serve: horizontally centered, mid-height
    pub fn serve_pos(&self) -> glam::Vec2 {
        glam::Vec2::new(-self.ball_width / 2.0, 0.5 + self.ball_width / 2.0)
    }
}

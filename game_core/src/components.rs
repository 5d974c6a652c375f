use glam::Vec2;

use crate::{Config, GameRng};

/// Horizontal travel direction of the ball, also used to name a paddle side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign of horizontal travel: -1 for Left, 1 for Right
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Paddle component - one per side, driven entirely by the relayed tilt angle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Direction,
    pub angle: i32, // tilt reading, clamped to [0, 90] at ingest
}

impl Paddle {
    pub fn new(side: Direction, angle: i32) -> Self {
        Self { side, angle }
    }

    /// Y coordinate of the paddle's bottom edge
    pub fn lower_y(&self, config: &Config) -> f32 {
        config.paddle_offset(self.angle)
    }
}

/// Ball component
///
/// `angle` is a slope parameter consumed via `tan`, not a normalized angle:
/// wall reflection assigns `pi - angle` and paddle strikes assign
/// `offset * MAX_DEFLECT`, so it drifts outside [0, 2*pi).
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub direction: Direction,
    pub angle: f32,
    pub speed: f32, // frame-time divisor; shrinks on every paddle strike
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.serve_pos(),
            direction: Direction::Left,
            angle: 0.0,
            speed: 1.0,
        }
    }

    /// Re-seed the ball for the next serve
    pub fn reset(&mut self, direction: Direction, config: &Config, rng: &mut GameRng) {
        use rand::Rng;
        self.speed = 1.0;
        self.direction = direction;
        self.angle = rng.0.gen_range(0.0..std::f32::consts::FRAC_PI_2);
        self.pos = config.serve_pos();
    }
}

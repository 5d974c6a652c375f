use crate::Direction;

/// Time resource for frame-delta integration.
///
/// `last_frame` only advances when a physics step actually ran, so the first
/// step after a pause integrates the whole gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now: f32,
    pub last_frame: f32,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Match phase; physics only advances while Running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Paused,
    Running,
}

impl Phase {
    /// Unpause unconditionally (relay start command)
    pub fn start(&mut self) {
        *self = Phase::Running;
    }

    pub fn pause(&mut self) {
        *self = Phase::Paused;
    }

    /// Manual pause toggle (keyboard)
    pub fn toggle(&mut self) {
        *self = match self {
            Phase::Paused => Phase::Running,
            Phase::Running => Phase::Paused,
        };
    }

    pub fn is_running(self) -> bool {
        matches!(self, Phase::Running)
    }
}

/// Match score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    /// Did either side reach the win threshold?
    pub fn reached(&self, win_score: u8) -> bool {
        self.left >= win_score || self.right >= win_score
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }
}

/// Random number generator for serve angles
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub ball_out: Option<Direction>,
    pub left_scored: bool,
    pub right_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One command relayed from the control channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlInput {
    Start,
    Tilt { p1: i32, p2: i32 },
}

/// Control input queue, drained at the top of each step
#[derive(Debug, Clone, Default)]
pub struct ControlQueue {
    pub inputs: Vec<ControlInput>,
}

impl ControlQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_start(&mut self) {
        self.inputs.push(ControlInput::Start);
    }

    pub fn push_tilt(&mut self, p1: i32, p2: i32) {
        self.inputs.push(ControlInput::Tilt { p1, p2 });
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }
}

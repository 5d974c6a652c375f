use crate::Config;

/// Test a candidate ball position against a paddle's vertical span.
///
/// The span is `[lower_y, lower_y + PADDLE_HEIGHT + BALL_WIDTH]`. Inside it,
/// the normalized strike offset in [-1, 1] is returned (how far from paddle
/// center the ball landed); outside it, `None`.
pub fn paddle_strike(next_y: f32, lower_y: f32, config: &Config) -> Option<f32> {
    let upper_y = lower_y + config.paddle_height + config.ball_width;

    if next_y >= lower_y && next_y <= upper_y {
        let offset = ((next_y - config.ball_width / 2.0) - (lower_y + config.paddle_height) / 2.0)
            / (0.5 * config.paddle_height);
        Some(offset.clamp(-1.0, 1.0))
    } else {
        None
    }
}

/// Does the ball's leading edge cross the left paddle's x band this frame?
///
/// True either when the next position lands inside the band or when the ball
/// was already inside it and would exit past the wall. The test fires only on
/// the crossing frame, never continuously.
pub fn enters_left_band(x: f32, next_x: f32, config: &Config) -> bool {
    let leading = next_x - config.ball_width;
    (leading >= -1.0 && leading <= -1.0 + config.paddle_width)
        || (x >= -1.0 + config.paddle_width && next_x <= -1.0)
}

/// Symmetric band test for the right paddle
pub fn enters_right_band(x: f32, next_x: f32, config: &Config) -> bool {
    (next_x >= 1.0 - config.paddle_width && next_x <= 1.0)
        || (x <= 1.0 - config.paddle_width && next_x >= 1.0)
}

/// Does the candidate y cross the top or bottom wall?
pub fn hits_wall(next_y: f32, config: &Config) -> bool {
    next_y >= 1.0 || next_y <= config.ball_width
}

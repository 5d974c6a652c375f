use hecs::World;

use crate::{ControlInput, ControlQueue, Direction, Paddle, Phase};

/// Apply queued control inputs.
///
/// A start command unpauses unconditionally. A tilt reading becomes the two
/// paddle angles, clamped to [0, 90] here (the relay is not trusted to
/// bound them). The queue is drained every step, paused or not, so a start
/// can arrive while the match is paused.
pub fn ingest_inputs(world: &mut World, queue: &mut ControlQueue, phase: &mut Phase) {
    for input in &queue.inputs {
        match *input {
            ControlInput::Start => phase.start(),
            ControlInput::Tilt { p1, p2 } => {
                for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                    paddle.angle = match paddle.side {
                        Direction::Left => p1.clamp(0, 90),
                        Direction::Right => p2.clamp(0, 90),
                    };
                }
            }
        }
    }

    queue.inputs.clear();
}

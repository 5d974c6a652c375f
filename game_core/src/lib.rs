pub mod components;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one control-driven simulation frame.
///
/// Inputs are ingested first so a start command can arrive while paused;
/// physics only runs in the Running phase. `time.last_frame` advances only
/// when a physics step actually ran.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    phase: &mut Phase,
    score: &mut Score,
    events: &mut Events,
    queue: &mut ControlQueue,
    rng: &mut GameRng,
) {
    events.clear();

    // 1. Ingest relayed control inputs (paddle angles, start)
    ingest_inputs(world, queue, phase);

    if !phase.is_running() {
        return;
    }

    // 2. Move ball: integrate, reflect off walls/paddles, commit, flag exits
    move_ball(world, time, config, events);

    // 3. Score exits and re-seed the ball
    check_scoring(world, score, phase, events, rng, config);

    time.last_frame = time.now;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Direction, angle: i32) -> hecs::Entity {
    world.spawn((Paddle::new(side, angle),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(config),))
}

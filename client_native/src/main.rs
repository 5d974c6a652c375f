mod channel;
mod input;
mod render;

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::{App, Arg};
use hecs::World;

use channel::ControlChannel;
use game_core::{
    create_ball, create_paddle, step, Config, ControlQueue, Direction, Events, GameRng, Paddle,
    Phase, Score, Time,
};
use input::KeyCommand;
use proto::{Command, ScoreReport};
use render::{FrameSnapshot, TermRenderer};

/// Sleep between relay check-ins while waiting for a start signal
const PAUSE_SLEEP: Duration = Duration::from_millis(2);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("tilt-pong")
        .about("Two-player pong driven by phone tilt angles over a local relay socket")
        .arg(
            Arg::with_name("socket")
                .long("socket")
                .short("s")
                .takes_value(true)
                .default_value("/tmp/pong.sock")
                .help("Path of the control relay's stream socket"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .default_value("0")
                .help("Serve-angle RNG seed"),
        )
        .get_matches();

    let socket = matches.value_of("socket").unwrap_or("/tmp/pong.sock");
    let seed = matches
        .value_of("seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    // Every failure on the control channel is fatal by design: this is a
    // single-shot interactive session, not a service.
    if let Err(err) = run(socket, seed) {
        log::error!("fatal: {err}");
        std::process::exit(1);
    }
}

fn run(socket: &str, seed: u64) -> io::Result<()> {
    let mut channel = ControlChannel::connect(socket)?;
    log::info!("connected to control relay at {socket}");

    let mut world = World::new();
    let config = Config::new();
    create_paddle(&mut world, Direction::Left, 30);
    create_paddle(&mut world, Direction::Right, 30);
    create_ball(&mut world, &config);

    let mut time = Time::new();
    let mut phase = Phase::Paused;
    let mut score = Score::new();
    let mut events = Events::new();
    let mut queue = ControlQueue::new();
    let mut rng = GameRng::new(seed);

    let mut renderer = TermRenderer::new()?;
    let started_at = Instant::now();

    loop {
        // One round-trip per frame: report scores, block for the next command
        let report = ScoreReport {
            p1: score.left,
            p2: score.right,
        };
        match channel.exchange(&report)? {
            Some(Command::Start) => queue.push_start(),
            Some(Command::Tilt { p1, p2 }) => queue.push_tilt(p1, p2),
            None => {}
        }

        match input::poll_keys()? {
            Some(KeyCommand::TogglePause) => phase.toggle(),
            Some(KeyCommand::Quit) => break,
            None => {}
        }

        time.now = started_at.elapsed().as_secs_f32();
        step(
            &mut world, &mut time, &config, &mut phase, &mut score, &mut events, &mut queue,
            &mut rng,
        );

        if events.left_scored || events.right_scored {
            log::info!("score: {} - {}", score.left, score.right);
        }

        if phase.is_running() {
            renderer.draw(&snapshot(&world, &config, &score))?;
        } else {
            // Check back in with the relay without spinning hot
            thread::sleep(PAUSE_SLEEP);
        }
    }

    Ok(())
}

fn snapshot(world: &World, config: &Config, score: &Score) -> FrameSnapshot {
    let mut snap = FrameSnapshot {
        left_offset: 0.0,
        right_offset: 0.0,
        ball_x: 0.0,
        ball_y: 0.0,
        score_left: score.left,
        score_right: score.right,
    };

    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Direction::Left => snap.left_offset = paddle.lower_y(config),
            Direction::Right => snap.right_offset = paddle.lower_y(config),
        }
    }
    for (_entity, ball) in world.query::<&game_core::Ball>().iter() {
        snap.ball_x = ball.pos.x;
        snap.ball_y = ball.pos.y;
    }

    snap
}

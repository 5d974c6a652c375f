use hecs::World;

use crate::{Ball, Config, Direction, Events, GameRng, Phase, Score};

/// Handle a ball that left the playfield.
///
/// The side opposite the exit takes the point. Reaching the win threshold
/// resets both scores and pauses the match. Either way the ball is re-seeded
/// for the next serve, travelling toward the side that conceded.
pub fn check_scoring(
    world: &mut World,
    score: &mut Score,
    phase: &mut Phase,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    let exit = match events.ball_out {
        Some(exit) => exit,
        None => return,
    };

    match exit {
        Direction::Left => {
            score.increment_right();
            events.right_scored = true;
        }
        Direction::Right => {
            score.increment_left();
            events.left_scored = true;
        }
    }

    if score.reached(config.win_score) {
        score.reset();
        phase.pause();
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(exit, config, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;

    fn setup() -> (World, Config, Score, Phase, Events, GameRng) {
        (
            World::new(),
            Config::new(),
            Score::new(),
            Phase::Running,
            Events::new(),
            GameRng::new(12345),
        )
    }

    #[test]
    fn test_exit_left_scores_right_player() {
        let (mut world, config, mut score, mut phase, mut events, mut rng) = setup();
        create_ball(&mut world, &config);
        events.ball_out = Some(Direction::Left);

        check_scoring(&mut world, &mut score, &mut phase, &mut events, &mut rng, &config);

        assert_eq!((score.left, score.right), (0, 1));
        assert!(events.right_scored);
        assert!(phase.is_running(), "Match keeps running below the threshold");
    }

    #[test]
    fn test_exit_right_scores_left_player() {
        let (mut world, config, mut score, mut phase, mut events, mut rng) = setup();
        create_ball(&mut world, &config);
        events.ball_out = Some(Direction::Right);

        check_scoring(&mut world, &mut score, &mut phase, &mut events, &mut rng, &config);

        assert_eq!((score.left, score.right), (1, 0));
        assert!(events.left_scored);
    }

    #[test]
    fn test_reset_effect_is_idempotent_on_ball() {
        let (mut world, config, mut score, mut phase, mut events, mut rng) = setup();
        create_ball(&mut world, &config);
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.speed = 0.42;
        }
        events.ball_out = Some(Direction::Left);

        check_scoring(&mut world, &mut score, &mut phase, &mut events, &mut rng, &config);

        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            assert_eq!(ball.speed, 1.0, "Serve speed is 1 regardless of prior speed");
            assert_eq!(ball.direction, Direction::Left, "Serve travels toward the conceding side");
            assert_eq!(ball.pos, config.serve_pos());
        }
    }

    #[test]
    fn test_threshold_resets_both_scores_and_pauses() {
        let (mut world, config, mut score, mut phase, mut events, mut rng) = setup();
        create_ball(&mut world, &config);
        score.right = 9;
        score.left = 3;
        events.ball_out = Some(Direction::Left);

        check_scoring(&mut world, &mut score, &mut phase, &mut events, &mut rng, &config);

        assert_eq!((score.left, score.right), (0, 0), "Both scores reset together");
        assert!(!phase.is_running(), "Threshold forces Paused");
    }

    #[test]
    fn test_no_exit_is_a_no_op() {
        let (mut world, config, mut score, mut phase, mut events, mut rng) = setup();
        create_ball(&mut world, &config);

        check_scoring(&mut world, &mut score, &mut phase, &mut events, &mut rng, &config);

        assert_eq!((score.left, score.right), (0, 0));
        assert!(!events.left_scored && !events.right_scored);
    }
}

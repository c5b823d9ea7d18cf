use rand::Rng as _;
use trajgrade_engine::{Game, ScenarioConfig, ScenarioSeed};
use trajgrade_evaluator::{CollisionEvaluator, Evaluator, HitPredicate, ScoreParams};
use trajgrade_geometry::Point;

use crate::util::Output;

const DEMO_TRAJECTORY: [(f64, f64); 4] = [(0.0, 0.0), (0.1, 0.0), (0.2, 0.1), (0.5, 0.5)];

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DemoArg {
    /// Seed as 32 hex characters; a random seed is used when omitted
    #[arg(long)]
    seed: Option<ScenarioSeed>,
    /// Test collisions on all available cores
    #[arg(long)]
    parallel: bool,
}

pub(crate) fn run(arg: &DemoArg) -> anyhow::Result<()> {
    let DemoArg { seed, parallel } = arg;
    let seed = seed.unwrap_or_else(|| rand::rng().random());

    let mut game = Game::from_config(&ScenarioConfig::default(), seed)?;
    eprintln!("Scene (seed {seed}):");
    for (i, obstacle) in game.scene().obstacles().iter().enumerate() {
        eprintln!(
            "  {i:2}: center {}, width {:.3}, angle {:.3}",
            obstacle.center(),
            obstacle.width(),
            obstacle.angle()
        );
    }

    game.apply_trajectory(DEMO_TRAJECTORY.map(Point::from))?;
    let evaluator = Evaluator::new(
        CollisionEvaluator::new(HitPredicate::default(), *parallel),
        ScoreParams::default(),
    );
    let result = evaluator.evaluate_game(&game)?;

    eprintln!(
        "Obstacle union: {} regions",
        game.scene().obstacle_union().len()
    );
    eprintln!("Trajectory union: {} regions", game.trajectory_union()?.len());
    eprintln!("Total score: {:.3}", result.total_score());
    Output::save_json(&result, None)?;
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use rand::Rng as _;
use trajgrade_engine::{ScenarioConfig, ScenarioSeed, create_scene};

use crate::{
    schema::scene_file::SceneFile,
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GenerateSceneArg {
    /// Scenario config JSON file; missing fields take their default values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed as 32 hex characters; a random seed is used when omitted
    #[arg(long)]
    seed: Option<ScenarioSeed>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateSceneArg) -> anyhow::Result<()> {
    let GenerateSceneArg {
        config,
        seed,
        output,
    } = arg;
    let config = match config {
        Some(path) => util::read_scenario_config_file(path)?,
        None => ScenarioConfig::default(),
    };
    let seed = seed.unwrap_or_else(|| rand::rng().random());

    eprintln!(
        "Generating scene with {} obstacles (seed {seed})...",
        config.obstacle_count
    );
    let scene = create_scene(&config, seed).context("Invalid scenario config")?;

    let file = SceneFile {
        generated_at: Utc::now(),
        seed,
        config,
        scene,
    };
    Output::save_json(&file, output.clone())?;
    Ok(())
}

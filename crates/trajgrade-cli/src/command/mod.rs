use clap::{Parser, Subcommand};

use self::{demo::DemoArg, evaluate::EvaluateArg, generate_scene::GenerateSceneArg};

mod demo;
mod evaluate;
mod generate_scene;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to do; runs the demo when omitted
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate a random scene from a scenario config
    GenerateScene(#[clap(flatten)] GenerateSceneArg),
    /// Grade a trajectory against a scene
    Evaluate(#[clap(flatten)] EvaluateArg),
    /// Grade a fixed trajectory against the default scenario
    Demo(#[clap(flatten)] DemoArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Demo(DemoArg::default())) {
        Mode::GenerateScene(arg) => generate_scene::run(&arg)?,
        Mode::Evaluate(arg) => evaluate::run(&arg)?,
        Mode::Demo(arg) => demo::run(&arg)?,
    }
    Ok(())
}

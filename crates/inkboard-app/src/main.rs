//! Headless replay driver: feeds a scripted session through a whiteboard and
//! prints what is left on the surface.

mod script;

use anyhow::Context;
use clap::Parser;
use inkboard_core::{BoardConfig, RenderSurface, Whiteboard};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, about = "Replay a scripted whiteboard session")]
struct Cli {
    /// TOML board configuration (defaults apply when omitted)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the final shapes as JSON instead of one line each
    #[arg(long)]
    json: bool,

    /// JSON array of steps to replay
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };

    let source = std::fs::read_to_string(&cli.script)
        .with_context(|| format!("failed to read script {}", cli.script.display()))?;
    let steps = script::parse(&source)
        .with_context(|| format!("invalid script {}", cli.script.display()))?;
    log::info!("replaying {} steps from {}", steps.len(), cli.script.display());

    let mut board = Whiteboard::new(&config);
    script::run(&mut board, &steps);

    let shapes = board.scene().shapes();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(shapes)?);
    } else {
        for shape in shapes {
            println!("{}", script::describe(shape));
        }
    }
    log::info!(
        "{} shapes on the surface, tool {}, undo {}, redo {}",
        shapes.len(),
        board.tool(),
        board.can_undo(),
        board.can_redo()
    );
    Ok(())
}

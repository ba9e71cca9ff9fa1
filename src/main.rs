use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake_pilot::game::GameConfig;
use snake_pilot::modes::{AgentMode, HumanMode};

#[derive(Parser)]
#[command(name = "snake-pilot")]
#[command(version, about = "Snake that plays itself with A* pathfinding")]
struct Cli {
    /// Who controls the snake
    #[arg(long, default_value = "agent")]
    mode: Mode,

    /// Grid width in cells, border wall included
    #[arg(long, default_value = "15")]
    width: usize,

    /// Grid height in cells, border wall included
    #[arg(long, default_value = "10")]
    height: usize,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Watch the A* autopilot play
    Agent,
    /// Play snake with keyboard controls
    Human,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    anyhow::ensure!(
        cli.width >= 5 && cli.height >= 5,
        "grid must be at least 5x5 to leave room inside the walls"
    );

    // Create game configuration from CLI arguments
    let config = GameConfig::new(cli.width, cli.height);

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Agent => {
            let mut agent_mode = AgentMode::new(config);
            agent_mode.run().await?;
        }
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
    }

    Ok(())
}

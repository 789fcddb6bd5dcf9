use std::time::Duration;

use clap::Parser;

use pathlab_demo::config::{DemoConfig, Mode};

#[derive(Parser, Debug)]
#[command(name = "pathlab")]
#[command(about = "Animate A* shortest-path search on a grid in the terminal", long_about = None)]
struct Cli {
    /// Cells per side of a random board
    #[arg(short, long, default_value_t = 20)]
    rows: i32,

    /// Logical board width used for pixel mapping
    #[arg(short, long, default_value_t = 800)]
    width: i32,

    /// Probability that a random cell is a barrier
    #[arg(short, long, default_value_t = 0.3)]
    density: f64,

    /// Seed for the random board
    #[arg(short, long)]
    seed: Option<u64>,

    /// Use a built-in board (wall, spiral, rooms) instead of a random one
    #[arg(short, long)]
    maze: Option<String>,

    /// Pause after every drawn step, in milliseconds
    #[arg(long, default_value_t = 15)]
    delay_ms: u64,

    /// Paint the board with the mouse before searching
    #[arg(short, long, conflicts_with = "headless")]
    interactive: bool,

    /// Print the final board instead of animating
    #[arg(long)]
    headless: bool,
}

impl From<Cli> for DemoConfig {
    fn from(cli: Cli) -> Self {
        let mode = if cli.headless {
            Mode::Headless
        } else if cli.interactive {
            Mode::Interactive
        } else {
            Mode::Animate
        };
        DemoConfig {
            rows: cli.rows,
            width: cli.width,
            density: cli.density,
            seed: cli.seed,
            maze: cli.maze,
            delay: Duration::from_millis(cli.delay_ms),
            mode,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = DemoConfig::from(cli);
    log::debug!("demo config: {cfg:?}");
    pathlab_demo::run(&cfg)?;
    Ok(())
}

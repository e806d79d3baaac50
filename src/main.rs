use std::process::ExitCode;

use clap::Parser;
use tracing::{error, Level};

use rpsls::{GameSession, HumanPlayer, LineConsole, PromptReplay, Result, SessionConfig};

/// Rock, Paper, Scissors, Lizard, Spock against the computer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for the computer's moves; omit for a random game.
    #[arg(long)]
    seed: Option<u64>,

    /// Computer opponent name (repeat to give a pool to draw from).
    #[arg(long = "opponent", value_name = "NAME")]
    opponents: Vec<String>,

    /// Forget earlier sessions' rounds when starting a new session.
    #[arg(long)]
    fresh_history: bool,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn config(&self) -> SessionConfig {
        let mut config = SessionConfig::new()
            .with_computer_roster(self.opponents.iter().cloned())
            .with_history_across_replays(!self.fresh_history);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn play(config: SessionConfig) -> Result<()> {
    let mut io = LineConsole::stdio();
    let human = HumanPlayer::ask_name(&mut io)?;
    let computer = config.computer();
    let mut session = GameSession::with_config(human, computer, config);
    session.run(&mut io, &mut PromptReplay)
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_file(true)
        .with_max_level(args.log_level())
        .init();

    match play(args.config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "game ended early");
            ExitCode::FAILURE
        }
    }
}

//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Colorful Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file with the player roster
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}

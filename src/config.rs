//! Command-line and environment configuration for the terminal binary.
//!
//! Flags win over environment variables:
//!
//! | Flag | Environment | Default |
//! |------|-------------|---------|
//! | `--game <NUMBER>` | `MAHJONG_GAME_NUMBER` | derived from the clock |
//! | `--log-path <PATH>` | `MAHJONG_LOG_PATH` | `tui-mahjong.log` |
//! | `--no-log` | `MAHJONG_LOG_DISABLED=1` | logging on |
//! | `--print-deal` | | play interactively |

use std::path::PathBuf;

use clap::Parser;

use crate::core::{GameSession, MahjongError};

pub const DEFAULT_LOG_PATH: &str = "tui-mahjong.log";

/// Turtle-layout Mahjong solitaire in the terminal
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "tui-mahjong")]
#[command(about = "Turtle-layout Mahjong solitaire in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game number to deal (1 to 6 digits); derived from the clock when omitted
    #[arg(short, long, value_parser = GameSession::parse_game_number)]
    pub game: Option<u32>,

    /// File that receives the log
    #[arg(long)]
    pub log_path: Option<PathBuf>,

    /// Print the deal as JSON and exit instead of playing
    #[arg(long)]
    pub print_deal: bool,

    /// Do not write a log file
    #[arg(long)]
    pub no_log: bool,
}

/// Settings after merging flags over the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game_number: Option<u32>,
    /// `None` disables logging
    pub log_path: Option<PathBuf>,
    pub print_deal: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game_number: None,
            log_path: Some(PathBuf::from(DEFAULT_LOG_PATH)),
            print_deal: false,
        }
    }
}

impl AppConfig {
    /// Environment, then `cli` on top
    pub fn resolve(cli: &Cli) -> Result<Self, MahjongError> {
        Ok(Self::from_env()?.with_cli(cli))
    }

    /// Create from environment variables
    ///
    /// A malformed `MAHJONG_GAME_NUMBER` is an error rather than silently
    /// dealing a different game.
    pub fn from_env() -> Result<Self, MahjongError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MahjongError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let game_number = non_empty("MAHJONG_GAME_NUMBER")
            .map(|s| GameSession::parse_game_number(&s))
            .transpose()?;

        let disabled = non_empty("MAHJONG_LOG_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let log_path = if disabled {
            None
        } else {
            Some(
                non_empty("MAHJONG_LOG_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH)),
            )
        };

        Ok(Self {
            game_number,
            log_path,
            print_deal: false,
        })
    }

    /// Overlay command-line flags
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if cli.game.is_some() {
            self.game_number = cli.game;
        }
        if let Some(path) = &cli.log_path {
            self.log_path = Some(path.clone());
        }
        if cli.no_log {
            self.log_path = None;
        }
        self.print_deal = cli.print_deal;
        self
    }
}

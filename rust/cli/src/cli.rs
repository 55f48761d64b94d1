//! Command-line argument definitions.

use clap::Parser;

/// Convert a PokerNow hand log into PokerStars hand histories.
#[derive(Parser, Debug)]
#[command(name = "nowstars", version, about)]
pub struct NowstarsCli {
    /// PokerNow JSON export (plain or .zst compressed)
    pub input: String,
    /// Destination text file for the converted hands
    pub output: String,
    /// Your display name; only this player's hole cards are dealt
    pub hero: String,
    /// TOML file with label overrides (takes precedence over NOWSTARS_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,
}

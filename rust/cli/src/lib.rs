//! # nowstars CLI Library
//!
//! Command-line front end for [`nowstars_engine`]: reads a PokerNow JSON
//! export and writes PokerStars-format hand histories.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["nowstars", "poker_now_log.json", "hands.txt", "Hero Name"];
//! let code = nowstars_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

#[macro_use]
mod macros;

use clap::Parser;
use std::io::Write;
use tracing::debug;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::NowstarsCli;
use commands::handle_convert_command;

pub use error::CliError;

const USAGE: &str = "Usage: nowstars input.json output.txt \"Hero Name\"";

/// Main entry point for the CLI application.
///
/// Parses arguments, resolves configuration and runs the conversion.
///
/// # Returns
///
/// Exit code: `0` for success (including `--help`/`--version`), `2` for
/// usage, configuration, I/O and conversion errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match NowstarsCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "{}", USAGE);
                    exit_code::ERROR
                }
            };
        }
    };

    match convert(&cli, err) {
        Ok(hands) => {
            write_or_exit!(
                out,
                "Conversion complete. {} hands written to {}",
                hands,
                cli.output
            );
            exit_code::SUCCESS
        }
        Err(e) => {
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

fn convert(cli: &NowstarsCli, err: &mut dyn Write) -> Result<usize, CliError> {
    let resolved = config::load_with_sources(cli.config.as_deref())?;
    debug!(sources = ?resolved.sources, "configuration resolved");
    handle_convert_command(&cli.input, &cli.output, &cli.hero, &resolved.config, err)
}

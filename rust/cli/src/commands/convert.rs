//! Hand log conversion command.
//!
//! Reads a PokerNow JSON export, converts every hand and writes the
//! PokerStars transcript to the output file.

use std::io::{BufWriter, Write};
use std::path::Path;

use nowstars_engine::{Session, convert_session};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::{ensure_parent_dir, read_text_auto};
use crate::ui;

/// Convert `input` into `output`, returning the number of hands written.
///
/// Nothing is written to `output` unless every hand converts.
pub fn handle_convert_command(
    input: &str,
    output: &str,
    hero: &str,
    config: &Config,
    err: &mut dyn Write,
) -> Result<usize, CliError> {
    let text = read_text_auto(input).map_err(CliError::InvalidInput)?;
    let session = Session::from_json(&text)?;
    info!(input, hands = session.hands.len(), "loaded hand log");

    let seen = session
        .hands
        .iter()
        .any(|h| h.players.iter().any(|p| p.name == hero));
    if !seen && !session.hands.is_empty() {
        ui::display_warning(
            err,
            &format!("{} is not seated in any hand; no hole cards will be shown", hero),
        )?;
    }

    let blocks = convert_session(&session, &config.converter(hero))?;
    write_blocks(Path::new(output), &blocks)?;
    info!(output, hands = blocks.len(), "wrote hand histories");
    Ok(blocks.len())
}

fn write_blocks(path: &Path, blocks: &[String]) -> Result<(), CliError> {
    ensure_parent_dir(path).map_err(CliError::InvalidInput)?;
    let mut w = BufWriter::new(std::fs::File::create(path)?);
    for block in blocks {
        w.write_all(block.as_bytes())?;
    }
    w.flush()?;
    let bytes: usize = blocks.iter().map(String::len).sum();
    debug!(path = %path.display(), bytes, "flushed");
    Ok(())
}

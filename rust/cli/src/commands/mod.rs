//! Command handlers.
//!
//! Handlers take their output streams as `&mut dyn Write` and return
//! `Result<_, CliError>`; [`crate::run`] turns the result into an exit code.

mod convert;

pub use convert::handle_convert_command;

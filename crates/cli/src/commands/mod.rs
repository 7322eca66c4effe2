//! Subcommand implementations.
//!
//! Commands write their results to stdout; logs go to stderr.

#![allow(clippy::print_stdout)]

use serde::Serialize;
use shiba_storefront::AppError;
use thiserror::Error;

pub mod account;
pub mod catalog;
pub mod purchase;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The storefront rejected the request.
    #[error(transparent)]
    App(#[from] AppError),

    /// Output could not be serialized.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print `value` as pretty JSON.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

//! JSON output shared by every command.

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize `value` and print it on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    println!("{}", to_json(value, pretty)?);
    Ok(())
}

/// Serialize `value` as compact or indented JSON
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.context("Failed to serialize result as JSON")
}

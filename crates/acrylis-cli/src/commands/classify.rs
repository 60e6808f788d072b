use acrylis_core::error::AcrylisError;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: Option<PathBuf>,
    text: Option<String>,
    fungal_acne: bool,
    output_format: &str,
) -> Result<(), AcrylisError> {
    let ingredient_list = read_input(input_file, text)?;

    let (result, assessment) = acrylis_core::classify_and_assess(&ingredient_list, fungal_acne)?;

    match output_format {
        "json" => output::json::print(&result, &assessment)?,
        _ => output::table::print(&result, &assessment),
    }

    Ok(())
}

/// Inline text wins, then the input file, then piped stdin.
fn read_input(input_file: Option<PathBuf>, text: Option<String>) -> Result<String, AcrylisError> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = input_file {
        tracing::debug!(path = %path.display(), "reading ingredient list from file");
        return Ok(std::fs::read_to_string(&path)?);
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(AcrylisError::EmptyInput);
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(buf)
}

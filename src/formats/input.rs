// Loading transmissions and decoder settings from disk

use crate::config::DecoderConfig;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse decoder config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("No transmissions found in input")]
    Empty,
}

pub type Result<T> = std::result::Result<T, InputError>;

/// One hex transmission and the 1-based line it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub number: usize,
    pub hex: String,
}

/// Read one hex transmission per non-empty line, trimmed of surrounding whitespace
pub fn load_transmissions(filename: impl AsRef<Path>) -> Result<Vec<InputLine>> {
    let text = fs::read_to_string(filename)?;
    let lines = parse_transmissions(&text);
    if lines.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(lines)
}

/// Split text into trimmed, non-empty lines, keeping their line numbers
pub fn parse_transmissions(text: &str) -> Vec<InputLine> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| InputLine {
            number,
            hex: line.to_string(),
        })
        .collect()
}

/// Load a [`DecoderConfig`] from a JSON file
pub fn load_config(filename: impl AsRef<Path>) -> Result<DecoderConfig> {
    let text = fs::read_to_string(filename)?;
    Ok(DecoderConfig::from_json(&text)?)
}

//! Input/output path configuration.
//!
//! A properties-style file with one `key = 'path'` line per entry. The parsed
//! value is an explicitly constructed [`Settings`]; nothing process-wide.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct Settings {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl Settings {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parses `key = 'path'` lines. Recognized keys are `input` and `output`;
    /// unknown keys are ignored, as are blank lines and `#` comments.
    pub fn parse(text: &str) -> Result<Self> {
        let mut settings = Settings::default();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::MalformedSettings { line: idx + 1 });
            };
            let value = value.trim().trim_matches('\'');
            let value = (!value.is_empty()).then(|| PathBuf::from(value));
            match key.trim() {
                "input" => settings.input = value,
                "output" => settings.output = value,
                _ => {}
            }
        }
        Ok(settings)
    }

    pub fn input(&self) -> Result<&Path> {
        self.input
            .as_deref()
            .ok_or(Error::MissingConfiguration { key: "input" })
    }

    pub fn output(&self) -> Result<&Path> {
        self.output
            .as_deref()
            .ok_or(Error::MissingConfiguration { key: "output" })
    }
}

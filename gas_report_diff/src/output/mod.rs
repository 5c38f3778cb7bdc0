//!
//! Gas report comparison output.
//!

#[cfg(test)]
mod tests;

pub mod format;
pub mod json;
pub mod markdown;

use std::io::Write;
use std::path::PathBuf;

use crate::comparison::Comparison;
use crate::output::format::Format;
use crate::output::json::Json;
use crate::output::markdown::Markdown;

///
/// Serialized comparison of two gas reports.
///
#[derive(Debug)]
pub struct Output {
    /// The serialized content.
    pub content: String,
}

impl Output {
    ///
    /// Writes the comparison to a stream, e.g. `stdout`.
    ///
    pub fn write_all<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        writer.write_all(self.content.as_bytes())?;
        writer.flush()
    }

    ///
    /// Writes the comparison to a file.
    ///
    pub fn write_to_file(&self, path: PathBuf) -> anyhow::Result<()> {
        std::fs::write(path.as_path(), self.content.as_str())
            .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl TryFrom<(&Comparison, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((comparison, format): (&Comparison, Format)) -> Result<Self, Self::Error> {
        Ok(match format {
            Format::Markdown => Markdown::from(comparison).into(),
            Format::Json => Json::try_from(comparison)?.into(),
        })
    }
}

impl From<Markdown> for Output {
    fn from(value: Markdown) -> Self {
        Self {
            content: value.content,
        }
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Self {
            content: value.content,
        }
    }
}

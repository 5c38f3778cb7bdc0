//!
//! Serializing the comparison to JSON.
//!

pub mod entry;

use crate::comparison::Comparison;

use self::entry::Entry;

///
/// Serializing the comparison to JSON.
///
#[derive(Default)]
pub struct Json {
    /// The JSON string.
    pub content: String,
}

impl TryFrom<&Comparison> for Json {
    type Error = serde_json::Error;

    fn try_from(comparison: &Comparison) -> Result<Self, Self::Error> {
        let entries: Vec<Entry> = comparison.rows.iter().map(Entry::from).collect();
        let mut content = serde_json::to_string_pretty(&entries)?;
        content.push('\n');
        Ok(Self { content })
    }
}

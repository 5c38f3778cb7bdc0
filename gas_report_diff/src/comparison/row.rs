//!
//! The comparison table row.
//!

use super::delta::Delta;
use super::section::Section;

///
/// The comparison table row.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The section the entry belongs to.
    pub section: Section,
    /// The entry identifier.
    pub name: String,
    /// The average cost before the change.
    pub before: Option<String>,
    /// The average cost after the change.
    pub after: Option<String>,
    /// The change, present only if the entry is in both reports.
    pub delta: Option<Delta>,
}

impl Row {
    /// The placeholder of a missing value.
    pub const PLACEHOLDER: &'static str = "-";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        section: Section,
        name: String,
        before: Option<String>,
        after: Option<String>,
        delta: Option<Delta>,
    ) -> Self {
        Self {
            section,
            name,
            before,
            after,
            delta,
        }
    }

    ///
    /// Returns the formatted table cells.
    ///
    pub fn cells(&self) -> [String; 5] {
        [
            format!("`{}`", self.name),
            self.before
                .clone()
                .unwrap_or_else(|| Self::PLACEHOLDER.to_owned()),
            self.after
                .clone()
                .unwrap_or_else(|| Self::PLACEHOLDER.to_owned()),
            self.delta
                .map(|delta| delta.format_diff())
                .unwrap_or_else(|| Self::PLACEHOLDER.to_owned()),
            self.delta
                .map(|delta| delta.format_diff_percent())
                .unwrap_or_else(|| Self::PLACEHOLDER.to_owned()),
        ]
    }
}

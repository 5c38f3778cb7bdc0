//!
//! The JSON comparison entry.
//!

use crate::comparison::row::Row;
use crate::comparison::section::Section;

///
/// The JSON comparison entry.
///
#[derive(Debug, serde::Serialize)]
pub struct Entry<'a> {
    /// The section the entry belongs to.
    pub section: Section,
    /// The entry identifier.
    pub name: &'a str,
    /// The average cost before the change.
    pub before: Option<&'a str>,
    /// The average cost after the change.
    pub after: Option<&'a str>,
    /// `after - before`.
    pub diff: Option<i64>,
    /// `(after - before) / before`, in percent.
    pub diff_percent: Option<f64>,
}

impl<'a> From<&'a Row> for Entry<'a> {
    fn from(row: &'a Row) -> Self {
        Self {
            section: row.section,
            name: row.name.as_str(),
            before: row.before.as_deref(),
            after: row.after.as_deref(),
            diff: row.delta.map(|delta| delta.diff),
            diff_percent: row.delta.map(|delta| delta.diff_percent),
        }
    }
}

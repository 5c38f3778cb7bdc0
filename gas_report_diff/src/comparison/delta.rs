//!
//! The average cost change of a single entry.
//!

use super::error::Error;
use super::section::Section;

///
/// The average cost change of a single entry.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delta {
    /// `after - before`.
    pub diff: i64,
    /// `(after - before) / before`, in percent.
    pub diff_percent: f64,
}

impl Delta {
    ///
    /// Computes the change between two average costs of the entry `key`.
    ///
    pub fn new(section: Section, key: &str, before: &str, after: &str) -> Result<Self, Error> {
        let before = Self::parse(section, key, before)?;
        let after = Self::parse(section, key, after)?;
        let diff = after.checked_sub(before).ok_or_else(|| Error::Overflow {
            section,
            key: key.to_owned(),
        })?;
        if before == 0 {
            return Err(Error::ZeroBaseline {
                section,
                key: key.to_owned(),
            });
        }
        let diff_percent = 100.0 * (diff as f64 / before as f64);
        Ok(Self { diff, diff_percent })
    }

    ///
    /// Formats the absolute change with an explicit sign, e.g. `+120` or `-45`.
    ///
    pub fn format_diff(&self) -> String {
        format!("{:+}", self.diff)
    }

    ///
    /// Formats the relative change with an explicit sign, e.g. `+3.14%`.
    ///
    pub fn format_diff_percent(&self) -> String {
        format!("{:+.2}%", self.diff_percent)
    }

    ///
    /// Parses an average cost.
    ///
    fn parse(section: Section, key: &str, value: &str) -> Result<i64, Error> {
        value.parse::<i64>().map_err(|_| Error::InvalidAverage {
            section,
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }
}

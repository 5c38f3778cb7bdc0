//!
//! The gas report comparison error.
//!

use super::section::Section;

///
/// The gas report comparison error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The average cost is not an integer.
    #[error("Entry `{key}` in {section}: average cost `{value}` is not an integer")]
    InvalidAverage {
        /// The section of the entry.
        section: Section,
        /// The entry identifier.
        key: String,
        /// The unparsable value.
        value: String,
    },
    /// The average cost before the change is zero, so the relative change is undefined.
    #[error("Entry `{key}` in {section}: division by zero, the average cost before is 0")]
    ZeroBaseline {
        /// The section of the entry.
        section: Section,
        /// The entry identifier.
        key: String,
    },
    /// The cost difference does not fit into a 64-bit integer.
    #[error("Entry `{key}` in {section}: average cost difference overflow")]
    Overflow {
        /// The section of the entry.
        section: Section,
        /// The entry identifier.
        key: String,
    },
}

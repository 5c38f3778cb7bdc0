//!
//! The comparison row filtering options.
//!

///
/// The comparison row filtering options.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Keep the entries whose average cost is unchanged.
    pub keep_zeros: bool,
    /// Keep only the entries present in both reports.
    pub both: bool,
}

impl Options {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(keep_zeros: bool, both: bool) -> Self {
        Self { keep_zeros, both }
    }
}

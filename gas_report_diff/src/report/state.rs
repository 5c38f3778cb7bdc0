//!
//! The gas report parser state.
//!

///
/// The gas report parser state.
///
/// The sections of a report follow each other in a fixed order, so the
/// parser only ever moves forward.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The preamble before the methods table.
    #[default]
    Header,
    /// The methods table.
    Methods,
    /// The deployments table, which lasts until the end of the report.
    Deployments,
}

impl State {
    /// The substring of the methods table column header line.
    pub const MARKER_METHODS: &'static str = "Contract";
    /// The substring of the deployments table header line.
    pub const MARKER_DEPLOYMENTS: &'static str = "Deployments";

    ///
    /// Returns the state which applies to the lines following `line`, if `line`
    /// is the section marker expected in the current state.
    ///
    /// A marker line is never a data row.
    ///
    pub fn transition(self, line: &str) -> Option<Self> {
        match self {
            Self::Header if line.contains(Self::MARKER_METHODS) => Some(Self::Methods),
            Self::Methods if line.contains(Self::MARKER_DEPLOYMENTS) => Some(Self::Deployments),
            Self::Header | Self::Methods | Self::Deployments => None,
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Methods => write!(f, "methods"),
            Self::Deployments => write!(f, "deployments"),
        }
    }
}

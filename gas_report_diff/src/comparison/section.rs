//!
//! The gas report section.
//!

///
/// The gas report section.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Method calls.
    Methods,
    /// Contract deployments.
    Deployments,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Methods => write!(f, "methods"),
            Self::Deployments => write!(f, "deployments"),
        }
    }
}

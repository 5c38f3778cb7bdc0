//!
//! The gas report diff library.
//!

pub mod comparison;
pub mod output;
pub mod report;
pub mod util;

pub use crate::comparison::delta::Delta;
pub use crate::comparison::error::Error as ComparisonError;
pub use crate::comparison::options::Options as ComparisonOptions;
pub use crate::comparison::row::Row;
pub use crate::comparison::section::Section;
pub use crate::comparison::Comparison;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::json::Json as JsonOutput;
pub use crate::output::markdown::Markdown as MarkdownOutput;
pub use crate::output::Output;
pub use crate::report::deployment::Deployment;
pub use crate::report::error::Error as ReportError;
pub use crate::report::method::Method;
pub use crate::report::state::State as ReportState;
pub use crate::report::Report;

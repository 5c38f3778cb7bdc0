//!
//! The Hardhat gas report.
//!

#[cfg(test)]
mod tests;

pub mod deployment;
pub mod error;
pub mod line;
pub mod method;
pub mod state;

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use self::deployment::Deployment;
use self::error::Error as ReportError;
use self::method::Method;
use self::state::State;

///
/// The Hardhat gas report.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// The method call records, keyed by `contract.method`.
    pub methods: BTreeMap<String, Method>,
    /// The contract deployment records, keyed by contract name.
    pub deployments: BTreeMap<String, Deployment>,
}

impl Report {
    ///
    /// Parses a report line by line.
    ///
    /// Rows with an unexpected number of columns are skipped. The result holds
    /// whatever has been parsed when the input ends, even if the deployments
    /// table has not been reached.
    ///
    pub fn parse<R>(reader: R) -> std::io::Result<Self>
    where
        R: BufRead,
    {
        let mut report = Self::default();
        let mut state = State::default();

        for line in reader.lines() {
            let line = line?;

            if let Some(next) = state.transition(line.as_str()) {
                tracing::debug!("Switching from the {state} section to the {next} section");
                state = next;
                continue;
            }

            match state {
                State::Header => {}
                State::Methods => {
                    report.insert_method(self::line::flatten(line.as_str()));
                }
                State::Deployments => {
                    report.insert_deployment(self::line::flatten(line.as_str()));
                }
            }
        }

        Ok(report)
    }

    ///
    /// Whether the report contains no records at all.
    ///
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.deployments.is_empty()
    }

    ///
    /// Inserts a methods table row, replacing an earlier row with the same key.
    ///
    fn insert_method(&mut self, columns: Vec<String>) {
        match Method::try_from(columns) {
            Ok(method) => {
                self.methods.insert(method.key(), method);
            }
            Err(columns) => {
                tracing::trace!("Skipping a methods table row with {} columns", columns.len());
            }
        }
    }

    ///
    /// Inserts a deployments table row, replacing an earlier row with the same key.
    ///
    fn insert_deployment(&mut self, columns: Vec<String>) {
        match Deployment::try_from(columns) {
            Ok(deployment) => {
                self.deployments.insert(deployment.key(), deployment);
            }
            Err(columns) => {
                tracing::trace!(
                    "Skipping a deployments table row with {} columns",
                    columns.len()
                );
            }
        }
    }
}

impl TryFrom<&Path> for Report {
    type Error = ReportError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = std::fs::File::open(path).map_err(|error| ReportError::Opening {
            error,
            path: path.to_path_buf(),
        })?;
        let report = Self::parse(std::io::BufReader::new(file)).map_err(|error| {
            ReportError::Reading {
                error,
                path: path.to_path_buf(),
            }
        })?;
        tracing::debug!(
            "Gas report {path:?}: {} methods, {} deployments",
            report.methods.len(),
            report.deployments.len()
        );
        Ok(report)
    }
}

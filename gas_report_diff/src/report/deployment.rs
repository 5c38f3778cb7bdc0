//!
//! The gas report contract deployment record.
//!

///
/// The gas report contract deployment record.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    /// The contract name.
    pub contract: String,
    /// The minimum gas cost.
    pub min: String,
    /// The maximum gas cost.
    pub max: String,
    /// The average gas cost.
    pub avg: String,
    /// The share of the block gas limit.
    pub pctg: String,
    /// The average cost in EUR.
    pub avgeur: String,
}

impl Deployment {
    /// The number of columns in a deployments table row.
    pub const COLUMNS: usize = 6;

    ///
    /// Returns the contract name, which identifies the deployment.
    ///
    pub fn key(&self) -> String {
        self.contract.clone()
    }

    ///
    /// Returns the average gas cost.
    ///
    pub fn average(&self) -> &str {
        self.avg.as_str()
    }
}

impl TryFrom<Vec<String>> for Deployment {
    type Error = Vec<String>;

    fn try_from(columns: Vec<String>) -> Result<Self, Self::Error> {
        let [contract, min, max, avg, pctg, avgeur]: [String; Deployment::COLUMNS] =
            columns.try_into()?;
        Ok(Self {
            contract,
            min,
            max,
            avg,
            pctg,
            avgeur,
        })
    }
}

//!
//! The gas report method call record.
//!

///
/// The gas report method call record.
///
/// All values are kept as they appear in the report.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// The contract name.
    pub contract: String,
    /// The method name.
    pub method: String,
    /// The minimum gas cost.
    pub min: String,
    /// The maximum gas cost.
    pub max: String,
    /// The average gas cost.
    pub avg: String,
    /// The number of calls.
    pub calls: String,
    /// The average cost in EUR.
    pub avgeur: String,
}

impl Method {
    /// The number of columns in a methods table row.
    pub const COLUMNS: usize = 7;

    ///
    /// Returns the `contract.method` identifier.
    ///
    pub fn key(&self) -> String {
        format!("{}.{}", self.contract, self.method)
    }

    ///
    /// Returns the average gas cost.
    ///
    pub fn average(&self) -> &str {
        self.avg.as_str()
    }
}

impl TryFrom<Vec<String>> for Method {
    type Error = Vec<String>;

    fn try_from(columns: Vec<String>) -> Result<Self, Self::Error> {
        let [contract, method, min, max, avg, calls, avgeur]: [String; Method::COLUMNS] =
            columns.try_into()?;
        Ok(Self {
            contract,
            method,
            min,
            max,
            avg,
            calls,
            avgeur,
        })
    }
}

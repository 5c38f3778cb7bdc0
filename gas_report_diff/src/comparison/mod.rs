//!
//! The comparison of two gas reports.
//!


pub mod delta;
pub mod error;
pub mod options;
pub mod row;
pub mod section;

use std::collections::BTreeMap;

use crate::report::Report;
use crate::util::btreemap::union_keys;

use self::delta::Delta;
use self::error::Error;
use self::options::Options;
use self::row::Row;
use self::section::Section;

///
/// The comparison of two gas reports.
///
/// Method calls come first, then contract deployments. Each section is sorted
/// by entry identifier.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Comparison {
    /// The table rows.
    pub rows: Vec<Row>,
}

impl Comparison {
    ///
    /// Compares the average costs of the `before` and `after` reports.
    ///
    pub fn new(before: &Report, after: &Report, options: Options) -> Result<Self, Error> {
        let mut comparison = Self::default();
        comparison.extend(
            Section::Methods,
            &before.methods,
            &after.methods,
            options,
            |method| method.average(),
        )?;
        comparison.extend(
            Section::Deployments,
            &before.deployments,
            &after.deployments,
            options,
            |deployment| deployment.average(),
        )?;
        Ok(comparison)
    }

    ///
    /// Whether there is nothing to report.
    ///
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    ///
    /// Appends the rows of a single section.
    ///
    fn extend<T, F>(
        &mut self,
        section: Section,
        before: &BTreeMap<String, T>,
        after: &BTreeMap<String, T>,
        options: Options,
        average: F,
    ) -> Result<(), Error>
    where
        F: Fn(&T) -> &str,
    {
        for key in union_keys(before, after) {
            let row = match (
                before.get(key).map(&average),
                after.get(key).map(&average),
            ) {
                (Some(before_average), Some(after_average)) => {
                    if !options.keep_zeros && before_average == after_average {
                        continue;
                    }
                    let delta = Delta::new(section, key.as_str(), before_average, after_average)?;
                    Row::new(
                        section,
                        key.to_owned(),
                        Some(before_average.to_owned()),
                        Some(after_average.to_owned()),
                        Some(delta),
                    )
                }
                (Some(before_average), None) if !options.both => Row::new(
                    section,
                    key.to_owned(),
                    Some(before_average.to_owned()),
                    None,
                    None,
                ),
                (None, Some(after_average)) if !options.both => Row::new(
                    section,
                    key.to_owned(),
                    None,
                    Some(after_average.to_owned()),
                    None,
                ),
                _ => continue,
            };
            self.rows.push(row);
        }
        Ok(())
    }
}

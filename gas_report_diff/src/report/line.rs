//!
//! The gas report line splitting.
//!

/// The column separator of the report tables.
pub const SEPARATOR: char = '·';

/// The characters trimmed from both ends of every column.
pub const BOUNDARY: &[char] = &['│', '|', ' ', '\n'];

///
/// Splits a raw report line into its non-empty columns.
///
/// '│ foo · bar · hello world │' turns into `["foo", "bar", "hello world"]`.
///
pub fn flatten(line: &str) -> Vec<String> {
    line.split(SEPARATOR)
        .map(|column| column.trim_matches(BOUNDARY))
        .filter(|column| !column.is_empty())
        .map(str::to_owned)
        .collect()
}

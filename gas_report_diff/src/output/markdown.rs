//!
//! Serializing the comparison to a Markdown table.
//!

use std::borrow::Borrow;
use std::fmt::Write;

use crate::comparison::Comparison;

///
/// Serialize the comparison to a Markdown table with the following columns:
/// "Method call or Contract deployment", "Before", "After", "After - Before", "(After - Before) / Before"
///
#[derive(Default)]
pub struct Markdown {
    /// The Markdown string.
    pub content: String,
}

impl Markdown {
    /// The table header.
    pub const COLUMNS: [&'static str; 5] = [
        "Method call or Contract deployment",
        "Before",
        "After",
        "After - Before",
        "(After - Before) / Before",
    ];

    /// The table column alignments.
    pub const ALIGNMENTS: [&'static str; 5] = [":-", ":-:", ":-:", ":-:", ":-:"];

    /// The expected maximum length of a table line.
    const LINE_LENGTH_ESTIMATE: usize = 128;

    ///
    /// Appends a table line.
    ///
    fn push_line<S>(content: &mut String, cells: &[S])
    where
        S: Borrow<str>,
    {
        writeln!(content, "| {} |", cells.join(" | ")).expect("Always valid");
    }
}

impl From<&Comparison> for Markdown {
    fn from(comparison: &Comparison) -> Self {
        let mut content =
            String::with_capacity((comparison.rows.len() + 2) * Self::LINE_LENGTH_ESTIMATE);
        Self::push_line(&mut content, &Self::COLUMNS);
        Self::push_line(&mut content, &Self::ALIGNMENTS);
        for row in comparison.rows.iter() {
            Self::push_line(&mut content, &row.cells());
        }
        Self { content }
    }
}

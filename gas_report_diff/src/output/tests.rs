//!
//! The comparison output tests.
//!

use std::str::FromStr;

use crate::comparison::delta::Delta;
use crate::comparison::row::Row;
use crate::comparison::section::Section;
use crate::comparison::Comparison;

use super::format::Format;
use super::Output;

fn comparison() -> Comparison {
    Comparison {
        rows: vec![
            Row::new(
                Section::Methods,
                "A.foo".to_owned(),
                Some("100".to_owned()),
                Some("150".to_owned()),
                Some(Delta {
                    diff: 50,
                    diff_percent: 50.0,
                }),
            ),
            Row::new(
                Section::Deployments,
                "B".to_owned(),
                Some("1000".to_owned()),
                None,
                None,
            ),
        ],
    }
}

#[test]
fn markdown() {
    let output = Output::try_from((&comparison(), Format::Markdown)).expect("Always valid");

    let expected = r#"| Method call or Contract deployment | Before | After | After - Before | (After - Before) / Before |
| :- | :-: | :-: | :-: | :-: |
| `A.foo` | 100 | 150 | +50 | +50.00% |
| `B` | 1000 | - | - | - |
"#;
    assert_eq!(output.content, expected);
}

#[test]
fn markdown_empty() {
    let output = Output::try_from((&Comparison::default(), Format::Markdown)).expect("Always valid");

    assert_eq!(output.content.lines().count(), 2);
}

#[test]
fn markdown_is_deterministic() {
    let comparison = comparison();
    let first = Output::try_from((&comparison, Format::Markdown)).expect("Always valid");
    let second = Output::try_from((&comparison, Format::Markdown)).expect("Always valid");

    assert_eq!(first.content, second.content);
}

#[test]
fn json() {
    let output = Output::try_from((&comparison(), Format::Json)).expect("Always valid");

    let value: serde_json::Value =
        serde_json::from_str(output.content.as_str()).expect("Always valid");
    assert_eq!(
        value,
        serde_json::json!([
            {
                "section": "methods",
                "name": "A.foo",
                "before": "100",
                "after": "150",
                "diff": 50,
                "diff_percent": 50.0,
            },
            {
                "section": "deployments",
                "name": "B",
                "before": "1000",
                "after": null,
                "diff": null,
                "diff_percent": null,
            },
        ])
    );
}

#[test]
fn write_all() {
    let output = Output::try_from((&comparison(), Format::Markdown)).expect("Always valid");

    let mut buffer = Vec::new();
    output.write_all(&mut buffer).expect("Always valid");

    assert_eq!(buffer, output.content.as_bytes());
}

#[test]
fn format_from_str() {
    assert_eq!(Format::from_str("markdown").expect("Always valid"), Format::Markdown);
    assert_eq!(Format::from_str("JSON").expect("Always valid"), Format::Json);

    let error = Format::from_str("xlsx").expect_err("Must fail");
    assert_eq!(
        error.to_string(),
        "Unknown output format `xlsx`. Supported formats: markdown, json"
    );
}

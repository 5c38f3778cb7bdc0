//!
//! The gas report parser tests.
//!

use super::deployment::Deployment;
use super::line;
use super::method::Method;
use super::state::State;
use super::Report;

const REPORT: &str = r#"
·-----------------------------------------|---------------------------|-------------|-----------------------------·
|          Solc version: 0.8.4            ·  Optimizer enabled: true  ·  Runs: 200  ·  Block limit: 30000000 gas  │
··········································|···························|·············|······························
|  Methods                                                                                                          │
·················|························|·············|·············|·············|···············|··············
|  Contract      ·  Method                ·  Min        ·  Max        ·  Avg        ·  # calls      ·  eur (avg)  │
·················|························|·············|·············|·············|···············|··············
|  Token         ·  approve               ·      46200  ·      46212  ·      46206  ·            4  ·          -  │
·················|························|·············|·············|·············|···············|··············
|  Token         ·  transfer              ·      34516  ·      51616  ·      46486  ·           10  ·          -  │
·················|························|·············|·············|·············|···············|··············
|  Vault         ·  deposit               ·          -  ·          -  ·      71022  ·            2  ·          -  │
·················|························|·············|·············|·············|···············|··············
|  Deployments                            ·                                         ·  % of limit   ·             │
··········································|·············|·············|·············|···············|··············
|  Token                                  ·          -  ·          -  ·     735678  ·        2.5 %  ·          -  │
··········································|·············|·············|·············|···············|··············
|  Vault                                  ·          -  ·          -  ·    1204511  ·          4 %  ·          -  │
·-----------------------------------------|-------------|-------------|-------------|---------------|-------------·
"#;

fn parse(input: &str) -> Report {
    Report::parse(input.as_bytes()).expect("Always valid")
}

#[test]
fn flatten_columns() {
    assert_eq!(
        line::flatten("│ Foo · bar · 123 │"),
        vec!["Foo".to_owned(), "bar".to_owned(), "123".to_owned()]
    );
}

#[test]
fn flatten_keeps_inner_spaces() {
    assert_eq!(
        line::flatten("│ foo · bar · hello world │\n"),
        vec!["foo".to_owned(), "bar".to_owned(), "hello world".to_owned()]
    );
}

#[test]
fn flatten_without_separator() {
    assert_eq!(
        line::flatten("|  Methods        │"),
        vec!["Methods".to_owned()]
    );
}

#[test]
fn flatten_separator_row() {
    assert!(line::flatten("·········|··········|·········").is_empty());
    assert!(line::flatten("").is_empty());
}

#[test]
fn flatten_drops_empty_columns() {
    assert_eq!(
        line::flatten("|  Deployments  ·        ·  % of limit  ·   │"),
        vec!["Deployments".to_owned(), "% of limit".to_owned()]
    );
}

#[test]
fn state_transitions() {
    assert_eq!(
        State::Header.transition("| Contract · Method |"),
        Some(State::Methods)
    );
    assert_eq!(State::Header.transition("| Deployments |"), None);
    assert_eq!(
        State::Methods.transition("| Deployments |"),
        Some(State::Deployments)
    );
    assert_eq!(State::Methods.transition("| Contract |"), None);
    assert_eq!(State::Deployments.transition("| Contract |"), None);
    assert_eq!(State::Deployments.transition("| Deployments |"), None);
}

#[test]
fn ok() {
    let report = parse(REPORT);

    assert_eq!(
        report.methods.keys().collect::<Vec<_>>(),
        vec!["Token.approve", "Token.transfer", "Vault.deposit"]
    );
    assert_eq!(
        report.methods.get("Token.transfer"),
        Some(&Method {
            contract: "Token".to_owned(),
            method: "transfer".to_owned(),
            min: "34516".to_owned(),
            max: "51616".to_owned(),
            avg: "46486".to_owned(),
            calls: "10".to_owned(),
            avgeur: "-".to_owned(),
        })
    );

    assert_eq!(
        report.deployments.keys().collect::<Vec<_>>(),
        vec!["Token", "Vault"]
    );
    assert_eq!(
        report.deployments.get("Token"),
        Some(&Deployment {
            contract: "Token".to_owned(),
            min: "-".to_owned(),
            max: "-".to_owned(),
            avg: "735678".to_owned(),
            pctg: "2.5 %".to_owned(),
            avgeur: "-".to_owned(),
        })
    );
}

#[test]
fn marker_line_is_not_a_record() {
    let report = parse("| Contract · Method · Min · Max · Avg · # calls · eur |\n");
    assert!(report.is_empty());
}

#[test]
fn header_rows_are_ignored() {
    let report = parse("| A · foo · 1 · 2 · 3 · 4 · 5 |\n| Deployments |\n| A · 1 · 2 · 3 · 4 · 5 |\n");
    assert!(report.is_empty());
}

#[test]
fn arity_mismatch_is_skipped() {
    let input = r#"| Contract |
| A · six · 1 · 2 · 3 · 4 |
| A · eight · 1 · 2 · 3 · 4 · 5 · 6 |
| A · seven · 1 · 2 · 3 · 4 · 5 |
| Deployments |
| B · 1 · 2 · 3 · 4 |
| C · 1 · 2 · 3 · 4 · 5 · 6 |
| D · 1 · 2 · 3 · 4 · 5 |
"#;
    let report = parse(input);

    assert_eq!(report.methods.keys().collect::<Vec<_>>(), vec!["A.seven"]);
    assert_eq!(report.deployments.keys().collect::<Vec<_>>(), vec!["D"]);
}

#[test]
fn deployments_marker_is_not_a_record() {
    let input = "| Contract |\n| Deployments · a · b · c · d · e · f |\n";
    let report = parse(input);
    assert!(report.is_empty());
}

#[test]
fn methods_table_may_mention_contract() {
    let input = "| Contract |\n| Contract · foo · 1 · 2 · 3 · 4 · 5 |\n";
    let report = parse(input);
    assert!(report.methods.contains_key("Contract.foo"));
}

#[test]
fn last_duplicate_wins() {
    let input = r#"| Contract |
| A · foo · 1 · 2 · 100 · 4 · - |
| A · foo · 1 · 2 · 200 · 4 · - |
| Deployments |
| A · 1 · 2 · 300 · 4 · - |
| A · 1 · 2 · 400 · 4 · - |
"#;
    let report = parse(input);

    assert_eq!(report.methods.len(), 1);
    assert_eq!(report.methods["A.foo"].avg, "200");
    assert_eq!(report.deployments.len(), 1);
    assert_eq!(report.deployments["A"].avg, "400");
}

#[test]
fn truncated_report() {
    let input = "| Contract |\n| A · foo · 1 · 2 · 100 · 4 · - |\n";
    let report = parse(input);

    assert_eq!(report.methods.len(), 1);
    assert!(report.deployments.is_empty());
}

#[test]
fn no_tables() {
    let report = parse("Nothing to see here\n\n");
    assert!(report.is_empty());
}

#[test]
fn invalid_utf8_is_an_error() {
    let input: &[u8] = b"| Contract |\n\xff\xfe\n";
    assert!(Report::parse(input).is_err());
}

#[test]
fn missing_file() {
    let path = std::path::Path::new("definitely/not/a/gas/report.txt");
    let error = Report::try_from(path).expect_err("Must fail");
    assert!(matches!(error, super::error::Error::Opening { .. }));
}

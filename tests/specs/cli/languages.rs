//! `timeago languages` specs

use crate::prelude::*;

#[test]
fn text_table() {
    cli().args(&["languages"]).passes().stdout_eq(
        "\
CODE  NAME        LAYOUT
en    English     2006-01-02
fr    French      02/01/2006
zh    Chinese     2006-01-02
pt    Portuguese  02-01-2006
de    German      02.01.2006
tr    Turkish     02/01/2006
ru    Russian     02.01.2006
es    Spanish     02/01/2006
Layouts are written as the date 2006-01-02 15:04:05.
",
    );
}

#[test]
fn json_lists_eight_languages() {
    let out = cli().args(&["languages", "-o", "json"]).passes().stdout();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 8);

    let exact: Vec<&str> = entries
        .iter()
        .filter(|e| e["exact"] == true)
        .map(|e| e["code"].as_str().unwrap())
        .collect();
    assert_eq!(exact, ["pt", "es"]);
}

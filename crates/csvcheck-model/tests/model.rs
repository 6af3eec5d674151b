use std::fs;

use csvcheck_model::{
    Announcement, ConfigError, DEFAULT_FILES, Diagnostic, FailurePolicy, RuleTable,
    ValidatorConfig,
};

#[test]
fn diagnostic_renders_missing_value_line() {
    let diagnostic = Diagnostic {
        file: "nodes_tags.csv",
        line: 3,
        column: "name:ID(Tag)",
    };
    assert_eq!(
        diagnostic.to_string(),
        "Invalid row in nodes_tags.csv at line 3: Missing value in column 'name:ID(Tag)'"
    );
}

#[test]
fn announcement_renders_validating_line() {
    assert_eq!(
        Announcement("nodes_files.csv").to_string(),
        "Validating nodes_files.csv..."
    );
}

#[test]
fn rule_file_with_explicit_file_order() {
    let json = r#"{
        "files": ["rels.csv", "nodes.csv", "extra.csv"],
        "rules": {
            "nodes.csv": ["id:ID", "name"],
            "rels.csv": [":START_ID", ":END_ID"]
        }
    }"#;
    let config = ValidatorConfig::from_rules_json(json).expect("parse rule file");
    assert_eq!(config.files, ["rels.csv", "nodes.csv", "extra.csv"]);
    let planned: Vec<(&str, Vec<&str>)> = config
        .planned_files()
        .map(|(file, columns)| (file, columns.iter().map(String::as_str).collect()))
        .collect();
    assert_eq!(
        planned,
        vec![
            ("rels.csv", vec![":START_ID", ":END_ID"]),
            ("nodes.csv", vec!["id:ID", "name"]),
        ]
    );
    assert_eq!(config.failure_policy, FailurePolicy::Abort);
}

#[test]
fn rule_file_without_files_uses_rule_keys() {
    let json = r#"{ "rules": { "b.csv": ["x"], "a.csv": ["y"] } }"#;
    let config = ValidatorConfig::from_rules_json(json).expect("parse rule file");
    assert_eq!(config.files, ["a.csv", "b.csv"]);
}

#[test]
fn rule_file_rejects_unknown_fields() {
    let json = r#"{ "rules": {}, "strict": true }"#;
    assert!(ValidatorConfig::from_rules_json(json).is_err());
}

#[test]
fn from_rules_file_reports_read_and_parse_errors() {
    let dir = tempfile::tempdir().expect("temp dir");

    let missing = dir.path().join("missing.json");
    let error = ValidatorConfig::from_rules_file(&missing).expect_err("missing file");
    assert!(matches!(error, ConfigError::Read { .. }));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").expect("write rule file");
    let error = ValidatorConfig::from_rules_file(&broken).expect_err("broken file");
    assert!(matches!(error, ConfigError::Parse { .. }));
    assert!(error.to_string().contains("broken.json"));
}

#[test]
fn from_rules_file_loads_rules() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("rules.json");
    fs::write(&path, r#"{ "rules": { "nodes_tags.csv": ["name:ID(Tag)"] } }"#)
        .expect("write rule file");

    let config = ValidatorConfig::from_rules_file(&path).expect("load rule file");
    let expected = RuleTable::new().with_rule("nodes_tags.csv", ["name:ID(Tag)"]);
    assert_eq!(config.rules, expected);
    assert_eq!(config.files, ["nodes_tags.csv"]);
}

#[test]
fn default_config_matches_default_files() {
    let config = ValidatorConfig::default();
    assert_eq!(config.files, DEFAULT_FILES);
}

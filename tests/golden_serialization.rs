use pkgsel_core::selection::{current_platform, priority, ConfigError};
use pkgsel_core::types::SelectorReport;
use pkgsel_core::{MetadataValue, PackageRecord, ResolveConfig, VersionComparison, VersionDiff};

const CATALOG_JSON: &str = r#"[
  {
    "name": "hello-2.10",
    "system": "x86_64-linux",
    "metadata": {
      "priority": "10",
      "maintainers": ["alice", "bob"],
      "description": "A program that produces a familiar, friendly greeting"
    }
  },
  {
    "name": "hello-2.9",
    "metadata": { "priority": 5 }
  },
  { "name": "world-1.0" }
]"#;

#[test]
fn golden_records_load_from_json() {
    let records: Vec<PackageRecord> = serde_json::from_str(CATALOG_JSON).unwrap();
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.name, "hello-2.10");
    assert_eq!(first.system, "x86_64-linux");
    assert_eq!(first.metadata.get("priority"), Some(&MetadataValue::String("10".into())));
    assert_eq!(
        first.metadata.get("maintainers"),
        Some(&MetadataValue::List(vec!["alice".into(), "bob".into()]))
    );
    assert_eq!(priority(first), 10);

    assert_eq!(records[1].system, "");
    assert_eq!(records[1].metadata.get("priority"), Some(&MetadataValue::Int(5)));
    assert_eq!(priority(&records[1]), 5);

    assert_eq!(records[2].metadata.iter().count(), 0);
    assert_eq!(priority(&records[2]), 0);
}

#[test]
fn golden_record_serialization() {
    let mut record = PackageRecord::new("hello-2.10", "x86_64-linux");
    record.metadata.insert_int("priority", 3);
    record.metadata.insert_list("platforms", ["x86_64-linux"]);

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json,
        r#"{"name":"hello-2.10","system":"x86_64-linux","metadata":{"platforms":["x86_64-linux"],"priority":3}}"#
    );

    let back: PackageRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn golden_version_comparison_serialization() {
    let greater = VersionComparison {
        diff: VersionDiff::Greater,
        version: Some("2.5".into()),
    };
    assert_eq!(
        serde_json::to_string(&greater).unwrap(),
        r#"{"diff":"greater","version":"2.5"}"#
    );
    assert_eq!(
        serde_json::to_string(&VersionComparison::unavailable()).unwrap(),
        r#"{"diff":"unavailable","version":null}"#
    );
}

#[test]
fn golden_selector_report_serialization() {
    let report = SelectorReport {
        selector: "hello".into(),
        hits: 2,
    };
    assert_eq!(
        serde_json::to_string(&report).unwrap(),
        r#"{"selector":"hello","hits":2}"#
    );
}

#[test]
fn config_loads_from_json() {
    let config = ResolveConfig::from_json(r#"{"newest_only": true, "platform": "aarch64-darwin"}"#).unwrap();
    assert!(config.newest_only);
    assert_eq!(config.platform, "aarch64-darwin");

    let defaults = ResolveConfig::from_json("{}").unwrap();
    assert!(!defaults.newest_only);
    assert_eq!(defaults.platform, current_platform());

    let err = ResolveConfig::from_json(r#"{"newest_only": "yes"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("invalid resolver configuration"));
}

#[test]
fn config_serialization_is_stable() {
    let config = ResolveConfig::new("x86_64-linux").with_newest_only(true);
    assert_eq!(
        serde_json::to_string(&config).unwrap(),
        r#"{"newest_only":true,"platform":"x86_64-linux"}"#
    );
}

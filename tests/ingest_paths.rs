
use _fixtures::{pair, sample_rollup, sample_rollup_json, Pair};
use record_wire::config::IngestConfig;
use record_wire::hex::InvalidHex;
use record_wire::ingest::{
    ingest_trusted, ingest_trusted_str, ingest_validated, ingest_validated_with, ViolationKind,
};
use record_wire::records::{GasRecord, RollupInput};
use serde_json::{json, Value};

fn without(mut value: Value, path: &[&str]) -> Value {
    let (last, parents) = path.split_last().expect("non-empty path");
    let mut cursor = &mut value;
    for key in parents {
        cursor = cursor.get_mut(*key).expect("parent exists");
    }
    cursor.as_object_mut().expect("object").remove(*last);
    value
}

#[test]
fn both_paths_accept_well_formed_input() {
    let value = sample_rollup_json();
    let validated: RollupInput = ingest_validated(&value).unwrap();
    let trusted: RollupInput = ingest_trusted(value).unwrap();
    assert_eq!(validated, sample_rollup());
    assert_eq!(trusted, sample_rollup());
}

#[test]
fn structured_form_uses_hex_strings() {
    let value = serde_json::to_value(pair()).unwrap();
    assert_eq!(value, json!({ "a": 42, "b": "deadbeef" }));
    let parsed: Pair = ingest_validated(&json!({ "a": 42, "b": "0xDEADBEEF" })).unwrap();
    assert_eq!(parsed, pair());
}

#[test]
fn missing_required_field_diverges() {
    let value = without(sample_rollup_json(), &["gas", "gas_limit"]);

    let err = ingest_validated::<RollupInput>(&value).unwrap_err();
    assert_eq!(err.record, "rollup_input");
    assert_eq!(err.at("gas.gas_limit"), Some(&ViolationKind::Missing));

    let err = ingest_trusted::<RollupInput>(value).unwrap_err();
    assert_eq!(err.record, "rollup_input");
    assert!(err.reason.contains("gas_limit"), "{}", err.reason);
}

#[test]
fn missing_optional_field_is_absent_on_both_paths() {
    let value = without(sample_rollup_json(), &["gas", "priority_fee"]);
    let validated: RollupInput = ingest_validated(&value).unwrap();
    let trusted: RollupInput = ingest_trusted(value).unwrap();
    assert_eq!(validated.gas.priority_fee, None);
    assert_eq!(trusted.gas.priority_fee, None);

    let explicit_null: GasRecord = ingest_validated(&json!({
        "gas_used": 1,
        "gas_limit": 2,
        "base_fee": 3,
        "priority_fee": null,
        "refunded": true,
    }))
    .unwrap();
    assert_eq!(explicit_null.priority_fee, None);
}

#[test]
fn validated_ingest_reports_every_violation() {
    let value = json!({
        "batch_index": -1,
        "prev_state_root": "zz",
        "new_state_root": "0102",
        "tx_count": 4_294_967_296u64,
        "gas": {
            "gas_used": 1,
            "gas_limit": 2,
            "base_fee": "7",
            "refunded": null,
        },
        "proof": 5,
        "tx_data": "c0ffee",
        "extra": true,
    });

    let err = ingest_validated::<RollupInput>(&value).unwrap_err();
    assert!(matches!(
        err.at("batch_index"),
        Some(ViolationKind::WrongType { found: "negative integer", .. })
    ));
    assert!(matches!(
        err.at("prev_state_root"),
        Some(ViolationKind::InvalidHex(InvalidHex::InvalidCharacter { character: 'z', .. }))
    ));
    assert_eq!(
        err.at("new_state_root"),
        Some(&ViolationKind::WrongLength {
            expected: 32,
            actual: 2,
        })
    );
    assert_eq!(
        err.at("tx_count"),
        Some(&ViolationKind::OutOfRange {
            value: 4_294_967_296,
            max: u64::from(u32::MAX),
        })
    );
    assert!(matches!(
        err.at("gas.base_fee"),
        Some(ViolationKind::WrongType { found: "string", .. })
    ));
    assert_eq!(err.at("gas.refunded"), Some(&ViolationKind::UnexpectedNull));
    assert!(matches!(
        err.at("proof"),
        Some(ViolationKind::WrongType { found: "unsigned integer", .. })
    ));
    assert_eq!(err.at("extra"), Some(&ViolationKind::UnknownField));
    assert_eq!(err.violations.len(), 8);
    assert!(!err.mentions("tx_data"));
    assert!(err.to_string().contains("8 violation(s)"));
}

#[test]
fn record_invariants_only_run_on_validated_path() {
    let mut value = sample_rollup_json();
    value["gas"]["gas_used"] = json!(40_000);
    value["proof"]["commitment"]["leaf_count"] = json!(0);

    let err = ingest_validated::<RollupInput>(&value).unwrap_err();
    assert!(matches!(err.at("gas.gas_used"), Some(ViolationKind::Constraint(_))));
    assert!(matches!(
        err.at("proof.commitment.leaf_count"),
        Some(ViolationKind::Constraint(_))
    ));
    assert_eq!(err.violations.len(), 2);

    let trusted: RollupInput = ingest_trusted(value).unwrap();
    assert_eq!(trusted.gas.gas_used, 40_000);
}

#[test]
fn blob_limit_comes_from_config() {
    let value = sample_rollup_json();
    let config = IngestConfig::from_toml_str("max_blob_bytes = 4").unwrap();
    let err = ingest_validated_with::<RollupInput>(&value, &config).unwrap_err();
    assert_eq!(
        err.at("proof.proof"),
        Some(&ViolationKind::TooLong { max: 4, actual: 12 })
    );
    assert!(!err.mentions("tx_data"));
}

#[test]
fn non_object_root_is_reported_at_root() {
    let err = ingest_validated::<Pair>(&json!([42, "deadbeef"])).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert!(matches!(err.at(""), Some(ViolationKind::WrongType { found: "array", .. })));
}

#[test]
fn trusted_path_checks_types_but_not_unknown_keys() {
    let parsed: Pair = ingest_trusted_str(r#"{"a": 42, "b": "deadbeef", "note": "ignored"}"#).unwrap();
    assert_eq!(parsed, pair());

    let err = ingest_trusted_str::<Pair>(r#"{"a": "42", "b": "deadbeef"}"#).unwrap_err();
    assert_eq!(err.record, "pair");

    let err = ingest_trusted::<Pair>(json!({ "a": 42, "b": "dead" })).unwrap_err();
    assert!(err.reason.contains("expected 4 bytes"), "{}", err.reason);
}

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::config::IngestConfig;
use crate::field::FieldType;
use crate::hex;
use crate::record::{FieldSpec, Record, RecordSchema};

use super::violation::{join_path, Violation, ViolationKind};

/// Validated ingest rejected a value; every violation found is listed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "`{record}` failed validation with {} violation(s): {}",
    .violations.len(),
    summarize(.violations)
)]
pub struct SchemaValidationError {
    /// Record type requested.
    pub record: &'static str,
    /// All violations, in field order.
    pub violations: Vec<Violation>,
}

impl SchemaValidationError {
    /// Whether any violation is reported at exactly `path`.
    pub fn mentions(&self, path: &str) -> bool {
        self.violations.iter().any(|violation| violation.path == path)
    }

    /// The violation reported at `path`, if any.
    pub fn at(&self, path: &str) -> Option<&ViolationKind> {
        self.violations
            .iter()
            .find(|violation| violation.path == path)
            .map(|violation| &violation.kind)
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Builds a record from an untrusted structured value using default limits.
///
/// This is the only path allowed for input that crosses a trust boundary:
/// user-provided JSON, network payloads, or persisted files read back after
/// external tooling may have touched them.
pub fn ingest_validated<R: Record>(value: &Value) -> Result<R, SchemaValidationError> {
    ingest_validated_with(value, &IngestConfig::default())
}

/// Builds a record from an untrusted structured value.
///
/// Every field is checked against the record schema (presence, JSON type,
/// integer range, hex syntax, byte length, payload limit, unknown keys) and
/// then the record invariants run. All violations are collected before
/// failing.
pub fn ingest_validated_with<R: Record>(
    value: &Value,
    config: &IngestConfig,
) -> Result<R, SchemaValidationError> {
    let schema = R::schema();
    let mut violations = Vec::new();
    check_record(schema, value, "", config, &mut violations);

    if violations.is_empty() {
        match R::deserialize(value) {
            Ok(record) => {
                record.check_fields("", &mut violations);
                if violations.is_empty() {
                    return Ok(record);
                }
            }
            // The schema walk accepts exactly what the serde shape accepts;
            // reaching here means the two drifted.
            Err(err) => violations.push(Violation::constraint("", err.to_string())),
        }
    }

    debug!(
        record = schema.name,
        violations = violations.len(),
        "validated ingest rejected input"
    );
    Err(SchemaValidationError {
        record: schema.name,
        violations,
    })
}

fn check_record(
    schema: &RecordSchema,
    value: &Value,
    path: &str,
    config: &IngestConfig,
    violations: &mut Vec<Violation>,
) {
    let Some(map) = value.as_object() else {
        violations.push(Violation::new(
            path,
            ViolationKind::WrongType {
                expected: format!("{} object", schema.name),
                found: json_kind(value),
            },
        ));
        return;
    };

    for spec in schema.fields {
        check_field(spec, map, path, config, violations);
    }

    for key in map.keys() {
        if schema.field(key).is_none() {
            violations.push(Violation::new(join_path(path, key), ViolationKind::UnknownField));
        }
    }
}

fn check_field(
    spec: &FieldSpec,
    map: &Map<String, Value>,
    path: &str,
    config: &IngestConfig,
    violations: &mut Vec<Violation>,
) {
    let field_path = join_path(path, spec.name);
    match map.get(spec.name) {
        None if !spec.nullable => violations.push(Violation::new(field_path, ViolationKind::Missing)),
        Some(Value::Null) if !spec.nullable => {
            violations.push(Violation::new(field_path, ViolationKind::UnexpectedNull))
        }
        None | Some(Value::Null) => {}
        Some(value) => check_value(&spec.ty, value, &field_path, config, violations),
    }
}

fn check_value(
    ty: &FieldType,
    value: &Value,
    path: &str,
    config: &IngestConfig,
    violations: &mut Vec<Violation>,
) {
    let wrong_type = |expected: String| {
        Violation::new(
            path,
            ViolationKind::WrongType {
                expected,
                found: json_kind(value),
            },
        )
    };

    match *ty {
        FieldType::Uint { width } => match value.as_u64() {
            None => violations.push(wrong_type(ty.describe())),
            Some(number) => {
                let max = uint_max(width);
                if number > max {
                    violations.push(Violation::new(
                        path,
                        ViolationKind::OutOfRange { value: number, max },
                    ));
                }
            }
        },
        FieldType::Bool => {
            if !value.is_boolean() {
                violations.push(wrong_type(ty.describe()));
            }
        }
        FieldType::FixedBytes { len } => {
            if let Some(bytes) = hex_field(value, path, violations, &wrong_type, ty) {
                if bytes.len() != len {
                    violations.push(Violation::new(
                        path,
                        ViolationKind::WrongLength {
                            expected: len,
                            actual: bytes.len(),
                        },
                    ));
                }
            }
        }
        FieldType::Blob => {
            if let Some(bytes) = hex_field(value, path, violations, &wrong_type, ty) {
                if bytes.len() > config.max_blob_bytes {
                    violations.push(Violation::new(
                        path,
                        ViolationKind::TooLong {
                            max: config.max_blob_bytes,
                            actual: bytes.len(),
                        },
                    ));
                }
            }
        }
        FieldType::Record(schema) => check_record(schema(), value, path, config, violations),
    }
}

fn hex_field(
    value: &Value,
    path: &str,
    violations: &mut Vec<Violation>,
    wrong_type: &dyn Fn(String) -> Violation,
    ty: &FieldType,
) -> Option<Vec<u8>> {
    let Some(text) = value.as_str() else {
        violations.push(wrong_type(format!("{} hex string", ty.describe())));
        return None;
    };
    match hex::from_hex(text) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            violations.push(Violation::new(path, ViolationKind::InvalidHex(err)));
            None
        }
    }
}

fn uint_max(width: usize) -> u64 {
    if width >= 8 {
        u64::MAX
    } else {
        (1u64 << (width * 8)) - 1
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(number) if number.is_u64() => "unsigned integer",
        Value::Number(number) if number.is_i64() => "negative integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! User data snapshot — the caller-supplied field map progress is computed from.

use std::io::Read;

use serde_json::{Map, Value};

use crate::error::SnapshotError;

/// Field whose presence means "explicitly marked completed", not "non-empty".
pub const ONBOARDING_STATUS_FIELD: &str = "onboardingStatus";
/// The only value of [`ONBOARDING_STATUS_FIELD`] that counts as present.
pub const ONBOARDING_STATUS_COMPLETED: &str = "completed";

/// An untyped view of a user record.
///
/// Any field may be absent, null, empty, or populated. Anything that is not a
/// JSON object is treated as an empty record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSnapshot {
    fields: Map<String, Value>,
}

impl UserSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an arbitrary JSON value. Non-objects become an empty snapshot.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Parse a JSON document. Only syntax errors fail.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value))
    }

    /// Read a JSON document from a file, stdin, or any other reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, SnapshotError> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json_str(&buf)
    }

    /// Set a field, returning the snapshot for chaining.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether `field` counts as filled in.
    ///
    /// `onboardingStatus` must equal `"completed"`. Every other field must be
    /// neither absent, null, nor `""`; `0`, `false` and containers are present.
    pub fn is_present(&self, field: &str) -> bool {
        let Some(value) = self.fields.get(field) else {
            return false;
        };
        if field == ONBOARDING_STATUS_FIELD {
            return value.as_str() == Some(ONBOARDING_STATUS_COMPLETED);
        }
        match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }
}

impl From<Value> for UserSnapshot {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for UserSnapshot {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_null_and_empty_string_are_absent() {
        let s = UserSnapshot::from_value(json!({ "a": null, "b": "" }));
        assert!(!s.is_present("a"));
        assert!(!s.is_present("b"));
        assert!(!s.is_present("c"));
    }

    #[test]
    fn falsy_but_valid_values_are_present() {
        let s = UserSnapshot::from_value(json!({
            "zero": 0,
            "no": false,
            "obj": {},
            "list": [],
            "space": " ",
        }));
        for field in ["zero", "no", "obj", "list", "space"] {
            assert!(s.is_present(field), "{field} should be present");
        }
    }

    #[test]
    fn onboarding_status_requires_completed_literal() {
        let pending = UserSnapshot::new().with(ONBOARDING_STATUS_FIELD, "pending");
        assert!(!pending.is_present(ONBOARDING_STATUS_FIELD));

        let upper = UserSnapshot::new().with(ONBOARDING_STATUS_FIELD, "COMPLETED");
        assert!(!upper.is_present(ONBOARDING_STATUS_FIELD));

        let truthy = UserSnapshot::new().with(ONBOARDING_STATUS_FIELD, true);
        assert!(!truthy.is_present(ONBOARDING_STATUS_FIELD));

        let done = UserSnapshot::new().with(ONBOARDING_STATUS_FIELD, "completed");
        assert!(done.is_present(ONBOARDING_STATUS_FIELD));
    }

    #[test]
    fn non_object_json_is_an_empty_snapshot() {
        for value in [json!(null), json!(42), json!("email"), json!([1, 2])] {
            assert!(UserSnapshot::from_value(value).is_empty());
        }
    }

    #[test]
    fn from_json_str_rejects_only_bad_syntax() {
        assert!(UserSnapshot::from_json_str("{not json").is_err());
        let s = UserSnapshot::from_json_str(r#"{"email": "a@b.com"}"#).unwrap();
        assert!(s.is_present("email"));
        assert!(UserSnapshot::from_json_str("[]").unwrap().is_empty());
    }

    #[test]
    fn from_reader_reads_whole_document() {
        let s = UserSnapshot::from_reader(&br#"{"password": "x"}"#[..]).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("password"), Some(&json!("x")));
    }
}

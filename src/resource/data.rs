//! Resource Data - read-only field access over a parsed manifest
//!
//! `ResourceData` wraps the `spec` of one managed-resource manifest together
//! with the context the ingestion pipeline supplies (type, address, default
//! region). Every getter is total: missing or malformed fields degrade to the
//! caller's default instead of failing.

use serde_json::Value;

/// A value read from a manifest, plus whether the default had to be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup<T> {
    pub value: T,
    pub defaulted: bool,
}

impl<T> Lookup<T> {
    fn found(value: T) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            defaulted: true,
        }
    }
}

/// Typed, path-addressed view over one manifest
#[derive(Debug, Clone)]
pub struct ResourceData {
    resource_type: String,
    address: String,
    default_region: String,
    raw: Value,
}

impl ResourceData {
    pub fn new(
        resource_type: impl Into<String>,
        address: impl Into<String>,
        raw: Value,
        default_region: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            address: address.into(),
            default_region: default_region.into(),
            raw,
        }
    }

    /// Provider/API-group qualified type, e.g. `rds.aws.upbound.io/Cluster`
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Opaque address used to correlate records in reports
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Walk a dot-notation path. Numeric segments index into arrays.
    pub fn get_value(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(&self.raw);
        }

        let mut current = &self.raw;
        for part in path.split('.') {
            current = match current {
                Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                _ => current.get(part)?,
            };
        }
        Some(current)
    }

    /// Field as text, or an empty string when the path is missing
    pub fn get(&self, path: &str) -> String {
        self.get_value(path).map(value_to_string).unwrap_or_default()
    }

    pub fn get_string_with_source(&self, path: &str, default: &str) -> Lookup<String> {
        let value = self.get(path);
        if value.is_empty() {
            tracing::debug!("{}: '{}' not set, using {:?}", self.address, path, default);
            Lookup::fallback(default.to_string())
        } else {
            Lookup::found(value)
        }
    }

    pub fn get_string_or_default(&self, path: &str, default: &str) -> String {
        self.get_string_with_source(path, default).value
    }

    pub fn get_int64_with_source(&self, path: &str, default: i64) -> Lookup<i64> {
        let parsed = match self.get_value(path) {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        match parsed {
            Some(v) => Lookup::found(v),
            None => {
                if self.get_value(path).is_some_and(|v| !is_empty(v)) {
                    tracing::debug!(
                        "{}: ignoring non-integer value at '{}', using {}",
                        self.address,
                        path,
                        default
                    );
                }
                Lookup::fallback(default)
            }
        }
    }

    /// Integer field; malformed values are treated as absent
    pub fn get_int64_or_default(&self, path: &str, default: i64) -> i64 {
        self.get_int64_with_source(path, default).value
    }

    /// Boolean field; accepts JSON booleans and "true"/"false" strings
    pub fn get_bool_or_default(&self, path: &str, default: bool) -> bool {
        match self.get_value(path) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => true,
            Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => false,
            _ => default,
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(raw: Value) -> ResourceData {
        ResourceData::new("test.io/Thing", "test.io/Thing.sample", raw, "us-east-1")
    }

    #[test]
    fn test_get_nested_path() {
        let d = data(json!({"forProvider": {"region": "eu-west-2"}}));
        assert_eq!(d.get("forProvider.region"), "eu-west-2");
        assert_eq!(d.get("forProvider.missing"), "");
        assert_eq!(d.get("region"), "");
    }

    #[test]
    fn test_get_renders_scalars() {
        let d = data(json!({"a": 3, "b": true, "c": null, "d": [1, 2]}));
        assert_eq!(d.get("a"), "3");
        assert_eq!(d.get("b"), "true");
        assert_eq!(d.get("c"), "");
        assert_eq!(d.get("d"), "[1,2]");
    }

    #[test]
    fn test_get_array_index() {
        let d = data(json!({"tags": [{"key": "env"}, {"key": "team"}]}));
        assert_eq!(d.get("tags.1.key"), "team");
        assert_eq!(d.get("tags.5.key"), "");
        assert_eq!(d.get("tags.first.key"), "");
    }

    #[test]
    fn test_string_or_default() {
        let d = data(json!({"forProvider": {"engine": "", "mode": "serverless"}}));
        assert_eq!(d.get_string_or_default("forProvider.engine", "aurora"), "aurora");
        assert_eq!(d.get_string_or_default("forProvider.mode", "provisioned"), "serverless");
        assert_eq!(d.get_string_or_default("forProvider.nope", ""), "");
    }

    #[test]
    fn test_string_with_source_flags_default() {
        let d = data(json!({"x": "set"}));
        assert!(!d.get_string_with_source("x", "d").defaulted);
        let missing = d.get_string_with_source("y", "d");
        assert!(missing.defaulted);
        assert_eq!(missing.value, "d");
    }

    #[test]
    fn test_int64_or_default() {
        let d = data(json!({"n": 7, "s": "14", "bad": "seven", "f": 1.5, "empty": ""}));
        assert_eq!(d.get_int64_or_default("n", 1), 7);
        assert_eq!(d.get_int64_or_default("s", 1), 14);
        assert_eq!(d.get_int64_or_default("missing", 0), 0);
        assert_eq!(d.get_int64_or_default("empty", 5), 5);
    }

    #[test]
    fn test_malformed_int_uses_default() {
        let d = data(json!({"bad": "seven", "f": 1.5, "obj": {"a": 1}}));
        assert_eq!(d.get_int64_or_default("bad", 1), 1);
        assert_eq!(d.get_int64_or_default("f", 2), 2);
        assert_eq!(d.get_int64_or_default("obj", 3), 3);
        assert!(d.get_int64_with_source("bad", 1).defaulted);
    }

    #[test]
    fn test_bool_or_default() {
        let d = data(json!({"a": true, "b": "FALSE", "c": "yes", "d": 1}));
        assert!(d.get_bool_or_default("a", false));
        assert!(!d.get_bool_or_default("b", true));
        assert!(d.get_bool_or_default("c", true));
        assert!(!d.get_bool_or_default("d", false));
        assert!(d.get_bool_or_default("missing", true));
    }

    #[test]
    fn test_context_accessors() {
        let d = data(json!({}));
        assert_eq!(d.resource_type(), "test.io/Thing");
        assert_eq!(d.address(), "test.io/Thing.sample");
        assert_eq!(d.default_region(), "us-east-1");
    }
}

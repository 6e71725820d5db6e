//! JSON encoding of JavaScript regular expressions
//!
//! Bundler options such as `external` accept `RegExp` values. Configs travel
//! through JSON, so a regex is carried as `{"regex": "<source>", "flags": "<flags>"}`.

use serde_json::{Value, json};

/// Key that marks an object as a pattern value.
pub const PATTERN_KEY: &str = "regex";

/// Build a pattern value with no flags.
pub fn pattern(source: &str) -> Value {
    pattern_with_flags(source, "")
}

/// Build a pattern value with flags.
pub fn pattern_with_flags(source: &str, flags: &str) -> Value {
    json!({ "regex": source, "flags": flags })
}

/// Whether `value` is a pattern value.
pub fn is_pattern(value: &Value) -> bool {
    as_pattern(value).is_some()
}

/// Split a pattern value into `(source, flags)`.
///
/// Missing flags read as empty.
pub fn as_pattern(value: &Value) -> Option<(&str, &str)> {
    let obj = value.as_object()?;
    let source = obj.get(PATTERN_KEY)?.as_str()?;
    let flags = match obj.get("flags") {
        None => "",
        Some(flags) => flags.as_str()?,
    };
    Some((source, flags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_round_trip() {
        let value = pattern_with_flags("^node:", "i");
        assert_eq!(as_pattern(&value), Some(("^node:", "i")));
    }

    #[test]
    fn test_flags_optional() {
        let value = json!({ "regex": "node_modules" });
        assert_eq!(as_pattern(&value), Some(("node_modules", "")));
    }

    #[test]
    fn test_plain_objects_are_not_patterns() {
        assert!(!is_pattern(&json!({ "source": "x" })));
        assert!(!is_pattern(&json!({ "regex": 1 })));
        assert!(!is_pattern(&json!("node_modules")));
    }
}

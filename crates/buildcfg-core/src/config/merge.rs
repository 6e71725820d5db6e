//! Precedence-ordered deep merge of JSON config values

use buildcfg_meta::pattern;
use serde_json::{Map, Value};

/// Merge `higher` over `lower`, returning a new value.
///
/// - `null` in `higher` is unset and leaves `lower` in place
/// - two objects merge key by key under the same rule
/// - anything else from `higher` replaces `lower` outright, so arrays
///   are never concatenated and pattern values are never split apart
pub fn merge_with_precedence(higher: &Value, lower: &Value) -> Value {
    match (higher, lower) {
        (Value::Null, _) => without_nulls(lower),
        (Value::Object(high), Value::Object(low)) if !pattern::is_pattern(higher) => {
            let mut merged = strip_nulls(low);
            for (key, value) in high {
                if value.is_null() {
                    continue;
                }
                let combined = match merged.get(key) {
                    Some(existing) => merge_with_precedence(value, existing),
                    None => without_nulls(value),
                };
                merged.insert(key.clone(), combined);
            }
            Value::Object(merged)
        }
        _ => without_nulls(higher),
    }
}

/// Merge config layers given highest precedence first.
///
/// The result is always an object; layers that are not objects are skipped.
pub fn merge_layers<'a>(layers: impl IntoIterator<Item = &'a Value>) -> Value {
    layers
        .into_iter()
        .filter(|layer| layer.is_object())
        .fold(Value::Object(Map::new()), |acc, layer| {
            merge_with_precedence(&acc, layer)
        })
}

fn without_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) if !pattern::is_pattern(value) => Value::Object(strip_nulls(map)),
        other => other.clone(),
    }
}

fn strip_nulls(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.clone(), without_nulls(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_objects_merge() {
        let high = json!({ "rollup": { "emitCJS": true } });
        let low = json!({ "rollup": { "emitCJS": false, "inlineDependencies": false } });
        assert_eq!(
            merge_with_precedence(&high, &low),
            json!({ "rollup": { "emitCJS": true, "inlineDependencies": false } })
        );
    }

    #[test]
    fn test_arrays_replace() {
        let high = json!({ "format": ["esm"] });
        let low = json!({ "format": ["esm", "cjs"] });
        assert_eq!(merge_with_precedence(&high, &low), json!({ "format": ["esm"] }));
    }

    #[test]
    fn test_null_does_not_shadow() {
        let high = json!({ "minify": null, "dts": { "only": null } });
        let low = json!({ "minify": true });
        assert_eq!(
            merge_with_precedence(&high, &low),
            json!({ "minify": true, "dts": {} })
        );
    }

    #[test]
    fn test_pattern_replaces_object() {
        let high = json!({ "include": { "regex": "node_modules", "flags": "" } });
        let low = json!({ "include": { "extra": 1 } });
        assert_eq!(
            merge_with_precedence(&high, &low),
            json!({ "include": { "regex": "node_modules", "flags": "" } })
        );
    }

    #[test]
    fn test_merge_layers_skips_non_objects() {
        let layers = [json!({ "a": 1 }), json!(["x"]), json!({ "a": 2, "b": 3 })];
        assert_eq!(merge_layers(&layers), json!({ "a": 1, "b": 3 }));
    }
}

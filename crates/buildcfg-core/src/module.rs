//! Render config values as JavaScript source

use buildcfg_meta::pattern;
use serde_json::Value;

const INDENT: &str = "  ";

/// Render `config` as an ES module whose default export is the config.
pub fn render_module(config: &Value) -> String {
    format!("export default {};\n", render_value(config))
}

/// Render a JSON value as a JavaScript expression.
///
/// Output is indented like `JSON.stringify(value, null, 2)`; pattern values
/// become `new RegExp(source, flags)`.
pub fn render_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    if let Some((source, flags)) = pattern::as_pattern(value) {
        out.push_str("new RegExp(");
        out.push_str(&quote(source));
        if !flags.is_empty() {
            out.push_str(", ");
            out.push_str(&quote(flags));
        }
        out.push(')');
        return;
    }

    match value {
        Value::Array(items) if !items.is_empty() => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                newline(out, depth + 1);
                write_value(out, item, depth + 1);
            }
            newline(out, depth);
            out.push(']');
        }
        Value::Object(map) if !map.is_empty() => {
            out.push('{');
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                newline(out, depth + 1);
                out.push_str(&quote(key));
                out.push_str(": ");
                write_value(out, item, depth + 1);
            }
            newline(out, depth);
            out.push('}');
        }
        // Scalars and empty containers serialize the same in JSON and JS
        other => out.push_str(&other.to_string()),
    }
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn quote(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

//! Permissive schema validation for bundler configs
//!
//! Only recognized options are type-checked. Unknown keys pass through
//! untouched, and every offending field is reported rather than stopping
//! at the first problem.

use crate::Bundler;
use crate::pattern;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub const TSUP_FORMATS: &[&str] = &["esm", "cjs", "iife"];
pub const TSUP_PLATFORMS: &[&str] = &["node", "browser", "neutral"];
pub const UNBUILD_BUILDERS: &[&str] = &["rollup", "mkdist", "copy", "untyped"];
pub const UNBUILD_DECLARATION_MODES: &[&str] = &["compatible", "node16"];
pub const UNBUILD_ENTRY_FORMATS: &[&str] = &["esm", "cjs"];

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dot-joined path to the offending value (`rollup.emitCJS`, `entries.1.builder`).
    /// Empty for the config root.
    pub path: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "<root>: {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Outcome of validating one config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether an error was reported exactly at `path`.
    pub fn has_error_at(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }
}

/// Validate `config` against the option shape of `bundler`.
pub fn validate(config: &Value, bundler: Bundler) -> ValidationReport {
    match bundler {
        Bundler::Tsup => validate_tsup(config),
        Bundler::Unbuild => validate_unbuild(config),
    }
}

pub fn validate_tsup(config: &Value) -> ValidationReport {
    run(&tsup_schema(), config)
}

pub fn validate_unbuild(config: &Value) -> ValidationReport {
    run(&unbuild_schema(), config)
}

fn run(schema: &Shape, config: &Value) -> ValidationReport {
    let mut errors = Vec::new();
    check(schema, config, "", &mut errors);
    ValidationReport { errors }
}

#[derive(Debug, Clone)]
enum Shape {
    Any,
    Bool,
    Str,
    OneOf(&'static [&'static str]),
    Pattern,
    List(Box<Shape>),
    /// String-keyed record with uniform values
    Map(Box<Shape>),
    Object(Vec<Field>),
    Union(Vec<Shape>),
}

#[derive(Debug, Clone)]
struct Field {
    name: &'static str,
    shape: Shape,
    required: bool,
}

fn field(name: &'static str, shape: Shape) -> Field {
    Field {
        name,
        shape,
        required: false,
    }
}

fn required(name: &'static str, shape: Shape) -> Field {
    Field {
        name,
        shape,
        required: true,
    }
}

fn list(shape: Shape) -> Shape {
    Shape::List(Box::new(shape))
}

fn map(shape: Shape) -> Shape {
    Shape::Map(Box::new(shape))
}

fn string_or_pattern() -> Shape {
    Shape::Union(vec![Shape::Str, Shape::Pattern])
}

fn tsup_schema() -> Shape {
    use Shape::*;

    let entry = Union(vec![list(Str), map(Str)]);
    let format = OneOf(TSUP_FORMATS);

    Object(vec![
        field("name", Str),
        field("entry", entry.clone()),
        field("entryPoints", entry),
        field("format", Union(vec![format.clone(), list(format)])),
        field("outDir", Str),
        field("target", Union(vec![Str, list(Str)])),
        field("platform", OneOf(TSUP_PLATFORMS)),
        field(
            "dts",
            Union(vec![
                Bool,
                Str,
                Object(vec![
                    field("entry", Any),
                    field("resolve", Union(vec![Bool, list(string_or_pattern())])),
                    field("only", Bool),
                    field("banner", Str),
                    field("footer", Str),
                    field("compilerOptions", Any),
                ]),
            ]),
        ),
        field(
            "experimentalDts",
            Union(vec![
                Bool,
                Str,
                Object(vec![field("entry", Any), field("compilerOptions", Any)]),
            ]),
        ),
        field("sourcemap", Union(vec![Bool, OneOf(&["inline"])])),
        field("minify", Union(vec![Bool, OneOf(&["terser"])])),
        field("bundle", Bool),
        field("splitting", Bool),
        field("clean", Union(vec![Bool, list(Str)])),
        field("treeshake", Any),
        field("external", list(string_or_pattern())),
        field("noExternal", list(string_or_pattern())),
        field("skipNodeModulesBundle", Bool),
        field("keepNames", Bool),
        field(
            "watch",
            Union(vec![Bool, Str, list(Union(vec![Str, Bool]))]),
        ),
        field("ignoreWatch", Union(vec![list(Str), Str])),
        field("tsconfig", Str),
        field("shims", Bool),
        field("cjsInterop", Bool),
        field("removeNodeProtocol", Bool),
    ])
}

fn unbuild_schema() -> Shape {
    use Shape::*;

    let declaration = Union(vec![Bool, OneOf(UNBUILD_DECLARATION_MODES)]);
    let entry = Union(vec![
        Str,
        Object(vec![
            field("builder", OneOf(UNBUILD_BUILDERS)),
            required("input", Str),
            field("name", Str),
            field("outDir", Str),
            field("declaration", declaration.clone()),
            field("format", OneOf(UNBUILD_ENTRY_FORMATS)),
            field("ext", Str),
        ]),
    ]);

    Object(vec![
        field("name", Str),
        field("rootDir", Str),
        field("entries", list(entry)),
        field("outDir", Str),
        field("clean", Bool),
        field("declaration", declaration),
        field("sourcemap", Bool),
        field("stub", Bool),
        field("watch", Bool),
        field("parallel", Bool),
        field("externals", list(string_or_pattern())),
        field("alias", map(Str)),
        field("replace", map(Str)),
        field("failOnWarn", Bool),
        field(
            "rollup",
            Object(vec![
                field("emitCJS", Bool),
                field("cjsBridge", Bool),
                field("preserveDynamicImports", Bool),
                field(
                    "inlineDependencies",
                    Union(vec![Bool, list(string_or_pattern())]),
                ),
            ]),
        ),
    ])
}

impl Shape {
    /// Whether a value of this JSON kind could possibly satisfy the shape.
    fn accepts_kind(&self, value: &Value) -> bool {
        match self {
            Shape::Any => true,
            Shape::Bool => value.is_boolean(),
            Shape::Str | Shape::OneOf(_) => value.is_string(),
            Shape::Pattern | Shape::Map(_) | Shape::Object(_) => value.is_object(),
            Shape::List(_) => value.is_array(),
            Shape::Union(alts) => alts.iter().any(|alt| alt.accepts_kind(value)),
        }
    }

    fn is_container(&self) -> bool {
        matches!(self, Shape::List(_) | Shape::Map(_) | Shape::Object(_))
    }

    fn describe(&self) -> String {
        match self {
            Shape::Any => "any value".to_string(),
            Shape::Bool => "boolean".to_string(),
            Shape::Str => "string".to_string(),
            Shape::OneOf(options) => options
                .iter()
                .map(|o| format!("\"{}\"", o))
                .collect::<Vec<_>>()
                .join(" | "),
            Shape::Pattern => "regex pattern".to_string(),
            Shape::List(inner) => format!("array of {}", inner.describe()),
            Shape::Map(inner) => format!("record of {}", inner.describe()),
            Shape::Object(_) => "object".to_string(),
            Shape::Union(alts) => alts
                .iter()
                .map(Shape::describe)
                .collect::<Vec<_>>()
                .join(" or "),
        }
    }
}

fn received(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

fn child_path(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", path, segment)
    }
}

fn push(errors: &mut Vec<FieldError>, path: &str, message: String) {
    errors.push(FieldError {
        path: path.to_string(),
        message,
    });
}

fn mismatch(errors: &mut Vec<FieldError>, path: &str, shape: &Shape, value: &Value) {
    push(
        errors,
        path,
        format!("expected {}, received {}", shape.describe(), received(value)),
    );
}

fn check(shape: &Shape, value: &Value, path: &str, errors: &mut Vec<FieldError>) {
    match shape {
        Shape::Any => {}
        Shape::Bool | Shape::Str => {
            if !shape.accepts_kind(value) {
                mismatch(errors, path, shape, value);
            }
        }
        Shape::OneOf(options) => match value.as_str() {
            Some(s) if options.contains(&s) => {}
            Some(s) => push(
                errors,
                path,
                format!("invalid value \"{}\", expected {}", s, shape.describe()),
            ),
            None => mismatch(errors, path, shape, value),
        },
        Shape::Pattern => {
            if !pattern::is_pattern(value) {
                mismatch(errors, path, shape, value);
            }
        }
        Shape::List(inner) => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    check(inner, item, &child_path(path, &index.to_string()), errors);
                }
            }
            None => mismatch(errors, path, shape, value),
        },
        Shape::Map(inner) => match value.as_object() {
            Some(entries) => {
                for (key, item) in entries {
                    check(inner, item, &child_path(path, key), errors);
                }
            }
            None => mismatch(errors, path, shape, value),
        },
        Shape::Object(fields) => match value.as_object() {
            Some(obj) => {
                for f in fields {
                    match obj.get(f.name) {
                        Some(v) => check(&f.shape, v, &child_path(path, f.name), errors),
                        None if f.required => push(
                            errors,
                            &child_path(path, f.name),
                            format!("required {} is missing", f.shape.describe()),
                        ),
                        None => {}
                    }
                }
            }
            None => mismatch(errors, path, shape, value),
        },
        Shape::Union(alts) => check_union(shape, alts, value, path, errors),
    }
}

/// Dispatch a union on the JSON kind of `value`.
///
/// When exactly one alternative can hold a value of that kind and it is a
/// container, its own errors are reported so paths point inside it
/// (`entries.0.builder` rather than `entries.0`).
fn check_union(
    shape: &Shape,
    alts: &[Shape],
    value: &Value,
    path: &str,
    errors: &mut Vec<FieldError>,
) {
    let candidates: Vec<&Shape> = alts.iter().filter(|alt| alt.accepts_kind(value)).collect();

    match candidates.as_slice() {
        [] => mismatch(errors, path, shape, value),
        [only] if only.is_container() => check(only, value, path, errors),
        _ => {
            let matched = candidates.iter().any(|alt| {
                let mut scratch = Vec::new();
                check(alt, value, path, &mut scratch);
                scratch.is_empty()
            });
            if !matched {
                mismatch(errors, path, shape, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_describe_union() {
        let shape = Shape::Union(vec![Shape::Bool, Shape::OneOf(UNBUILD_DECLARATION_MODES)]);
        assert_eq!(shape.describe(), "boolean or \"compatible\" | \"node16\"");
    }

    #[test]
    fn test_union_message_mentions_all_alternatives() {
        let report = validate_unbuild(&json!({ "declaration": "invalid" }));
        let err = &report.errors()[0];
        assert_eq!(err.path, "declaration");
        assert!(err.message.contains("boolean"), "got: {}", err.message);
        assert!(err.message.contains("\"compatible\""), "got: {}", err.message);
        assert!(err.message.contains("\"invalid\""), "got: {}", err.message);
    }

    #[test]
    fn test_non_object_root_is_reported() {
        let report = validate_tsup(&json!(["src/index.ts"]));
        assert!(!report.is_valid());
        assert!(report.has_error_at(""));
        assert!(report.errors()[0].to_string().starts_with("<root>"));
    }

    #[test]
    fn test_child_path() {
        assert_eq!(child_path("", "rollup"), "rollup");
        assert_eq!(child_path("rollup", "emitCJS"), "rollup.emitCJS");
    }
}

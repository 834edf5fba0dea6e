//! Shared coercion runtime.
//!
//! Annotated classes coerce raw input through four named helpers emitted
//! once into a runtime module. [`Coercion::apply`] mirrors each helper so
//! the contract can be exercised from Rust:
//!
//! - `null`, `undefined` (`None`) and `''` yield `null`
//! - number helpers parse with `parseFloat` rules, so `"3px"` is `3` and a
//!   value without a numeric prefix is NaN
//! - boolean helpers yield `true` only for `'true'` or `true`; any other
//!   non-blank value is `false`, not `null`
//! - array helpers map every element with the scalar rule and yield `null`
//!   when the input is not an array

use crate::config::CompilerConfig;
use crate::output::GeneratedFile;
use declforge_schema::NativeType;
use serde_json::Value;

/// A registered coercion helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coercion {
    /// Scalar decimal coercion.
    Number,
    /// Per-element decimal coercion.
    NumberArray,
    /// Scalar boolean coercion.
    Boolean,
    /// Per-element boolean coercion.
    BooleanArray,
}

/// All helpers, in runtime file order.
pub const ALL_COERCIONS: [Coercion; 4] = [
    Coercion::Number,
    Coercion::NumberArray,
    Coercion::Boolean,
    Coercion::BooleanArray,
];

/// Result of applying a coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    /// No value.
    Null,
    /// Decimal value, possibly NaN.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
    /// Per-element results.
    Array(Vec<Coerced>),
}

impl Coerced {
    /// Returns true for [`Coerced::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Coercion {
    /// Selects the helper for a native type, if it needs one.
    ///
    /// Strings pass through untouched.
    #[must_use]
    pub const fn for_native(native: NativeType, array: bool) -> Option<Self> {
        match (native, array) {
            (NativeType::Number, false) => Some(Self::Number),
            (NativeType::Number, true) => Some(Self::NumberArray),
            (NativeType::Boolean, false) => Some(Self::Boolean),
            (NativeType::Boolean, true) => Some(Self::BooleanArray),
            (NativeType::String, _) => None,
        }
    }

    /// Returns the exported helper name.
    #[must_use]
    pub const fn helper_name(&self) -> &'static str {
        match self {
            Self::Number => "transformNumber",
            Self::NumberArray => "transformNumberArray",
            Self::Boolean => "transformBoolean",
            Self::BooleanArray => "transformBooleanArray",
        }
    }

    /// Returns the TypeScript source of the helper.
    #[must_use]
    pub fn ts_function(&self) -> String {
        let name = self.helper_name();
        match self {
            Self::Number => format!(
                "export function {name}(param?: any): number | null {{\n  \
                 return isBlank(param?.value) ? null : parseFloat(param.value);\n}}\n"
            ),
            Self::NumberArray => format!(
                "export function {name}(param?: any): (number | null)[] | null {{\n  \
                 if (!Array.isArray(param?.value)) {{\n    return null;\n  }}\n  \
                 return param.value.map((value: any) => (isBlank(value) ? null : parseFloat(value)));\n}}\n"
            ),
            Self::Boolean => format!(
                "export function {name}(param?: any): boolean | null {{\n  \
                 return isBlank(param?.value) ? null : toBoolean(param.value);\n}}\n"
            ),
            Self::BooleanArray => format!(
                "export function {name}(param?: any): (boolean | null)[] | null {{\n  \
                 if (!Array.isArray(param?.value)) {{\n    return null;\n  }}\n  \
                 return param.value.map((value: any) => (isBlank(value) ? null : toBoolean(value)));\n}}\n"
            ),
        }
    }

    /// Applies the helper to a decoded input value; `None` is `undefined`.
    #[must_use]
    pub fn apply(&self, input: Option<&Value>) -> Coerced {
        match self {
            Self::Number => coerce_scalar(input, to_number),
            Self::Boolean => coerce_scalar(input, to_boolean),
            Self::NumberArray => coerce_array(input, to_number),
            Self::BooleanArray => coerce_array(input, to_boolean),
        }
    }
}

fn is_blank(input: Option<&Value>) -> bool {
    match input {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn coerce_scalar(input: Option<&Value>, convert: fn(&Value) -> Coerced) -> Coerced {
    match input {
        Some(value) if !is_blank(input) => convert(value),
        _ => Coerced::Null,
    }
}

fn coerce_array(input: Option<&Value>, convert: fn(&Value) -> Coerced) -> Coerced {
    match input {
        Some(Value::Array(values)) => Coerced::Array(
            values
                .iter()
                .map(|value| coerce_scalar(Some(value), convert))
                .collect(),
        ),
        _ => Coerced::Null,
    }
}

fn to_number(value: &Value) -> Coerced {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_float(s),
        _ => f64::NAN,
    };
    Coerced::Number(number)
}

fn to_boolean(value: &Value) -> Coerced {
    let flag = match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        _ => false,
    };
    Coerced::Boolean(flag)
}

/// Parses the longest decimal prefix of a string, `parseFloat` style.
///
/// Returns NaN when no prefix is a number.
#[must_use]
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < len && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        digits += frac - end - 1;
        if digits > 0 {
            end = frac;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < len && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_start = exp;
        while exp < len && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > exp_start {
            end = exp;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Returns the full TypeScript source of the runtime module.
#[must_use]
pub fn runtime_source() -> String {
    let mut output = String::new();

    output.push_str("export function isBlank(value: any): boolean {\n");
    output.push_str("  return value === null || value === undefined || value === '';\n");
    output.push_str("}\n\n");

    output.push_str("function toBoolean(value: any): boolean {\n");
    output.push_str("  return value === 'true' || (typeof value === 'boolean' && value);\n");
    output.push_str("}\n");

    for coercion in ALL_COERCIONS {
        output.push('\n');
        output.push_str(&coercion.ts_function());
    }

    output
}

/// Returns the runtime module as a generated file.
#[must_use]
pub fn runtime_file(config: &CompilerConfig) -> GeneratedFile {
    GeneratedFile::new(
        config.with_extension_suffix(&config.runtime_path()),
        runtime_source(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn number(result: Coerced) -> f64 {
        match result {
            Coerced::Number(n) => n,
            other => panic!("expected number, got {other:?}"),
        }
    }

    #[test]
    fn test_for_native() {
        assert_eq!(
            Coercion::for_native(NativeType::Number, true),
            Some(Coercion::NumberArray)
        );
        assert_eq!(
            Coercion::for_native(NativeType::Boolean, false),
            Some(Coercion::Boolean)
        );
        assert_eq!(Coercion::for_native(NativeType::String, true), None);
    }

    #[test]
    fn test_blank_inputs_yield_null() {
        for coercion in [Coercion::Number, Coercion::Boolean] {
            assert!(coercion.apply(None).is_null());
            assert!(coercion.apply(Some(&Value::Null)).is_null());
            assert!(coercion.apply(Some(&json!(""))).is_null());
        }
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(number(Coercion::Number.apply(Some(&json!("12.5")))), 12.5);
        assert_eq!(number(Coercion::Number.apply(Some(&json!(7)))), 7.0);
        assert_eq!(number(Coercion::Number.apply(Some(&json!("3px")))), 3.0);
        assert!(number(Coercion::Number.apply(Some(&json!("abc")))).is_nan());
        assert!(number(Coercion::Number.apply(Some(&json!(true)))).is_nan());
    }

    #[test]
    fn test_boolean_coercion() {
        assert_eq!(
            Coercion::Boolean.apply(Some(&json!("true"))),
            Coerced::Boolean(true)
        );
        assert_eq!(
            Coercion::Boolean.apply(Some(&json!(true))),
            Coerced::Boolean(true)
        );
        assert_eq!(
            Coercion::Boolean.apply(Some(&json!(false))),
            Coerced::Boolean(false)
        );
        assert_eq!(
            Coercion::Boolean.apply(Some(&json!("yes"))),
            Coerced::Boolean(false)
        );
    }

    #[test]
    fn test_array_coercion_maps_elements() {
        let input = json!(["1", "", null, 2]);
        assert_eq!(
            Coercion::NumberArray.apply(Some(&input)),
            Coerced::Array(vec![
                Coerced::Number(1.0),
                Coerced::Null,
                Coerced::Null,
                Coerced::Number(2.0),
            ])
        );

        let flags = json!(["true", false, ""]);
        assert_eq!(
            Coercion::BooleanArray.apply(Some(&flags)),
            Coerced::Array(vec![
                Coerced::Boolean(true),
                Coerced::Boolean(false),
                Coerced::Null,
            ])
        );
    }

    #[test]
    fn test_array_coercion_rejects_non_arrays() {
        assert!(Coercion::NumberArray.apply(Some(&json!("1"))).is_null());
        assert!(Coercion::BooleanArray.apply(None).is_null());
        assert_eq!(
            Coercion::NumberArray.apply(Some(&json!([]))),
            Coerced::Array(Vec::new())
        );
    }

    #[test]
    fn test_parse_float_prefixes() {
        assert_eq!(parse_float("  42"), 42.0);
        assert_eq!(parse_float("-1.5e3x"), -1500.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn test_runtime_source_exports_every_helper() {
        let source = runtime_source();
        for coercion in ALL_COERCIONS {
            assert!(source.contains(&format!("export function {}(", coercion.helper_name())));
        }
        assert!(source.contains("value === ''"));
    }

    #[test]
    fn test_runtime_file_path() {
        let file = runtime_file(&CompilerConfig::default());
        assert_eq!(file.filename, "./ts-schema/runtime/transform.ts");
    }
}

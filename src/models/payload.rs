use serde_json::Value;

/// Opaque JSON as it will be written to the data column.
///
/// The service never looks inside a payload once it passed the presence
/// check, so it is held as serialized JSON text rather than a typed value.
#[derive(Debug, Clone)]
pub struct Payload(String);

impl Payload {
    pub fn from_value(value: &Value) -> Self {
        Payload(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whether a submitted value counts as missing: `null`, `""`, `false` or `0`.
/// Empty objects and arrays are present.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Backslash-escape `\`, `"` and `'`.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '"' | '\'') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Apply [`escape_text`] to string payloads; anything else is returned as is.
pub fn escape_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(escape_text(&s)),
        other => other,
    }
}

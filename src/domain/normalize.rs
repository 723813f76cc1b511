//! Document Normalizer.
//!
//! Stored documents are loosely schematized: fields may be missing, null, or
//! hold the wrong type (numbers stored as strings are common in the legacy
//! data). `normalize` converts one stored document into the complete fixed
//! field set of its schema variant, substituting type-appropriate defaults,
//! so the read path never fails over malformed historical data.

use crate::domain::variant::{FieldKind, SchemaVariant};
use serde_json::{Map, Number, Value as JsonValue};

/// Interprets a stored value as a float, absorbing every failure into `0.0`.
fn safe_float(value: Option<&JsonValue>) -> f64 {
    match value {
        Some(JsonValue::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn float_value(v: f64) -> JsonValue {
    // Non-finite floats have no JSON representation; degrade like any other
    // unusable value.
    match Number::from_f64(v) {
        Some(n) => JsonValue::Number(n),
        None => JsonValue::Number(Number::from_f64(0.0).unwrap_or_else(|| 0.into())),
    }
}

/// Converts one stored document (plus its store-assigned id) into a fully
/// populated record for its variant.
///
/// Pure and infallible: every recognized field comes out present and typed,
/// unrecognized stored fields are dropped, and no input can make it panic
/// or error.
pub fn normalize(id: &str, doc: &JsonValue) -> JsonValue {
    let variant = SchemaVariant::of_document(doc);
    let mut out = Map::new();
    out.insert("_id".to_string(), JsonValue::from(id));
    out.insert(
        SchemaVariant::CATEGORY_FIELD.to_string(),
        JsonValue::from(variant.category()),
    );
    for (name, kind) in variant.fields() {
        let value = doc.get(name);
        let normalized = match kind {
            // Present values (even non-strings or nulls) pass through as-is.
            FieldKind::Text => value.cloned().unwrap_or_else(|| JsonValue::from("")),
            FieldKind::Number => float_value(safe_float(value)),
            FieldKind::Bool => value.cloned().unwrap_or(JsonValue::Bool(false)),
            FieldKind::Raw => value.cloned().unwrap_or(JsonValue::Null),
        };
        out.insert((*name).to_string(), normalized);
    }
    JsonValue::Object(out)
}

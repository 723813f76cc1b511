//! Schema variants for motor documents.
//!
//! The service has shipped two endpoint families with different field sets
//! (and inconsistent spellings, e.g. `lengthOWire` vs `lengthOfTheWire`).
//! Rather than forcing one rigid record shape over both, each family is a
//! variant with its own fixed field table, discriminated by the `category`
//! field stored on every document. The normalizer fills exactly the selected
//! variant's field set, so the wire shape of each family is preserved.

use serde_json::Value as JsonValue;

/// How a field is typed in the normalized response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Defaults to `""` when absent; present values pass through unchanged,
    /// even non-strings (historical consumers may rely on either shape).
    Text,
    /// Coerced to a float; anything non-numeric becomes `0.0`.
    Number,
    /// Defaults to `false` when absent; no truthiness coercion of present values.
    Bool,
    /// Copied verbatim, `null` when absent.
    Raw,
}

/// One endpoint family's record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    /// The original `/add_New_Motore/` family.
    Motore,
    /// The successor family with the winding ("mobina") measurements.
    Mobina,
}

const MOTORE_FIELDS: &[(&str, FieldKind)] = &[
    ("ownerName", FieldKind::Text),
    ("velocity1", FieldKind::Number),
    ("velocity2", FieldKind::Number),
    ("ability1", FieldKind::Number),
    ("ability2", FieldKind::Number),
    ("weight", FieldKind::Number),
    ("ble1", FieldKind::Text),
    ("ble2", FieldKind::Text),
    ("notes", FieldKind::Text),
    ("division", FieldKind::Number),
    ("motorDiameter1", FieldKind::Number),
    ("motorDiameter2", FieldKind::Number),
    ("lengthOWire", FieldKind::Number),
    ("numberOfSewers", FieldKind::Number),
    ("type", FieldKind::Text),
];

const MOBINA_FIELDS: &[(&str, FieldKind)] = &[
    ("ownerName", FieldKind::Text),
    ("velocity1", FieldKind::Number),
    ("velocity2", FieldKind::Number),
    ("ability1", FieldKind::Number),
    ("ability2", FieldKind::Number),
    ("weight", FieldKind::Number),
    ("ble1", FieldKind::Text),
    ("ble2", FieldKind::Text),
    ("notes", FieldKind::Text),
    ("division", FieldKind::Number),
    ("divisionMobina", FieldKind::Text),
    ("motorDiameter1", FieldKind::Number),
    ("motorDiameter2", FieldKind::Number),
    ("lengthOfTheWire", FieldKind::Number),
    ("numberOfSewers", FieldKind::Number),
    ("numberOfTurns", FieldKind::Raw),
    ("step", FieldKind::Text),
    ("wireThickness", FieldKind::Text),
    ("lengthOfMobina", FieldKind::Number),
    ("diameterOfMobina", FieldKind::Number),
    ("weightMobina", FieldKind::Number),
    ("velocityMobina", FieldKind::Number),
    ("abilityMobina", FieldKind::Number),
    ("numberOfSewersMobina", FieldKind::Number),
    ("wrappedCountry", FieldKind::Bool),
    ("waterpump", FieldKind::Bool),
    ("type", FieldKind::Text),
];

impl SchemaVariant {
    /// Name of the discriminator field stored on every document.
    pub const CATEGORY_FIELD: &'static str = "category";

    pub fn category(&self) -> &'static str {
        match self {
            SchemaVariant::Motore => "motore",
            SchemaVariant::Mobina => "mobina",
        }
    }

    pub fn from_category(category: &str) -> Option<Self> {
        match category {
            "motore" => Some(SchemaVariant::Motore),
            "mobina" => Some(SchemaVariant::Mobina),
            _ => None,
        }
    }

    /// Variant of a stored document. Documents written before the
    /// discriminator existed carry no `category` and read as `Motore`.
    pub fn of_document(doc: &JsonValue) -> Self {
        doc.get(Self::CATEGORY_FIELD)
            .and_then(JsonValue::as_str)
            .and_then(Self::from_category)
            .unwrap_or(SchemaVariant::Motore)
    }

    /// The variant's fixed field table, in response order.
    pub fn fields(&self) -> &'static [(&'static str, FieldKind)] {
        match self {
            SchemaVariant::Motore => MOTORE_FIELDS,
            SchemaVariant::Mobina => MOBINA_FIELDS,
        }
    }

    /// First declared field absent from `body`, for the strict insert
    /// contract (an explicit `null` counts as present).
    pub fn first_missing_field(&self, body: &JsonValue) -> Option<&'static str> {
        self.fields()
            .iter()
            .map(|(name, _)| *name)
            .find(|name| body.get(name).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_without_category_reads_as_motore() {
        assert_eq!(
            SchemaVariant::of_document(&json!({"ownerName": "a"})),
            SchemaVariant::Motore
        );
    }

    #[test]
    fn category_field_selects_variant() {
        assert_eq!(
            SchemaVariant::of_document(&json!({"category": "mobina"})),
            SchemaVariant::Mobina
        );
        // Unknown categories fall back rather than fail.
        assert_eq!(
            SchemaVariant::of_document(&json!({"category": "unknown"})),
            SchemaVariant::Motore
        );
    }

    #[test]
    fn first_missing_field_reports_declaration_order() {
        let body = json!({"ownerName": "a", "velocity1": 1});
        assert_eq!(
            SchemaVariant::Motore.first_missing_field(&body),
            Some("velocity2")
        );
    }

    #[test]
    fn explicit_null_counts_as_present() {
        let mut body = serde_json::Map::new();
        for (name, _) in SchemaVariant::Mobina.fields() {
            body.insert((*name).to_string(), serde_json::Value::Null);
        }
        let body = JsonValue::Object(body);
        assert_eq!(SchemaVariant::Mobina.first_missing_field(&body), None);
    }
}

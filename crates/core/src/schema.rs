//! Field schemas for inbound entity payloads.
//!
//! A [`Schema`] lists every field of an entity with its primitive kind and
//! whether clients may write it. [`Schema::load`] turns an arbitrary JSON
//! value into a normalized object that contains only known, writable fields,
//! each coerced to its canonical JSON type. The normalized object is then
//! deserialized into the typed create/update DTO with [`Schema::load_into`].
//!
//! Coercion is lenient in the same places a form-style client expects:
//! numeric strings are accepted for numbers, and integral floats (`1979.0`)
//! are accepted for integers. Booleans are never numbers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

use crate::error::CoreError;

/// Primitive type of a single schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `INTEGER` column.
    Int32,
    /// `BIGINT` column, used for identifiers and foreign keys.
    Int64,
    /// `DOUBLE PRECISION` column. Only finite values are accepted.
    Float,
    /// `VARCHAR(max_len)` column.
    Text { max_len: usize },
}

/// One field of an entity schema.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Read-only fields are emitted on output but silently dropped on input.
    pub read_only: bool,
}

impl Field {
    pub const fn read_only(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            read_only: true,
        }
    }

    pub const fn writable(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            read_only: false,
        }
    }
}

/// The full field list of one entity.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Entity name used in error messages (e.g. `"Movie"`).
    pub entity: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of every field, read-only ones included, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Validate and normalize an inbound payload.
    ///
    /// Unknown and read-only keys are dropped. Every remaining key is coerced
    /// to its field kind; `null` passes through unchanged. Fields absent from
    /// `input` stay absent in the result, which is what lets partial-update
    /// DTOs tell "not sent" apart from "sent as null".
    pub fn load(&self, input: &Value) -> Result<Map<String, Value>, CoreError> {
        let object = input.as_object().ok_or_else(|| {
            CoreError::Validation(format!("{} payload must be a JSON object", self.entity))
        })?;

        let mut normalized = Map::new();
        for (key, value) in object {
            let Some(field) = self.field(key) else {
                continue;
            };
            if field.read_only {
                continue;
            }
            normalized.insert(key.clone(), coerce(field, value)?);
        }
        Ok(normalized)
    }

    /// [`load`](Self::load) followed by deserialization into a typed DTO.
    pub fn load_into<T: DeserializeOwned>(&self, input: &Value) -> Result<T, CoreError> {
        let normalized = self.load(input)?;
        serde_json::from_value(Value::Object(normalized)).map_err(|e| {
            CoreError::Internal(format!(
                "{} DTO does not match its schema: {e}",
                self.entity
            ))
        })
    }
}

/// Serde helper for partial-update fields typed `Option<Option<T>>`.
///
/// Combined with `#[serde(default)]`, an absent key yields `None`, an explicit
/// `null` yields `Some(None)` and a value yields `Some(Some(v))`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn coerce(field: &Field, value: &Value) -> Result<Value, CoreError> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    let invalid = |what: &str| CoreError::Validation(format!("{}: not a valid {what}", field.name));

    match field.kind {
        FieldKind::Int32 => coerce_integer(value)
            .and_then(|n| i32::try_from(n).ok())
            .map(Value::from)
            .ok_or_else(|| invalid("integer")),
        FieldKind::Int64 => coerce_integer(value)
            .map(Value::from)
            .ok_or_else(|| invalid("integer")),
        FieldKind::Float => coerce_float(value)
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| invalid("number")),
        FieldKind::Text { max_len } => match value {
            Value::String(s) if s.chars().count() > max_len => Err(CoreError::Validation(
                format!("{}: longer than {max_len} characters", field.name),
            )),
            Value::String(s) if s.contains('\0') => Err(CoreError::Validation(format!(
                "{}: contains a NUL character",
                field.name
            ))),
            Value::String(_) => Ok(value.clone()),
            _ => Err(invalid("string")),
        },
    }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
            (f.fract() == 0.0 && in_range).then_some(f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_float(value: &Value) -> Option<f64> {
    let f = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    f.is_finite().then_some(f)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    const TEST_SCHEMA: Schema = Schema {
        entity: "Film",
        fields: &[
            Field::read_only("id", FieldKind::Int64),
            Field::writable("title", FieldKind::Text { max_len: 5 }),
            Field::writable("year", FieldKind::Int32),
            Field::writable("rating", FieldKind::Float),
            Field::writable("owner_id", FieldKind::Int64),
        ],
    };

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "present")]
        title: Option<Option<String>>,
        #[serde(default, deserialize_with = "present")]
        year: Option<Option<i32>>,
    }

    #[test]
    fn drops_unknown_and_read_only_fields() {
        let out = TEST_SCHEMA
            .load(&json!({"id": 7, "title": "Alien", "bogus": true}))
            .unwrap();
        assert_eq!(Value::Object(out), json!({"title": "Alien"}));
    }

    #[test]
    fn keeps_native_types() {
        let out = TEST_SCHEMA
            .load(&json!({"year": 1979, "rating": 8.4, "owner_id": 3}))
            .unwrap();
        assert_eq!(
            Value::Object(out),
            json!({"year": 1979, "rating": 8.4, "owner_id": 3})
        );
    }

    #[test]
    fn coerces_numeric_strings() {
        let out = TEST_SCHEMA
            .load(&json!({"year": " 1979 ", "rating": "8.5"}))
            .unwrap();
        assert_eq!(out["year"], json!(1979));
        assert_eq!(out["rating"], json!(8.5));
    }

    #[test]
    fn accepts_integral_float_for_integer() {
        let out = TEST_SCHEMA.load(&json!({"year": 1979.0})).unwrap();
        assert_eq!(out["year"], json!(1979));
    }

    #[test]
    fn rejects_fractional_float_for_integer() {
        let err = TEST_SCHEMA.load(&json!({"year": 1979.5})).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "year: not a valid integer");
    }

    #[test]
    fn rejects_non_numeric_string_for_integer() {
        let err = TEST_SCHEMA.load(&json!({"year": "nineteen"})).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn rejects_out_of_range_int32() {
        let err = TEST_SCHEMA.load(&json!({"year": 3_000_000_000_i64})).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn rejects_booleans_for_numbers() {
        assert!(TEST_SCHEMA.load(&json!({"year": true})).is_err());
        assert!(TEST_SCHEMA.load(&json!({"rating": false})).is_err());
    }

    #[test]
    fn rejects_non_finite_float_strings() {
        assert!(TEST_SCHEMA.load(&json!({"rating": "NaN"})).is_err());
        assert!(TEST_SCHEMA.load(&json!({"rating": "inf"})).is_err());
    }

    #[test]
    fn rejects_numbers_for_text() {
        let err = TEST_SCHEMA.load(&json!({"title": 42})).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "title: not a valid string");
    }

    #[test]
    fn rejects_text_over_max_len() {
        let err = TEST_SCHEMA.load(&json!({"title": "Aliens"})).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("longer than 5"));
    }

    #[test]
    fn rejects_nul_in_text() {
        let err = TEST_SCHEMA.load(&json!({"title": "Al\u{0}en"})).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "title: contains a NUL character");
    }

    #[test]
    fn max_len_counts_characters_not_bytes() {
        assert!(TEST_SCHEMA.load(&json!({"title": "Амели"})).is_ok());
    }

    #[test]
    fn passes_null_through() {
        let out = TEST_SCHEMA.load(&json!({"year": null})).unwrap();
        assert_eq!(out["year"], Value::Null);
    }

    #[test]
    fn rejects_non_object_payload() {
        let err = TEST_SCHEMA.load(&json!(["title"])).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("Film"));
    }

    #[test]
    fn tracks_presence_in_partial_dto() {
        let patch: Patch = TEST_SCHEMA.load_into(&json!({"year": null})).unwrap();
        assert_eq!(patch.title, None);
        assert_eq!(patch.year, Some(None));

        let patch: Patch = TEST_SCHEMA.load_into(&json!({"title": "Heat"})).unwrap();
        assert_eq!(patch.title, Some(Some("Heat".to_string())));
        assert_eq!(patch.year, None);
    }

    #[test]
    fn field_names_include_read_only() {
        let names: Vec<_> = TEST_SCHEMA.field_names().collect();
        assert_eq!(names, ["id", "title", "year", "rating", "owner_id"]);
    }
}

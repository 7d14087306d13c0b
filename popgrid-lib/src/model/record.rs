//! Dynamic table row

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::Value;
use crate::error::FieldError;
use crate::error::Result;

/// A dynamic table row.
///
/// Records hold field values as a key-ordered map of [`Value`]s, so a table
/// never assumes a fixed schema. Typed getter methods provide safe access with
/// proper error handling.
///
/// A record serializes as a plain JSON object.
///
/// # Example
///
/// ```
/// use popgrid_lib::model::Record;
///
/// let row = Record::new()
///     .set("label", "United States")
///     .set("value", 331_893_745i64);
///
/// assert_eq!(row.get_str("label").unwrap(), Some("United States"));
/// assert_eq!(row.get_i64("value").unwrap(), Some(331_893_745));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a single record from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a list of records from a JSON array of objects.
    pub fn list_from_json_str(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field value or a [`FieldError::Missing`].
    pub fn require(&self, field: &str) -> std::result::Result<&Value, FieldError> {
        self.fields.get(field).ok_or_else(|| FieldError::missing(field))
    }

    /// Iterates over field values in key order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    // =========================================================================
    // Typed getters
    //
    // A missing field and a null both read as `Ok(None)`; a value of the wrong
    // type is an error.
    // =========================================================================

    /// Gets a string field.
    pub fn get_str(&self, field: &str) -> std::result::Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(FieldError::type_mismatch(field, "string", other.type_name())),
        }
    }

    /// Gets an integer field.
    pub fn get_i64(&self, field: &str) -> std::result::Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Int(v)) => Ok(Some(*v)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets a numeric field, widening integers.
    pub fn get_f64(&self, field: &str) -> std::result::Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| FieldError::type_mismatch(field, "float", value.type_name())),
        }
    }

    /// Gets a boolean field.
    pub fn get_bool(&self, field: &str) -> std::result::Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(v)) => Ok(Some(*v)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

//! Value enum for cursor cells

use serde::Deserialize;
use serde::Serialize;

use crate::error::CursorError;

/// A single cell read off a cursor row.
///
/// Variants mirror the SQLite storage classes, so any row a
/// [`SqliteCursor`](crate::SqliteCursor) produces maps onto them without loss.
///
/// | Storage class | Rust Variant |
/// |---------------|--------------|
/// | NULL | `Null` |
/// | INTEGER | `Integer` |
/// | REAL | `Real` |
/// | TEXT | `Text` |
/// | BLOB | `Blob` |
///
/// # Example
///
/// ```
/// use cursor_adapter::Value;
///
/// let id = Value::from(42i64);
/// let title = Value::from("Groceries");
/// let done = Value::from(false);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Real(f64),
    /// String value.
    Text(String),
    /// Raw bytes.
    Blob(Vec<u8>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
        }
    }
}

impl From<rusqlite::types::ValueRef<'_>> for Value {
    fn from(v: rusqlite::types::ValueRef<'_>) -> Self {
        use rusqlite::types::ValueRef;
        match v {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(f) => Value::Real(f),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

// =============================================================================
// Typed extraction
// =============================================================================

/// Conversion from a cell [`Value`] into a concrete Rust type.
///
/// `column` is only used to build the error message.
pub trait FromValue: Sized {
    /// Name used in type mismatch errors.
    const TYPE_NAME: &'static str;

    fn from_value(value: Value, column: &str) -> Result<Self, CursorError>;
}

fn mismatch<T: FromValue>(value: &Value, column: &str) -> CursorError {
    CursorError::type_mismatch(column, T::TYPE_NAME, value.type_name())
}

impl FromValue for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn from_value(value: Value, column: &str) -> Result<Self, CursorError> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(mismatch::<Self>(&other, column)),
        }
    }
}

impl FromValue for i32 {
    const TYPE_NAME: &'static str = "integer";

    fn from_value(value: Value, column: &str) -> Result<Self, CursorError> {
        match value {
            Value::Integer(i) => i32::try_from(i).map_err(|_| mismatch::<Self>(&value, column)),
            other => Err(mismatch::<Self>(&other, column)),
        }
    }
}

impl FromValue for f64 {
    const TYPE_NAME: &'static str = "real";

    fn from_value(value: Value, column: &str) -> Result<Self, CursorError> {
        match value {
            Value::Real(f) => Ok(f),
            Value::Integer(i) => Ok(i as f64),
            other => Err(mismatch::<Self>(&other, column)),
        }
    }
}

impl FromValue for bool {
    const TYPE_NAME: &'static str = "bool";

    // SQLite has no boolean type; booleans are stored as 0/1 integers.
    fn from_value(value: Value, column: &str) -> Result<Self, CursorError> {
        match value {
            Value::Integer(i) => Ok(i != 0),
            other => Err(mismatch::<Self>(&other, column)),
        }
    }
}

impl FromValue for String {
    const TYPE_NAME: &'static str = "text";

    fn from_value(value: Value, column: &str) -> Result<Self, CursorError> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(mismatch::<Self>(&other, column)),
        }
    }
}

impl FromValue for Vec<u8> {
    const TYPE_NAME: &'static str = "blob";

    fn from_value(value: Value, column: &str) -> Result<Self, CursorError> {
        match value {
            Value::Blob(b) => Ok(b),
            other => Err(mismatch::<Self>(&other, column)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;

    fn from_value(value: Value, column: &str) -> Result<Self, CursorError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other, column).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_extraction() {
        assert_eq!(i64::from_value(Value::Integer(7), "n").unwrap(), 7);
        assert_eq!(i32::from_value(Value::Integer(-3), "n").unwrap(), -3);
        assert!(bool::from_value(Value::Integer(1), "flag").unwrap());
        assert!(!bool::from_value(Value::Integer(0), "flag").unwrap());
    }

    #[test]
    fn test_i32_overflow_is_mismatch() {
        let err = i32::from_value(Value::Integer(i64::MAX), "n").unwrap_err();
        assert!(matches!(err, CursorError::TypeMismatch { .. }));
    }

    #[test]
    fn test_type_mismatch_names_column() {
        let err = i64::from_value(Value::from("abc"), "_id").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("_id"));
        assert!(msg.contains("expected integer"));
        assert!(msg.contains("got text"));
    }

    #[test]
    fn test_option_maps_null() {
        assert_eq!(Option::<String>::from_value(Value::Null, "s").unwrap(), None);
        assert_eq!(
            Option::<String>::from_value(Value::from("x"), "s").unwrap(),
            Some("x".to_string())
        );
        assert!(String::from_value(Value::Null, "s").is_err());
    }

    #[test]
    fn test_real_accepts_integer() {
        assert_eq!(f64::from_value(Value::Integer(2), "r").unwrap(), 2.0);
    }

    #[test]
    fn test_serialize_untagged() {
        let json = serde_json::to_string(&vec![
            Value::Null,
            Value::Integer(1),
            Value::from("a"),
        ])
        .unwrap();
        assert_eq!(json, r#"[null,1,"a"]"#);
    }
}

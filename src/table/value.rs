//! Tagged cell values

use std::fmt;
use std::hash::{Hash, Hasher};

/// Markers that CSV and TSV readers treat as a missing cell
pub const MISSING_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "NULL", "null", "None", "<NA>", "#N/A",
];

/// A single cell of a [`RecordSet`](super::RecordSet)
///
/// The variant is chosen per cell when a file is parsed. Nothing is coerced
/// afterwards except by the explicit transformers.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
}

impl Value {
    /// Infer a value from raw delimited text
    ///
    /// Missing markers become [`Value::Null`], integers become [`Value::Int`],
    /// other numbers [`Value::Float`], and everything else stays text.
    ///
    /// # Example
    /// ```
    /// use employee_etl::table::Value;
    ///
    /// assert_eq!(Value::infer("42"), Value::Int(42));
    /// assert_eq!(Value::infer("1500.5"), Value::Float(1500.5));
    /// assert_eq!(Value::infer("NaN"), Value::Null);
    /// assert_eq!(Value::infer("Sales"), Value::Text("Sales".to_string()));
    /// ```
    pub fn infer(raw: &str) -> Self {
        if MISSING_MARKERS.contains(&raw) {
            return Value::Null;
        }
        if let Ok(int) = raw.parse::<i64>() {
            return Value::Int(int);
        }
        match raw.parse::<f64>() {
            Ok(float) if float.is_finite() => Value::Float(float),
            _ => Value::Text(raw.to_string()),
        }
    }

    pub fn text(raw: impl Into<String>) -> Self {
        Value::Text(raw.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Render the cell as text for a text column, `None` for a null cell
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

// Floats compare by bit pattern so NaN matches NaN when deduplicating.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Text(s) => s.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Text(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

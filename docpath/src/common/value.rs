use crate::collection::Document;
use chrono::{DateTime, SecondsFormat, Utc};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Compare two floats for equality with proper NaN handling.
#[inline]
fn num_eq_float(a: f64, b: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        true
    } else {
        a == b
    }
}

/// Compare two floats with proper NaN and total ordering.
#[inline]
fn num_cmp_float(a: f64, b: f64) -> Ordering {
    // NaN sorts before every other number
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Compares an integer against a float without rounding the integer.
///
/// NaN sorts before every number, matching [num_cmp_float].
fn num_cmp_int_float(int: i64, float: f64) -> Ordering {
    // 2^63, the first float above i64::MAX
    const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return Ordering::Greater;
    }
    if float >= I64_UPPER {
        return Ordering::Less;
    }
    if float < -I64_UPPER {
        return Ordering::Greater;
    }

    // exact: the truncated float lies in [i64::MIN, i64::MAX]
    let integral = float.trunc();
    match int.cmp(&(integral as i64)) {
        Ordering::Equal => {
            let fraction = float - integral;
            if fraction > 0.0 {
                Ordering::Less
            } else if fraction < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        other => other,
    }
}

/// Represents a [Document] field value.
///
/// The variant set mirrors what hierarchical document databases store: scalars,
/// timestamps, raw bytes, arrays and nested documents. [Value::Absent] is the
/// "absent" marker. It never reaches the datastore because every write goes
/// through the sanitizer, which drops keys holding it. Converting `None` into a
/// `Value` yields `Absent`, so optional struct fields can be written without
/// clearing what is stored.
///
/// Values are totally ordered across types
/// (null < bool < number < timestamp < string < bytes < array < document),
/// with integers and floats compared numerically. In-memory query evaluation
/// and pagination cursors rely on this order.
///
/// ```text
/// let v: Value = 42.into();
/// let s = Value::from("hello");
/// let missing: Value = Option::<i64>::None.into();   // Value::Absent
/// ```
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub enum Value {
    /// Represents a stored null.
    #[default]
    Null,
    /// The "absent" marker, stripped before every write.
    Absent,
    /// Represents a boolean value.
    Bool(bool),
    /// Represents a 64-bit integer value.
    I64(i64),
    /// Represents a 64-bit floating point value.
    F64(f64),
    /// Represents a point in time.
    Timestamp(DateTime<Utc>),
    /// Represents a string value.
    String(String),
    /// Represents binary data.
    Bytes(Vec<u8>),
    /// Represents an array value.
    Array(Vec<Value>),
    /// Represents a nested document.
    Document(Document),
}

impl Value {
    /// Creates a new [Value] from anything convertible into one.
    pub fn from<T: Into<Value>>(value: T) -> Value {
        value.into()
    }

    /// Creates a [Value::Array] from a vector of convertible values.
    pub fn from_vec<T: Into<Value>>(values: Vec<T>) -> Value {
        Value::Array(values.into_iter().map(|v| v.into()).collect())
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::I64(_) | Value::F64(_))
    }

    #[inline]
    pub fn is_document(&self) -> bool {
        matches!(self, Value::Document(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the numeric value as `f64` for both integer and float variants.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::I64(v) => Some(*v as f64),
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Timestamp(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(v) => Some(v),
            _ => None,
        }
    }

    /// Short name of the variant, used in log and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Absent => "absent",
            Value::Bool(_) => "bool",
            Value::I64(_) => "integer",
            Value::F64(_) => "double",
            Value::Timestamp(_) => "timestamp",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Document(_) => "document",
        }
    }

    /// Position of the value's type in the cross-type order.
    /// Integers and floats share a rank so they compare numerically.
    pub(crate) fn type_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::I64(_) | Value::F64(_) => 2,
            Value::Timestamp(_) => 3,
            Value::String(_) => 4,
            Value::Bytes(_) => 5,
            Value::Array(_) => 6,
            Value::Document(_) => 7,
            Value::Absent => 8,
        }
    }

    /// Converts the value into a JSON value.
    ///
    /// `Absent` and non-finite floats become `null`, timestamps become RFC 3339
    /// strings with millisecond precision and bytes become an array of numbers.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null | Value::Absent => serde_json::Value::Null,
            Value::Bool(v) => serde_json::Value::Bool(*v),
            Value::I64(v) => serde_json::Value::from(*v),
            Value::F64(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Timestamp(v) => {
                serde_json::Value::String(v.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::String(v) => serde_json::Value::String(v.clone()),
            Value::Bytes(v) => serde_json::Value::Array(
                v.iter().map(|b| serde_json::Value::from(*b)).collect(),
            ),
            Value::Array(v) => serde_json::Value::Array(v.iter().map(Value::to_json).collect()),
            Value::Document(v) => v.to_json(),
        }
    }

    /// Builds a value from a JSON value. Strings are kept as strings, no
    /// timestamp detection is attempted.
    pub fn from_json(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(v) => Value::Bool(v),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::I64(i)
                } else {
                    Value::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(v) => Value::String(v),
            serde_json::Value::Array(v) => Value::Array(v.into_iter().map(Value::from_json).collect()),
            serde_json::Value::Object(map) => Value::Document(Document::from_json_map(map)),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Absent => write!(f, "<absent>"),
            _ => write!(f, "{}", self.to_json()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => num_eq_float(*a, *b),
            (Value::I64(a), Value::F64(b)) | (Value::F64(b), Value::I64(a)) => {
                num_cmp_int_float(*a, *b) == Ordering::Equal
            }
            (Value::Null, Value::Null) => true,
            (Value::Absent, Value::Absent) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Document(a), Value::Document(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        let rank = self.type_rank().cmp(&other.type_rank());
        if rank != Ordering::Equal {
            return rank;
        }

        match (self, other) {
            (Value::I64(a), Value::I64(b)) => a.cmp(b),
            (Value::F64(a), Value::F64(b)) => num_cmp_float(*a, *b),
            (Value::I64(a), Value::F64(b)) => num_cmp_int_float(*a, *b),
            (Value::F64(a), Value::I64(b)) => num_cmp_int_float(*b, *a).reverse(),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a.cmp(b),
            (Value::Document(a), Value::Document(b)) => a.cmp(b),
            // same rank, no payload: Null/Null and Absent/Absent
            _ => Ordering::Equal,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::I64(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Value::I64(v),
            Err(_) => Value::F64(value as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::F64(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Document(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::from_vec(values)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Absent,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::from_json(value)
    }
}

use std::borrow::Cow;
use std::fmt;

/// The current value carried by a form field.
///
/// Values are captured from leaf components when a record is flattened and
/// are otherwise opaque to the library; templates typically only need the
/// [`Display`](fmt::Display) rendering.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    String(String),
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::String(value.into_owned())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

macro_rules! value_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

macro_rules! value_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::UInt(value as u64)
                }
            }
        )*
    };
}

value_from_signed!(i8, i16, i32, i64, isize);
value_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::UInt(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt(n) => Some(*n),
            Value::Int(n) => u64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            Value::UInt(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is the zero value of its kind (`""`, `0`, `false`, ...).
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::UInt(n) => *n == 0,
            Value::Float(f) => *f == 0.0,
            Value::Char(c) => *c == '\0',
            Value::String(s) => s.is_empty(),
        }
    }
}

/// Renders the text a template would place in an input's `value` attribute.
/// `Null` renders as the empty string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_input_text() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from("Michael Scott").to_string(), "Michael Scott");
        assert_eq!(Value::from(42u8).to_string(), "42");
        assert_eq!(Value::from(-7i32).to_string(), "-7");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(1.5f32).to_string(), "1.5");
    }

    #[test]
    fn zero_values() {
        assert!(Value::from("").is_zero());
        assert!(Value::from(0u64).is_zero());
        assert!(Value::from(false).is_zero());
        assert!(Value::from(None::<i32>).is_zero());
        assert!(!Value::from("x").is_zero());
        assert!(!Value::from(3i64).is_zero());
    }

    #[test]
    fn numeric_accessors_cross_signedness() {
        assert_eq!(Value::UInt(5).as_i64(), Some(5));
        assert_eq!(Value::Int(-1).as_u64(), None);
        assert_eq!(Value::UInt(u64::MAX).as_i64(), None);
        assert_eq!(Value::Int(2).as_f64(), Some(2.0));
        assert_eq!(Value::from("a").as_str(), Some("a"));
    }
}

//! Runtime values read from record attributes.
//!
//! The [`Value`] enum is what a [`Record`](crate::Record) hands back for one
//! attribute. Every matcher works on text, so the only thing a value really
//! has to do is turn itself into a string; [`Value::Unavailable`] is the one
//! variant that cannot, and it never matches anything.

use std::borrow::Cow;
use std::fmt;

/// Attribute value, borrowed from the source record where possible.
///
/// # Example
///
/// ```
/// use gigasearch::{Number, Value};
///
/// struct City {
///     name: String,
///     population: u32,
/// }
///
/// fn value<'a>(city: &'a City, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&city.name),
///         "population" => Value::Number(Number::U64(city.population as u64)),
///         _ => Value::Unavailable,
///     }
/// }
///
/// let city = City { name: "New York".into(), population: 8_000_000 };
/// assert_eq!(value(&city, "population").text().as_deref(), Some("8000000"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Text produced on the fly, e.g. through `Display`.
    Text(String),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Present but null. Reads as empty text.
    Null,
    /// The attribute could not be read for this record.
    Unavailable,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the attribute could not be read.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Value::Unavailable)
    }

    /// Converts the value to its natural text representation.
    ///
    /// `Null` becomes the empty string; `Unavailable` yields `None`.
    pub fn text(&self) -> Option<Cow<'a, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(*s)),
            Value::Text(s) => Some(Cow::Owned(s.clone())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Null => Some(Cow::Borrowed("")),
            Value::Unavailable => None,
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are kept in one of three variants so their text form is exact:
/// integers never pick up a trailing `.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )*
    };
}

number_from!(I64, i64: i8, i16, i32, i64, isize);
number_from!(U64, u64: u8, u16, u32, u64, usize);
number_from!(F64, f64: f32, f64);

/// Conversion from a field type to a [`Value`].
///
/// `#[derive(Record)]` calls this for every attribute not marked
/// `#[search(display)]`. Implement it for your own types to make them
/// searchable without going through `Display`.
pub trait ToValue {
    /// Borrows `self` as a searchable value.
    fn to_value(&self) -> Value<'_>;
}

impl ToValue for str {
    fn to_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value<'_> {
        Value::Text(self.to_string())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

macro_rules! to_value_number {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )*
    };
}

to_value_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

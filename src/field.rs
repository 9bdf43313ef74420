//! Field types and the coercion of raw fixed-width columns into values.
//!
//! Coercion is lenient: every function here is total. Non-numeric content in
//! a numeric column degrades to zero instead of failing the parse.

use crate::money::Money;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Declared type of a field in a record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Text with surrounding whitespace trimmed.
    String,

    /// Integer cents converted to a currency amount.
    Money,

    /// Leading integer digits.
    Integer,

    /// Bank-state-branch code with its `-` separator removed.
    Bsb,

    /// The column text exactly as it appears in the line.
    Raw,
}

impl FieldType {
    /// Converts a raw column substring into a value of this type.
    pub fn coerce(self, raw: &str) -> FieldValue {
        match self {
            FieldType::String => FieldValue::Text(raw.trim().to_string()),
            FieldType::Money => FieldValue::Money(Money::from_cents(parse_leading_int(raw))),
            FieldType::Integer => FieldValue::Integer(parse_leading_int(raw)),
            FieldType::Bsb => FieldValue::Text(raw.replacen('-', "", 1).trim().to_string()),
            FieldType::Raw => FieldValue::Text(raw.to_string()),
        }
    }

    /// The tag name used for this type in schema definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Money => "money",
            FieldType::Integer => "integer",
            FieldType::Bsb => "bsb",
            FieldType::Raw => "raw",
        }
    }
}

/// Unrecognized tags fall back to [`FieldType::Raw`].
impl FromStr for FieldType {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "string" => FieldType::String,
            "money" => FieldType::Money,
            "integer" => FieldType::Integer,
            "bsb" => FieldType::Bsb,
            _ => FieldType::Raw,
        })
    }
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Money(Money),
}

impl FieldValue {
    /// Returns the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a currency amount.
    ///
    /// Integer values count as whole currency units; text has no amount.
    pub fn as_money(&self) -> Option<Money> {
        match self {
            FieldValue::Money(m) => Some(*m),
            FieldValue::Integer(n) => Some(Money::from_units(*n)),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Money(m) => write!(f, "{}", m),
        }
    }
}

/// Parses an optional sign followed by leading decimal digits.
///
/// Leading whitespace is skipped and parsing stops at the first non-digit.
/// Returns 0 when no digits are found.
fn parse_leading_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}

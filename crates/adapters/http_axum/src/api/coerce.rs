//! Lenient integer decoding for request bodies.
//!
//! Clients send ages as `36`, `36.0` or `"36"`; all three decode to `36`.
//! Fractions, booleans and non-numeric text are rejected.

use std::fmt;

use serde::Deserializer;
use serde::de::{self, Visitor};

/// `deserialize_with` target accepting an integer, an integral float, or a
/// numeric string.
///
/// # Errors
///
/// Fails when the value is not a whole number representable as `i64`.
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntegerVisitor)
}

struct IntegerVisitor;

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole(value: f64) -> Option<i64> {
    // i64::MAX is not representable as f64, the bound is exclusive
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then(|| value as i64)
}

impl Visitor<'_> for IntegerVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a whole number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
        whole(value).ok_or_else(|| E::invalid_value(de::Unexpected::Float(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
        let trimmed = value.trim();
        trimmed
            .parse::<i64>()
            .ok()
            .or_else(|| trimmed.parse::<f64>().ok().and_then(whole))
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

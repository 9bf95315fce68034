//! Leaf parsers for primitive kinds.

use serde_json::Value;

use super::{require, type_mismatch};
use crate::{
    error::ErrorKind,
    parser::Parser,
};

// 2^63, the smallest f64 strictly above i64::MAX.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Accept any value unchanged.
#[must_use]
pub fn any() -> Parser<Value> {
    Parser::from_fn(|input, context| require(input, context).cloned())
}

/// Accept any JSON number as an `f64`.
#[must_use]
pub fn number() -> Parser<f64> {
    Parser::from_fn(|input, context| {
        let value = require(input, context)?;
        value
            .as_f64()
            .ok_or_else(|| context.error(type_mismatch("a number", value)))
    })
}

/// Accept a JSON number with no fractional part as an `i64`.
///
/// A float with a zero fractional part (`3.0`) parses as the integer it
/// denotes; integral numbers outside the `i64` range fail with an
/// out-of-bounds error rather than a type mismatch.
#[must_use]
pub fn int() -> Parser<i64> {
    Parser::from_fn(|input, context| {
        let value = require(input, context)?;
        let Value::Number(n) = value else {
            return Err(context.error(type_mismatch("an integer", value)));
        };
        if let Some(i) = n.as_i64() {
            return Ok(i);
        }
        if n.as_u64().is_some() {
            return Err(context.error(ErrorKind::OutOfRange {
                value: n.to_string(),
                target: "i64",
            }));
        }
        let float = n.as_f64().unwrap_or(f64::NAN);
        if !float.is_finite() || float.fract() != 0.0 {
            return Err(context.error(type_mismatch("an integer", value)));
        }
        #[allow(clippy::cast_precision_loss)]
        if float < i64::MIN as f64 || float >= I64_LIMIT {
            return Err(context.error(ErrorKind::OutOfRange {
                value: n.to_string(),
                target: "i64",
            }));
        }
        #[allow(clippy::cast_possible_truncation)]
        let truncated = float as i64;
        Ok(truncated)
    })
}

/// Accept a string.
#[must_use]
pub fn string() -> Parser<String> {
    Parser::from_fn(|input, context| {
        let value = require(input, context)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| context.error(type_mismatch("a string", value)))
    })
}

/// Accept a boolean.
#[must_use]
pub fn boolean() -> Parser<bool> {
    Parser::from_fn(|input, context| {
        let value = require(input, context)?;
        value
            .as_bool()
            .ok_or_else(|| context.error(type_mismatch("a boolean", value)))
    })
}

/// Accept only `null`.
#[must_use]
pub fn null() -> Parser<()> {
    Parser::from_fn(|input, context| {
        let value = require(input, context)?;
        if value.is_null() {
            Ok(())
        } else {
            Err(context.error(type_mismatch("null", value)))
        }
    })
}

/// A parser that always fails with `message`.
///
/// Useful as a terminal branch of [`or`](super::or) or a placeholder variant
/// in [`tagged`](super::tagged) to make an unsupported case explicit.
#[must_use]
pub fn fail<T: 'static>(message: impl Into<String>) -> Parser<T> {
    let message = message.into();
    Parser::from_fn(move |_input, context| {
        Err(context.error(ErrorKind::Custom {
            message: message.clone(),
        }))
    })
}

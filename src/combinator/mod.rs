//! The combinator set used to declare schemas.
//!
//! Leaf parsers check one primitive kind; structural combinators compose
//! sub-parsers into objects, sequences, dictionaries, and tagged unions;
//! modifiers adjust how a sub-parser treats absent fields. Everything here
//! returns a [`Parser`](crate::Parser) and composes freely with
//! [`then`](crate::Parser::then) and [`lazy`](crate::lazy).

mod leaf;
mod modifier;
mod object;
mod seq;
mod variant;

pub use leaf::{any, boolean, fail, int, null, number, string};
pub use modifier::{optional, with_default};
pub use object::{map, object, Fields};
pub use seq::{array, tuple, TupleSchema};
pub use variant::{or, tagged};

use serde_json::Value;

use crate::{
    context::Context,
    error::{ErrorKind, Result},
};

/// Reject absent input, locating the error at the field the context points at.
pub(crate) fn require<'a>(input: Option<&'a Value>, context: &Context) -> Result<&'a Value> {
    input.ok_or_else(|| {
        context.error(ErrorKind::MissingField {
            field: context.field_name().unwrap_or_default().to_string(),
        })
    })
}

pub(crate) fn type_mismatch(expected: &'static str, found: &Value) -> ErrorKind {
    ErrorKind::TypeMismatch {
        expected,
        found: describe(found),
    }
}

/// Describe a value for an error message: kind plus the value itself for
/// primitives, kind alone for containers.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => String::from("an array"),
        Value::Object(_) => String::from("an object"),
    }
}

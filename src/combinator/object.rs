//! Object-shaped combinators: fixed records and arbitrary-key dictionaries.

use core::hash::Hash;

use indexmap::IndexMap;
use serde_json::Value;

use super::{require, type_mismatch};
use crate::{
    context::{Context, PathSegment},
    error::Result,
    parser::Parser,
};

/// Field lookup handle passed to [`object`] builder closures.
///
/// Each [`field`](Fields::field) call looks up one declared field, extends
/// the context with the field name, and delegates to the sub-parser. A key
/// absent from the input surfaces to the sub-parser as absent input, which
/// plain parsers fail and [`optional`](super::optional) /
/// [`with_default`](super::with_default) tolerate. Input keys that are never
/// looked up are ignored.
#[derive(Debug)]
pub struct Fields<'a> {
    entries: &'a serde_json::Map<String, Value>,
    context: &'a Context,
}

impl Fields<'_> {
    /// Parse the field `name` with `parser`.
    ///
    /// # Errors
    ///
    /// Fails with the sub-parser's error, located at the field.
    pub fn field<T: 'static>(&self, name: &str, parser: &Parser<T>) -> Result<T> {
        let child = self.context.child(PathSegment::Field(name.to_string()));
        parser.run(self.entries.get(name), &child)
    }
}

/// Parse an object with a fixed set of named fields.
///
/// The builder closure declares the shape by pulling each field it needs
/// through the [`Fields`] handle; the output contains exactly what the
/// closure constructs, so unknown input keys never leak into it. The first
/// failing field fails the whole object.
///
/// # Example
///
/// ```
/// use jsonshape::{number, object, optional, string, Parser};
/// use serde_json::json;
///
/// struct Level {
///     name: String,
///     difficulty: f64,
///     comment: Option<String>,
/// }
///
/// let level: Parser<Level> = object(|fields| {
///     Ok(Level {
///         name: fields.field("name", &string())?,
///         difficulty: fields.field("difficulty", &number())?,
///         comment: fields.field("comment", &optional(string()))?,
///     })
/// });
///
/// let parsed = level
///     .parse(&json!({"name": "tutorial", "difficulty": 1, "unknown": true}))
///     .unwrap();
/// assert_eq!(parsed.name, "tutorial");
/// assert_eq!(parsed.difficulty, 1.0);
/// assert!(parsed.comment.is_none());
/// ```
pub fn object<T, F>(build: F) -> Parser<T>
where
    T: 'static,
    F: Fn(&Fields<'_>) -> Result<T> + Send + Sync + 'static,
{
    Parser::from_fn(move |input, context| {
        let value = require(input, context)?;
        let Value::Object(entries) = value else {
            return Err(context.error(type_mismatch("an object", value)));
        };
        build(&Fields { entries, context })
    })
}

/// Parse an object as an arbitrary-cardinality dictionary.
///
/// Every key is converted with `key_fn` and every value parsed with
/// `value_parser`, with the context extended by the raw key. The output
/// preserves the input's own key order.
pub fn map<K, V, F>(key_fn: F, value_parser: Parser<V>) -> Parser<IndexMap<K, V>>
where
    K: Hash + Eq + 'static,
    V: 'static,
    F: Fn(&str) -> K + Send + Sync + 'static,
{
    Parser::from_fn(move |input, context| {
        let value = require(input, context)?;
        let Value::Object(entries) = value else {
            return Err(context.error(type_mismatch("an object", value)));
        };
        let mut out = IndexMap::with_capacity(entries.len());
        for (key, entry) in entries {
            let child = context.child(PathSegment::MapValue(key.clone()));
            let _ = out.insert(key_fn(key), value_parser.run(Some(entry), &child)?);
        }
        Ok(out)
    })
}

//! Alternation and tagged-union dispatch.

use indexmap::IndexMap;
use serde_json::Value;

use super::{require, string, type_mismatch};
use crate::{
    context::PathSegment,
    error::ErrorKind,
    parser::Parser,
};

/// Try `alternatives` in order and return the first success.
///
/// Every attempt runs at the same location; contexts are derived per attempt
/// and a failed branch leaves no trace in later ones. When every alternative
/// fails, the composite error cites `description` — a human-authored hint for
/// what was expected at this position, not a concatenation of the branch
/// errors.
///
/// # Example
///
/// ```
/// use jsonshape::{null, number, or};
/// use serde_json::json;
///
/// let reading = or("a number or null", [
///     number().then(|n| Ok(Some(n))),
///     null().then(|()| Ok(None)),
/// ]);
///
/// assert_eq!(reading.parse(&json!(0.5)).unwrap(), Some(0.5));
/// assert_eq!(reading.parse(&json!(null)).unwrap(), None);
/// assert_eq!(
///     reading.parse(&json!("n/a")).unwrap_err().to_string(),
///     "expected a number or null"
/// );
/// ```
pub fn or<T: 'static>(
    description: impl Into<String>,
    alternatives: impl IntoIterator<Item = Parser<T>>,
) -> Parser<T> {
    let description = description.into();
    let alternatives: Vec<Parser<T>> = alternatives.into_iter().collect();
    Parser::from_fn(move |input, context| {
        for alternative in &alternatives {
            if let Ok(out) = alternative.run(input, context) {
                return Ok(out);
            }
        }
        Err(context.error(ErrorKind::NoAlternative {
            description: description.clone(),
        }))
    })
}

/// Parse an object as a tagged union, dispatching on a discriminant field.
///
/// The discriminant must be a string held in `tag_field`. The matched variant
/// parser receives the entire original object, not a stripped-down remainder,
/// so a variant may read the discriminant field again if it needs it; its
/// context is extended by the tag value. An unrecognized tag is a hard
/// failure listing the declared tags.
///
/// # Example
///
/// ```
/// use jsonshape::{number, object, tagged};
/// use serde_json::json;
///
/// let size = tagged("shape", [
///     ("circle", object(|f| f.field("radius", &number()))),
///     ("square", object(|f| f.field("side", &number()))),
/// ]);
///
/// assert_eq!(size.parse(&json!({"shape": "square", "side": 4})).unwrap(), 4.0);
/// ```
pub fn tagged<T, K, I>(tag_field: impl Into<String>, variants: I) -> Parser<T>
where
    T: 'static,
    K: Into<String>,
    I: IntoIterator<Item = (K, Parser<T>)>,
{
    let tag_field: String = tag_field.into();
    let variants: IndexMap<String, Parser<T>> = variants
        .into_iter()
        .map(|(tag, parser)| (tag.into(), parser))
        .collect();
    let tag_parser = string();
    Parser::from_fn(move |input, context| {
        let value = require(input, context)?;
        let Value::Object(entries) = value else {
            return Err(context.error(type_mismatch("an object", value)));
        };
        let tag = tag_parser.run(
            entries.get(&tag_field),
            &context.child(PathSegment::Field(tag_field.clone())),
        )?;
        let Some(variant) = variants.get(&tag) else {
            return Err(context.error(ErrorKind::UnknownVariant {
                variant: tag,
                expected: variants.keys().cloned().collect(),
            }));
        };
        variant.run(Some(value), &context.child(PathSegment::Variant(tag)))
    })
}

//! Sequence-shaped combinators: homogeneous arrays and positional tuples.

use serde_json::Value;
use tracing::warn;

use super::{require, type_mismatch};
use crate::{
    context::{Context, PathSegment},
    error::{ErrorKind, Result},
    parser::Parser,
    warn::WarnOnce,
};

/// Parse an array whose elements all share one schema.
///
/// The output has the same length and order as the input; the first failing
/// element fails the whole array, with its index on the error path.
pub fn array<T: 'static>(item: Parser<T>) -> Parser<Vec<T>> {
    Parser::from_fn(move |input, context| {
        let value = require(input, context)?;
        let Value::Array(items) = value else {
            return Err(context.error(type_mismatch("an array", value)));
        };
        items
            .iter()
            .enumerate()
            .map(|(index, element)| {
                item.run(Some(element), &context.child(PathSegment::Element(index)))
            })
            .collect()
    })
}

/// Positional schema accepted by [`tuple`]: a tuple of parsers, one per
/// declared position. Implemented for arities 0 through 5.
pub trait TupleSchema {
    /// The tuple of the position parsers' outputs.
    type Output;

    /// Number of declared positions.
    fn arity(&self) -> usize;

    /// Parse each declared position of `items`, which holds at least
    /// [`arity`](TupleSchema::arity) elements.
    fn parse_positions(&self, items: &[Value], context: &Context) -> Result<Self::Output>;
}

macro_rules! impl_tuple_schema {
    ($arity:expr; $(($parser:ident, $idx:tt)),*) => {
        impl<$($parser: 'static),*> TupleSchema for ($(Parser<$parser>,)*) {
            type Output = ($($parser,)*);

            fn arity(&self) -> usize {
                $arity
            }

            #[allow(unused_variables)]
            fn parse_positions(&self, items: &[Value], context: &Context) -> Result<Self::Output> {
                #[allow(non_snake_case)]
                let ($($parser,)*) = self;
                Ok(($(
                    $parser.run(
                        Some(&items[$idx]),
                        &context.child(PathSegment::Element($idx)),
                    )?,
                )*))
            }
        }
    };
}

impl_tuple_schema!(0;);
impl_tuple_schema!(1; (P1, 0));
impl_tuple_schema!(2; (P1, 0), (P2, 1));
impl_tuple_schema!(3; (P1, 0), (P2, 1), (P3, 2));
impl_tuple_schema!(4; (P1, 0), (P2, 1), (P3, 2), (P4, 3));
impl_tuple_schema!(5; (P1, 0), (P2, 1), (P3, 2), (P4, 3), (P5, 4));

/// Parse an array against a fixed sequence of positional schemas.
///
/// The input must hold at least as many elements as declared positions;
/// shorter input fails before any position is parsed. Elements beyond the
/// declared positions are discarded from the output, and the first time a
/// given `tuple` parser value discards any, it emits a single diagnostic;
/// the diagnostic never repeats for that parser value, however many inputs
/// it later parses, while other `tuple` values keep their own latch.
///
/// # Example
///
/// ```
/// use jsonshape::{int, string, tuple};
/// use serde_json::json;
///
/// let pair = tuple((string(), int()));
/// assert_eq!(
///     pair.parse(&json!(["lives", 3])).unwrap(),
///     (String::from("lives"), 3)
/// );
/// ```
pub fn tuple<S>(schema: S) -> Parser<S::Output>
where
    S: TupleSchema + Send + Sync + 'static,
    S::Output: 'static,
{
    let warned = WarnOnce::new();
    Parser::from_fn(move |input, context| {
        let value = require(input, context)?;
        let Value::Array(items) = value else {
            return Err(context.error(type_mismatch("a tuple", value)));
        };
        if items.len() < schema.arity() {
            return Err(context.error(ErrorKind::LengthMismatch {
                expected: schema.arity(),
                found: items.len(),
            }));
        }
        // parse the declared positions first so a failure wins over the warning
        let out = schema.parse_positions(items, context)?;
        if items.len() > schema.arity() && warned.first() {
            warn!(
                expected = schema.arity(),
                found = items.len(),
                "ignoring extra elements in tuple"
            );
        }
        Ok(out)
    })
}

//! The core parser type and the combinators that wrap whole parsers.

use core::fmt;
use std::sync::{Arc, OnceLock};

use serde_json::Value;

use crate::{
    context::Context,
    error::{Reject, Result},
};

type ParseFn<T> = dyn Fn(Option<&Value>, &Context) -> Result<T> + Send + Sync;

/// A composable validation rule from an untyped JSON value to a typed output.
///
/// Parsers are built once by composing combinators and reused for the lifetime
/// of the process; the composition itself has no side effects. Every parser is
/// `Send + Sync` regardless of its output type, so composed schemas can live
/// in `static` cells:
///
/// ```
/// use std::sync::LazyLock;
/// use jsonshape::{array, int, Parser};
/// use serde_json::json;
///
/// static IDS: LazyLock<Parser<Vec<i64>>> = LazyLock::new(|| array(int()));
///
/// assert_eq!(IDS.parse(&json!([1, 2, 3])).unwrap(), vec![1, 2, 3]);
/// ```
///
/// Cloning is cheap and shares the underlying parser, including any one-shot
/// diagnostic state it owns; a parser built by a second call to the same
/// combinator function is a distinct value with its own state even when it is
/// structurally identical to the first.
pub struct Parser<T> {
    f: Arc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

impl<T: 'static> Parser<T> {
    /// Build a parser from a raw parse function.
    ///
    /// This is the extension point for combinators not provided by the crate.
    /// The function receives `None` when the value being parsed is an absent
    /// object field (see [`Parser::run`]).
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>, &Context) -> Result<T> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Parse `value` against this schema, starting from a fresh root context.
    ///
    /// # Errors
    ///
    /// Fails with a path-annotated [`Error`](crate::Error) if `value` does not
    /// conform to the composed shape.
    pub fn parse(&self, value: &Value) -> Result<T> {
        self.parse_in(value, &Context::root())
    }

    /// Parse `value` with an explicitly threaded context.
    ///
    /// Useful when a caller has already descended into a larger document by
    /// hand and wants error paths to reflect the full location.
    pub fn parse_in(&self, value: &Value, context: &Context) -> Result<T> {
        (self.f)(Some(value), context)
    }

    /// Run against the result of a field lookup, where `None` means the key
    /// was absent from the enclosing object.
    ///
    /// Most parsers fail absent input with a `MissingField` error; only
    /// absence-tolerant wrappers such as [`optional`](crate::optional) and
    /// [`with_default`](crate::with_default) succeed without a value.
    pub fn run(&self, input: Option<&Value>, context: &Context) -> Result<T> {
        (self.f)(input, context)
    }

    /// Map the output of this parser, with the option to reject the value.
    ///
    /// The mapper runs only after the wrapped parser succeeds. Returning
    /// `Err(Reject)` turns into a failure located at the position the wrapped
    /// parser was run at, which keeps refinement errors correctly placed even
    /// when the mapper sits deep inside a recursive schema. Panics in the
    /// mapper are not intercepted.
    ///
    /// ```
    /// use jsonshape::int;
    /// use serde_json::json;
    ///
    /// let doubled = int().then(|n| Ok(2 * n));
    /// assert_eq!(doubled.parse(&json!(21)).unwrap(), 42);
    /// ```
    pub fn then<U, F>(&self, mapper: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> Result<U, Reject> + Send + Sync + 'static,
    {
        let inner = self.clone();
        Parser::from_fn(move |input, context| {
            let value = inner.run(input, context)?;
            mapper(value).map_err(|reject| context.error(reject.into_kind()))
        })
    }
}

/// Create a parser that builds itself from `thunk` on the very first parse
/// through it.
///
/// The point is to let a schema expression refer to parser bindings that are
/// not yet initialized while the expression is being constructed:
///
/// - recursive parsers,
/// - *mutually* recursive parsers,
/// - definitions written top-down.
///
/// By the time the deferred `thunk` actually runs, every binding in the
/// defining scope has been assigned. The resolved parser is cached, so the
/// thunk runs at most once per `lazy` value.
///
/// # Example
///
/// ```
/// use std::sync::LazyLock;
/// use jsonshape::{lazy, null, or, tuple, Parser};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq)]
/// enum Tree {
///     Leaf,
///     Node(Box<Tree>, Box<Tree>),
/// }
///
/// static TREE: LazyLock<Parser<Tree>> = LazyLock::new(|| {
///     lazy(|| {
///         or("a binary tree", [
///             null().then(|()| Ok(Tree::Leaf)),
///             tuple((TREE.clone(), TREE.clone()))
///                 .then(|(l, r)| Ok(Tree::Node(Box::new(l), Box::new(r)))),
///         ])
///     })
/// });
///
/// assert!(TREE.parse(&json!([null, [null, null]])).is_ok());
/// assert!(TREE.parse(&json!([null])).is_err());
/// ```
pub fn lazy<T, F>(thunk: F) -> Parser<T>
where
    T: 'static,
    F: Fn() -> Parser<T> + Send + Sync + 'static,
{
    let cell: OnceLock<Parser<T>> = OnceLock::new();
    Parser::from_fn(move |input, context| cell.get_or_init(&thunk).run(input, context))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{int, lazy, number, string, ErrorKind, Reject};

    #[test]
    fn test_then_maps_output() {
        let parser = number().then(|x| Ok(x * 10.0));
        assert_eq!(parser.parse(&json!(4)).unwrap(), 40.0);
    }

    #[test]
    fn test_then_reject_is_located_and_messaged() {
        let parser = int().then(|n| {
            if n >= 0 {
                Ok(n)
            } else {
                Err(Reject::with("negative count"))
            }
        });
        let error = parser.parse(&json!(-3)).unwrap_err();
        assert_eq!(
            error.kind,
            ErrorKind::Custom {
                message: String::from("negative count")
            }
        );
        assert!(error.path.is_empty());
    }

    #[test]
    fn test_then_reject_generic_message() {
        let parser = int().then(|_| Err::<i64, _>(Reject::new()));
        let error = parser.parse(&json!(1)).unwrap_err();
        assert_eq!(error.to_string(), "invalid value");
    }

    #[test]
    fn test_then_skipped_on_inner_failure() {
        let parser = string().then(|_| Err::<String, _>(Reject::with("never reached")));
        let error = parser.parse(&json!(1)).unwrap_err();
        assert!(matches!(error.kind, ErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn test_lazy_resolves_once_and_parses() {
        let parser = lazy(int);
        assert_eq!(parser.parse(&json!(5)).unwrap(), 5);
        assert_eq!(parser.parse(&json!(6)).unwrap(), 6);
        assert!(parser.parse(&json!("x")).is_err());
    }

    #[test]
    fn test_then_composes_on_lazy() {
        let parser = lazy(int).then(|n| Ok(n + 1));
        assert_eq!(parser.parse(&json!(1)).unwrap(), 2);
    }
}

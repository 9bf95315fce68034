//! Location tracking for error reporting.

use core::fmt;

use crate::error::{Error, ErrorKind};

/// A segment in the location path of a parse.
///
/// Segments describe one step of descent into the document: an object field,
/// a sequence element, a dictionary entry, or a dispatched variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Descent into an object field.
    Field(String),
    /// Descent into a sequence or tuple element.
    Element(usize),
    /// Descent into a dictionary value (includes the raw key for context).
    MapValue(String),
    /// Descent into a tagged-union variant.
    Variant(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "field '{name}'"),
            PathSegment::Element(idx) => write!(f, "element {idx}"),
            PathSegment::MapValue(key) => write!(f, "map value for '{key}'"),
            PathSegment::Variant(name) => write!(f, "variant '{name}'"),
        }
    }
}

/// Tracks where in the document a parse currently is.
///
/// A fresh context is created per top-level [`parse`](crate::Parser::parse)
/// call; combinators derive child contexts as they descend. Derivation is
/// copy-on-append: a child owns its own path storage and never aliases its
/// parent's, so alternation can run several sub-parses from the same parent
/// without one attempt's bookkeeping leaking into another's.
#[derive(Debug, Clone, Default)]
pub struct Context {
    path: Vec<PathSegment>,
}

impl Context {
    /// The empty context at the root of a document.
    #[must_use]
    pub fn root() -> Self {
        Self { path: Vec::new() }
    }

    /// Derive the context one level deeper.
    #[must_use]
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self { path }
    }

    /// The path from the document root to the current location.
    #[must_use]
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Build an error located at the current path.
    #[must_use]
    pub fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.path.clone())
    }

    /// The field name the context currently points at, if any.
    pub(crate) fn field_name(&self) -> Option<&str> {
        match self.path.last() {
            Some(PathSegment::Field(name)) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_does_not_touch_parent() {
        let root = Context::root();
        let a = root.child(PathSegment::Field(String::from("a")));
        let b = root.child(PathSegment::Element(7));

        assert!(root.path().is_empty());
        assert_eq!(a.path(), [PathSegment::Field(String::from("a"))]);
        assert_eq!(b.path(), [PathSegment::Element(7)]);
    }

    #[test]
    fn test_located_error() {
        let context = Context::root()
            .child(PathSegment::Variant(String::from("double")))
            .child(PathSegment::Field(String::from("x")));
        let error = context.error(ErrorKind::MissingField {
            field: String::from("x"),
        });
        assert_eq!(
            error.to_string(),
            "in variant 'double' -> field 'x': missing required field `x`"
        );
    }

    #[test]
    fn test_field_name() {
        let context = Context::root().child(PathSegment::Field(String::from("x")));
        assert_eq!(context.field_name(), Some("x"));
        assert_eq!(context.child(PathSegment::Element(0)).field_name(), None);
        assert_eq!(Context::root().field_name(), None);
    }
}

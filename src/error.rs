//! Validation error types.

use core::fmt;

use crate::context::PathSegment;

/// The specific kind of validation error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Expected one kind of value, found another.
    TypeMismatch {
        /// The expected kind description.
        expected: &'static str,
        /// A description of the found value.
        found: String,
    },

    /// A required object field was absent.
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A tuple had fewer elements than its declared positions.
    LengthMismatch {
        /// The number of declared positions.
        expected: usize,
        /// The number of elements found.
        found: usize,
    },

    /// An integral number that does not fit the target integer type.
    OutOfRange {
        /// The string representation of the out-of-range value.
        value: String,
        /// The target type that couldn't hold the value.
        target: &'static str,
    },

    /// A discriminant value not present in the declared variant table.
    UnknownVariant {
        /// The tag value that was found.
        variant: String,
        /// The declared tag values, in declaration order.
        expected: Vec<String>,
    },

    /// Every branch of an alternation failed.
    NoAlternative {
        /// The human-authored description of what was expected.
        description: String,
    },

    /// A custom failure from `fail` or a rejecting `then` mapper.
    Custom {
        /// The failure message.
        message: String,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::TypeMismatch { expected, found } => {
                write!(f, "expected {expected} but found {found}")
            }
            ErrorKind::MissingField { field } if field.is_empty() => {
                write!(f, "missing required value")
            }
            ErrorKind::MissingField { field } => {
                write!(f, "missing required field `{field}`")
            }
            ErrorKind::LengthMismatch { expected, found } => {
                write!(f, "expected at least {expected} elements but found {found}")
            }
            ErrorKind::OutOfRange { value, target } => {
                write!(f, "integer {value} is out of bounds for {target}")
            }
            ErrorKind::UnknownVariant { variant, expected } => {
                write!(f, "unknown variant `{variant}`, ")?;
                format_expected_list(f, expected, "variants")
            }
            ErrorKind::NoAlternative { description } => {
                write!(f, "expected {description}")
            }
            ErrorKind::Custom { message } => f.write_str(message),
        }
    }
}

/// Format a list of expected values for error messages.
fn format_expected_list(
    f: &mut fmt::Formatter<'_>,
    expected: &[String],
    none_name: &str,
) -> fmt::Result {
    match expected {
        [] => write!(f, "there are no {none_name}"),
        [a1] => write!(f, "expected `{a1}` instead"),
        [a1, a2] => write!(f, "expected either `{a1}` or `{a2}` instead"),
        [a1, rest @ .., an] => {
            write!(f, "expected one of `{a1}`")?;
            for alt in rest {
                write!(f, ", `{alt}`")?;
            }
            write!(f, ", or `{an}` instead")
        }
    }
}

/// A validation error with path context.
///
/// This is the sole error type surfaced by [`Parser::parse`](crate::Parser::parse).
/// It pairs the specific [`ErrorKind`] with the location path at which the
/// offending value was found, rendered outermost first.
///
/// # Example
///
/// ```
/// use jsonshape::{Context, Error, ErrorKind, PathSegment};
///
/// let error: Error = Context::root()
///     .child(PathSegment::Field("items".into()))
///     .child(PathSegment::Element(0))
///     .error(ErrorKind::TypeMismatch {
///         expected: "a number",
///         found: "string \"x\"".into(),
///     });
///
/// assert_eq!(
///     error.to_string(),
///     "in field 'items' -> element 0: expected a number but found string \"x\""
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The specific error that occurred.
    pub kind: ErrorKind,
    /// Path segments from outermost to innermost.
    pub path: Vec<PathSegment>,
}

impl Error {
    /// Create a new validation error located at `path`.
    #[must_use]
    pub fn new(kind: ErrorKind, path: Vec<PathSegment>) -> Self {
        Self { kind, path }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_empty() {
            write!(f, "in ")?;
            for (i, segment) in self.path.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{segment}")?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Sentinel returned by [`then`](crate::Parser::then) mappers to reject a
/// structurally valid value.
///
/// The interception inside `then` turns a `Reject` into an [`Error`] located
/// at the context current at that point, so a mapper attached deep inside a
/// composed schema produces a correctly located failure without ever seeing
/// the context itself. Only this type receives that treatment; a panic in a
/// mapper is a programming defect and propagates untouched.
///
/// # Example
///
/// ```
/// use jsonshape::{int, Reject};
/// use serde_json::json;
///
/// let even = int().then(|n| {
///     if n % 2 == 0 {
///         Ok(n)
///     } else {
///         Err(Reject::with(format!("{n} is not even")))
///     }
/// });
///
/// assert_eq!(even.parse(&json!(4)).unwrap(), 4);
/// assert_eq!(even.parse(&json!(3)).unwrap_err().to_string(), "3 is not even");
/// ```
#[derive(Debug, Default)]
pub struct Reject {
    message: Option<String>,
}

impl Reject {
    /// Reject with the generic message.
    #[must_use]
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Reject with a custom message.
    #[must_use]
    pub fn with(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub(crate) fn into_kind(self) -> ErrorKind {
        ErrorKind::Custom {
            message: self
                .message
                .unwrap_or_else(|| String::from("invalid value")),
        }
    }
}

impl From<&str> for Reject {
    fn from(message: &str) -> Self {
        Self::with(message)
    }
}

impl From<String> for Reject {
    fn from(message: String) -> Self {
        Self::with(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch() {
        let kind = ErrorKind::TypeMismatch {
            expected: "a number",
            found: String::from("string \"x\""),
        };
        assert_eq!(kind.to_string(), "expected a number but found string \"x\"");
    }

    #[test]
    fn test_missing_field() {
        let kind = ErrorKind::MissingField {
            field: String::from("name"),
        };
        assert_eq!(kind.to_string(), "missing required field `name`");
    }

    #[test]
    fn test_length_mismatch() {
        let kind = ErrorKind::LengthMismatch {
            expected: 3,
            found: 1,
        };
        assert_eq!(kind.to_string(), "expected at least 3 elements but found 1");
    }

    #[test]
    fn test_out_of_range() {
        let kind = ErrorKind::OutOfRange {
            value: String::from("18446744073709551615"),
            target: "i64",
        };
        assert_eq!(
            kind.to_string(),
            "integer 18446744073709551615 is out of bounds for i64"
        );
    }

    #[test]
    fn test_unknown_variant() {
        let kind = ErrorKind::UnknownVariant {
            variant: String::from("triple"),
            expected: vec![String::from("leaf"), String::from("double")],
        };
        assert_eq!(
            kind.to_string(),
            "unknown variant `triple`, expected either `leaf` or `double` instead"
        );

        let kind = ErrorKind::UnknownVariant {
            variant: String::from("x"),
            expected: vec![
                String::from("a"),
                String::from("b"),
                String::from("c"),
            ],
        };
        assert_eq!(
            kind.to_string(),
            "unknown variant `x`, expected one of `a`, `b`, or `c` instead"
        );

        let kind = ErrorKind::UnknownVariant {
            variant: String::from("x"),
            expected: Vec::new(),
        };
        assert_eq!(kind.to_string(), "unknown variant `x`, there are no variants");
    }

    #[test]
    fn test_no_alternative() {
        let kind = ErrorKind::NoAlternative {
            description: String::from("a binary tree"),
        };
        assert_eq!(kind.to_string(), "expected a binary tree");
    }

    #[test]
    fn test_error_without_path() {
        let error = Error::new(
            ErrorKind::Custom {
                message: String::from("nope"),
            },
            Vec::new(),
        );
        assert_eq!(error.to_string(), "nope");
    }

    #[test]
    fn test_error_with_path() {
        let error = Error::new(
            ErrorKind::MissingField {
                field: String::from("max"),
            },
            vec![
                PathSegment::Field(String::from("levels")),
                PathSegment::Element(2),
                PathSegment::Field(String::from("max")),
            ],
        );
        assert_eq!(
            error.to_string(),
            "in field 'levels' -> element 2 -> field 'max': missing required field `max`"
        );
    }

    #[test]
    fn test_reject_messages() {
        assert_eq!(
            Reject::new().into_kind(),
            ErrorKind::Custom {
                message: String::from("invalid value")
            }
        );
        assert_eq!(
            Reject::with("too big").into_kind(),
            ErrorKind::Custom {
                message: String::from("too big")
            }
        );
        assert_eq!(
            Reject::from("nope").into_kind(),
            ErrorKind::Custom {
                message: String::from("nope")
            }
        );
    }
}

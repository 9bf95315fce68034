//! Absence-tolerant wrappers for object fields.

use crate::parser::Parser;

/// Allow an object field to be omitted, yielding `None`.
///
/// Absence means the key was not present in the enclosing object; a field
/// that is present but `null` is not absent, and is handed to `parser` like
/// any other value.
pub fn optional<T: 'static>(parser: Parser<T>) -> Parser<Option<T>> {
    Parser::from_fn(move |input, context| match input {
        None => Ok(None),
        Some(value) => parser.parse_in(value, context).map(Some),
    })
}

/// Allow an object field to be omitted, yielding `default`.
///
/// When the field is present, `parser` fully decides the outcome; the default
/// does not make the field tolerant of wrong kinds.
pub fn with_default<T>(default: T, parser: Parser<T>) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    Parser::from_fn(move |input, context| match input {
        None => Ok(default.clone()),
        Some(value) => parser.parse_in(value, context),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{int, object, string};

    #[test]
    fn test_optional_absent_field() {
        let parser = object(|fields| fields.field("x", &optional(int())));
        assert_eq!(parser.parse(&json!({})).unwrap(), None);
        assert_eq!(parser.parse(&json!({"x": 3})).unwrap(), Some(3));
    }

    #[test]
    fn test_optional_does_not_tolerate_present_null() {
        let parser = object(|fields| fields.field("x", &optional(string())));
        let error = parser.parse(&json!({"x": null})).unwrap_err();
        assert_eq!(
            error.to_string(),
            "in field 'x': expected a string but found null"
        );
    }

    #[test]
    fn test_with_default() {
        let parser = object(|fields| fields.field("retries", &with_default(3, int())));
        assert_eq!(parser.parse(&json!({})).unwrap(), 3);
        assert_eq!(parser.parse(&json!({"retries": 0})).unwrap(), 0);
        assert!(parser.parse(&json!({"retries": "many"})).is_err());
    }
}

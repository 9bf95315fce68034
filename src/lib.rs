//! jsonshape - schema-driven validation for JSON values
//!
//! This crate turns an untrusted, dynamically shaped [`serde_json::Value`]
//! into a strongly typed Rust value, or into an error that names the exact
//! location of the violation. A schema is an ordinary value of type
//! [`Parser<T>`] built by composing combinators; the output type `T` is
//! inferred from the composition rather than maintained as a separate
//! declaration.
//!
//! Decoding bytes into a `Value` is the caller's concern: this is not a text
//! parser, and it performs no I/O.
//!
//! # Example
//!
//! ```
//! use jsonshape::{array, int, number, object, optional, string, Parser};
//! use serde_json::json;
//!
//! #[derive(Debug)]
//! struct Stage {
//!     title: String,
//!     bgm: Option<String>,
//!     spell_ids: Vec<i64>,
//! }
//!
//! let stage: Parser<Stage> = object(|fields| {
//!     Ok(Stage {
//!         title: fields.field("title", &string())?,
//!         bgm: fields.field("bgm", &optional(string()))?,
//!         spell_ids: fields.field("spell_ids", &array(int()))?,
//!     })
//! });
//!
//! let parsed = stage
//!     .parse(&json!({"title": "Extra", "spell_ids": [120, 121], "unused": 0}))
//!     .unwrap();
//! assert_eq!(parsed.title, "Extra");
//! assert!(parsed.bgm.is_none());
//! assert_eq!(parsed.spell_ids, vec![120, 121]);
//!
//! let error = stage.parse(&json!({"title": "Extra", "spell_ids": [120, "x"]}));
//! assert_eq!(
//!     error.unwrap_err().to_string(),
//!     "in field 'spell_ids' -> element 1: expected an integer but found string \"x\""
//! );
//! ```
//!
//! # Recursive schemas
//!
//! [`lazy`] defers building a parser until its first use, which lets a schema
//! refer to itself (or to a mutually recursive partner) through a `static`
//! binding; see its documentation for a worked binary-tree example.

#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::style)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(unsafe_code)]
#![allow(clippy::missing_errors_doc)]

pub mod combinator;
pub mod context;
pub mod error;
pub mod parser;
mod warn;

pub use crate::{
    combinator::{
        any, array, boolean, fail, int, map, null, number, object, optional, or, string, tagged,
        tuple, with_default, Fields, TupleSchema,
    },
    context::{Context, PathSegment},
    error::{Error, ErrorKind, Reject, Result},
    parser::{lazy, Parser},
};

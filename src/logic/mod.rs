//! Query validation collaborators.
//!
//! The highlighting core never validates; these are the pluggable checks a
//! host runs when the user asks for a verdict on the whole query.
//!
//! - `report`    : `ValidationReport`, lexer-derived references and the schema
//!   and operator checks run on them.
//! - `validator` : the `QueryValidator` trait with a local parser-backed and a
//!   Postgres-backed implementation.
crate::reexport!(report);
crate::reexport!(validator);

use crate::{Keyword, SchemaMap, Token, TokenKind, tokenize};
use itertools::Itertools as _;

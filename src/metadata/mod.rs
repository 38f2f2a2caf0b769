//! Schema metadata consumed by the lexer.
//!
//! - `schema`   : `SchemaMap`, the table name → ordered field list snapshot.
//! - `registry` : `SchemaRegistry`, which owns the current snapshot and swaps it on reload.
//! - `source`   : `SchemaSource` collaborators that produce a `SchemaMap`.
crate::reexport!(schema);
crate::reexport!(registry);
crate::reexport!(source);

use std::{collections::HashMap, future::Future, sync::Arc};

//! Turning a token stream into overlay markup, and keeping the overlay in
//! step with the editable text box.
//!
//! - `render`  : pure `&[Token] -> String` markup generation with HTML escaping.
//! - `overlay` : the per-session `Editor` driving lexer + renderer on input and
//!   mirroring scroll offsets.
crate::reexport!(render);
crate::reexport!(overlay);

use crate::{SchemaMap, SchemaRegistry, Token, tokenize};

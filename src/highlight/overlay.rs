use super::*;
use std::sync::Arc;

/// Scroll position of a scrollable text area, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    pub top: f64,
    pub left: f64,
}

impl ScrollOffset {
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// The highlighted layer drawn behind the text box.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    content: String,
    scroll: ScrollOffset,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            content: EMPTY_MARKUP.to_string(),
            scroll: ScrollOffset::default(),
        }
    }
}

impl Overlay {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }
}

/// One editing session: the schema registry plus the overlay it highlights into.
///
/// Every handler runs to completion synchronously; there is no debouncing and
/// no cancellation, each input simply replaces the previous overlay.
#[derive(Debug, Default)]
pub struct Editor {
    registry: SchemaRegistry,
    overlay: Overlay,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: SchemaRegistry) -> Self {
        Self {
            registry,
            overlay: Overlay::default(),
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SchemaRegistry {
        &mut self.registry
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Re-lex and re-render `text` into the overlay.
    pub fn on_input(&mut self, text: &str) -> &Overlay {
        let schema: Arc<SchemaMap> = self.registry.snapshot();
        self.overlay.content = overlay_markup(text, &schema);
        &self.overlay
    }

    /// Mirror the text box's scroll offsets onto the overlay.
    pub fn on_scroll(&mut self, offset: ScrollOffset) -> &Overlay {
        self.overlay.scroll = offset;
        &self.overlay
    }
}

/// Full overlay content for `text`.
///
/// Non-empty text gets a trailing `&nbsp;`: a final newline in a text box still
/// occupies a line, which the markup would otherwise collapse.
pub fn overlay_markup(text: &str, schema: &SchemaMap) -> String {
    if text.is_empty() {
        return EMPTY_MARKUP.to_string();
    }
    let mut markup = render(&tokenize(text, schema));
    markup.push_str(EMPTY_MARKUP);
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> Editor {
        Editor::with_registry(SchemaRegistry::with_schema(SchemaMap::from_iter([(
            "orders",
            ["id", "total"],
        )])))
    }

    #[test]
    fn starts_with_placeholder() {
        let editor = Editor::new();
        assert_eq!(editor.overlay().content(), "&nbsp;");
        assert_eq!(editor.overlay().scroll(), ScrollOffset::default());
    }

    #[test]
    fn input_replaces_content() {
        let mut editor = editor();
        editor.on_input("orders");
        assert_eq!(
            editor.overlay().content(),
            r#"<span class="sql-table">orders</span>&nbsp;"#
        );
        editor.on_input("1");
        assert_eq!(
            editor.overlay().content(),
            r#"<span class="sql-number">1</span>&nbsp;"#
        );
    }

    #[test]
    fn clearing_input_restores_placeholder() {
        let mut editor = editor();
        editor.on_input("select");
        assert_eq!(editor.on_input("").content(), "&nbsp;");
    }

    #[test]
    fn trailing_newline_keeps_line() {
        let markup = overlay_markup("x\n", &SchemaMap::new());
        assert_eq!(markup, "x\n&nbsp;");
    }

    #[test]
    fn scroll_is_copied_verbatim() {
        let mut editor = editor();
        editor.on_input("select 1");
        let before = editor.overlay().content().to_string();
        let overlay = editor.on_scroll(ScrollOffset::new(120.5, 3.0));
        assert_eq!(overlay.scroll(), ScrollOffset::new(120.5, 3.0));
        assert_eq!(overlay.content(), before);
    }

    #[test]
    fn schema_reload_changes_classification() {
        let mut editor = Editor::new();
        assert_eq!(editor.on_input("users").content(), "users&nbsp;");
        editor
            .registry_mut()
            .replace(SchemaMap::from_iter([("users", ["id"])]));
        assert_eq!(
            editor.on_input("users").content(),
            r#"<span class="sql-table">users</span>&nbsp;"#
        );
    }
}

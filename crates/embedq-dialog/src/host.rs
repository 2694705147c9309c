use embedq_core::TextSelection;

/// Narrow view of the editor the plugin runs inside: the active selection,
/// the text node surrounding it, and content insertion. Keeps the dialog
/// flow independent of any particular editor runtime.
pub trait EditorHost {
    /// Anchor/focus offsets of the active selection, or `None` when the
    /// host reports no active range.
    fn selection(&self) -> Option<TextSelection>;

    /// Full text of the text node containing the selection.
    fn surrounding_text(&self) -> String;

    /// Replace the surrounding text node's content wholesale.
    fn set_surrounding_text(&mut self, text: String);

    /// Insert content at the caret.
    fn insert_content(&mut self, content: &str);
}

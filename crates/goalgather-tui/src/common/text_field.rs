//! Single-line text input used by forms, the search box and composers.
//!
//! The cursor is a char index, so multi-byte input never splits a code point.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Returns the contents and leaves the field empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Inserts pasted text. Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(if c == '\n' || c == '\r' { ' ' } else { c });
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    /// Applies an editing key. Returns false for keys the field does not handle.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char(c) if !ctrl => self.insert_char(c),
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.text.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text.chars().count(),
            _ => return false,
        }
        true
    }

    /// Text as drawn on screen, with every char replaced by a bullet when masked.
    pub fn display(&self, masked: bool) -> String {
        if masked {
            "•".repeat(self.text.chars().count())
        } else {
            self.text.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new();
        for c in "goal".chars() {
            assert!(field.handle_key(&key(KeyCode::Char(c))));
        }
        field.handle_key(&key(KeyCode::Backspace));
        assert_eq!(field.text(), "goa");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_insert_in_middle_of_multibyte_text() {
        let mut field = TextField::with_text("🎉!");
        field.handle_key(&key(KeyCode::Left));
        field.insert_char('⚽');
        assert_eq!(field.text(), "🎉⚽!");
        field.handle_key(&key(KeyCode::Home));
        field.delete();
        assert_eq!(field.text(), "⚽!");
    }

    #[test]
    fn test_paste_flattens_line_breaks() {
        let mut field = TextField::with_text("x");
        field.insert_str("see you\nat the gate");
        assert_eq!(field.text(), "xsee you at the gate");
        assert_eq!(field.cursor(), 20);
    }

    #[test]
    fn test_ctrl_u_clears_and_unknown_keys_pass_through() {
        let mut field = TextField::with_text("hello");
        assert!(field.handle_key(&KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(field.is_empty());
        assert!(!field.handle_key(&key(KeyCode::Enter)));
        assert!(!field.handle_key(&KeyEvent::new(
            KeyCode::Char('b'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_take_empties_field() {
        let mut field = TextField::with_text("hi");
        assert_eq!(field.take(), "hi");
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_masked_display() {
        let field = TextField::with_text("secret");
        assert_eq!(field.display(true), "••••••");
        assert_eq!(field.display(false), "secret");
    }
}

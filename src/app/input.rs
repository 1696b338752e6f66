use unicode_width::UnicodeWidthStr;

/// Editable text with a byte-offset cursor.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
    /// Maximum length in characters; extra input is dropped.
    pub max_len: Option<usize>,
    pub multiline: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..Self::default()
        }
    }

    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        if let Some(max) = self.max_len {
            if self.text.chars().count() >= max {
                return;
            }
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let is_space = |b: Option<&u8>| matches!(b, Some(b' ') | Some(b'\n'));
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && is_space(self.text.as_bytes().get(pos - 1)) {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && !is_space(self.text.as_bytes().get(pos - 1)) {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Zero-based (line, display column) of the cursor.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (line, before[line_start..].width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.insert_char(c);
        }
    }

    #[test]
    fn test_insert_and_delete() {
        let mut input = TextInput::new();
        typed(&mut input, "Hubli");
        input.delete_back();
        assert_eq!(input.text, "Hubl");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "ubl");
        input.move_end();
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_max_len_drops_extra_input() {
        let mut input = TextInput::with_max_len(10);
        typed(&mut input, "98765432101234");
        assert_eq!(input.text, "9876543210");
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let mut single = TextInput::new();
        typed(&mut single, "a");
        single.insert_newline();
        assert_eq!(single.text, "a");

        let mut multi = TextInput::multiline();
        typed(&mut multi, "Line one");
        multi.insert_newline();
        typed(&mut multi, "Line two");
        assert_eq!(multi.text, "Line one\nLine two");
        assert_eq!(multi.cursor_position(), (1, 8));
    }

    #[test]
    fn test_multibyte_navigation() {
        let mut input = TextInput::new();
        typed(&mut input, "Belagavi é");
        input.move_left();
        assert_eq!(input.cursor_position(), (0, 9));
        input.move_right();
        input.delete_back();
        assert_eq!(input.text, "Belagavi ");
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = TextInput::new();
        typed(&mut input, "KLE Society  ");
        input.delete_word_back();
        assert_eq!(input.text, "KLE ");
        input.delete_word_back();
        assert_eq!(input.text, "");
        input.delete_word_back();
        assert_eq!(input.cursor, 0);
    }
}

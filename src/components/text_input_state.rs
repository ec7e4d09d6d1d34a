/// One editing operation produced by a keystroke or an action.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Edit {
    Insert(String),
    DeleteBackward,
    DeleteForward,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    SelectAll,
}

impl Edit {
    pub fn changes_text(&self) -> bool {
        matches!(
            self,
            Edit::Insert(_) | Edit::DeleteBackward | Edit::DeleteForward
        )
    }
}

/// Caret-aware editing over a single-line value. Indices count chars.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputState {
    pub value: String,
    pub caret: usize,
    pub selection: Option<(usize, usize)>,
}

impl InputState {
    pub fn new(value: impl Into<String>, caret: usize) -> Self {
        let value = value.into();
        let caret = caret.min(value.chars().count());
        Self {
            value,
            caret,
            selection: None,
        }
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Applies `edit` and reports whether the value changed.
    pub fn apply(&mut self, edit: &Edit) -> bool {
        match edit {
            Edit::Insert(text) => self.insert_text(text),
            Edit::DeleteBackward => self.delete_backward(),
            Edit::DeleteForward => self.delete_forward(),
            Edit::MoveLeft => {
                self.move_left();
                false
            }
            Edit::MoveRight => {
                self.move_right();
                false
            }
            Edit::MoveHome => {
                self.set_caret(0);
                false
            }
            Edit::MoveEnd => {
                self.set_caret(self.len());
                false
            }
            Edit::SelectAll => {
                let len = self.len();
                self.selection = (len > 0).then_some((0, len));
                self.caret = len;
                false
            }
        }
    }

    pub fn set_caret(&mut self, next_caret: usize) {
        self.caret = next_caret.min(self.len());
        self.selection = None;
    }

    fn move_left(&mut self) {
        if let Some((start, _)) = self.selection {
            self.set_caret(start);
            return;
        }
        self.set_caret(self.caret.saturating_sub(1));
    }

    fn move_right(&mut self) {
        if let Some((_, end)) = self.selection {
            self.set_caret(end);
            return;
        }
        self.set_caret(self.caret + 1);
    }

    fn delete_backward(&mut self) -> bool {
        if let Some((start, end)) = self.selection {
            self.replace_char_range(start, end, "");
            return true;
        }
        if self.caret == 0 {
            return false;
        }
        let delete_start = self.caret - 1;
        self.replace_char_range(delete_start, self.caret, "");
        true
    }

    fn delete_forward(&mut self) -> bool {
        if let Some((start, end)) = self.selection {
            self.replace_char_range(start, end, "");
            return true;
        }
        if self.caret >= self.len() {
            return false;
        }
        self.replace_char_range(self.caret, self.caret + 1, "");
        true
    }

    fn insert_text(&mut self, text: &str) -> bool {
        let sanitized = text.replace(['\r', '\n'], "");
        if sanitized.is_empty() {
            return false;
        }
        let (start, end) = self.selection.unwrap_or((self.caret, self.caret));
        self.replace_char_range(start, end, &sanitized);
        true
    }

    pub fn replace_char_range(&mut self, start: usize, end: usize, insert: &str) {
        let len = self.len();
        let start = start.min(len);
        let end = end.min(len).max(start);
        let byte_start = Self::byte_index_at_char(&self.value, start);
        let byte_end = Self::byte_index_at_char(&self.value, end);
        self.value.replace_range(byte_start..byte_end, insert);
        self.caret = (start + insert.chars().count()).min(self.len());
        self.selection = None;
    }

    pub fn byte_index_at_char(value: &str, char_index: usize) -> usize {
        value
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(value.len())
    }
}

//! The floating menu item editor.

use crate::store::{ItemId, MenuItemStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Open,
}

/// Why a confirmation did not add an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmError {
    #[error("the menu item editor is not open")]
    NotOpen,

    #[error("a menu item needs a non-empty label")]
    EmptyLabel,
}

/// Opens on the trigger button, and commits its draft into a [`MenuItemStore`] on confirm.
///
/// The draft is cleared both when the editor opens and after a successful confirm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Editor {
    state: EditorState,
    draft: String,
    max_chars: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(crate::Config::default().max_label_chars)
    }
}

impl Editor {
    /// A closed editor whose draft holds at most `max_chars` characters.
    pub fn new(max_chars: usize) -> Self {
        Self {
            state: EditorState::Closed,
            draft: String::new(),
            max_chars,
        }
    }

    #[inline]
    pub fn state(&self) -> EditorState {
        self.state
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == EditorState::Open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The draft buffer, for binding to a text field. Only available while open.
    ///
    /// Call [`Self::clamp_draft`] after the text field is done with it.
    pub fn draft_mut(&mut self) -> Option<&mut String> {
        self.is_open().then_some(&mut self.draft)
    }

    /// Replace the draft. Ignored while closed.
    pub fn set_draft(&mut self, text: &str) {
        if self.is_open() {
            self.draft.clear();
            self.draft.push_str(text);
            self.clamp_draft();
        }
    }

    /// Cut the draft down to the character limit.
    pub fn clamp_draft(&mut self) {
        if let Some((byte_index, _)) = self.draft.char_indices().nth(self.max_chars) {
            self.draft.truncate(byte_index);
        }
    }

    /// The label a confirm would add right now, if any.
    pub fn pending_label(&self) -> Option<&str> {
        let label = self.draft.trim();
        (self.is_open() && !label.is_empty()).then_some(label)
    }

    /// Whether the confirm button should be enabled.
    pub fn can_confirm(&self) -> bool {
        self.pending_label().is_some()
    }

    /// `Closed → Open`, with an empty draft.
    ///
    /// Does nothing if already open; the draft is kept. Returns `true` if the editor opened.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.draft.clear();
        self.state = EditorState::Open;
        true
    }

    /// `Open → Closed`, adding the trimmed draft to `store`.
    ///
    /// # Errors
    /// [`ConfirmError::NotOpen`] if the editor is closed, and [`ConfirmError::EmptyLabel`]
    /// if the draft is empty or only whitespace. In both cases nothing changes.
    pub fn confirm(&mut self, store: &mut MenuItemStore) -> Result<ItemId, ConfirmError> {
        if !self.is_open() {
            return Err(ConfirmError::NotOpen);
        }
        let label = self.pending_label().ok_or(ConfirmError::EmptyLabel)?;
        let id = store.append(label);
        self.draft.clear();
        self.state = EditorState::Closed;
        Ok(id)
    }
}

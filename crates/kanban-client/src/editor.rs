//! Inline task editing
//!
//! `Viewing -> Editing -> Viewing`. Leaving `Editing` happens exactly once
//! per edit, so a blur that follows Enter or Escape is a no-op.

use crate::models::TaskId;
use crate::state::BoardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing,
}

/// Keys the edit input reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
    Other,
}

impl EditKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => EditKey::Enter,
            "Escape" | "Esc" => EditKey::Escape,
            _ => EditKey::Other,
        }
    }
}

/// How an edit ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditExit {
    /// Save this (trimmed) text
    Commit(String),
    /// Input was blank; nothing to save
    Unchanged,
    /// Escape pressed
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEditor {
    task_id: TaskId,
    displayed: String,
    input: String,
    state: EditState,
}

impl TaskEditor {
    pub fn new(task_id: TaskId, displayed: impl Into<String>) -> Self {
        let displayed = displayed.into();
        Self {
            task_id,
            input: displayed.clone(),
            displayed,
            state: EditState::Viewing,
        }
    }

    /// Editor for a task in the current snapshot, already in `Editing`
    pub fn begin_for(state: &BoardState, task_id: TaskId) -> Option<Self> {
        let task = state.board()?.task(task_id)?;
        let mut editor = Self::new(task_id, task.text.clone());
        editor.begin();
        Some(editor)
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == EditState::Editing
    }

    /// Enter editing with the input pre-filled from the displayed text
    pub fn begin(&mut self) {
        self.input = self.displayed.clone();
        self.state = EditState::Editing;
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        if self.is_editing() {
            self.input = value.into();
        }
    }

    pub fn key(&mut self, key: EditKey) -> Option<EditExit> {
        match key {
            EditKey::Enter => self.finish(),
            EditKey::Escape => self.cancel(),
            EditKey::Other => None,
        }
    }

    pub fn blur(&mut self) -> Option<EditExit> {
        self.finish()
    }

    /// Enter or blur. `None` if not editing.
    pub fn finish(&mut self) -> Option<EditExit> {
        if !self.is_editing() {
            return None;
        }
        self.state = EditState::Viewing;
        let text = self.input.trim();
        if text.is_empty() {
            self.input = self.displayed.clone();
            Some(EditExit::Unchanged)
        } else {
            Some(EditExit::Commit(text.to_string()))
        }
    }

    /// Escape. `None` if not editing.
    pub fn cancel(&mut self) -> Option<EditExit> {
        if !self.is_editing() {
            return None;
        }
        self.state = EditState::Viewing;
        self.input = self.displayed.clone();
        Some(EditExit::Cancelled)
    }

    /// The server accepted `text`
    pub fn confirm(&mut self, text: &str) {
        self.displayed = text.to_string();
        self.input = self.displayed.clone();
    }

    /// The update failed; show the old text again
    pub fn reject(&mut self) {
        self.input = self.displayed.clone();
    }
}

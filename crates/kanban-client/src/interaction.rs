//! Interaction Controller
//!
//! Turns clicks on the board into actions, runs the prompt/confirm step,
//! issues the API call and reloads the board. API failures are logged and
//! swallowed: the caller only learns whether a fresh board came back.

use tracing::{debug, error, info};

use crate::api::BoardApi;
use crate::editor::{EditExit, TaskEditor};
use crate::models::{Board, ColumnId, TaskId};

pub const ADD_COLUMN_PROMPT: &str = "Enter column title:";
pub const ADD_TASK_PROMPT: &str = "Enter task text:";
pub const DELETE_COLUMN_CONFIRM: &str = "Delete this column and all its tasks?";
pub const DELETE_TASK_CONFIRM: &str = "Are you sure you want to delete this task?";

/// Role markers carried by clickable board elements (CSS class names)
pub mod role {
    pub const ADD_COLUMN: &str = "add-column-btn";
    pub const DELETE_COLUMN: &str = "delete-column-btn";
    pub const ADD_TASK: &str = "add-task-btn";
    pub const EDIT_TASK: &str = "edit-btn";
    pub const DELETE_TASK: &str = "delete-btn";
}

/// Blocking user input, `window.prompt`/`window.confirm` in the browser
pub trait UserPrompt {
    /// `None` when the user cancelled
    fn prompt(&self, message: &str) -> Option<String>;
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddColumn,
    DeleteColumn(ColumnId),
    AddTask(ColumnId),
    EditTask(TaskId),
    DeleteTask(TaskId),
}

impl Action {
    /// Classify a click from the element's role marker and the ids of the
    /// task/column enclosing it. Clicks that resolve to nothing are ignored.
    pub fn classify<'a>(
        roles: impl IntoIterator<Item = &'a str>,
        task_id: Option<TaskId>,
        column_id: Option<ColumnId>,
    ) -> Option<Action> {
        for r in roles {
            let action = match r {
                role::ADD_COLUMN => Some(Action::AddColumn),
                role::DELETE_COLUMN => column_id.map(Action::DeleteColumn),
                role::ADD_TASK => column_id.map(Action::AddTask),
                role::EDIT_TASK => task_id.map(Action::EditTask),
                role::DELETE_TASK => task_id.map(Action::DeleteTask),
                _ => continue,
            };
            return action;
        }
        None
    }
}

/// Result of running an action
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Cancelled or blank input; nothing was sent
    Aborted,
    /// Fresh snapshot to install
    Reloaded(Board),
    /// Reload failed; keep showing the old board
    Stale,
    /// Handled by the caller (inline editing)
    Ignored,
}

#[derive(Debug, Clone)]
pub struct BoardController<A> {
    api: A,
}

impl<A: BoardApi> BoardController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the board; `None` (logged) on failure
    pub async fn load(&self) -> Option<Board> {
        match self.api.fetch_board().await {
            Ok(board) => {
                debug!(columns = board.columns.len(), tasks = board.task_count(), "board loaded");
                Some(board)
            }
            Err(e) => {
                error!("Failed to load board data: {}", e);
                None
            }
        }
    }

    async fn reload(&self) -> Outcome {
        match self.load().await {
            Some(board) => Outcome::Reloaded(board),
            None => Outcome::Stale,
        }
    }

    /// Run a board action: ask, mutate, reload
    pub async fn run(&self, action: Action, ui: &dyn UserPrompt) -> Outcome {
        info!(?action, "dispatch");
        match action {
            Action::AddColumn => {
                let Some(title) = ask(ui, ADD_COLUMN_PROMPT) else {
                    return Outcome::Aborted;
                };
                if let Err(e) = self.api.create_column(&title).await {
                    error!("Failed to create column: {}", e);
                }
            }
            Action::DeleteColumn(column_id) => {
                if !ui.confirm(DELETE_COLUMN_CONFIRM) {
                    return Outcome::Aborted;
                }
                if let Err(e) = self.api.delete_column(column_id).await {
                    error!("Failed to delete column {}: {}", column_id, e);
                }
            }
            Action::AddTask(column_id) => {
                let Some(text) = ask(ui, ADD_TASK_PROMPT) else {
                    return Outcome::Aborted;
                };
                if let Err(e) = self.api.create_task(column_id, &text).await {
                    error!("Failed to create task in column {}: {}", column_id, e);
                }
            }
            Action::DeleteTask(task_id) => {
                if !ui.confirm(DELETE_TASK_CONFIRM) {
                    return Outcome::Aborted;
                }
                if let Err(e) = self.api.delete_task(task_id).await {
                    error!("Failed to delete task {}: {}", task_id, e);
                }
            }
            Action::EditTask(task_id) => {
                debug!(task_id, "edit actions are handled inline");
                return Outcome::Ignored;
            }
        }
        self.reload().await
    }

    /// Send a task's new text; `true` once the server accepted it
    pub async fn save_task_text(&self, task_id: TaskId, text: &str) -> bool {
        match self.api.update_task(task_id, text).await {
            Ok(_) => true,
            Err(e) => {
                error!("Failed to update task {}: {}", task_id, e);
                false
            }
        }
    }

    /// Resolve how an edit ended. Returns the text to display when it changed.
    pub async fn settle_edit(&self, editor: &mut TaskEditor, exit: EditExit) -> Option<String> {
        match exit {
            EditExit::Commit(text) => {
                if self.save_task_text(editor.task_id(), &text).await {
                    editor.confirm(&text);
                    Some(text)
                } else {
                    editor.reject();
                    None
                }
            }
            EditExit::Unchanged | EditExit::Cancelled => None,
        }
    }
}

/// Prompt and trim; blank or cancelled input yields `None`
fn ask(ui: &dyn UserPrompt, message: &str) -> Option<String> {
    let answer = ui.prompt(message)?;
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

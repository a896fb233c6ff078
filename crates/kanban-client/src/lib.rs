//! Kanban Board Client Core
//!
//! Everything the board UI needs that doesn't touch the DOM: the REST
//! client, the board snapshot, the render model and the controllers that
//! drive mutate-then-reload cycles.

pub mod api;
pub mod config;
pub mod drag;
pub mod editor;
pub mod error;
pub mod interaction;
pub mod models;
pub mod render;
pub mod state;

#[cfg(test)]
mod testing;

pub use api::{BoardApi, HttpBoardApi};
pub use config::ClientConfig;
pub use drag::TaskDrop;
pub use editor::{EditExit, EditKey, EditState, TaskEditor};
pub use error::{ApiError, Result};
pub use interaction::{Action, BoardController, Outcome, UserPrompt};
pub use models::{Board, Column, ColumnId, ColumnRole, DoneColumnRule, Task, TaskId, TaskStatus};
pub use render::{render_board, BoardView, ColumnView, TaskView};
pub use state::BoardState;

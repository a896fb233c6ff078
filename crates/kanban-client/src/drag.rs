//! Drag Controller
//!
//! Every column is a drop target in one shared group. A drop resolves the
//! dragged task and destination column, asks the server to move it and, once
//! confirmed, patches the snapshot so the task shows up in its new column
//! with the status the server reported (or, failing that, the one implied by
//! the column's role).

use tracing::{debug, error};

use crate::api::BoardApi;
use crate::interaction::BoardController;
use crate::models::{ColumnId, MoveAck, TaskId, TaskStatus};
use crate::state::BoardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDrop {
    pub task_id: TaskId,
    pub to_column: ColumnId,
}

impl TaskDrop {
    /// Resolve a raw drop against the snapshot. `None` for drops back into
    /// the same column or for ids the board doesn't know.
    pub fn resolve(state: &BoardState, task_id: TaskId, to_column: ColumnId) -> Option<Self> {
        let board = state.board()?;
        board.column(to_column)?;
        let from = board.column_of(task_id)?;
        if from.id == to_column {
            debug!(task_id, to_column, "drop into same column ignored");
            return None;
        }
        Some(TaskDrop { task_id, to_column })
    }

    /// Patch `state` with a confirmed move. The server's `new_status` wins
    /// over the destination's role. Returns the task's new status.
    pub fn apply(&self, state: &mut BoardState, ack: &MoveAck) -> Option<TaskStatus> {
        state.apply_move(self.task_id, self.to_column, ack.new_status)
    }
}

impl<A: BoardApi> BoardController<A> {
    /// Issue the move request; the server's acknowledgement once it confirmed it
    pub async fn move_task(&self, drop: TaskDrop) -> Option<MoveAck> {
        match self.api().move_task(drop.task_id, drop.to_column).await {
            Ok(ack) => {
                debug!(task_id = drop.task_id, to_column = drop.to_column, reply = ?ack.message, "task moved");
                Some(ack)
            }
            Err(e) => {
                error!("Failed to move task {}: {}", drop.task_id, e);
                None
            }
        }
    }
}

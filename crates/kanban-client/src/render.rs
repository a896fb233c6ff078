//! Render Model
//!
//! Flattens a board snapshot into the column/task tree the UI draws.
//! Pure: the same snapshot always yields the same view, nothing is carried
//! over from earlier passes.

use crate::models::{Board, Column, ColumnId, Task, TaskId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    pub is_done_column: bool,
    pub tasks: Vec<TaskView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub id: TaskId,
    pub text: String,
    pub done: bool,
}

impl TaskView {
    /// CSS classes for the task element
    pub fn class(&self) -> &'static str {
        if self.done {
            "task done"
        } else {
            "task"
        }
    }
}

impl ColumnView {
    pub fn class(&self) -> &'static str {
        if self.is_done_column {
            "column done-column"
        } else {
            "column"
        }
    }
}

impl BoardView {
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter().map(|t| t.id))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

pub fn render_board(board: &Board) -> BoardView {
    BoardView {
        columns: board.columns.iter().map(render_column).collect(),
    }
}

fn render_column(column: &Column) -> ColumnView {
    ColumnView {
        id: column.id,
        title: column.title.clone(),
        is_done_column: column.is_done_column(),
        tasks: column.tasks.iter().map(render_task).collect(),
    }
}

fn render_task(task: &Task) -> TaskView {
    TaskView {
        id: task.id,
        text: task.text.clone(),
        done: task.status.is_done(),
    }
}

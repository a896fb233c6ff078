//! In-memory board server and scripted prompts for controller tests

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::BoardApi;
use crate::error::{ApiError, Result};
use crate::interaction::UserPrompt;
use crate::models::{Ack, Board, Column, ColumnId, ColumnRole, MoveAck, Task, TaskId, TaskStatus, TaskUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchBoard,
    CreateTask(ColumnId, String),
    UpdateTask(TaskId, String),
    DeleteTask(TaskId),
    MoveTask(TaskId, ColumnId),
    CreateColumn(String),
    DeleteColumn(ColumnId),
}

#[derive(Default)]
struct Inner {
    board: Board,
    calls: Vec<Call>,
    fail_fetch: bool,
    fail_mutations: bool,
    omit_move_status: bool,
}

/// Behaves like the board server: ids are max + 1, moves into column 3
/// mark the task done, deleting a column drops its tasks.
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Rc<RefCell<Inner>>,
}

impl FakeApi {
    pub fn with_board(board: Board) -> Self {
        let api = Self::default();
        api.inner.borrow_mut().board = board;
        api
    }

    pub fn with_default_board() -> Self {
        let column = |id, title: &str, tasks| Column {
            id,
            title: title.to_string(),
            role: ColumnRole::Normal,
            tasks,
        };
        Self::with_board(Board {
            columns: vec![
                column(1, "To Do", vec![Task { id: 101, text: "Write docs".into(), status: TaskStatus::Active }]),
                column(2, "Doing", vec![]),
                column(3, "Done", vec![]),
            ],
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.borrow_mut().calls.clear();
    }

    pub fn board(&self) -> Board {
        self.inner.borrow().board.clone()
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.inner.borrow_mut().fail_fetch = fail;
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.inner.borrow_mut().fail_mutations = fail;
    }

    /// Answer moves without `new_status`, like older servers
    pub fn omit_move_status(&self, omit: bool) {
        self.inner.borrow_mut().omit_move_status = omit;
    }

    fn record(&self, call: Call) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        let failing = match call {
            Call::FetchBoard => inner.fail_fetch,
            _ => inner.fail_mutations,
        };
        inner.calls.push(call);
        if failing {
            Err(ApiError::status(StatusCode::INTERNAL_SERVER_ERROR, "injected failure"))
        } else {
            Ok(())
        }
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::status(StatusCode::NOT_FOUND, format!("{} not found", what))
    }
}

#[async_trait(?Send)]
impl BoardApi for FakeApi {
    async fn fetch_board(&self) -> Result<Board> {
        self.record(Call::FetchBoard)?;
        Ok(self.board())
    }

    async fn create_task(&self, column_id: ColumnId, text: &str) -> Result<Task> {
        self.record(Call::CreateTask(column_id, text.to_string()))?;
        let mut inner = self.inner.borrow_mut();
        let board = &mut inner.board;
        let id = board
            .columns
            .iter()
            .flat_map(|c| c.tasks.iter().map(|t| t.id))
            .max()
            .unwrap_or(100)
            + 1;
        let task = Task { id, text: text.to_string(), status: TaskStatus::Active };
        if let Some(column) = board.columns.iter_mut().find(|c| c.id == column_id) {
            column.tasks.push(task.clone());
        }
        Ok(task)
    }

    async fn update_task(&self, task_id: TaskId, text: &str) -> Result<TaskUpdate> {
        self.record(Call::UpdateTask(task_id, text.to_string()))?;
        let mut inner = self.inner.borrow_mut();
        let task = inner
            .board
            .columns
            .iter_mut()
            .flat_map(|c| c.tasks.iter_mut())
            .find(|t| t.id == task_id)
            .ok_or_else(|| Self::not_found("Task"))?;
        task.text = text.to_string();
        Ok(TaskUpdate::Ack(Ack { success: true, error: None }))
    }

    async fn delete_task(&self, task_id: TaskId) -> Result<Ack> {
        self.record(Call::DeleteTask(task_id))?;
        let mut inner = self.inner.borrow_mut();
        let column = inner
            .board
            .columns
            .iter_mut()
            .find(|c| c.tasks.iter().any(|t| t.id == task_id))
            .ok_or_else(|| Self::not_found("Task"))?;
        column.tasks.retain(|t| t.id != task_id);
        Ok(Ack { success: true, error: None })
    }

    async fn move_task(&self, task_id: TaskId, new_column_id: ColumnId) -> Result<MoveAck> {
        self.record(Call::MoveTask(task_id, new_column_id))?;
        let mut inner = self.inner.borrow_mut();
        let omit_status = inner.omit_move_status;
        let board = &mut inner.board;
        if board.column(new_column_id).is_none() {
            return Err(Self::not_found("Column"));
        }
        let source = board
            .columns
            .iter_mut()
            .find(|c| c.tasks.iter().any(|t| t.id == task_id))
            .ok_or_else(|| Self::not_found("Task"))?;
        let index = source.tasks.iter().position(|t| t.id == task_id).unwrap_or_default();
        let mut task = source.tasks.remove(index);
        task.status = if new_column_id == 3 { TaskStatus::Done } else { TaskStatus::Active };
        let status = task.status;
        if let Some(destination) = board.columns.iter_mut().find(|c| c.id == new_column_id) {
            destination.tasks.push(task);
        }
        Ok(MoveAck {
            success: true,
            message: Some(format!("Task {} moved to column {}.", task_id, new_column_id)),
            new_status: (!omit_status).then_some(status),
            error: None,
        })
    }

    async fn create_column(&self, title: &str) -> Result<Column> {
        self.record(Call::CreateColumn(title.to_string()))?;
        let mut inner = self.inner.borrow_mut();
        let id = inner.board.columns.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let column = Column { id, title: title.to_string(), role: ColumnRole::Normal, tasks: vec![] };
        inner.board.columns.push(column.clone());
        Ok(column)
    }

    async fn delete_column(&self, column_id: ColumnId) -> Result<Ack> {
        self.record(Call::DeleteColumn(column_id))?;
        let mut inner = self.inner.borrow_mut();
        let before = inner.board.columns.len();
        inner.board.columns.retain(|c| c.id != column_id);
        if inner.board.columns.len() == before {
            return Err(Self::not_found("Column"));
        }
        Ok(Ack { success: true, error: None })
    }
}

/// Answers every prompt/confirm the same way and records the messages
#[derive(Default)]
pub struct ScriptedPrompt {
    answer: Option<String>,
    confirm: bool,
    prompts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: Option<&str>) -> Self {
        Self {
            answer: answer.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn confirming(confirm: bool) -> Self {
        Self {
            confirm,
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn prompt(&self, message: &str) -> Option<String> {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer.clone()
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm
    }
}

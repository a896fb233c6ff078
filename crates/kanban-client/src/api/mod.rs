//! Board API
//!
//! REST bindings for the board server, organized by domain.

mod board;
mod client;
mod column;
mod task;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Ack, Board, Column, ColumnId, MoveAck, Task, TaskId, TaskUpdate};

pub use client::HttpBoardApi;

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct CreateTaskArgs<'a> {
    pub column_id: ColumnId,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateTaskArgs<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct MoveTaskArgs {
    pub new_column_id: ColumnId,
}

#[derive(Debug, Serialize)]
pub struct CreateColumnArgs<'a> {
    pub title: &'a str,
}

/// Operations the board server offers
///
/// Futures are `!Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait BoardApi {
    async fn fetch_board(&self) -> Result<Board>;
    async fn create_task(&self, column_id: ColumnId, text: &str) -> Result<Task>;
    async fn update_task(&self, task_id: TaskId, text: &str) -> Result<TaskUpdate>;
    async fn delete_task(&self, task_id: TaskId) -> Result<Ack>;
    async fn move_task(&self, task_id: TaskId, new_column_id: ColumnId) -> Result<MoveAck>;
    async fn create_column(&self, title: &str) -> Result<Column>;
    async fn delete_column(&self, column_id: ColumnId) -> Result<Ack>;
}

#[async_trait(?Send)]
impl BoardApi for HttpBoardApi {
    async fn fetch_board(&self) -> Result<Board> {
        self.get_board().await
    }

    async fn create_task(&self, column_id: ColumnId, text: &str) -> Result<Task> {
        self.post_task(&CreateTaskArgs { column_id, text }).await
    }

    async fn update_task(&self, task_id: TaskId, text: &str) -> Result<TaskUpdate> {
        self.put_task(task_id, &UpdateTaskArgs { text }).await
    }

    async fn delete_task(&self, task_id: TaskId) -> Result<Ack> {
        self.remove_task(task_id).await
    }

    async fn move_task(&self, task_id: TaskId, new_column_id: ColumnId) -> Result<MoveAck> {
        self.post_move(task_id, &MoveTaskArgs { new_column_id }).await
    }

    async fn create_column(&self, title: &str) -> Result<Column> {
        self.post_column(&CreateColumnArgs { title }).await
    }

    async fn delete_column(&self, column_id: ColumnId) -> Result<Ack> {
        self.remove_column(column_id).await
    }
}

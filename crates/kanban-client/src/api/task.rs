//! Task endpoints

use reqwest::Method;

use super::{CreateTaskArgs, HttpBoardApi, MoveTaskArgs, UpdateTaskArgs};
use crate::error::{ApiError, Result};
use crate::models::{Ack, MoveAck, Task, TaskId, TaskUpdate};

impl HttpBoardApi {
    /// POST /api/task
    pub async fn post_task(&self, args: &CreateTaskArgs<'_>) -> Result<Task> {
        let builder = self.request(Method::POST, "/api/task")?.json(args);
        self.send_json(builder).await
    }

    /// PUT /api/task/{id}
    pub async fn put_task(&self, task_id: TaskId, args: &UpdateTaskArgs<'_>) -> Result<TaskUpdate> {
        let endpoint = format!("/api/task/{}", task_id);
        let builder = self.request(Method::PUT, &endpoint)?.json(args);
        let update: TaskUpdate = self.send_json(builder).await?;
        match update {
            TaskUpdate::Ack(Ack { success: false, error, .. }) => Err(ApiError::Rejected(
                error.unwrap_or_else(|| format!("update of task {} rejected", task_id)),
            )),
            update => Ok(update),
        }
    }

    /// DELETE /api/task/{id}
    pub async fn remove_task(&self, task_id: TaskId) -> Result<Ack> {
        let endpoint = format!("/api/task/{}", task_id);
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_ack(builder).await
    }

    /// POST /api/task/{id}/move
    pub async fn post_move(&self, task_id: TaskId, args: &MoveTaskArgs) -> Result<MoveAck> {
        let endpoint = format!("/api/task/{}/move", task_id);
        let builder = self.request(Method::POST, &endpoint)?.json(args);
        let ack: MoveAck = self.send_json(builder).await?;
        if ack.success {
            Ok(ack)
        } else {
            Err(ApiError::Rejected(
                ack.error.unwrap_or_else(|| format!("move of task {} rejected", task_id)),
            ))
        }
    }
}

//! Column endpoints

use reqwest::Method;

use super::{CreateColumnArgs, HttpBoardApi};
use crate::error::Result;
use crate::models::{Ack, Column, ColumnId};

impl HttpBoardApi {
    /// POST /api/column
    pub async fn post_column(&self, args: &CreateColumnArgs<'_>) -> Result<Column> {
        let builder = self.request(Method::POST, "/api/column")?.json(args);
        self.send_json(builder).await
    }

    /// DELETE /api/column/{id}
    ///
    /// The server drops the column's tasks along with it.
    pub async fn remove_column(&self, column_id: ColumnId) -> Result<Ack> {
        let endpoint = format!("/api/column/{}", column_id);
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_ack(builder).await
    }
}

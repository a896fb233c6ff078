//! Board snapshot endpoint

use reqwest::Method;

use super::HttpBoardApi;
use crate::error::Result;
use crate::models::Board;

impl HttpBoardApi {
    /// GET /api/board
    pub async fn get_board(&self) -> Result<Board> {
        let builder = self.request(Method::GET, "/api/board")?;
        self.send_json(builder).await
    }
}

//! Board Models
//!
//! Data structures matching the board API payloads.

use serde::{Deserialize, Serialize};

pub type ColumnId = u32;
pub type TaskId = u32;

/// Task status as stored by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Active,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Active => "active",
            TaskStatus::Done => "done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

/// Column role, decides the status a task takes when it lands in the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    #[default]
    Normal,
    Done,
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub status: TaskStatus,
}

/// Column data structure (matches backend)
///
/// `role` is optional on the wire; when the server omits it the role is
/// resolved from [`DoneColumnRule`] once the snapshot is installed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub role: ColumnRole,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn is_done_column(&self) -> bool {
        self.role == ColumnRole::Done
    }
}

/// Full board snapshot as returned by `GET /api/board`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Column currently holding the task
    pub fn column_of(&self, task_id: TaskId) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.tasks.iter().any(|t| t.id == task_id))
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter())
            .find(|t| t.id == task_id)
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Assign roles to columns the server left unmarked
    pub fn resolve_roles(&mut self, rule: &DoneColumnRule) {
        for column in &mut self.columns {
            if column.role == ColumnRole::Normal && rule.matches(column) {
                column.role = ColumnRole::Done;
            }
        }
    }
}

/// How the client recognizes the "done" column when the server doesn't say
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoneColumnRule {
    /// Column with this id is the done column
    ById(ColumnId),
    /// Column whose title equals this (case-insensitive) is the done column
    ByTitle(String),
    /// No column marks tasks done
    Disabled,
}

impl Default for DoneColumnRule {
    fn default() -> Self {
        // The board server flips status to done on moves into column 3.
        DoneColumnRule::ById(3)
    }
}

impl DoneColumnRule {
    pub fn matches(&self, column: &Column) -> bool {
        match self {
            DoneColumnRule::ById(id) => column.id == *id,
            DoneColumnRule::ByTitle(title) => column.title.trim().eq_ignore_ascii_case(title.trim()),
            DoneColumnRule::Disabled => false,
        }
    }

    /// Parse a rule from a config string: a number, `none`, or a column title
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }
        if raw.eq_ignore_ascii_case("none") {
            return DoneColumnRule::Disabled;
        }
        match raw.parse::<ColumnId>() {
            Ok(id) => DoneColumnRule::ById(id),
            Err(_) => DoneColumnRule::ByTitle(raw.to_string()),
        }
    }
}

/// Plain `{success, error}` acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Response of `POST /api/task/{id}/move`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveAck {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub new_status: Option<TaskStatus>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `PUT /api/task/{id}`: either the updated task or an ack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskUpdate {
    Task(Task),
    Ack(Ack),
}

impl TaskUpdate {
    pub fn is_success(&self) -> bool {
        match self {
            TaskUpdate::Task(_) => true,
            TaskUpdate::Ack(ack) => ack.success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        serde_json::from_str(
            r#"{"columns":[
                {"id":1,"title":"To Do","tasks":[{"id":101,"text":"Write docs","status":"active"}]},
                {"id":2,"title":"Doing","tasks":[]},
                {"id":3,"title":"Done","tasks":[{"id":102,"text":"Ship","status":"done"}]}
            ]}"#,
        )
        .expect("board json")
    }

    #[test]
    fn test_board_parses_server_payload() {
        let board = sample_board();
        assert_eq!(board.columns.len(), 3);
        assert_eq!(board.columns[0].tasks[0].status, TaskStatus::Active);
        assert_eq!(board.columns[2].tasks[0].status, TaskStatus::Done);
        assert!(board.columns.iter().all(|c| c.role == ColumnRole::Normal));
        assert_eq!(board.task_count(), 2);
        assert_eq!(board.column_of(102).map(|c| c.id), Some(3));
    }

    #[test]
    fn test_resolve_roles_by_id() {
        let mut board = sample_board();
        board.resolve_roles(&DoneColumnRule::default());
        let done: Vec<_> = board.columns.iter().filter(|c| c.is_done_column()).map(|c| c.id).collect();
        assert_eq!(done, vec![3]);
    }

    #[test]
    fn test_resolve_roles_keeps_server_role() {
        let mut board: Board = serde_json::from_str(
            r#"{"columns":[{"id":7,"title":"Finished","role":"done","tasks":[]}]}"#,
        )
        .unwrap();
        board.resolve_roles(&DoneColumnRule::Disabled);
        assert!(board.columns[0].is_done_column());
    }

    #[test]
    fn test_done_rule_parse() {
        assert_eq!(DoneColumnRule::parse("3"), DoneColumnRule::ById(3));
        assert_eq!(DoneColumnRule::parse(" none "), DoneColumnRule::Disabled);
        assert_eq!(DoneColumnRule::parse("Finished"), DoneColumnRule::ByTitle("Finished".into()));
        assert_eq!(DoneColumnRule::parse(""), DoneColumnRule::ById(3));

        let rule = DoneColumnRule::ByTitle("done".into());
        let column = Column { id: 9, title: " Done ".into(), role: ColumnRole::Normal, tasks: vec![] };
        assert!(rule.matches(&column));
    }

    #[test]
    fn test_task_update_accepts_task_or_ack() {
        let task: TaskUpdate = serde_json::from_str(r#"{"id":1,"text":"x","status":"active"}"#).unwrap();
        assert!(matches!(task, TaskUpdate::Task(_)));

        let ack: TaskUpdate = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(ack, TaskUpdate::Ack(_)));
        assert!(ack.is_success());

        let rejected: TaskUpdate = serde_json::from_str(r#"{"success":false,"error":"Task not found"}"#).unwrap();
        assert!(!rejected.is_success());
    }
}

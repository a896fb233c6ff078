//! Board State
//!
//! Last snapshot fetched from the server. Reloads replace it wholesale;
//! local patches are only applied after the server confirmed the change.

use crate::models::{Board, ColumnId, DoneColumnRule, TaskId, TaskStatus};
use crate::render::{render_board, BoardView};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    snapshot: Option<Board>,
    done_column: DoneColumnRule,
    /// Bumped on every replace or patch
    version: u64,
}

impl BoardState {
    pub fn new(done_column: DoneColumnRule) -> Self {
        Self {
            snapshot: None,
            done_column,
            version: 0,
        }
    }

    pub fn board(&self) -> Option<&Board> {
        self.snapshot.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn done_column(&self) -> &DoneColumnRule {
        &self.done_column
    }

    /// Install a freshly fetched board, discarding the previous one
    pub fn replace(&mut self, mut board: Board) {
        board.resolve_roles(&self.done_column);
        self.snapshot = Some(board);
        self.version += 1;
    }

    /// Whether dropping a task into `column_id` marks it done
    pub fn is_done_column(&self, column_id: ColumnId) -> bool {
        self.snapshot
            .as_ref()
            .and_then(|b| b.column(column_id))
            .map(|c| c.is_done_column())
            .unwrap_or(false)
    }

    /// Move a task after the server confirmed it; appends to the destination.
    /// The task takes `confirmed` when the server reported a status, otherwise
    /// the one implied by the destination's role.
    ///
    /// Returns the status the task now has, or `None` if either end is unknown.
    pub fn apply_move(&mut self, task_id: TaskId, to: ColumnId, confirmed: Option<TaskStatus>) -> Option<TaskStatus> {
        let status = confirmed.unwrap_or(if self.is_done_column(to) {
            TaskStatus::Done
        } else {
            TaskStatus::Active
        });
        let board = self.snapshot.as_mut()?;
        board.column(to)?;

        let source = board
            .columns
            .iter_mut()
            .find(|c| c.tasks.iter().any(|t| t.id == task_id))?;
        let index = source.tasks.iter().position(|t| t.id == task_id)?;
        let mut task = source.tasks.remove(index);
        task.status = status;

        let destination = board.columns.iter_mut().find(|c| c.id == to)?;
        destination.tasks.push(task);
        self.version += 1;
        Some(status)
    }

    /// Replace a task's text after a confirmed update
    pub fn set_task_text(&mut self, task_id: TaskId, text: &str) -> bool {
        let Some(board) = self.snapshot.as_mut() else {
            return false;
        };
        let task = board
            .columns
            .iter_mut()
            .flat_map(|c| c.tasks.iter_mut())
            .find(|t| t.id == task_id);
        match task {
            Some(task) => {
                task.text = text.to_string();
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Render the current snapshot (empty board before the first load)
    pub fn view(&self) -> BoardView {
        match &self.snapshot {
            Some(board) => render_board(board),
            None => BoardView::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, ColumnRole, Task};

    fn column(id: ColumnId, title: &str, tasks: Vec<Task>) -> Column {
        Column { id, title: title.into(), role: ColumnRole::Normal, tasks }
    }

    fn task(id: TaskId, text: &str, status: TaskStatus) -> Task {
        Task { id, text: text.into(), status }
    }

    fn sample_board() -> Board {
        Board {
            columns: vec![
                column(1, "To Do", vec![task(101, "Write docs", TaskStatus::Active), task(103, "Plan", TaskStatus::Active)]),
                column(2, "Doing", vec![]),
                column(3, "Done", vec![task(102, "Ship", TaskStatus::Done)]),
            ],
        }
    }

    #[test]
    fn test_replace_resolves_done_column() {
        let mut state = BoardState::default();
        assert!(!state.is_loaded());
        state.replace(sample_board());
        assert!(state.is_done_column(3));
        assert!(!state.is_done_column(1));
        assert!(!state.is_done_column(99));
        assert_eq!(state.version(), 1);
    }

    #[test]
    fn test_replace_discards_previous_snapshot() {
        let mut state = BoardState::default();
        state.replace(sample_board());
        state.replace(Board { columns: vec![column(5, "Only", vec![])] });
        let board = state.board().unwrap();
        assert_eq!(board.columns.len(), 1);
        assert!(board.task(101).is_none());
    }

    #[test]
    fn test_apply_move_into_done_column() {
        let mut state = BoardState::default();
        state.replace(sample_board());

        assert_eq!(state.apply_move(101, 3, None), Some(TaskStatus::Done));
        let board = state.board().unwrap();
        assert_eq!(board.column_of(101).map(|c| c.id), Some(3));
        let ids: Vec<_> = board.column(3).unwrap().tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![102, 101]);
        assert_eq!(board.column(1).unwrap().tasks.len(), 1);
    }

    #[test]
    fn test_apply_move_out_of_done_column() {
        let mut state = BoardState::default();
        state.replace(sample_board());
        assert_eq!(state.apply_move(102, 2, None), Some(TaskStatus::Active));
        assert_eq!(state.board().unwrap().task(102).unwrap().status, TaskStatus::Active);
    }

    #[test]
    fn test_apply_move_unknown_destination_is_noop() {
        let mut state = BoardState::default();
        state.replace(sample_board());
        let before = state.clone();
        assert_eq!(state.apply_move(101, 42, None), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_move_with_rule_disabled() {
        let mut state = BoardState::new(DoneColumnRule::Disabled);
        state.replace(sample_board());
        assert_eq!(state.apply_move(101, 3, None), Some(TaskStatus::Active));
    }

    #[test]
    fn test_apply_move_prefers_server_status() {
        let mut state = BoardState::new(DoneColumnRule::ByTitle("Doing".into()));
        state.replace(sample_board());
        assert!(state.is_done_column(2));

        assert_eq!(state.apply_move(101, 2, Some(TaskStatus::Active)), Some(TaskStatus::Active));
        assert_eq!(state.board().unwrap().task(101).unwrap().status, TaskStatus::Active);
    }

    #[test]
    fn test_set_task_text() {
        let mut state = BoardState::default();
        assert!(!state.set_task_text(101, "x"));
        state.replace(sample_board());
        assert!(state.set_task_text(101, "Rewrite docs"));
        assert_eq!(state.board().unwrap().task(101).unwrap().text, "Rewrite docs");
        assert!(!state.set_task_text(999, "nothing"));
    }
}

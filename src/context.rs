//! Application Context
//!
//! Board state and the controller, shared with every component.

use leptos::prelude::*;
use leptos::task::spawn_local;

use kanban_client::{
    Action, BoardController, BoardState, ClientConfig, ColumnId, EditExit, HttpBoardApi, Outcome,
    TaskDrop, TaskEditor, TaskId,
};

use crate::prompt::BrowserPrompt;

pub type Controller = BoardController<HttpBoardApi>;

#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Last fetched snapshot
    pub state: RwSignal<BoardState>,
    /// The one task being edited, if any
    pub editor: RwSignal<Option<TaskEditor>>,
    controller: StoredValue<Controller, LocalStorage>,
}

impl BoardContext {
    pub fn new(config: ClientConfig) -> Self {
        let state = BoardState::new(config.done_column.clone());
        Self {
            state: RwSignal::new(state),
            editor: RwSignal::new(None),
            controller: StoredValue::new_local(BoardController::new(HttpBoardApi::new(config))),
        }
    }

    fn controller(&self) -> Controller {
        self.controller.get_value()
    }

    fn apply(&self, outcome: Outcome) {
        if let Outcome::Reloaded(board) = outcome {
            self.state.update(|s| s.replace(board));
        }
    }

    /// Fetch the board and install it; a failed fetch keeps the old board
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(async move {
            if let Some(board) = ctx.controller().load().await {
                ctx.state.update(|s| s.replace(board));
            }
        });
    }

    /// Dispatch a classified click
    pub fn dispatch(&self, action: Action) {
        if let Action::EditTask(task_id) = action {
            self.begin_edit(task_id);
            return;
        }
        let ctx = *self;
        spawn_local(async move {
            let outcome = ctx.controller().run(action, &BrowserPrompt).await;
            ctx.apply(outcome);
        });
    }

    /// Ask the server to move a dropped task, then patch the board
    pub fn drop_task(&self, task_id: TaskId, column_id: ColumnId) {
        let Some(drop) = self.state.with_untracked(|s| TaskDrop::resolve(s, task_id, column_id)) else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            if let Some(ack) = ctx.controller().move_task(drop).await {
                ctx.state.update(|s| {
                    drop.apply(s, &ack);
                });
            }
        });
    }

    pub fn begin_edit(&self, task_id: TaskId) {
        let editor = self.state.with_untracked(|s| TaskEditor::begin_for(s, task_id));
        self.editor.set(editor);
    }

    pub fn is_editing(&self, task_id: TaskId) -> bool {
        self.editor
            .with(|e| e.as_ref().is_some_and(|e| e.task_id() == task_id && e.is_editing()))
    }

    pub fn set_edit_input(&self, task_id: TaskId, value: String) {
        self.editor.update(|slot| {
            if let Some(editor) = slot.as_mut().filter(|e| e.task_id() == task_id) {
                editor.set_input(value);
            }
        });
    }

    /// Drive the editor of `task_id` with `step` (key press or blur). When
    /// editing ends the slot is cleared and any commit is sent.
    pub fn exit_edit(&self, task_id: TaskId, step: impl FnOnce(&mut TaskEditor) -> Option<EditExit>) {
        let mut finished = None;
        self.editor.update(|slot| {
            let Some(editor) = slot.as_mut() else {
                return;
            };
            if editor.task_id() != task_id {
                return;
            }
            if let Some(exit) = step(editor) {
                finished = Some((editor.clone(), exit));
                *slot = None;
            }
        });

        let Some((mut editor, exit)) = finished else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            if let Some(text) = ctx.controller().settle_edit(&mut editor, exit).await {
                ctx.state.update(|s| {
                    s.set_task_text(editor.task_id(), &text);
                });
            }
        });
    }
}

pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}

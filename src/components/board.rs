//! Board Component
//!
//! Owns the single click listener for the whole board and the drag group
//! shared by all columns. The column tree is rebuilt from scratch whenever
//! the snapshot changes.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use kanban_client::interaction::role;
use kanban_client::Action;
use leptos_dragdrop::*;

use crate::components::ColumnCard;
use crate::context::use_board;

/// Read a numeric `data-*` attribute from the closest ancestor matching `selector`
fn closest_id(element: &web_sys::Element, selector: &str, attr: &str) -> Option<u32> {
    element
        .closest(selector)
        .ok()
        .flatten()?
        .get_attribute(attr)?
        .parse()
        .ok()
}

/// Classify a click on the board into an action
fn classify_click(ev: &web_sys::MouseEvent) -> Option<Action> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let class_name = element.class_name();
    let task_id = closest_id(&element, ".task", "data-task-id");
    let column_id = closest_id(&element, ".column", "data-column-id");
    Action::classify(class_name.split_whitespace(), task_id, column_id)
}

#[component]
pub fn Board() -> impl IntoView {
    let ctx = use_board();

    // One drag group for every column
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |task_id, target| {
        let DropTarget::Column(column_id) = target;
        tracing::debug!(task_id, column_id, "drop");
        ctx.drop_task(task_id, column_id);
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        if dnd.drag_just_ended() {
            return;
        }
        if let Some(action) = classify_click(&ev) {
            ctx.dispatch(action);
        }
    };

    let board_class = move || {
        if dnd.is_any_dragging() {
            "board-app dragging"
        } else {
            "board-app"
        }
    };

    view! {
        <div class=board_class on:click=on_click>
            <header class="board-header">
                <h1>"Kanban Board"</h1>
                <button class={role::ADD_COLUMN}>"+ Add Column"</button>
            </header>

            <div id="board" class="board">
                {move || {
                    let board_view = ctx.state.with(|s| s.view());
                    board_view.columns
                        .into_iter()
                        .map(|column| view! { <ColumnCard column=column dnd=dnd /> })
                        .collect_view()
                }}
            </div>

            <p class="board-count">
                {move || ctx.state.with(|s| match s.board() {
                    Some(board) => format!("{} columns, {} tasks", board.columns.len(), board.task_count()),
                    None => "Loading board...".to_string(),
                })}
            </p>
        </div>
    }
}

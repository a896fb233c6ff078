//! Column Card Component

use leptos::prelude::*;

use kanban_client::interaction::role;
use kanban_client::ColumnView;
use leptos_dragdrop::*;

use crate::components::TaskCard;

/// One column: header with delete button, task list (drop target), add button
#[component]
pub fn ColumnCard(column: ColumnView, dnd: DndSignals) -> impl IntoView {
    let id = column.id;
    let target = DropTarget::Column(id);
    let base_class = column.class();
    let count = column.tasks.len();
    let ColumnView { title, tasks, .. } = column;

    let on_mouseenter = make_on_target_mouseenter(dnd, target);
    let on_mouseleave = make_on_target_mouseleave(dnd, target);

    let column_class = move || {
        if dnd.is_drop_target(target) {
            format!("{} drop-target", base_class)
        } else {
            base_class.to_string()
        }
    };

    view! {
        <div
            class=column_class
            data-column-id={id.to_string()}
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="column-header">
                <h3 class="column-title">{title}</h3>
                <span class="column-count">{count}</span>
                <button class={role::DELETE_COLUMN} title="Delete Column">"×"</button>
            </div>

            <div class="tasks">
                {tasks
                    .into_iter()
                    .map(|task| view! { <TaskCard task=task dnd=dnd /> })
                    .collect_view()}
            </div>

            <button class={role::ADD_TASK}>"+ Add Card"</button>
        </div>
    }
}

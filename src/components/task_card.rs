//! Task Card Component
//!
//! A task with its inline edit input. The input is shown while the board's
//! editor points at this task (the `editing` class).

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use kanban_client::interaction::role;
use kanban_client::{EditKey, TaskView};
use leptos_dragdrop::*;

use crate::context::use_board;

#[component]
pub fn TaskCard(task: TaskView, dnd: DndSignals) -> impl IntoView {
    let ctx = use_board();
    let id = task.id;
    let base_class = task.class();
    let input_ref = NodeRef::<html::Input>::new();

    let is_editing = move || ctx.is_editing(id);

    let task_class = move || {
        let mut c = String::from(base_class);
        if is_editing() { c.push_str(" editing"); }
        if dnd.is_dragging(id) { c.push_str(" dragging"); }
        c
    };

    // Focus the input as soon as editing starts
    Effect::new(move |_| {
        if is_editing() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let input_value = move || {
        ctx.editor.with(|e| match e {
            Some(editor) if editor.task_id() == id => editor.input().to_string(),
            _ => String::new(),
        })
    };

    let on_input = move |ev: web_sys::Event| {
        let value = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        ctx.set_edit_input(id, value);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = EditKey::from_dom(&ev.key());
        if key != EditKey::Other {
            ev.prevent_default();
            ctx.exit_edit(id, |editor| editor.key(key));
        }
    };

    let on_blur = move |_: web_sys::FocusEvent| {
        ctx.exit_edit(id, |editor| editor.blur());
    };

    view! {
        <div
            class=task_class
            data-task-id={id.to_string()}
            on:mousedown={make_on_mousedown(dnd, id)}
        >
            <p class="task-text">{task.text}</p>
            <input
                type="text"
                class="edit-input"
                node_ref=input_ref
                prop:value=input_value
                on:input=on_input
                on:keydown=on_keydown
                on:blur=on_blur
            />
            <div class="task-actions">
                <button class={role::EDIT_TASK} title="Edit Task">"✎"</button>
                <button class={role::DELETE_TASK} title="Delete Task">"×"</button>
            </div>
        </div>
    }
}

//! Kanban Board App
//!
//! Root component: provides the board context and loads the first snapshot.

use leptos::prelude::*;

use kanban_client::ClientConfig;

use crate::components::Board;
use crate::context::BoardContext;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    tracing::info!(api = %config.base_url, done_column = ?config.done_column, "starting board");

    let ctx = BoardContext::new(config);
    provide_context(ctx);

    // Initial load; later reloads follow each mutation
    ctx.reload();

    view! {
        <main class="app-layout">
            <Board />
        </main>
    }
}

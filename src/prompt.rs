//! Browser Prompts
//!
//! `window.prompt` / `window.confirm` behind the core's `UserPrompt`.

use kanban_client::UserPrompt;

pub struct BrowserPrompt;

impl UserPrompt for BrowserPrompt {
    fn prompt(&self, message: &str) -> Option<String> {
        let window = web_sys::window()?;
        window.prompt_with_message(message).ok().flatten()
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

//! UI Components
//!
//! Leptos components for the board.

mod board;
mod column_card;
mod task_card;

pub use board::Board;
pub use column_card::ColumnCard;
pub use task_card::TaskCard;

//! mindcare-render
//!
//! Turns a plain-text chatbot reply into typed blocks the UI can display.
//!
//! The reply uses a small subset of Markdown conventions:
//! - `- item`, `* item`, `• item` → bullet list item
//! - `1. item`, `2) item` → numbered list item
//! - blank line → ends the current block
//! - `**bold**` → bold run, inside any paragraph or list item
//! - everything else → paragraph text; consecutive lines join with a space
//!
//! Rendering is total: every input string produces a (possibly empty)
//! block sequence.

pub mod block;
pub mod inline;
pub mod line;
pub mod plain;
pub mod render;

pub use block::{InlineRun, TextBlock};
pub use render::render;

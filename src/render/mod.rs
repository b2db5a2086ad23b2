//! Rendering module for converting parsed documents to output formats.
//!
//! This is the consumer side of the pipeline: every free-text field of the
//! model passes through the inline tokenizer before it reaches an output.
//! Page layout and typography belong to a host application, not here.

mod json;
mod options;
mod text;

pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use text::to_text;

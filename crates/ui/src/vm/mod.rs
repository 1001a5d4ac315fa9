mod markdown;
mod question_vm;

pub use markdown::{markdown_to_html, sanitize_html};
pub use question_vm::difficulty_class;

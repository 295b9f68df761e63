//! Request assembly for the Lectern notes summarizer.
//!
//! [`Summarizer`] turns one form submission into a two-message prompt, makes a
//! single chat-completion call and maps the result onto the form's two outputs.

mod prompt;
mod summarizer;

pub use prompt::{SYSTEM_PROMPT, build_messages, user_content};
pub use summarizer::Summarizer;

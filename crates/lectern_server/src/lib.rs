//! Web surface for the Lectern notes summarizer.
//!
//! Serves a single HTML form backed by the request assembler, a JSON endpoint
//! taking the same four inputs, and a health check.

mod api;
mod page;
mod serve;

pub use api::{SummaryResponse, create_router};
pub use page::{FormView, render_markdown, render_page};
pub use serve::{bind, serve};

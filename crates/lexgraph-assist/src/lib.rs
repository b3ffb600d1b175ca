//! LexGraph Assist
//!
//! The deterministic half of the case chat assistant. Text generation
//! itself happens elsewhere; this crate owns what can be computed exactly:
//!
//! - [`render_case_context`]: the compact text block a chat model is
//!   grounded on, with every event numbered `[Olay #N]` and every
//!   contradiction numbered `[Celiski #N]` (1-based, matching the citation
//!   format the model is instructed to emit),
//! - [`extract_citations`]: scanning a generated answer for `[Olay #N]`
//!   markers and resolving them back to 0-based event indices with exact
//!   byte spans, so a UI can link a citation to its timeline card.
//!
//! Out-of-range citations are reported as dangling rather than dropped;
//! whether to flag or ignore them is the consumer's call.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod citation;
pub mod context;

pub use citation::{extract_citations, Citation};
pub use context::render_case_context;

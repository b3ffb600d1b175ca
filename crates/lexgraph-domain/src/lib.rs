//! LexGraph Domain Layer
//!
//! This crate contains the data model shared by every other LexGraph crate:
//! the analysis result produced by the upstream document-analysis service
//! (chronological events plus detected contradictions) and the operations
//! that make that data safe to visualize.
//!
//! ## Key Concepts
//!
//! - **CaseEvent**: one date-bound legal event; identified by its 0-based
//!   position in the event list
//! - **Contradiction**: a detected logical conflict referencing two or more
//!   events by index, with a severity and a confidence score
//! - **RiskLevel**: the aggregate case risk derived from contradiction
//!   severities
//! - **AnalysisResult**: the merged envelope the upstream service emits;
//!   `sanitize` repairs the inconsistencies real LLM output is known to
//!   contain (out-of-range indices, wrong totals, stale risk level)
//!
//! Everything here is plain data plus pure functions; parsing tolerates the
//! camelCase field spelling some producers use alongside the canonical
//! snake_case wire format.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod contradiction;
pub mod date;
pub mod error;
pub mod event;
pub mod risk;

// Re-exports for convenience
pub use analysis::AnalysisResult;
pub use contradiction::{Contradiction, ContradictionKind, Severity};
pub use date::{DatePrecision, EventDate};
pub use error::DomainError;
pub use event::CaseEvent;
pub use risk::RiskLevel;

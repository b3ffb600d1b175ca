//! LexGraph Layout
//!
//! Positions the graph the builder produced. The hard work happens in the
//! `lexgraph-layered` solver; this crate owns the application-level
//! contract around it:
//!
//! - the footprint table (how big each node kind draws),
//! - the direction-specific spacing profile,
//! - the remap from the solver's center-point coordinates to the top-left
//!   origin renderers expect,
//! - the tolerance rules: empty graphs skip the solver entirely, dangling
//!   edges are skipped, and a node the solver did not place keeps its
//!   placeholder position.
//!
//! Like the builder, [`layout_graph`] is pure and deterministic; a
//! direction switch recomputes everything from scratch rather than
//! transposing coordinates, because crossing minimization can settle on a
//! different ordering under different spacing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod error;
pub mod footprint;

pub use engine::layout_graph;
pub use error::LayoutError;
pub use footprint::footprint;

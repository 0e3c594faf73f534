//! # Tour Core
//!
//! The chapters of the language tour and the runner that plays them.
//!
//! * **[`chapters`]**: the registry and one module per topic. Every chapter
//!   exposes a single `run` entry operation.
//! * **[`context`]**: what a chapter writes into while it runs.
//! * **[`tour`]**: resolves a selection of chapters and runs them in order.

pub mod chapters;
pub mod context;
pub mod tour;

pub use chapters::Chapter;
pub use context::Context;

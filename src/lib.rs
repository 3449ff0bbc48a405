//! Arena display (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the viewer binary,
//! integration tests and benches can write `arena_display::{core,term,types}`.

pub mod config;

pub use arena_display_core as core;
pub use arena_display_term as term;
pub use arena_display_types as types;

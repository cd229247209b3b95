//! gridstate (workspace facade crate).
//!
//! Re-exports the `gridstate::{core,types}` public API; the implementation lives in dedicated
//! crates under `crates/`.

pub use gridstate_core as core;
pub use gridstate_types as types;

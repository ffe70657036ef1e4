//! Snake controller (workspace facade crate).
//!
//! This package keeps a stable `snake_controller::{core,types}` public API
//! while the implementation lives in dedicated crates under `crates/`. It
//! adds the [`session`] wiring layer that owns the outbound channels and
//! decodes the textual event lines used by the driver binary.

pub use snake_controller_core as core;
pub use snake_controller_types as types;

pub mod session;

pub use session::{EventError, Session};

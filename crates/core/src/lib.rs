//! Core controller logic - pure, deterministic, and testable
//!
//! This crate contains the complete game-logic state machine for the snake
//! controller. It has **zero dependencies** on rendering, transport, or
//! I/O: collaborators are reached only through injected [`Port`]s, which
//! makes the whole crate exercisable from plain unit tests.
//!
//! # Module structure
//!
//! - [`body`]: ordered snake body with per-segment lifetime counters
//! - [`config`]: parsing of the textual configuration description
//! - [`controller`]: event handlers and the `Alive`/`Lost` state machine
//! - [`port`]: the minimal outbound-message capability
//! - [`error`]: construction-time configuration errors
//!
//! # Event model
//!
//! Inbound events form a closed enum and are dispatched with a single
//! exhaustive match - there is no trial-and-fallback classification and no
//! failure-driven control flow. Unknown wire-level event kinds are an
//! integration fault rejected at the session boundary, distinct from a
//! game loss, which is an ordinary score-channel message.
//!
//! # Example
//!
//! ```
//! use snake_controller_core::RecordingController;
//! use snake_controller_core::types::{Event, Position};
//!
//! let mut controller =
//!     RecordingController::recording("W 5 5 F 4 4 S R 3 2 2 1 2 0 2").unwrap();
//! controller.handle(Event::Tick);
//!
//! assert_eq!(controller.body().head().position, Position::new(3, 2));
//! assert!(controller.is_alive());
//! ```

pub mod body;
pub mod config;
pub mod controller;
pub mod error;
pub mod port;

pub use snake_controller_types as types;

pub use body::{Body, Segment};
pub use config::GameConfig;
pub use controller::{Controller, RecordingController};
pub use error::ConfigError;
pub use port::Port;

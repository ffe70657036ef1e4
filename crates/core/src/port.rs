//! Port module - the outbound message capability.
//!
//! The controller never owns its collaborators; it is handed one port per
//! outbound channel (display, food, score) by the session layer that wires
//! the game together. A port only has to accept a message - delivery is
//! fire-and-forget with no acknowledgment or backpressure.

/// Minimal "accept an outbound message" capability.
pub trait Port<M> {
    fn send(&mut self, message: M);
}

/// Recording port: collects messages in order.
///
/// Used by tests to assert on exact message sequences, and usable by any
/// headless harness that wants to inspect traffic after the fact.
impl<M> Port<M> for Vec<M> {
    fn send(&mut self, message: M) {
        self.push(message);
    }
}

/// Discarding port, for channels a harness does not care about.
impl<M> Port<M> for () {
    fn send(&mut self, _message: M) {}
}

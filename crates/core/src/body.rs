//! Body module - the ordered snake body and per-segment lifecycle.
//!
//! The body is a head-first sequence of [`Segment`]s. Order is semantically
//! significant: the front is the moving head, the back is the next segment
//! to expire. Each segment carries a remaining-lifetime counter (`ttl`)
//! assigned at creation; a neutral tick decrements every counter and a
//! segment reaching zero is cleared from the display and removed.
//!
//! Growth is implicit: on the tick food is eaten no counter is decremented,
//! so no tail segment expires while a new head is still inserted.

use std::collections::VecDeque;

use crate::types::Position;

/// One body cell plus its remaining lifetime in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub position: Position,
    pub ttl: u32,
}

impl Segment {
    pub fn new(position: Position, ttl: u32) -> Self {
        Self { position, ttl }
    }
}

/// Ordered snake body, head first, tail last.
///
/// Invariant: never empty while the snake is alive, and every `ttl` is at
/// least 1 between ticks. Counters hit zero only transiently inside a tick,
/// between [`Body::decay`] and [`Body::remove_expired`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    segments: VecDeque<Segment>,
}

impl Body {
    /// Build a body from head-first segments.
    pub fn new(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// The head segment.
    ///
    /// # Panics
    ///
    /// Panics if the body is empty, which cannot happen for a controller
    /// built from a valid configuration (length >= 1, growth-only inserts
    /// before removals).
    pub fn head(&self) -> Segment {
        *self.segments.front().expect("body is never empty")
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Whether any segment occupies `position`.
    pub fn occupies(&self, position: Position) -> bool {
        self.segments.iter().any(|s| s.position == position)
    }

    /// Insert a new head at the front.
    pub fn push_head(&mut self, segment: Segment) {
        self.segments.push_front(segment);
    }

    /// Decrement every segment's ttl by one and return the positions of
    /// segments that just expired, in head-to-tail order.
    ///
    /// Expired segments stay in the body until [`Body::remove_expired`];
    /// the tick handler inserts the new head in between, so the head's
    /// display update is unaffected by the removal.
    pub fn decay(&mut self) -> Vec<Position> {
        let mut expired = Vec::new();
        for segment in &mut self.segments {
            segment.ttl -= 1;
            if segment.ttl == 0 {
                expired.push(segment.position);
            }
        }
        expired
    }

    /// Drop every segment whose ttl reached zero.
    pub fn remove_expired(&mut self) {
        self.segments.retain(|s| s.ttl > 0);
    }
}

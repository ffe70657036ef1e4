//! Core types module - shared data structures
//!
//! This module defines the fundamental types used throughout the controller.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, session wiring, test harnesses).
//!
//! # Coordinate system
//!
//! The map is a fixed grid set once at construction. `(x, y)` is valid when
//! `0 <= x < width` and `0 <= y < height`; x grows to the right, y grows
//! downward. `Up` therefore decrements y and `Down` increments it.
//!
//! # Message flow
//!
//! Inbound, the controller consumes [`Event`] values. Outbound it produces
//! three message kinds, one per channel:
//!
//! - [`DisplayUpdate`] - a single cell changed state
//! - [`FoodRequest`] - ask the food collaborator for a new placement
//! - [`ScoreUpdate`] - a point was scored, or the game was lost
//!
//! # Examples
//!
//! ```
//! use snake_controller_types::{Axis, Direction, Position};
//!
//! let head = Position::new(2, 2);
//! let next = head.step(Direction::Right);
//! assert_eq!(next, Position::new(3, 2));
//! assert_eq!(Direction::Right.axis(), Axis::Horizontal);
//! ```

/// A cell coordinate on the map grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed map dimensions, immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether `position` lies on the map.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }
}

/// Movement axis of a [`Direction`].
///
/// The direction filter compares axes: a requested direction is accepted
/// only when it changes axis, which rules out instantaneous reversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Heading of the snake, one of the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Axis classification used by the reversal filter.
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Unit offset applied to the head on each tick.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse the single-character form used by the configuration description.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Single-character form, inverse of [`Direction::from_char`].
    pub fn as_char(&self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

/// Renderable state of one display cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Free,
    Snake,
    Food,
}

/// Inbound events consumed by the controller, one closed set.
///
/// The dispatcher matches this exhaustively; there is no fallback chain.
/// Unrecognized wire-level kinds are rejected at the session boundary
/// before an `Event` is ever constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Movement tick: advance the snake one cell.
    Tick,
    /// Requested heading change, subject to the reversal filter.
    Turn(Direction),
    /// Unsolicited food announcement from the food collaborator.
    FoodPlaced(Position),
    /// Reply to a [`FoodRequest`] previously issued by the controller.
    FoodResponse(Position),
}

/// Outbound display-channel message: one cell changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub position: Position,
    pub state: CellState,
}

impl DisplayUpdate {
    pub fn new(position: Position, state: CellState) -> Self {
        Self { position, state }
    }
}

/// Outbound food-channel message: ask for a new food placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodRequest;

/// Outbound score-channel message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreUpdate {
    /// Food was eaten; the score increases.
    Scored,
    /// Terminal game outcome: self-collision or boundary violation.
    Lost,
}

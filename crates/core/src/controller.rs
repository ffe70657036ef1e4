//! Controller module - the game-logic state machine.
//!
//! One [`Controller`] instance holds the complete state of a session: map
//! bounds, snake body, current heading, and the tracked food position. An
//! external dispatcher feeds it one [`Event`] at a time; each event is fully
//! handled, including all outbound sends, before the next is accepted.
//!
//! # State machine
//!
//! Two states, `Alive` and `Lost`. The transition happens inside the tick
//! handler on self-collision or boundary violation and is signaled as
//! [`ScoreUpdate::Lost`] on the score channel. `Lost` is terminal: every
//! event delivered afterwards is ignored without mutating state or sending
//! messages. A loss is a normal game outcome, never an error.

use crate::body::{Body, Segment};
use crate::config::GameConfig;
use crate::port::Port;
use crate::types::{
    Bounds, CellState, Direction, DisplayUpdate, Event, FoodRequest, Position, ScoreUpdate,
};

/// Reactive snake game controller.
///
/// Generic over its three outbound ports so the session layer can inject
/// channel senders while tests inject recording `Vec`s.
#[derive(Debug)]
pub struct Controller<D, F, S>
where
    D: Port<DisplayUpdate>,
    F: Port<FoodRequest>,
    S: Port<ScoreUpdate>,
{
    display: D,
    food_port: F,
    score: S,
    bounds: Bounds,
    food: Position,
    direction: Direction,
    body: Body,
    alive: bool,
}

impl<D, F, S> Controller<D, F, S>
where
    D: Port<DisplayUpdate>,
    F: Port<FoodRequest>,
    S: Port<ScoreUpdate>,
{
    /// Build a controller from a parsed configuration and injected ports.
    pub fn new(config: GameConfig, display: D, food_port: F, score: S) -> Self {
        Self {
            display,
            food_port,
            score,
            bounds: config.bounds,
            food: config.food,
            direction: config.direction,
            body: Body::new(config.segments),
            alive: true,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn food_position(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Route one inbound event to its handler.
    ///
    /// The event set is closed and matched exhaustively; unknown wire-level
    /// kinds never reach this point (the session boundary rejects them).
    /// After a loss every event is ignored.
    pub fn handle(&mut self, event: Event) {
        if !self.alive {
            return;
        }
        match event {
            Event::Tick => self.on_tick(),
            Event::Turn(direction) => self.on_turn(direction),
            Event::FoodPlaced(position) => self.on_food_placed(position),
            Event::FoodResponse(position) => self.on_food_response(position),
        }
    }

    /// Advance the snake by one cell in the current direction.
    fn on_tick(&mut self) {
        let head = self.body.head();
        let candidate = Segment::new(head.position.step(self.direction), head.ttl);

        // Collision checks in fixed order: self first, then bounds.
        if self.body.occupies(candidate.position) {
            self.lose();
            return;
        }
        if !self.bounds.contains(candidate.position) {
            self.lose();
            return;
        }

        if candidate.position == self.food {
            // Eating skips the decay pass, so no tail segment expires:
            // the snake grows by exactly one.
            self.score.send(ScoreUpdate::Scored);
            self.food_port.send(FoodRequest);
        } else {
            for expired in self.body.decay() {
                self.display
                    .send(DisplayUpdate::new(expired, CellState::Free));
            }
        }

        // The candidate inherited the old head's ttl, preserving the
        // length budget across a neutral move.
        self.body.push_head(candidate);
        self.display
            .send(DisplayUpdate::new(candidate.position, CellState::Snake));

        self.body.remove_expired();
    }

    /// Apply a requested heading change unless it reverses the current axis.
    fn on_turn(&mut self, requested: Direction) {
        if requested.axis() != self.direction.axis() {
            self.direction = requested;
        }
    }

    /// Unsolicited food announcement: validate, redraw old and new cells.
    fn on_food_placed(&mut self, proposed: Position) {
        if self.body.occupies(proposed) {
            self.food_port.send(FoodRequest);
            return;
        }
        self.display
            .send(DisplayUpdate::new(self.food, CellState::Free));
        self.display
            .send(DisplayUpdate::new(proposed, CellState::Food));
        self.food = proposed;
    }

    /// Reply to our own food request: the previous food was already eaten,
    /// so only the new cell is drawn.
    fn on_food_response(&mut self, proposed: Position) {
        if self.body.occupies(proposed) {
            self.food_port.send(FoodRequest);
            return;
        }
        self.display
            .send(DisplayUpdate::new(proposed, CellState::Food));
        self.food = proposed;
    }

    fn lose(&mut self) {
        self.alive = false;
        self.score.send(ScoreUpdate::Lost);
    }
}

/// Controller wired to recording ports, the shape used across the tests.
pub type RecordingController =
    Controller<Vec<DisplayUpdate>, Vec<FoodRequest>, Vec<ScoreUpdate>>;

impl RecordingController {
    /// Convenience constructor for tests and headless harnesses: parse the
    /// description and attach empty recording ports.
    pub fn recording(config_text: &str) -> Result<Self, crate::error::ConfigError> {
        let config: GameConfig = config_text.parse()?;
        Ok(Controller::new(config, Vec::new(), Vec::new(), Vec::new()))
    }

    pub fn display_log(&self) -> &[DisplayUpdate] {
        &self.display
    }

    pub fn food_log(&self) -> &[FoodRequest] {
        &self.food_port
    }

    pub fn score_log(&self) -> &[ScoreUpdate] {
        &self.score
    }

    /// Clear all three logs, typically between the arrange and act phases.
    pub fn clear_logs(&mut self) {
        self.display.clear();
        self.food_port.clear();
        self.score.clear();
    }
}

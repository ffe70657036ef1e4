//! Session module - wiring between the controller and its collaborators.
//!
//! The controller itself never owns channels; this layer constructs one
//! unbounded channel per outbound concern (display, food, score), hands the
//! sender ends to the controller as [`Port`]s, and keeps the receiver ends
//! for whoever drives the session.
//!
//! # Event lines
//!
//! The driver binary and the integration tests speak a small line format,
//! one event per line, whitespace-separated like the configuration
//! description:
//!
//! ```text
//! tick             movement tick
//! turn <U|D|L|R>   requested heading change
//! food <x> <y>     unsolicited food announcement
//! serve <x> <y>    reply to a controller-issued food request
//! ```
//!
//! Any other kind is an [`EventError::UnexpectedKind`] - an integration
//! fault at the wire boundary, kept strictly apart from a game loss, which
//! arrives as a regular [`ScoreUpdate::Lost`] message on the score channel.

use std::error::Error;
use std::fmt;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::core::{ConfigError, Controller, GameConfig, Port};
use crate::types::{Direction, DisplayUpdate, Event, FoodRequest, Position, ScoreUpdate};

/// Errors from decoding an inbound event line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventError {
    /// The event kind matched none of the recognized handlers.
    UnexpectedKind { found: String },
    /// A recognized kind carried a malformed or missing payload.
    BadPayload { kind: &'static str, line: String },
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedKind { found } => write!(f, "unexpected event kind: '{found}'"),
            Self::BadPayload { kind, line } => {
                write!(f, "malformed payload for '{kind}' event: '{line}'")
            }
        }
    }
}

impl Error for EventError {}

/// Fire-and-forget port over a channel sender.
///
/// A disconnected receiver is not an error: outbound sends expect no
/// acknowledgment or backpressure, so the message is simply dropped.
pub struct ChannelPort<M>(Sender<M>);

impl<M> Port<M> for ChannelPort<M> {
    fn send(&mut self, message: M) {
        let _ = self.0.send(message);
    }
}

type ChannelController =
    Controller<ChannelPort<DisplayUpdate>, ChannelPort<FoodRequest>, ChannelPort<ScoreUpdate>>;

/// One wired game session: a controller plus the receiver ends of its
/// three outbound channels.
pub struct Session {
    controller: ChannelController,
    display_rx: Receiver<DisplayUpdate>,
    food_rx: Receiver<FoodRequest>,
    score_rx: Receiver<ScoreUpdate>,
}

impl Session {
    /// Parse the configuration description and wire up a fresh session.
    pub fn new(config_text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = config_text.parse()?;

        let (display_tx, display_rx) = unbounded();
        let (food_tx, food_rx) = unbounded();
        let (score_tx, score_rx) = unbounded();

        Ok(Self {
            controller: Controller::new(
                config,
                ChannelPort(display_tx),
                ChannelPort(food_tx),
                ChannelPort(score_tx),
            ),
            display_rx,
            food_rx,
            score_rx,
        })
    }

    /// Deliver one already-decoded event.
    pub fn deliver(&mut self, event: Event) {
        self.controller.handle(event);
    }

    /// Decode one event line and deliver it.
    pub fn deliver_line(&mut self, line: &str) -> Result<(), EventError> {
        let event = parse_event_line(line)?;
        self.deliver(event);
        Ok(())
    }

    pub fn is_alive(&self) -> bool {
        self.controller.is_alive()
    }

    pub fn display_events(&self) -> &Receiver<DisplayUpdate> {
        &self.display_rx
    }

    pub fn food_requests(&self) -> &Receiver<FoodRequest> {
        &self.food_rx
    }

    pub fn score_events(&self) -> &Receiver<ScoreUpdate> {
        &self.score_rx
    }

    /// Drain everything currently buffered on the display channel.
    pub fn drain_display(&self) -> Vec<DisplayUpdate> {
        self.display_rx.try_iter().collect()
    }

    /// Drain everything currently buffered on the food channel.
    pub fn drain_food(&self) -> Vec<FoodRequest> {
        self.food_rx.try_iter().collect()
    }

    /// Drain everything currently buffered on the score channel.
    pub fn drain_score(&self) -> Vec<ScoreUpdate> {
        self.score_rx.try_iter().collect()
    }
}

/// Decode one textual event line into an [`Event`].
pub fn parse_event_line(line: &str) -> Result<Event, EventError> {
    let mut tokens = line.split_whitespace();
    let kind = tokens.next().ok_or_else(|| EventError::UnexpectedKind {
        found: line.trim().to_string(),
    })?;

    match kind {
        "tick" => Ok(Event::Tick),
        "turn" => {
            let direction = tokens
                .next()
                .filter(|t| t.chars().count() == 1)
                .and_then(|t| t.chars().next())
                .and_then(Direction::from_char)
                .ok_or_else(|| EventError::BadPayload {
                    kind: "turn",
                    line: line.to_string(),
                })?;
            Ok(Event::Turn(direction))
        }
        "food" => parse_position(&mut tokens, "food", line).map(Event::FoodPlaced),
        "serve" => parse_position(&mut tokens, "serve", line).map(Event::FoodResponse),
        other => Err(EventError::UnexpectedKind {
            found: other.to_string(),
        }),
    }
}

fn parse_position<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    kind: &'static str,
    line: &str,
) -> Result<Position, EventError> {
    let bad = || EventError::BadPayload {
        kind,
        line: line.to_string(),
    };
    let x = tokens.next().and_then(|t| t.parse().ok()).ok_or_else(bad)?;
    let y = tokens.next().and_then(|t| t.parse().ok()).ok_or_else(bad)?;
    Ok(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_lines() {
        assert_eq!(parse_event_line("tick"), Ok(Event::Tick));
        assert_eq!(
            parse_event_line("turn U"),
            Ok(Event::Turn(Direction::Up))
        );
        assert_eq!(
            parse_event_line("food 3 4"),
            Ok(Event::FoodPlaced(Position::new(3, 4)))
        );
        assert_eq!(
            parse_event_line("serve 0 0"),
            Ok(Event::FoodResponse(Position::new(0, 0)))
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert_eq!(
            parse_event_line("pause"),
            Err(EventError::UnexpectedKind {
                found: "pause".to_string()
            })
        );
        assert!(matches!(
            parse_event_line(""),
            Err(EventError::UnexpectedKind { .. })
        ));
    }

    #[test]
    fn test_bad_payloads_are_rejected() {
        assert!(matches!(
            parse_event_line("turn X"),
            Err(EventError::BadPayload { kind: "turn", .. })
        ));
        assert!(matches!(
            parse_event_line("turn UP"),
            Err(EventError::BadPayload { kind: "turn", .. })
        ));
        assert!(matches!(
            parse_event_line("food 3"),
            Err(EventError::BadPayload { kind: "food", .. })
        ));
        assert!(matches!(
            parse_event_line("serve x y"),
            Err(EventError::BadPayload { kind: "serve", .. })
        ));
    }
}

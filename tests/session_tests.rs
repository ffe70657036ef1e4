//! Session integration tests - channel wiring and the event-line boundary.

use snake_controller::session::{parse_event_line, EventError, Session};
use snake_controller::types::{
    CellState, Direction, DisplayUpdate, Event, FoodRequest, Position, ScoreUpdate,
};

const CONFIG: &str = "W 5 5 F 4 4 S R 3 2 2 1 2 0 2";

#[test]
fn test_session_rejects_bad_config() {
    assert!(Session::new("W 5 5 F 4 4 S Q 1 2 2").is_err());
}

#[test]
fn test_tick_flows_through_channels() {
    let mut session = Session::new(CONFIG).unwrap();
    session.deliver(Event::Tick);

    assert_eq!(
        session.drain_display(),
        vec![
            DisplayUpdate::new(Position::new(0, 2), CellState::Free),
            DisplayUpdate::new(Position::new(3, 2), CellState::Snake),
        ]
    );
    assert!(session.drain_food().is_empty());
    assert!(session.drain_score().is_empty());
    assert!(session.is_alive());
}

#[test]
fn test_event_lines_drive_the_controller() {
    let mut session = Session::new(CONFIG).unwrap();

    session.deliver_line("turn D").unwrap();
    session.deliver_line("tick").unwrap();

    let display = session.drain_display();
    assert!(display.contains(&DisplayUpdate::new(Position::new(2, 3), CellState::Snake)));
}

#[test]
fn test_feeding_reaches_all_three_channels() {
    let mut session = Session::new("W 5 5 F 3 2 S R 3 2 2 1 2 0 2").unwrap();
    session.deliver_line("tick").unwrap();

    assert_eq!(session.drain_score(), vec![ScoreUpdate::Scored]);
    assert_eq!(session.drain_food(), vec![FoodRequest]);
    assert_eq!(
        session.drain_display(),
        vec![DisplayUpdate::new(Position::new(3, 2), CellState::Snake)]
    );
}

#[test]
fn test_loss_is_a_message_not_an_error() {
    let mut session = Session::new("W 4 4 F 0 0 S R 2 3 1 2 1").unwrap();

    // Delivering the fatal tick is still Ok at the dispatch boundary.
    session.deliver_line("tick").unwrap();

    assert_eq!(session.drain_score(), vec![ScoreUpdate::Lost]);
    assert!(!session.is_alive());
}

#[test]
fn test_unknown_event_kind_is_fatal_and_mutates_nothing() {
    let mut session = Session::new(CONFIG).unwrap();

    let err = session.deliver_line("explode 1 2").unwrap_err();
    assert_eq!(
        err,
        EventError::UnexpectedKind {
            found: "explode".to_string()
        }
    );

    // No outbound traffic, and the session is still playable.
    assert!(session.drain_display().is_empty());
    assert!(session.drain_food().is_empty());
    assert!(session.drain_score().is_empty());
    assert!(session.is_alive());
    session.deliver_line("tick").unwrap();
    assert_eq!(session.drain_display().len(), 2);
}

#[test]
fn test_food_retry_loop_over_the_wire() {
    let mut session = Session::new(CONFIG).unwrap();

    // Served onto the body: re-request.
    session.deliver_line("serve 2 2").unwrap();
    assert_eq!(session.drain_food(), vec![FoodRequest]);
    assert!(session.drain_display().is_empty());

    // Second proposal lands free: place-only.
    session.deliver_line("serve 0 0").unwrap();
    assert_eq!(
        session.drain_display(),
        vec![DisplayUpdate::new(Position::new(0, 0), CellState::Food)]
    );
}

#[test]
fn test_parse_event_line_matches_direction_chars() {
    for (line, direction) in [
        ("turn U", Direction::Up),
        ("turn D", Direction::Down),
        ("turn L", Direction::Left),
        ("turn R", Direction::Right),
    ] {
        assert_eq!(parse_event_line(line), Ok(Event::Turn(direction)));
    }
}

#[test]
fn test_full_scripted_game() {
    // Drive a short game to completion: move, turn, eat, run into the wall.
    let mut session = Session::new("W 3 3 F 2 0 S R 2 1 0 0 0").unwrap();

    session.deliver_line("tick").unwrap(); // eats at (2,0)
    assert_eq!(session.drain_score(), vec![ScoreUpdate::Scored]);
    assert_eq!(session.drain_food(), vec![FoodRequest]);

    session.deliver_line("serve 0 2").unwrap();
    session.deliver_line("tick").unwrap(); // head (3,0): out of bounds

    assert_eq!(session.drain_score(), vec![ScoreUpdate::Lost]);
    assert!(!session.is_alive());
}

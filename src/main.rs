//! Headless session runner (default binary).
//!
//! Reads the configuration description from the file given as the first
//! argument, consumes event lines from stdin (`tick`, `turn <U|D|L|R>`,
//! `food <x> <y>`, `serve <x> <y>`), and prints every outbound message to
//! stdout as it is produced. Exits once the game is lost or stdin closes.

use std::io::BufRead;

use anyhow::{Context, Result};

use snake_controller::session::Session;
use snake_controller::types::{CellState, ScoreUpdate};

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .context("usage: snake-controller <config-file>")?;
    let config_text = std::fs::read_to_string(&config_path)
        .with_context(|| format!("reading configuration from {config_path}"))?;

    let mut session =
        Session::new(&config_text).context("invalid configuration description")?;

    run(&mut session)
}

fn run(session: &mut Session) -> Result<()> {
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("reading event line")?;
        if line.trim().is_empty() {
            continue;
        }

        session
            .deliver_line(&line)
            .with_context(|| format!("dispatching event line '{line}'"))?;
        flush_outbound(session);

        if !session.is_alive() {
            return Ok(());
        }
    }

    Ok(())
}

fn flush_outbound(session: &Session) {
    for update in session.drain_display() {
        let state = match update.state {
            CellState::Free => "free",
            CellState::Snake => "snake",
            CellState::Food => "food",
        };
        println!("display {} {} {state}", update.position.x, update.position.y);
    }
    for _ in session.drain_food() {
        println!("food-request");
    }
    for score in session.drain_score() {
        match score {
            ScoreUpdate::Scored => println!("score"),
            ScoreUpdate::Lost => println!("loss"),
        }
    }
}

//! Configuration module - parsing of the initial game description.
//!
//! The description is a flat sequence of whitespace-separated tokens:
//!
//! ```text
//! W <width> <height> F <foodX> <foodY> S <direction> <length> (<x> <y>){length}
//! ```
//!
//! where `direction` is one of `U`, `D`, `L`, `R`. The coordinate pairs are
//! head first; they are assigned decreasing ttl values from `length` down
//! to 1, so the tail-most initial segment expires on the first neutral tick.
//!
//! Any structural deviation is a [`ConfigError`]: a controller is never
//! constructed from a bad description. Trailing tokens after the body are
//! ignored.

use std::str::FromStr;

use crate::body::Segment;
use crate::error::ConfigError;
use crate::types::{Bounds, Direction, Position};

/// Parsed initial game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub bounds: Bounds,
    pub food: Position,
    pub direction: Direction,
    /// Initial body, head first, ttl strictly decreasing to 1 at the tail.
    pub segments: Vec<Segment>,
}

impl FromStr for GameConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(s);

        tokens.marker('W')?;
        let width = tokens.int("map width")?;
        let height = tokens.int("map height")?;

        tokens.marker('F')?;
        let food_x = tokens.int("food x")?;
        let food_y = tokens.int("food y")?;

        tokens.marker('S')?;
        let direction = tokens.direction()?;

        let length = tokens.int("body length")?;
        if length <= 0 {
            return Err(ConfigError::BadLength { found: length });
        }

        let mut segments = Vec::with_capacity(length as usize);
        for ttl in (1..=length as u32).rev() {
            let x = tokens.int("segment x")?;
            let y = tokens.int("segment y")?;
            segments.push(Segment::new(Position::new(x, y), ttl));
        }

        Ok(GameConfig {
            bounds: Bounds::new(width, height),
            food: Position::new(food_x, food_y),
            direction,
            segments,
        })
    }
}

/// Cursor over the whitespace-separated token stream.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            inner: s.split_whitespace(),
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a str, ConfigError> {
        self.inner
            .next()
            .ok_or(ConfigError::UnexpectedEnd { expected })
    }

    fn marker(&mut self, expected: char) -> Result<(), ConfigError> {
        let token = self.next("structural marker")?;
        if token.len() == 1 && token.starts_with(expected) {
            Ok(())
        } else {
            Err(ConfigError::BadMarker {
                expected,
                found: token.to_string(),
            })
        }
    }

    fn int(&mut self, field: &'static str) -> Result<i32, ConfigError> {
        let token = self.next(field)?;
        token.parse().map_err(|_| ConfigError::BadNumber {
            field,
            found: token.to_string(),
        })
    }

    fn direction(&mut self) -> Result<Direction, ConfigError> {
        let token = self.next("direction character")?;
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::from_char(c).ok_or(ConfigError::BadDirection {
                found: token.to_string(),
            }),
            _ => Err(ConfigError::BadDirection {
                found: token.to_string(),
            }),
        }
    }
}

use std::collections::HashSet;
use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use common::config::Validate;
use common::{Coordinate, Direction};
use serde::{Deserialize, Serialize};

use crate::controller::MapDimension;
use crate::error::ControllerError;

/// Initial controller state.
///
/// Textual form: `W <width> <height> F <foodX> <foodY> S <U|D|L|R> <length>`
/// followed by `length` pairs of `<x> <y>`, head first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerSettings {
    pub width: i32,
    pub height: i32,
    pub food: Coordinate,
    pub direction: Direction,
    pub body: Vec<Coordinate>,
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next(&mut self, what: &str) -> Result<&'a str, ControllerError> {
        self.inner
            .next()
            .ok_or_else(|| ControllerError::configuration(format!("missing {}", what)))
    }

    fn marker(&mut self, expected: &str) -> Result<(), ControllerError> {
        let token = self.next(&format!("marker '{}'", expected))?;
        if token != expected {
            return Err(ControllerError::configuration(format!(
                "expected marker '{}', found '{}'",
                expected, token
            )));
        }
        Ok(())
    }

    fn int(&mut self, what: &str) -> Result<i32, ControllerError> {
        let token = self.next(what)?;
        token.parse().map_err(|_| {
            ControllerError::configuration(format!("{} is not an integer: '{}'", what, token))
        })
    }

    fn direction(&mut self) -> Result<Direction, ControllerError> {
        let token = self.next("direction")?;
        let mut chars = token.chars();
        let direction = match (chars.next(), chars.next()) {
            (Some(letter), None) => Direction::from_letter(letter),
            _ => None,
        };
        direction
            .ok_or_else(|| ControllerError::configuration(format!("unknown direction '{}'", token)))
    }
}

impl ControllerSettings {
    pub fn parse(text: &str) -> Result<Self, ControllerError> {
        let mut tokens = Tokens::new(text);

        tokens.marker("W")?;
        let width = tokens.int("width")?;
        let height = tokens.int("height")?;

        tokens.marker("F")?;
        let food = Coordinate::new(tokens.int("food x")?, tokens.int("food y")?);

        tokens.marker("S")?;
        let direction = tokens.direction()?;
        let length = tokens.int("snake length")?;
        if length <= 0 {
            return Err(ControllerError::configuration(format!(
                "snake length must be positive, got {}",
                length
            )));
        }

        let mut body = Vec::new();
        for i in 0..length {
            let x = tokens.int(&format!("x of segment {}", i))?;
            let y = tokens.int(&format!("y of segment {}", i))?;
            body.push(Coordinate::new(x, y));
        }

        Ok(Self {
            width,
            height,
            food,
            direction,
            body,
        })
    }

    pub fn to_config_string(&self) -> String {
        self.to_string()
    }

    pub fn map_dimension(&self) -> MapDimension {
        MapDimension {
            width: self.width,
            height: self.height,
        }
    }
}

impl FromStr for ControllerSettings {
    type Err = ControllerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ControllerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W {} {} F {} {} S {} {}",
            self.width,
            self.height,
            self.food.x,
            self.food.y,
            self.direction.letter(),
            self.body.len()
        )?;
        for cell in &self.body {
            write!(f, " {} {}", cell.x, cell.y)?;
        }
        Ok(())
    }
}

impl Validate for ControllerSettings {
    fn validate(&self) -> Result<(), String> {
        if self.width <= 0 || self.height <= 0 {
            return Err(format!(
                "Map dimension must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if self.body.is_empty() {
            return Err("Snake body must not be empty".to_string());
        }
        let map = self.map_dimension();
        if let Some(cell) = self.body.iter().find(|&&cell| !map.contains(cell)) {
            return Err(format!("Snake segment ({}, {}) is outside the map", cell.x, cell.y));
        }
        let mut seen = HashSet::new();
        if let Some(cell) = self.body.iter().find(|&&cell| !seen.insert(cell)) {
            return Err(format!("Snake segment ({}, {}) appears twice", cell.x, cell.y));
        }
        if !map.contains(self.food) {
            return Err(format!(
                "Food ({}, {}) is outside the map",
                self.food.x, self.food.y
            ));
        }
        if self.body.contains(&self.food) {
            return Err(format!(
                "Food ({}, {}) is placed on the snake",
                self.food.x, self.food.y
            ));
        }
        Ok(())
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            food: Coordinate::new(5, 5),
            direction: Direction::Up,
            body: vec![
                Coordinate::new(3, 3),
                Coordinate::new(3, 4),
                Coordinate::new(3, 5),
            ],
        }
    }
}

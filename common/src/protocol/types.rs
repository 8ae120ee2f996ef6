use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `None` when the result leaves the `i32` range.
    pub fn checked_offset(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    pub fn step(&self) -> i32 {
        match self {
            Sign::Negative => -1,
            Sign::Positive => 1,
        }
    }
}

/// Two-bit direction: bit 0 is the axis flag (set = horizontal),
/// bit 1 is the sign flag (set = positive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Up = 0b00,
    Down = 0b10,
    Left = 0b01,
    Right = 0b11,
}

const AXIS_FLAG: u8 = 0b01;
const SIGN_FLAG: u8 = 0b10;

impl Direction {
    pub fn bits(&self) -> u8 {
        *self as u8
    }

    pub fn from_bits(bits: u8) -> Option<Direction> {
        match bits {
            0b00 => Some(Direction::Up),
            0b10 => Some(Direction::Down),
            0b01 => Some(Direction::Left),
            0b11 => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn axis(&self) -> Axis {
        if self.bits() & AXIS_FLAG != 0 {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    pub fn sign(&self) -> Sign {
        if self.bits() & SIGN_FLAG != 0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    /// Movement delta `(dx, dy)` for one step.
    pub fn delta(&self) -> (i32, i32) {
        let step = self.sign().step();
        match self.axis() {
            Axis::Horizontal => (step, 0),
            Axis::Vertical => (0, step),
        }
    }

    /// Only strict 90 degree turns count; going straight or reversing does not.
    pub fn is_turn_from(&self, current: Direction) -> bool {
        self.axis() != current.axis()
    }

    pub fn from_letter(letter: char) -> Option<Direction> {
        match letter {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Free,
    Food,
    Snake,
}

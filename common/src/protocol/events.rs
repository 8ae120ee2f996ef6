use super::types::{Cell, Coordinate, Direction};

pub trait Message {
    const MESSAGE_ID: u32;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionInd {
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeoutInd;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayInd {
    pub x: i32,
    pub y: i32,
    pub value: Cell,
}

impl DisplayInd {
    pub fn new(at: Coordinate, value: Cell) -> Self {
        Self {
            x: at.x,
            y: at.y,
            value,
        }
    }
}

/// Unsolicited food placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodInd {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FoodReq;

/// Answer to a previous `FoodReq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodResp {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreInd;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LooseInd;

impl Message for DirectionInd {
    const MESSAGE_ID: u32 = 0x10;
}

impl Message for TimeoutInd {
    const MESSAGE_ID: u32 = 0x20;
}

impl Message for DisplayInd {
    const MESSAGE_ID: u32 = 0x30;
}

impl Message for FoodInd {
    const MESSAGE_ID: u32 = 0x40;
}

impl Message for FoodReq {
    const MESSAGE_ID: u32 = 0x41;
}

impl Message for FoodResp {
    const MESSAGE_ID: u32 = 0x42;
}

impl Message for ScoreInd {
    const MESSAGE_ID: u32 = 0x70;
}

impl Message for LooseInd {
    const MESSAGE_ID: u32 = 0x71;
}

impl FoodInd {
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

impl FoodResp {
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

/// Every message of the snake protocol, in either direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Direction(DirectionInd),
    Timeout(TimeoutInd),
    Display(DisplayInd),
    Food(FoodInd),
    FoodRequest(FoodReq),
    FoodResponse(FoodResp),
    Score(ScoreInd),
    Loose(LooseInd),
}

impl Event {
    pub fn message_id(&self) -> u32 {
        match self {
            Event::Direction(_) => DirectionInd::MESSAGE_ID,
            Event::Timeout(_) => TimeoutInd::MESSAGE_ID,
            Event::Display(_) => DisplayInd::MESSAGE_ID,
            Event::Food(_) => FoodInd::MESSAGE_ID,
            Event::FoodRequest(_) => FoodReq::MESSAGE_ID,
            Event::FoodResponse(_) => FoodResp::MESSAGE_ID,
            Event::Score(_) => ScoreInd::MESSAGE_ID,
            Event::Loose(_) => LooseInd::MESSAGE_ID,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Event::Direction(_) => "DirectionInd",
            Event::Timeout(_) => "TimeoutInd",
            Event::Display(_) => "DisplayInd",
            Event::Food(_) => "FoodInd",
            Event::FoodRequest(_) => "FoodReq",
            Event::FoodResponse(_) => "FoodResp",
            Event::Score(_) => "ScoreInd",
            Event::Loose(_) => "LooseInd",
        }
    }
}

macro_rules! impl_from_message {
    ($($message:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$message> for Event {
                fn from(message: $message) -> Self {
                    Event::$variant(message)
                }
            }
        )*
    };
}

impl_from_message! {
    DirectionInd => Direction,
    TimeoutInd => Timeout,
    DisplayInd => Display,
    FoodInd => Food,
    FoodReq => FoodRequest,
    FoodResp => FoodResponse,
    ScoreInd => Score,
    LooseInd => Loose,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_match_wire_tags() {
        let cases: [(Event, u32); 8] = [
            (DirectionInd { direction: Direction::Up }.into(), 0x10),
            (TimeoutInd.into(), 0x20),
            (DisplayInd::new(Coordinate::new(1, 2), Cell::Snake).into(), 0x30),
            (FoodInd { x: 0, y: 0 }.into(), 0x40),
            (FoodReq.into(), 0x41),
            (FoodResp { x: 0, y: 0 }.into(), 0x42),
            (ScoreInd.into(), 0x70),
            (LooseInd.into(), 0x71),
        ];
        for (event, tag) in cases {
            assert_eq!(event.message_id(), tag, "{}", event.name());
        }
    }

    #[test]
    fn test_display_ind_from_coordinate() {
        let ind = DisplayInd::new(Coordinate::new(4, 7), Cell::Food);
        assert_eq!((ind.x, ind.y, ind.value), (4, 7, Cell::Food));
    }
}

mod events;
mod port;
mod types;

pub use events::{
    DirectionInd, DisplayInd, Event, FoodInd, FoodReq, FoodResp, LooseInd, Message, ScoreInd,
    TimeoutInd,
};
pub use port::{ChannelPort, FnPort, NullPort, Port, RecordingPort};
pub use types::{Axis, Cell, Coordinate, Direction, Sign};

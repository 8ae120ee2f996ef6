use common::RecordingPort;

use crate::controller::Controller;

pub const SCENARIO: &str = "W 10 10 F 5 5 S U 3 3 3 3 4 3 5";

pub type TestController<'a> = Controller<&'a RecordingPort, &'a RecordingPort, &'a RecordingPort>;

#[derive(Default)]
pub struct Ports {
    pub display: RecordingPort,
    pub food: RecordingPort,
    pub score: RecordingPort,
}

impl Ports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(&self, config: &str) -> TestController<'_> {
        Controller::new(&self.display, &self.food, &self.score, config).unwrap()
    }

    pub fn is_silent(&self) -> bool {
        self.display.is_empty() && self.food.is_empty() && self.score.is_empty()
    }
}

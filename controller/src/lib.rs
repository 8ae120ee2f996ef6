mod body;
mod controller;
mod error;
mod food;
mod movement;
mod settings;

#[cfg(test)]
mod test_support;

pub use body::Segment;
pub use controller::{Controller, MapDimension};
pub use error::ControllerError;
pub use settings::ControllerSettings;

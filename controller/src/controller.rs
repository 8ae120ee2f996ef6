use common::config::Validate;
use common::{Coordinate, Direction, Event, Port};
use common::{log, log_debug, log_warn};

use crate::body::{Body, Segment};
use crate::error::ControllerError;
use crate::settings::ControllerSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapDimension {
    pub width: i32,
    pub height: i32,
}

impl MapDimension {
    pub fn contains(&self, cell: Coordinate) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }
}

/// Snake game logic driven entirely by inbound events.
///
/// Display updates go to the display port, food requests to the food port,
/// score and loss notifications to the score port. A loss is only reported;
/// resetting the round is up to the caller.
pub struct Controller<D: Port, F: Port, S: Port> {
    pub(crate) display_port: D,
    pub(crate) food_port: F,
    pub(crate) score_port: S,
    pub(crate) map: MapDimension,
    pub(crate) food: Coordinate,
    pub(crate) direction: Direction,
    pub(crate) body: Body,
}

impl<D: Port, F: Port, S: Port> Controller<D, F, S> {
    /// Builds a controller from the textual configuration. Only the grammar is
    /// checked here; use [`Controller::from_settings`] for full validation.
    pub fn new(
        display_port: D,
        food_port: F,
        score_port: S,
        config: &str,
    ) -> Result<Self, ControllerError> {
        let settings = ControllerSettings::parse(config)?;
        Self::build(display_port, food_port, score_port, &settings)
    }

    pub fn from_settings(
        display_port: D,
        food_port: F,
        score_port: S,
        settings: &ControllerSettings,
    ) -> Result<Self, ControllerError> {
        settings.validate().map_err(ControllerError::configuration)?;
        Self::build(display_port, food_port, score_port, settings)
    }

    fn build(
        display_port: D,
        food_port: F,
        score_port: S,
        settings: &ControllerSettings,
    ) -> Result<Self, ControllerError> {
        let body = Body::from_cells(&settings.body)
            .ok_or_else(|| ControllerError::configuration("snake body is empty"))?;

        log!(
            "Snake controller ready: map {}x{}, {} segments heading {:?}, food at ({}, {})",
            settings.width,
            settings.height,
            body.len(),
            settings.direction,
            settings.food.x,
            settings.food.y
        );

        Ok(Self {
            display_port,
            food_port,
            score_port,
            map: settings.map_dimension(),
            food: settings.food,
            direction: settings.direction,
            body,
        })
    }

    /// Handles one inbound event to completion. Events the controller never
    /// consumes (its own outbound kinds) are a protocol violation.
    pub fn receive(&mut self, event: Event) -> Result<(), ControllerError> {
        match event {
            Event::Timeout(_) => self.handle_timeout(),
            Event::Direction(ind) => self.handle_direction_change(ind.direction),
            Event::Food(ind) => self.handle_food_ind(ind),
            Event::FoodResponse(resp) => self.handle_food_resp(resp),
            Event::Display(_) | Event::FoodRequest(_) | Event::Score(_) | Event::Loose(_) => {
                log_warn!(
                    "Unexpected {} (0x{:02x}) received",
                    event.name(),
                    event.message_id()
                );
                return Err(ControllerError::UnexpectedEvent {
                    message_id: event.message_id(),
                    name: event.name(),
                });
            }
        }
        Ok(())
    }

    fn handle_direction_change(&mut self, requested: Direction) {
        if requested.is_turn_from(self.direction) {
            log_debug!("Direction {:?} -> {:?}", self.direction, requested);
            self.direction = requested;
        } else {
            log_debug!(
                "Ignoring direction {:?} while heading {:?}",
                requested,
                self.direction
            );
        }
    }

    pub fn head(&self) -> Coordinate {
        self.body.head().position
    }

    /// Head first.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food_position(&self) -> Coordinate {
        self.food
    }

    pub fn map_dimension(&self) -> MapDimension {
        self.map
    }
}

use common::{Cell, Coordinate, DisplayInd, FoodInd, FoodReq, FoodResp, Port};
use common::log_debug;

use crate::controller::Controller;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FoodOrigin {
    Unsolicited,
    Requested,
}

impl<D: Port, F: Port, S: Port> Controller<D, F, S> {
    pub(crate) fn handle_food_ind(&mut self, ind: FoodInd) {
        self.place_food(ind.position(), FoodOrigin::Unsolicited);
    }

    pub(crate) fn handle_food_resp(&mut self, resp: FoodResp) {
        self.place_food(resp.position(), FoodOrigin::Requested);
    }

    fn place_food(&mut self, cell: Coordinate, origin: FoodOrigin) {
        if self.body.occupies(cell) {
            log_debug!(
                "{:?} food at ({}, {}) lands on the snake, asking again",
                origin,
                cell.x,
                cell.y
            );
            self.food_port.send(FoodReq.into());
            return;
        }

        // Only unsolicited placements clear the previous food cell.
        if origin == FoodOrigin::Unsolicited {
            self.display_port
                .send(DisplayInd::new(self.food, Cell::Free).into());
        }
        self.display_port.send(DisplayInd::new(cell, Cell::Food).into());
        self.food = cell;
    }
}

use std::fmt;

use common::{Cell, Coordinate, DisplayInd, FoodReq, LooseInd, Port, ScoreInd};
use common::log;

use crate::body::Segment;
use crate::controller::Controller;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Collision {
    Wall,
    Body,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => write!(f, "hit the wall"),
            Collision::Body => write!(f, "bit itself"),
        }
    }
}

impl<D: Port, F: Port, S: Port> Controller<D, F, S> {
    pub(crate) fn handle_timeout(&mut self) {
        let old_head = self.body.head();
        let new_head = match self.next_head() {
            Ok(cell) => cell,
            Err(collision) => {
                log!(
                    "Snake {} heading {:?} from ({}, {})",
                    collision,
                    self.direction,
                    old_head.position.x,
                    old_head.position.y
                );
                self.score_port.send(LooseInd.into());
                return;
            }
        };

        if new_head == self.food {
            log!("Food eaten at ({}, {})", new_head.x, new_head.y);
            self.score_port.send(ScoreInd.into());
            self.food_port.send(FoodReq.into());
        } else {
            for cell in self.body.age() {
                self.display_port.send(DisplayInd::new(cell, Cell::Free).into());
            }
        }

        // The head keeps the lifetime it had before aging, so skipping
        // `age` on a food tick is what makes the snake one longer.
        self.body.push_head(Segment::new(new_head, old_head.ttl));
        self.display_port.send(DisplayInd::new(new_head, Cell::Snake).into());
        self.body.retire_expired();
    }

    fn next_head(&self) -> Result<Coordinate, Collision> {
        let (dx, dy) = self.direction.delta();
        let cell = self
            .body
            .head()
            .position
            .checked_offset(dx, dy)
            .ok_or(Collision::Wall)?;

        if self.body.occupies(cell) {
            Err(Collision::Body)
        } else if !self.map.contains(cell) {
            Err(Collision::Wall)
        } else {
            Ok(cell)
        }
    }
}

#[cfg(test)]
mod tests {
    use common::{
        Cell, Coordinate, Direction, DirectionInd, DisplayInd, Event, FoodReq, LooseInd, ScoreInd,
        TimeoutInd,
    };

    use crate::test_support::{Ports, SCENARIO, TestController};

    fn tick(controller: &mut TestController<'_>) {
        controller.receive(TimeoutInd.into()).unwrap();
    }

    fn turn(controller: &mut TestController<'_>, direction: Direction) {
        controller.receive(DirectionInd { direction }.into()).unwrap();
    }

    fn cells(controller: &TestController<'_>) -> Vec<(i32, i32)> {
        controller
            .segments()
            .map(|s| (s.position.x, s.position.y))
            .collect()
    }

    fn display(x: i32, y: i32, value: Cell) -> Event {
        DisplayInd::new(Coordinate::new(x, y), value).into()
    }

    #[test]
    fn test_plain_move_retires_tail() {
        let ports = Ports::new();
        let mut controller = ports.controller(SCENARIO);

        tick(&mut controller);

        assert_eq!(
            ports.display.take(),
            vec![display(3, 5, Cell::Free), display(3, 2, Cell::Snake)]
        );
        assert!(ports.food.is_empty());
        assert!(ports.score.is_empty());
        assert_eq!(cells(&controller), vec![(3, 2), (3, 3), (3, 4)]);
        let ttls: Vec<i32> = controller.segments().map(|s| s.ttl).collect();
        assert_eq!(ttls, vec![3, 2, 1]);
    }

    #[test]
    fn test_eating_grows_without_clearing_tail() {
        let ports = Ports::new();
        let mut controller = ports.controller("W 10 10 F 5 5 S R 3 4 5 3 5 2 5");

        tick(&mut controller);

        assert_eq!(ports.score.take(), vec![Event::Score(ScoreInd)]);
        assert_eq!(ports.food.take(), vec![Event::FoodRequest(FoodReq)]);
        assert_eq!(ports.display.take(), vec![display(5, 5, Cell::Snake)]);
        assert_eq!(controller.len(), 4);
        assert_eq!(cells(&controller), vec![(5, 5), (4, 5), (3, 5), (2, 5)]);
    }

    #[test]
    fn test_growth_lasts_until_shared_lifetime_runs_out() {
        let ports = Ports::new();
        let mut controller = ports.controller("W 10 10 F 5 5 S R 3 4 5 3 5 2 5");

        tick(&mut controller);
        let ttls: Vec<i32> = controller.segments().map(|s| s.ttl).collect();
        assert_eq!(ttls, vec![3, 3, 2, 1]);

        tick(&mut controller);
        tick(&mut controller);
        assert_eq!(controller.len(), 4);

        // The two segments that shared the head lifetime expire together.
        tick(&mut controller);
        assert_eq!(controller.len(), 3);
        assert_eq!(cells(&controller), vec![(8, 5), (7, 5), (6, 5)]);
    }

    #[test]
    fn test_leaving_left_edge_loses() {
        let ports = Ports::new();
        let mut controller = ports.controller("W 10 10 F 5 5 S L 2 0 4 1 4");

        tick(&mut controller);

        assert_eq!(ports.score.take(), vec![Event::Loose(LooseInd)]);
        assert!(ports.display.is_empty());
        assert!(ports.food.is_empty());
        assert_eq!(cells(&controller), vec![(0, 4), (1, 4)]);
        let ttls: Vec<i32> = controller.segments().map(|s| s.ttl).collect();
        assert_eq!(ttls, vec![2, 1]);
    }

    #[test]
    fn test_every_wall_loses() {
        for config in [
            "W 4 3 F 2 1 S U 1 1 0",
            "W 4 3 F 2 1 S D 1 1 2",
            "W 4 3 F 2 1 S L 1 0 1",
            "W 4 3 F 2 1 S R 1 3 1",
        ] {
            let ports = Ports::new();
            let mut controller = ports.controller(config);
            let before = cells(&controller);

            tick(&mut controller);

            assert_eq!(ports.score.take(), vec![Event::Loose(LooseInd)], "{}", config);
            assert!(ports.display.is_empty());
            assert_eq!(cells(&controller), before);
        }
    }

    #[test]
    fn test_leaving_integer_range_loses() {
        let ports = Ports::new();
        let mut controller = ports.controller("W 10 10 F 5 5 S R 1 2147483647 0");

        tick(&mut controller);

        assert_eq!(ports.score.take(), vec![Event::Loose(LooseInd)]);
        assert!(ports.display.is_empty());
        assert!(ports.food.is_empty());
        assert_eq!(controller.head(), Coordinate::new(i32::MAX, 0));
        assert_eq!(controller.len(), 1);
    }

    #[test]
    fn test_biting_itself_loses() {
        let ports = Ports::new();
        // Hook shape: head at (2,2) heading up into (2,1), which is part of the body.
        let mut controller = ports.controller("W 10 10 F 9 9 S U 5 2 2 3 2 3 1 2 1 1 1");

        tick(&mut controller);

        assert_eq!(ports.score.take(), vec![Event::Loose(LooseInd)]);
        assert!(ports.display.is_empty());
        assert_eq!(controller.len(), 5);
        assert_eq!(controller.head(), Coordinate::new(2, 2));
    }

    #[test]
    fn test_moving_onto_current_tail_loses() {
        let ports = Ports::new();
        let mut controller = ports.controller("W 10 10 F 9 9 S L 4 1 0 0 0 0 1 1 1");
        turn(&mut controller, Direction::Down);

        tick(&mut controller);

        assert_eq!(ports.score.take(), vec![Event::Loose(LooseInd)]);
    }

    #[test]
    fn test_controller_keeps_reporting_after_loss() {
        let ports = Ports::new();
        let mut controller = ports.controller("W 3 3 F 2 2 S U 1 0 0");

        tick(&mut controller);
        tick(&mut controller);

        assert_eq!(
            ports.score.take(),
            vec![Event::Loose(LooseInd), Event::Loose(LooseInd)]
        );
        turn(&mut controller, Direction::Right);
        tick(&mut controller);
        assert_eq!(controller.head(), Coordinate::new(1, 0));
    }

    #[test]
    fn test_length_is_stable_on_a_long_walk() {
        let ports = Ports::new();
        let mut controller = ports.controller("W 20 20 F 19 19 S R 4 5 5 4 5 3 5 2 5");
        let route = [
            Direction::Down,
            Direction::Left,
            Direction::Up,
            Direction::Right,
        ];

        for direction in route {
            turn(&mut controller, direction);
            for _ in 0..5 {
                tick(&mut controller);
                assert_eq!(controller.len(), 4);
            }
        }

        assert!(ports.score.is_empty());
        let events = ports.display.take();
        let cleared = events
            .iter()
            .filter(|e| matches!(e, Event::Display(ind) if ind.value == Cell::Free))
            .count();
        assert_eq!(cleared, 20);
        assert_eq!(events.len(), 40);
    }
}

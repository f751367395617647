/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{error, info};
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::car::{CarIo, MoveResult};
use crate::scheduler::Scheduler;
use crate::shared::{Direction, EventSource};

/***************************************/
/*       Public data structures        */
/***************************************/
/// What an idle car was told to do next.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IdleOutcome {
    /// Still has queued stops, nothing to do.
    Busy,
    /// Re-queued the in-car buttons on the side of the nearest one.
    RefreshedFromButtons { direction: Direction, queued: usize },
    /// Passengers aboard but no buttons pressed; wait for a press.
    Occupied,
    /// No unclaimed calls anywhere.
    Dormant,
    /// Too many cars already left idle on their own.
    Throttled,
    /// Sent to serve a waiting call.
    Retasked { floor: u8, result: MoveResult },
    LogicGap,
}

/***************************************/
/*             Public API              */
/***************************************/
impl<C: CarIo> Scheduler<C> {
    pub(crate) fn on_idle(&mut self, index: usize) -> IdleOutcome {
        if !self.first_idle_seen {
            self.first_idle_seen = true;
            match serde_json::to_string(&self.status()) {
                Ok(json) => info!("E{}: first idle car, fleet {}", index, json),
                Err(e) => info!("E{}: first idle car, fleet status unavailable: {}", index, e),
            }
        }

        // Whatever it was serving is finished or abandoned
        if self.cars[index].state.is_idle() {
            self.claims.release_car(index);
            self.cars[index].state.self_dispatched = false;
        }

        let outcome = self.decide_idle(index);

        let line = match outcome {
            IdleOutcome::Busy => "still has stops".to_string(),
            IdleOutcome::RefreshedFromButtons { direction, queued } => {
                format!("queued {} pressed floors going {}", queued, direction)
            }
            IdleOutcome::Occupied => "waiting for a button press".to_string(),
            IdleOutcome::Dormant => "nothing waiting".to_string(),
            IdleOutcome::Throttled => "held back, fleet initiative used up".to_string(),
            IdleOutcome::Retasked { floor, result } => {
                format!("go to floor {}: {}", floor, result.status)
            }
            IdleOutcome::LogicGap => "no rule matched".to_string(),
        };
        self.trace(
            EventSource::Scheduler { car: index },
            vec!["idle".to_string(), line],
        );

        outcome
    }

    fn decide_idle(&mut self, index: usize) -> IdleOutcome {
        if !self.cars[index].state.is_idle() {
            return IdleOutcome::Busy;
        }

        if !self.cars[index].io.pressed_floors().is_empty() {
            return self.refresh_from_buttons(index);
        }

        if self.cars[index].io.load_factor() > 0.0 {
            return IdleOutcome::Occupied;
        }

        let claims = &self.claims;
        let waiting = self
            .floors
            .waiting(|floor, direction| claims.is_claimed_by_other(floor, direction, index));
        if waiting.none_waiting() {
            return IdleOutcome::Dormant;
        }

        if !self.has_initiative() {
            return IdleOutcome::Throttled;
        }

        let current = self.cars[index].io.current_floor();
        let (floor, direction) = match (waiting.bottom_up, waiting.top_down) {
            (Some(up), Some(down)) => closer_floor(current, up, down),
            (Some(up), None) => (up, Direction::Up),
            (None, Some(down)) => (down, Direction::Down),
            (None, None) => {
                error!("E{}: idle with calls waiting but none reachable", index);
                return IdleOutcome::LogicGap;
            }
        };

        let top_floor = self.top_floor();
        let car = &mut self.cars[index];
        let result = car.go_to(floor, direction, false, top_floor);
        if result.success {
            car.state.self_dispatched = true;
            self.claims.claim(floor, direction, index);
            info!("E{}: retasked to floor {} going {}", index, floor, direction);
        }

        IdleOutcome::Retasked { floor, result }
    }

    /**
     * Re-queues the occupants' requests after the queue ran dry.
     *
     * The side of the nearest pressed floor wins, ties going up. Only the
     * floors on that side are queued; the rest wait for the turnaround.
     */
    fn refresh_from_buttons(&mut self, index: usize) -> IdleOutcome {
        let top_floor = self.top_floor();
        let car = &mut self.cars[index];
        let current = car.io.current_floor();
        let pressed = car.io.pressed_floors();

        let nearest = pressed
            .iter()
            .copied()
            .min_by_key(|&floor| (floor.abs_diff(current), floor < current));

        let direction = match nearest {
            Some(floor) if floor < current => Direction::Down,
            _ => Direction::Up,
        };

        let mut route: Vec<u8> = pressed
            .into_iter()
            .filter(|&floor| match direction {
                Direction::Up => floor >= current,
                Direction::Down => floor < current,
            })
            .collect();
        route.sort_unstable();
        if direction == Direction::Down {
            route.reverse();
        }

        let queued = route
            .into_iter()
            .filter(|&floor| car.go_to(floor, direction, false, top_floor).success)
            .count();

        IdleOutcome::RefreshedFromButtons { direction, queued }
    }

    /// Whether one more car may leave idle on its own.
    pub(crate) fn has_initiative(&self) -> bool {
        let cap = (self.initiative * self.cars.len() as f64).ceil() as usize;
        let active = self
            .cars
            .iter()
            .filter(|car| car.state.self_dispatched)
            .count();
        active < cap
    }
}

/// Nearest of the lowest up call and the highest down call. Ties go up.
pub fn closer_floor(current: u8, up_floor: u8, down_floor: u8) -> (u8, Direction) {
    if up_floor.abs_diff(current) <= down_floor.abs_diff(current) {
        (up_floor, Direction::Up)
    } else {
        (down_floor, Direction::Down)
    }
}

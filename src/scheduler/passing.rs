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
/// What a moving car did about the floor it is passing.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PassingDecision {
    /// The floor is already the next stop.
    AlreadyStopping,
    /// The floor was queued further back and is now the next stop.
    Reordered { from: usize },
    /// Somebody inside asked for the floor.
    OccupantStop,
    /// Nobody is waiting to go this way here.
    NotRequested,
    /// Travelling against the committed direction.
    WrongDirection,
    TooFull,
    /// Opportunistic stop for a waiting call.
    Stopping(MoveResult),
    LogicGap,
}

/***************************************/
/*             Public API              */
/***************************************/
impl<C: CarIo> Scheduler<C> {
    pub(crate) fn on_passing_floor(
        &mut self,
        index: usize,
        floor: u8,
        direction: Direction,
    ) -> PassingDecision {
        let decision = self.decide_passing(index, floor, direction);

        let line = match decision {
            PassingDecision::AlreadyStopping => "already stopping".to_string(),
            PassingDecision::Reordered { from } => format!("moved stop from position {}", from),
            PassingDecision::OccupantStop => "stopping for occupant".to_string(),
            PassingDecision::NotRequested => "no call here".to_string(),
            PassingDecision::WrongDirection => "not our direction".to_string(),
            PassingDecision::TooFull => "too full to stop".to_string(),
            PassingDecision::Stopping(result) => format!("stop {}", result.status),
            PassingDecision::LogicGap => "no rule matched".to_string(),
        };
        self.trace(
            EventSource::Scheduler { car: index },
            vec![format!("passing floor {} going {}", floor, direction), line],
        );

        decision
    }

    /**
     * Decides whether a moving car stops at the floor it is about to pass.
     *
     * The first matching rule wins:
     * 1. the floor is the queue head: nothing to do;
     * 2. the floor is queued further back: promote it to the head;
     * 3. an occupant pressed the floor: stop, no questions asked;
     * 4. no lamp for the travel direction: keep going;
     * 5. travelling against the committed direction: keep going;
     * 6. at or over the full threshold: keep going;
     * 7. stop for the waiting call and take it over.
     */
    pub(crate) fn decide_passing(
        &mut self,
        index: usize,
        floor: u8,
        direction: Direction,
    ) -> PassingDecision {
        let lamps = self.floors.get(floor).copied();
        let top_floor = self.top_floor();
        let full_threshold = self.full_threshold;
        let car = &mut self.cars[index];

        match car.state.position(floor) {
            Some(0) => return PassingDecision::AlreadyStopping,
            Some(from) => {
                car.promote(floor);
                return PassingDecision::Reordered { from };
            }
            None => {}
        }

        if car.io.pressed_floors().contains(&floor) {
            car.force_stop(floor);
            return PassingDecision::OccupantStop;
        }

        if !lamps.map_or(false, |f| f.is_lit(direction)) {
            return PassingDecision::NotRequested;
        }

        if car.state.direction != Some(direction) {
            return PassingDecision::WrongDirection;
        }

        if car.is_full(full_threshold) {
            return PassingDecision::TooFull;
        }

        match lamps {
            Some(f) if f.is_lit(direction) => {
                let result = car.go_to(floor, direction, true, top_floor);
                if result.success {
                    if let Some(previous) = self.claims.claim(floor, direction, index) {
                        if previous != index {
                            info!(
                                "E{}: took over floor {} going {} from E{}",
                                index, floor, direction, previous
                            );
                            self.hand_over(previous, floor);
                        }
                    }
                }
                PassingDecision::Stopping(result)
            }
            _ => {
                error!(
                    "E{}: passing floor {} going {}, no rule matched",
                    index, floor, direction
                );
                PassingDecision::LogicGap
            }
        }
    }

    /// Takes `floor` off the car that owned the call, unless someone inside asked for it.
    fn hand_over(&mut self, from: usize, floor: u8) {
        let car = match self.cars.get_mut(from) {
            Some(car) => car,
            None => return,
        };

        if car.io.pressed_floors().contains(&floor) {
            return;
        }

        if car.withdraw(floor) && car.state.is_idle() {
            self.claims.release_car(from);
        }
    }
}

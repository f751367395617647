/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::car::{availability, CarIo, MoveResult};
use crate::scheduler::Scheduler;
use crate::shared::{Availability, Direction};

/***************************************/
/*       Public data structures        */
/***************************************/
/**
 * Outcome of routing one hall call.
 *
 * # Fields
 * - `car`:             Best scoring car, `None` when every car is unavailable.
 * - `availability`:    The winning availability.
 * - `score`:           Its raw score, -1 to 2.
 * - `called`:          A move command was issued and accepted.
 * - `command`:         Result of the move command, if one was issued.
 */
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub car: Option<usize>,
    pub availability: Availability,
    pub score: i8,
    pub called: bool,
    pub command: Option<MoveResult>,
}

/***************************************/
/*             Public API              */
/***************************************/
impl<C: CarIo> Scheduler<C> {
    /**
     * Picks the best car for a hall call and commands it if it is idle.
     *
     * Cars are scanned in index order and only a strictly better score replaces
     * the current pick, so the lowest index wins a tie. A car already en route
     * to the floor or busy is left alone; it will see the call as it passes.
     */
    pub fn dispatch(&mut self, floor: u8, direction: Direction) -> DispatchResult {
        let mut best: Option<(usize, Availability)> = None;
        for car in &self.cars {
            let score = availability(car, floor, direction, self.full_threshold);
            if score == Availability::Unavailable {
                continue;
            }
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((car.index, score)),
            }
        }

        let (index, winner) = match best {
            Some(best) => best,
            None => {
                return DispatchResult {
                    car: None,
                    availability: Availability::Unavailable,
                    score: Availability::Unavailable.score(),
                    called: false,
                    command: None,
                };
            }
        };

        if winner != Availability::Idle {
            return DispatchResult {
                car: Some(index),
                availability: winner,
                score: winner.score(),
                called: false,
                command: None,
            };
        }

        let top_floor = self.top_floor();
        let result = self.cars[index].go_to(floor, direction, false, top_floor);
        if result.success {
            self.claims.claim(floor, direction, index);
            info!("E{}: dispatched to floor {} going {}", index, floor, direction);
        }

        DispatchResult {
            car: Some(index),
            availability: winner,
            score: winner.score(),
            called: result.success,
            command: Some(result),
        }
    }
}

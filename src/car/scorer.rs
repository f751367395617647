/***************************************/
/*           Local modules             */
/***************************************/
use crate::car::{Car, CarIo};
use crate::shared::{Availability, Direction};

/***************************************/
/*             Public API              */
/***************************************/
/// Rates how well `car` can serve a call at `floor` heading `direction`.
pub fn availability<C: CarIo>(
    car: &Car<C>,
    floor: u8,
    direction: Direction,
    full_threshold: f64,
) -> Availability {
    // Already on its way there
    if car.state.furthest_target == Some(floor) {
        return Availability::EnRoute;
    }

    if car.state.queue.is_empty() && car.io.pressed_floors().is_empty() {
        return Availability::Idle;
    }

    // Heading the other way beyond the floor, would have to turn back
    match (car.state.direction, car.state.furthest_target) {
        (Some(Direction::Up), Some(target)) if direction == Direction::Down && target > floor => {
            return Availability::Unavailable;
        }
        (Some(Direction::Down), Some(target)) if direction == Direction::Up && target < floor => {
            return Availability::Unavailable;
        }
        _ => {}
    }

    if car.is_full(full_threshold) {
        return Availability::Unavailable;
    }

    Availability::Busy
}

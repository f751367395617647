pub mod io;
pub mod movement;
pub mod scorer;
pub mod state;
mod car_tests;

pub use io::CarIo;
pub use movement::{MoveResult, MoveStatus};
pub use scorer::availability;
pub use state::CarState;

use crate::floors::FloorRegistry;
use crate::shared::Direction;

/**
 * One car of the fleet: the scheduler's routing state plus the host's I/O handle.
 *
 * # Fields
 * - `index`:   Position in the fleet, also the tie-break order when scoring.
 * - `state`:   Direction, furthest target and destination queue.
 * - `io`:      Sensors and actuators of the physical car.
 */
pub struct Car<C: CarIo> {
    pub index: usize,
    pub state: CarState,
    pub io: C,
}

impl<C: CarIo> Car<C> {
    pub fn new(index: usize, io: C) -> Car<C> {
        Car {
            index,
            state: CarState::new(),
            io,
        }
    }

    /// Sets the committed direction and mirrors it onto the indicators.
    pub fn set_direction(&mut self, direction: Option<Direction>) {
        self.state.direction = direction;
        self.io.set_up_indicator(direction == Some(Direction::Up));
        self.io.set_down_indicator(direction == Some(Direction::Down));
    }

    pub fn is_full(&self, full_threshold: f64) -> bool {
        self.io.load_factor() >= full_threshold
    }

    /// `[E0^][F2^_]`: car 0 committed up, at floor 2.
    pub fn status_text(&self, floors: &FloorRegistry) -> String {
        format!(
            "[E{}{}]{}",
            self.index,
            Direction::symbol(self.state.direction),
            floors.status_text(self.io.current_floor())
        )
    }

    fn commit_head(&mut self, force_stop: bool) {
        if let Some(head) = self.state.head() {
            self.io.commit_move_to(head, force_stop);
        }
    }
}

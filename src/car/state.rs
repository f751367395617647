/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;

/***************************************/
/*       Public data structures        */
/***************************************/
/**
 * Scheduler-owned routing state of one car.
 *
 * # Fields
 * - `direction`:           Committed direction. Kept until the queue empties.
 * - `furthest_target`:     Farthest floor committed to in `direction`. `None` when idle.
 * - `queue`:               Floors to visit, unique, in route order.
 * - `self_dispatched`:     Car left idle on its own initiative and has not idled since.
 */
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarState {
    pub direction: Option<Direction>,
    pub furthest_target: Option<u8>,
    pub queue: Vec<u8>,
    pub self_dispatched: bool,
}

impl CarState {
    pub fn new() -> CarState {
        CarState::default()
    }

    pub fn head(&self) -> Option<u8> {
        self.queue.first().copied()
    }

    pub fn position(&self, floor: u8) -> Option<usize> {
        self.queue.iter().position(|&f| f == floor)
    }

    pub fn contains(&self, floor: u8) -> bool {
        self.queue.contains(&floor)
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Adds `floor` if absent and re-sorts. Returns `false` for a duplicate.
    pub fn insert(&mut self, floor: u8) -> bool {
        if self.contains(floor) {
            return false;
        }
        self.queue.push(floor);
        self.sort();
        true
    }

    /// Makes `floor` the next stop, whether or not it was already queued.
    pub fn insert_at_head(&mut self, floor: u8) {
        self.queue.retain(|&f| f != floor);
        self.queue.insert(0, floor);
    }

    /// Splices an already queued floor to the head. Returns `false` if it was not queued.
    pub fn promote(&mut self, floor: u8) -> bool {
        match self.position(floor) {
            Some(0) => true,
            Some(index) => {
                let floor = self.queue.remove(index);
                self.queue.insert(0, floor);
                true
            }
            None => false,
        }
    }

    /// Removes every occurrence of `floor`. An emptied queue resets the car to idle.
    /// Returns the number of entries removed.
    pub fn purge(&mut self, floor: u8) -> usize {
        let before = self.queue.len();
        self.queue.retain(|&f| f != floor);

        if self.queue.is_empty() {
            self.direction = None;
            self.furthest_target = None;
        }

        before - self.queue.len()
    }

    /// Orders the queue by the committed direction: ascending unless going down.
    pub fn sort(&mut self) {
        self.queue.sort_unstable();
        if self.direction == Some(Direction::Down) {
            self.queue.reverse();
        }
    }

    pub fn is_sorted(&self) -> bool {
        match self.direction {
            Some(Direction::Down) => self.queue.windows(2).all(|w| w[0] > w[1]),
            _ => self.queue.windows(2).all(|w| w[0] < w[1]),
        }
    }

    /**
     * Whether serving `floor` in `direction` would mean turning back.
     *
     * A regular request is measured against the queue head. A forced stop is
     * measured against the car's current floor, since it is taken between the
     * car and its head.
     */
    pub fn is_backtrack(
        &self,
        floor: u8,
        direction: Direction,
        current_floor: u8,
        force_stop: bool,
    ) -> bool {
        let reference = if force_stop {
            Some(current_floor)
        } else {
            self.head()
        };

        match (reference, direction) {
            (Some(reference), Direction::Up) => floor < reference,
            (Some(reference), Direction::Down) => floor > reference,
            (None, _) => false,
        }
    }

    /// Whether the car is committed the other way at least as far as `floor`.
    pub fn is_going_past(&self, floor: u8, direction: Direction) -> bool {
        match (self.direction, direction, self.furthest_target) {
            (Some(Direction::Up), Direction::Down, Some(target)) => floor <= target,
            (Some(Direction::Down), Direction::Up, Some(target)) => floor >= target,
            _ => false,
        }
    }

    /// Moves the furthest target away from the car, never back.
    pub fn extend_target(&mut self, floor: u8, direction: Direction) {
        self.furthest_target = Some(match (self.furthest_target, direction) {
            (Some(target), Direction::Up) => target.max(floor),
            (Some(target), Direction::Down) => target.min(floor),
            (None, _) => floor,
        });
    }
}

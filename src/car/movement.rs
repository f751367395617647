/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::car::{Car, CarIo};
use crate::shared::Direction;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoveStatus {
    Moved,
    SameFloor,
    InvalidFloor(u8),
    Backtrack,
    GoingPast,
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Moved => write!(f, "moved"),
            MoveStatus::SameFloor => write!(f, "same floor"),
            MoveStatus::InvalidFloor(floor) => write!(f, "invalid floor: {}", floor),
            MoveStatus::Backtrack => write!(f, "backtrack"),
            MoveStatus::GoingPast => write!(f, "going past"),
        }
    }
}

/// Outcome of a move request. A rejection is an ordinary value; the call simply stays pending.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub success: bool,
    pub status: MoveStatus,
    pub direction: Direction,
}

impl MoveResult {
    fn moved(direction: Direction) -> MoveResult {
        MoveResult {
            success: true,
            status: MoveStatus::Moved,
            direction,
        }
    }

    fn rejected(status: MoveStatus, direction: Direction) -> MoveResult {
        MoveResult {
            success: false,
            status,
            direction,
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
impl<C: CarIo> Car<C> {
    /**
     * Sends the car to `floor`, serving it in `direction`.
     *
     * Rejections, checked in order:
     * - `SameFloor`:       already at `floor` with `floor` queued.
     * - `InvalidFloor`:    `floor` is above `top_floor`.
     * - `Backtrack`:       `floor` lies behind the route.
     * - `GoingPast`:       committed the other way at least as far as `floor`.
     *
     * On success the car commits to `direction`, its furthest target is extended
     * and `floor` is queued in route order, or put first when `force_stop` is set.
     */
    pub fn go_to(
        &mut self,
        floor: u8,
        direction: Direction,
        force_stop: bool,
        top_floor: u8,
    ) -> MoveResult {
        let current_floor = self.io.current_floor();

        if floor == current_floor && self.state.contains(floor) {
            return MoveResult::rejected(MoveStatus::SameFloor, direction);
        }

        if floor > top_floor {
            return MoveResult::rejected(MoveStatus::InvalidFloor(floor), direction);
        }

        if self
            .state
            .is_backtrack(floor, direction, current_floor, force_stop)
        {
            return MoveResult::rejected(MoveStatus::Backtrack, direction);
        }

        if self.state.is_going_past(floor, direction) {
            return MoveResult::rejected(MoveStatus::GoingPast, direction);
        }

        self.set_direction(Some(direction));
        self.state.extend_target(floor, direction);

        if force_stop {
            self.state.insert_at_head(floor);
        } else {
            self.state.insert(floor);
        }
        self.commit_head(force_stop);

        MoveResult::moved(direction)
    }

    /// Stops at `floor` next without any checks. Reserved for floors an occupant asked for.
    pub fn force_stop(&mut self, floor: u8) {
        self.state.insert_at_head(floor);
        self.commit_head(true);
    }

    /// Moves a queued floor to the head. Returns `false` if it was not queued.
    pub fn promote(&mut self, floor: u8) -> bool {
        let promoted = self.state.promote(floor);
        if promoted {
            self.commit_head(false);
        }
        promoted
    }

    /**
     * Drops a queued floor that another car now serves. Returns `false` if it
     * was not queued.
     *
     * An emptied queue parks the car. Otherwise the furthest target is pulled
     * back to the remaining route and the head is committed again.
     */
    pub fn withdraw(&mut self, floor: u8) -> bool {
        if self.state.purge(floor) == 0 {
            return false;
        }

        if self.state.is_idle() {
            self.set_direction(None);
            self.io.stop();
            return true;
        }

        if self.state.furthest_target == Some(floor) {
            self.state.furthest_target = match self.state.direction {
                Some(Direction::Down) => self.state.queue.iter().copied().min(),
                _ => self.state.queue.iter().copied().max(),
            };
        }
        self.commit_head(false);
        true
    }
}

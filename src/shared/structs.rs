/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of a request for `to` made from `from`. Equal floors count as down.
    pub fn toward(from: u8, to: u8) -> Direction {
        if to > from {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn symbol(direction: Option<Direction>) -> char {
        match direction {
            Some(Direction::Up) => '^',
            Some(Direction::Down) => 'v',
            None => 'x',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/**
 * Weighted availability of a car for a (floor, direction) call.
 *
 * Variants are declared in ascending order so `Ord` ranks them the same way
 * their integer scores do.
 *
 * - `Unavailable` (-1): travelling the other way past the floor, or too full.
 * - `Busy` (0):         has work, might pass the floor anyway.
 * - `Idle` (1):         nothing queued and nothing pressed; may be dispatched.
 * - `EnRoute` (2):      already heading to exactly this floor.
 */
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Unavailable,
    Busy,
    Idle,
    EnRoute,
}

impl Availability {
    pub fn score(self) -> i8 {
        match self {
            Availability::Unavailable => -1,
            Availability::Busy => 0,
            Availability::Idle => 1,
            Availability::EnRoute => 2,
        }
    }
}

/// Who triggered a scheduler action. Used to pick the trace filter and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    FloorCall { floor: u8 },
    CarButton { car: usize },
    Scheduler { car: usize },
}

/// Events pushed into the scheduler by the host, one at a time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Idle { car: usize },
    FloorButtonPressed { car: usize, floor: u8 },
    PassingFloor { car: usize, floor: u8, direction: Direction },
    StoppedAtFloor { car: usize, floor: u8 },
    UpButtonPressed { floor: u8 },
    DownButtonPressed { floor: u8 },
}

impl Event {
    /// Car the event belongs to, `None` for hall calls.
    pub fn car(&self) -> Option<usize> {
        match *self {
            Event::Idle { car }
            | Event::FloorButtonPressed { car, .. }
            | Event::PassingFloor { car, .. }
            | Event::StoppedAtFloor { car, .. } => Some(car),
            Event::UpButtonPressed { .. } | Event::DownButtonPressed { .. } => None,
        }
    }
}

/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Floor {
    pub up_lit: bool,
    pub down_lit: bool,
}

impl Floor {
    pub fn is_lit(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up_lit,
            Direction::Down => self.down_lit,
        }
    }

    fn lamp_mut(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Up => &mut self.up_lit,
            Direction::Down => &mut self.down_lit,
        }
    }
}

/**
 * Snapshot of every outstanding hall call.
 *
 * # Fields
 * - `up`:          Floors with the up lamp lit, ascending.
 * - `down`:        Floors with the down lamp lit, ascending.
 * - `bottom_up`:   Lowest floor waiting to go up.
 * - `top_down`:    Highest floor waiting to go down.
 */
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct FloorsWaiting {
    pub up: Vec<u8>,
    pub down: Vec<u8>,
    pub bottom_up: Option<u8>,
    pub top_down: Option<u8>,
}

impl FloorsWaiting {
    pub fn none_waiting(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }
}

/// Lamp state for floors `0..n_floors`. The scheduler's copy of the world's call buttons.
#[derive(Debug, Clone)]
pub struct FloorRegistry {
    floors: Vec<Floor>,
}

/***************************************/
/*             Public API              */
/***************************************/
impl FloorRegistry {
    pub fn new(n_floors: u8) -> FloorRegistry {
        FloorRegistry {
            floors: vec![Floor::default(); n_floors as usize],
        }
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn top_floor(&self) -> u8 {
        self.floors.len().saturating_sub(1) as u8
    }

    pub fn contains(&self, floor: u8) -> bool {
        (floor as usize) < self.floors.len()
    }

    pub fn get(&self, floor: u8) -> Option<&Floor> {
        self.floors.get(floor as usize)
    }

    pub fn is_lit(&self, floor: u8, direction: Direction) -> bool {
        self.get(floor).map_or(false, |f| f.is_lit(direction))
    }

    /// Lights a call lamp. Returns `false` when it was already lit or the floor is unknown.
    pub fn press(&mut self, floor: u8, direction: Direction) -> bool {
        match self.floors.get_mut(floor as usize) {
            Some(f) if !f.is_lit(direction) => {
                *f.lamp_mut(direction) = true;
                true
            }
            _ => false,
        }
    }

    /// Clears a call lamp. Returns `true` if it was lit.
    pub fn clear(&mut self, floor: u8, direction: Direction) -> bool {
        match self.floors.get_mut(floor as usize) {
            Some(f) if f.is_lit(direction) => {
                *f.lamp_mut(direction) = false;
                true
            }
            _ => false,
        }
    }

    /// Collects the lit lamps, leaving out any call `skip` returns `true` for.
    pub fn waiting<F>(&self, skip: F) -> FloorsWaiting
    where
        F: Fn(u8, Direction) -> bool,
    {
        let mut waiting = FloorsWaiting::default();

        for (index, floor) in self.floors.iter().enumerate() {
            let index = index as u8;

            if floor.up_lit && !skip(index, Direction::Up) {
                waiting.up.push(index);
                if waiting.bottom_up.is_none() {
                    waiting.bottom_up = Some(index);
                }
            }

            if floor.down_lit && !skip(index, Direction::Down) {
                waiting.down.push(index);
                waiting.top_down = Some(index);
            }
        }

        waiting
    }

    /// `[F2^_]`: floor 2, up lamp lit, down lamp dark.
    pub fn status_text(&self, floor: u8) -> String {
        match self.get(floor) {
            Some(f) => format!(
                "[F{}{}{}]",
                floor,
                if f.up_lit { '^' } else { '_' },
                if f.down_lit { 'v' } else { '_' }
            ),
            None => format!("[F{}?]", floor),
        }
    }
}

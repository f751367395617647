/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::collections::HashMap;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    pub floor: u8,
    pub direction: Direction,
    pub car: usize,
}

/// Which car has committed to serve each hall call. At most one owner per call.
#[derive(Debug, Clone, Default)]
pub struct ClaimMap {
    claims: HashMap<(u8, Direction), usize>,
}

/***************************************/
/*             Public API              */
/***************************************/
impl ClaimMap {
    pub fn new() -> ClaimMap {
        ClaimMap::default()
    }

    /// Gives the call to `car`, returning the previous owner if there was one.
    pub fn claim(&mut self, floor: u8, direction: Direction, car: usize) -> Option<usize> {
        self.claims.insert((floor, direction), car)
    }

    pub fn release(&mut self, floor: u8, direction: Direction) -> Option<usize> {
        self.claims.remove(&(floor, direction))
    }

    /// Drops every claim held by `car`. Returns how many were dropped.
    pub fn release_car(&mut self, car: usize) -> usize {
        let before = self.claims.len();
        self.claims.retain(|_, owner| *owner != car);
        before - self.claims.len()
    }

    pub fn owner(&self, floor: u8, direction: Direction) -> Option<usize> {
        self.claims.get(&(floor, direction)).copied()
    }

    pub fn is_claimed_by_other(&self, floor: u8, direction: Direction, car: usize) -> bool {
        self.owner(floor, direction).map_or(false, |owner| owner != car)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// All claims ordered by floor, up before down.
    pub fn list(&self) -> Vec<Claim> {
        let mut claims: Vec<Claim> = self
            .claims
            .iter()
            .map(|(&(floor, direction), &car)| Claim {
                floor,
                direction,
                car,
            })
            .collect();
        claims.sort_by_key(|c| (c.floor, c.direction == Direction::Down));
        claims
    }
}

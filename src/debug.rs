/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::car::{Car, CarIo};
use crate::config::DebugConfig;
use crate::floors::FloorsWaiting;
use crate::scheduler::claims::Claim;
use crate::shared::{Direction, EventSource};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CarStatus {
    pub index: usize,
    pub going_to: Option<u8>,
    pub direction: Option<Direction>,
    pub queue: Vec<u8>,
    pub buttons: Vec<u8>,
    pub load: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FleetStatus {
    pub floors: FloorsWaiting,
    pub cars: Vec<CarStatus>,
    pub claims: Vec<Claim>,
}

/**
 * Decides which events get a status trace and writes it at debug level.
 *
 * Floor-call events are filtered by floor index, car events by car index. An
 * empty filter lets everything through.
 */
#[derive(Debug, Clone)]
pub struct Tracer {
    enabled: bool,
    cars: Vec<usize>,
    floors: Vec<u8>,
}

/***************************************/
/*             Public API              */
/***************************************/
impl<C: CarIo> Car<C> {
    pub fn status(&self) -> CarStatus {
        CarStatus {
            index: self.index,
            going_to: self.state.furthest_target,
            direction: self.state.direction,
            queue: self.state.queue.clone(),
            buttons: self.io.pressed_floors(),
            load: self.io.load_factor(),
        }
    }
}

impl Tracer {
    pub fn new(config: &DebugConfig) -> Tracer {
        Tracer {
            enabled: config.enabled,
            cars: config.cars.clone(),
            floors: config.floors.clone(),
        }
    }

    pub fn wants(&self, source: EventSource) -> bool {
        if !self.enabled {
            return false;
        }

        match source {
            EventSource::FloorCall { floor } => {
                self.floors.is_empty() || self.floors.contains(&floor)
            }
            EventSource::CarButton { car } | EventSource::Scheduler { car } => {
                self.cars.is_empty() || self.cars.contains(&car)
            }
        }
    }

    pub fn emit(&self, label: &str, lines: &[String], status: &FleetStatus) {
        match serde_json::to_string(status) {
            Ok(json) => debug!("{}: {} {}", label, lines.join("; "), json),
            Err(e) => debug!("{}: {} (status unavailable: {})", label, lines.join("; "), e),
        }
    }
}

/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{log_enabled, warn, Level};
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::car::{Car, CarIo, MoveResult};
use crate::config::{DebugConfig, SchedulerConfig};
use crate::debug::{FleetStatus, Tracer};
use crate::floors::FloorRegistry;
use crate::scheduler::claims::ClaimMap;
use crate::scheduler::dispatcher::DispatchResult;
use crate::scheduler::idle::IdleOutcome;
use crate::scheduler::passing::PassingDecision;
use crate::shared::{Direction, Event, EventSource};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    UnknownCar(usize),
    UnknownFloor(u8),
    AlreadyLit,
}

/// What the scheduler did with one event.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Dispatch(DispatchResult),
    Move(MoveResult),
    Passing(PassingDecision),
    Stopped(StopReport),
    Idle(IdleOutcome),
    Ignored(IgnoreReason),
}

/**
 * Result of a car stopping at a floor.
 *
 * # Fields
 * - `purged`:      Queue entries removed for the floor.
 * - `direction`:   Direction shown to waiting passengers after the stop.
 * - `cleared`:     Hall lamps turned off at the floor.
 * - `idle`:        The queue is now empty.
 */
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StopReport {
    pub purged: usize,
    pub direction: Option<Direction>,
    pub cleared: Vec<Direction>,
    pub idle: bool,
}

/**
 * Fleet dispatch scheduler.
 *
 * Owns every car's routing state, the hall lamp registry and the claim map.
 * Events are handled one at a time and run to completion, so nothing here is
 * shared or locked.
 *
 * # Fields
 * - `cars`:            The fleet, indexed by car number.
 * - `floors`:          Hall call lamps.
 * - `claims`:          Hall call to car ownership.
 * - `full_threshold`:  Load factor at which opportunistic stops are refused.
 * - `initiative`:      Fraction of the fleet allowed to leave idle on its own.
 * - `tracer`:          Debug status trace filter.
 * - `first_idle_seen`: One-shot gate for the first idle diagnostic.
 */
pub struct Scheduler<C: CarIo> {
    pub(crate) cars: Vec<Car<C>>,
    pub(crate) floors: FloorRegistry,
    pub(crate) claims: ClaimMap,
    pub(crate) full_threshold: f64,
    pub(crate) initiative: f64,
    pub(crate) tracer: Tracer,
    pub(crate) first_idle_seen: bool,
}

/***************************************/
/*             Public API              */
/***************************************/
impl<C: CarIo> Scheduler<C> {
    pub fn new(config: &SchedulerConfig, debug: &DebugConfig, cars: Vec<C>) -> Scheduler<C> {
        Scheduler {
            cars: cars
                .into_iter()
                .enumerate()
                .map(|(index, io)| Car::new(index, io))
                .collect(),
            floors: FloorRegistry::new(config.n_floors),
            claims: ClaimMap::new(),
            full_threshold: config.full_threshold,
            initiative: config.initiative,
            tracer: Tracer::new(debug),
            first_idle_seen: false,
        }
    }

    pub fn cars(&self) -> &[Car<C>] {
        &self.cars
    }

    pub fn car(&self, index: usize) -> Option<&Car<C>> {
        self.cars.get(index)
    }

    /// Host access to a car's sensors between events.
    pub fn car_io_mut(&mut self, index: usize) -> Option<&mut C> {
        self.cars.get_mut(index).map(|car| &mut car.io)
    }

    pub fn floors(&self) -> &FloorRegistry {
        &self.floors
    }

    pub fn claims(&self) -> &ClaimMap {
        &self.claims
    }

    pub fn top_floor(&self) -> u8 {
        self.floors.top_floor()
    }

    pub fn status(&self) -> FleetStatus {
        FleetStatus {
            floors: self.floors.waiting(|_, _| false),
            cars: self.cars.iter().map(|car| car.status()).collect(),
            claims: self.claims.list(),
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Outcome {
        if let Some(car) = event.car() {
            if car >= self.cars.len() {
                warn!("event for unknown car E{}: {:?}", car, event);
                return Outcome::Ignored(IgnoreReason::UnknownCar(car));
            }
        }

        match event {
            Event::Idle { car } => Outcome::Idle(self.on_idle(car)),
            Event::FloorButtonPressed { car, floor } => {
                Outcome::Move(self.on_floor_button_pressed(car, floor))
            }
            Event::PassingFloor {
                car,
                floor,
                direction,
            } => Outcome::Passing(self.on_passing_floor(car, floor, direction)),
            Event::StoppedAtFloor { car, floor } => {
                Outcome::Stopped(self.on_stopped_at_floor(car, floor))
            }
            Event::UpButtonPressed { floor } => self.on_hall_button_pressed(floor, Direction::Up),
            Event::DownButtonPressed { floor } => {
                self.on_hall_button_pressed(floor, Direction::Down)
            }
        }
    }

    /***************************************/
    /*           Event handlers            */
    /***************************************/
    fn on_hall_button_pressed(&mut self, floor: u8, direction: Direction) -> Outcome {
        let source = EventSource::FloorCall { floor };
        let pressed = format!("{} button pressed", direction);

        if !self.floors.contains(floor) {
            warn!("{} on unknown floor {}", pressed, floor);
            return Outcome::Ignored(IgnoreReason::UnknownFloor(floor));
        }

        // Re-press of a lit lamp, someone is already on it
        if !self.floors.press(floor, direction) {
            self.trace(source, vec![pressed, "already lit".to_string()]);
            return Outcome::Ignored(IgnoreReason::AlreadyLit);
        }

        let result = self.dispatch(floor, direction);

        let mut lines = vec![pressed];
        match result.car {
            Some(car) => {
                lines.push(format!("requested E{}", car));
                lines.push(match &result.command {
                    Some(command) if result.called => format!("call {}", command.status),
                    _ => format!("call failed with availability {}", result.score),
                });
            }
            None => lines.push("no car currently available".to_string()),
        }
        self.trace(source, lines);

        Outcome::Dispatch(result)
    }

    pub(crate) fn on_floor_button_pressed(&mut self, index: usize, floor: u8) -> MoveResult {
        let top_floor = self.top_floor();
        let car = &mut self.cars[index];

        let direction = Direction::toward(car.io.current_floor(), floor);
        let result = car.go_to(floor, direction, false, top_floor);

        self.trace(
            EventSource::CarButton { car: index },
            vec![format!("button {} pressed", floor), result.status.to_string()],
        );
        result
    }

    pub(crate) fn on_stopped_at_floor(&mut self, index: usize, floor: u8) -> StopReport {
        let top_floor = self.top_floor();
        let lamps = self.floors.get(floor).copied().unwrap_or_default();
        let car = &mut self.cars[index];

        let arriving = car.state.direction;
        let purged = car.state.purge(floor);
        let idle = car.state.is_idle();

        let direction = if floor == 0 {
            Some(Direction::Up)
        } else if floor == top_floor {
            Some(Direction::Down)
        } else if !idle {
            arriving
        } else if lamps.up_lit && !lamps.down_lit {
            Some(Direction::Up)
        } else if lamps.down_lit && !lamps.up_lit {
            Some(Direction::Down)
        } else {
            arriving
        };

        car.set_direction(direction);
        if idle {
            car.io.stop();
        } else {
            car.state.sort();
        }

        // Passengers board in the direction shown; serve those lamps
        let serving = match direction {
            Some(direction) => vec![direction],
            None => vec![Direction::Up, Direction::Down],
        };
        let mut cleared = Vec::new();
        for lamp in serving {
            if self.floors.clear(floor, lamp) {
                self.claims.release(floor, lamp);
                cleared.push(lamp);
            }
        }

        if idle {
            self.claims.release_car(index);
        }

        let mut lines = vec![format!("stopped at floor {}", floor)];
        if purged > 0 {
            lines.push(format!("removed {} queue entries", purged));
        }
        if let Some(target) = self.cars[index].state.furthest_target {
            if target != floor {
                lines.push(format!("on the way to {}", target));
            }
        }
        self.trace(EventSource::Scheduler { car: index }, lines);

        StopReport {
            purged,
            direction,
            cleared,
            idle,
        }
    }

    /***************************************/
    /*             Diagnostics             */
    /***************************************/
    pub(crate) fn label(&self, source: EventSource) -> String {
        match source {
            EventSource::FloorCall { floor } => self.floors.status_text(floor),
            EventSource::CarButton { car } | EventSource::Scheduler { car } => {
                match self.cars.get(car) {
                    Some(car) => car.status_text(&self.floors),
                    None => format!("[E{}?]", car),
                }
            }
        }
    }

    pub(crate) fn trace(&self, source: EventSource, lines: Vec<String>) {
        if !log_enabled!(Level::Debug) || !self.tracer.wants(source) {
            return;
        }
        self.tracer.emit(&self.label(source), &lines, &self.status());
    }
}

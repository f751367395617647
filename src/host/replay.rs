/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use serde::Serialize;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::debug::FleetStatus;
use crate::host::replay_car::{Command, ReplayCar};
use crate::host::scenario::Step;
use crate::scheduler::{Outcome, Scheduler};
use crate::shared::Event;

/***************************************/
/*               Enums                 */
/***************************************/
enum ReplayEvent {
    NewStep(Step),
    NoEvent,
    Terminate,
}

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub step: usize,
    pub event: Event,
    pub outcome: Outcome,
}

/**
 * Everything that happened during a replay.
 *
 * # Fields
 * - `steps`:       Steps received, sensor updates included.
 * - `outcomes`:    Scheduler outcome of each event step.
 * - `commands`:    Actuator commands, in the order they were issued.
 * - `status`:      Fleet status once the replay ended.
 */
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub steps: usize,
    pub outcomes: Vec<StepOutcome>,
    pub commands: Vec<Command>,
    pub status: FleetStatus,
}

/**
 * Drives the scheduler with scenario steps arriving on a channel.
 *
 * Stands in for the building: it applies the world side of each event to the
 * cars' sensors before the scheduler sees it, and records the commands the
 * scheduler sends back. Ends when the step channel disconnects or a
 * terminate message arrives.
 */
pub struct Replay {
    scheduler: Scheduler<ReplayCar>,
    poll_interval: Duration,

    // Channels
    step_rx: cbc::Receiver<Step>,
    command_rx: cbc::Receiver<Command>,
    terminate_rx: cbc::Receiver<()>,

    // Report
    steps: usize,
    outcomes: Vec<StepOutcome>,
    commands: Vec<Command>,
}

/***************************************/
/*             Public API              */
/***************************************/
impl Replay {
    pub fn new(
        scheduler: Scheduler<ReplayCar>,
        poll_interval: Duration,
        step_rx: cbc::Receiver<Step>,
        command_rx: cbc::Receiver<Command>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Replay {
        Replay {
            scheduler,
            poll_interval,

            step_rx,
            command_rx,
            terminate_rx,

            steps: 0,
            outcomes: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn run(mut self) -> ReplayReport {
        info!("replay started with {} cars", self.scheduler.cars().len());

        loop {
            match self.wait_for_event() {
                ReplayEvent::NewStep(step) => self.handle_step(step),
                ReplayEvent::NoEvent => {}
                ReplayEvent::Terminate => break,
            }
        }

        self.drain_commands();
        info!(
            "replay finished after {} steps, {} commands",
            self.steps,
            self.commands.len()
        );

        ReplayReport {
            steps: self.steps,
            outcomes: self.outcomes,
            commands: self.commands,
            status: self.scheduler.status(),
        }
    }

    fn wait_for_event(&self) -> ReplayEvent {
        cbc::select! {
            recv(self.step_rx) -> step => {
                match step {
                    Ok(step) => ReplayEvent::NewStep(step),
                    // Feeder is done
                    Err(_) => ReplayEvent::Terminate,
                }
            },

            recv(self.terminate_rx) -> _ => {
                ReplayEvent::Terminate
            },

            default(self.poll_interval) => {
                ReplayEvent::NoEvent
            },
        }
    }

    fn handle_step(&mut self, step: Step) {
        self.steps += 1;

        match step {
            Step::Sensors { sensors } => match self.scheduler.car_io_mut(sensors.car) {
                Some(car) => car.apply(&sensors),
                None => warn!("sensor update for unknown car E{}", sensors.car),
            },

            Step::Event(event) => {
                self.apply_world(&event);
                let outcome = self.scheduler.handle_event(event.clone());
                self.outcomes.push(StepOutcome {
                    step: self.steps,
                    event,
                    outcome,
                });
                self.drain_commands();
            }
        }
    }

    /// What the building does on its own before the scheduler hears about it.
    fn apply_world(&mut self, event: &Event) {
        match *event {
            Event::FloorButtonPressed { car, floor } => {
                if let Some(car) = self.scheduler.car_io_mut(car) {
                    car.press(floor);
                }
            }
            Event::StoppedAtFloor { car, floor } => {
                if let Some(car) = self.scheduler.car_io_mut(car) {
                    car.set_floor(floor);
                    car.release(floor);
                }
            }
            _ => {}
        }
    }

    fn drain_commands(&mut self) {
        self.commands.extend(self.command_rx.try_iter());
    }
}

/// Sends every step in order, then hangs up so the replay loop ends.
pub fn feed_steps(steps: Vec<Step>, step_tx: cbc::Sender<Step>) {
    for step in steps {
        if step_tx.send(step).is_err() {
            warn!("replay loop gone, dropping remaining steps");
            return;
        }
    }
}

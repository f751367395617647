/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::warn;
use serde::Serialize;
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::car::CarIo;
use crate::host::scenario::{CarSetup, SensorUpdate};

/***************************************/
/*       Public data structures        */
/***************************************/
/// Actuator call made by the scheduler, as seen by the host.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    MoveTo { car: usize, floor: u8, force_stop: bool },
    UpIndicator { car: usize, lit: bool },
    DownIndicator { car: usize, lit: bool },
    Stop { car: usize },
}

/**
 * A car whose sensors are set by the replayed scenario.
 *
 * Every actuator call is forwarded on `command_tx`. Indicator commands are only
 * sent when the lamp actually changes.
 *
 * # Fields
 * - `index`:           Car index, stamped on every command.
 * - `floor`:           Reported current floor.
 * - `load`:            Reported load factor.
 * - `pressed`:         Lit in-car buttons.
 * - `up_indicator`:    Last up indicator state written by the scheduler.
 * - `down_indicator`:  Last down indicator state written by the scheduler.
 * - `command_tx`:      Sender for actuator commands.
 */
pub struct ReplayCar {
    index: usize,
    floor: u8,
    load: f64,
    pressed: BTreeSet<u8>,
    up_indicator: bool,
    down_indicator: bool,
    command_tx: cbc::Sender<Command>,
}

/***************************************/
/*             Public API              */
/***************************************/
impl ReplayCar {
    pub fn new(index: usize, floor: u8, command_tx: cbc::Sender<Command>) -> ReplayCar {
        ReplayCar {
            index,
            floor,
            load: 0.0,
            pressed: BTreeSet::new(),
            up_indicator: false,
            down_indicator: false,
            command_tx,
        }
    }

    /// One car per scenario entry, in index order.
    pub fn fleet(setups: &[CarSetup], command_tx: &cbc::Sender<Command>) -> Vec<ReplayCar> {
        setups
            .iter()
            .enumerate()
            .map(|(index, setup)| {
                let mut car = ReplayCar::new(index, setup.floor, command_tx.clone());
                car.set_load(setup.load);
                car
            })
            .collect()
    }

    pub fn set_floor(&mut self, floor: u8) {
        self.floor = floor;
    }

    pub fn set_load(&mut self, load: f64) {
        self.load = load;
    }

    pub fn press(&mut self, floor: u8) {
        self.pressed.insert(floor);
    }

    pub fn release(&mut self, floor: u8) {
        self.pressed.remove(&floor);
    }

    pub fn apply(&mut self, update: &SensorUpdate) {
        if let Some(floor) = update.floor {
            self.floor = floor;
        }
        if let Some(load) = update.load {
            self.load = load;
        }
        if let Some(pressed) = &update.pressed {
            self.pressed = pressed.iter().copied().collect();
        }
    }

    pub fn indicators(&self) -> (bool, bool) {
        (self.up_indicator, self.down_indicator)
    }

    fn send(&self, command: Command) {
        if let Err(e) = self.command_tx.send(command) {
            warn!("E{}: dropped actuator command: {}", self.index, e);
        }
    }
}

impl CarIo for ReplayCar {
    fn current_floor(&self) -> u8 {
        self.floor
    }

    fn load_factor(&self) -> f64 {
        self.load
    }

    fn pressed_floors(&self) -> Vec<u8> {
        self.pressed.iter().copied().collect()
    }

    fn commit_move_to(&mut self, floor: u8, force_stop: bool) {
        self.send(Command::MoveTo {
            car: self.index,
            floor,
            force_stop,
        });
    }

    fn set_up_indicator(&mut self, lit: bool) {
        if self.up_indicator != lit {
            self.up_indicator = lit;
            self.send(Command::UpIndicator {
                car: self.index,
                lit,
            });
        }
    }

    fn set_down_indicator(&mut self, lit: bool) {
        if self.down_indicator != lit {
            self.down_indicator = lit;
            self.send(Command::DownIndicator {
                car: self.index,
                lit,
            });
        }
    }

    fn stop(&mut self) {
        self.send(Command::Stop { car: self.index });
    }
}

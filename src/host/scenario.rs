/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{read_file, LoadError};
use crate::shared::Event;

/***************************************/
/*       Public data structures        */
/***************************************/
/**
 * A recorded run of the building, replayed against the scheduler.
 *
 * # Fields
 * - `cars`:    Starting position and load of each car, by index.
 * - `steps`:   Events and sensor changes, in the order they happened.
 */
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Scenario {
    pub cars: Vec<CarSetup>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CarSetup {
    #[serde(default)]
    pub floor: u8,
    #[serde(default)]
    pub load: f64,
}

/// New sensor readings for one car. Missing fields keep their value.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SensorUpdate {
    pub car: usize,
    pub floor: Option<u8>,
    pub load: Option<f64>,
    pub pressed: Option<Vec<u8>>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Step {
    Sensors { sensors: SensorUpdate },
    Event(Event),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_scenario(path: &str) -> Result<Scenario, LoadError> {
    let scenario_str = read_file(path)?;
    parse_scenario(path, &scenario_str)
}

pub fn parse_scenario(origin: &str, scenario_str: &str) -> Result<Scenario, LoadError> {
    let scenario: Scenario =
        toml::from_str(scenario_str).map_err(|e| LoadError::Parse(origin.to_string(), e))?;

    if scenario.cars.is_empty() {
        return Err(LoadError::Invalid(format!("{}: no cars", origin)));
    }

    Ok(scenario)
}

/***************************************/
/*             Unit tests              */
/***************************************/

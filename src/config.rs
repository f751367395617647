/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fmt;
use std::fs;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub debug: DebugConfig,
    pub replay: ReplayConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SchedulerConfig {
    pub n_floors: u8,
    pub full_threshold: f64,
    #[serde(default = "default_initiative")]
    pub initiative: f64,
}

/// Status tracing filters. An empty list traces every car or floor.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct DebugConfig {
    pub enabled: bool,
    #[serde(default)]
    pub cars: Vec<usize>,
    #[serde(default)]
    pub floors: Vec<u8>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ReplayConfig {
    pub scenario: String,
    pub poll_interval: u64,
}

#[derive(Debug)]
pub enum LoadError {
    Io(String, std::io::Error),
    Parse(String, toml::de::Error),
    Invalid(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(path, e) => write!(f, "failed to read {}: {}", path, e),
            LoadError::Parse(path, e) => write!(f, "failed to parse {}: {}", path, e),
            LoadError::Invalid(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for LoadError {}

fn default_initiative() -> f64 {
    1.0
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, LoadError> {
    let config_str = read_file(path)?;
    parse_config(path, &config_str)
}

pub fn parse_config(origin: &str, config_str: &str) -> Result<Config, LoadError> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| LoadError::Parse(origin.to_string(), e))?;
    config.scheduler.validate()?;
    Ok(config)
}

pub(crate) fn read_file(path: &str) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| LoadError::Io(path.to_string(), e))
}

impl SchedulerConfig {
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.n_floors < 2 {
            return Err(LoadError::Invalid(format!(
                "n_floors must be at least 2, got {}",
                self.n_floors
            )));
        }
        if !(self.full_threshold > 0.0 && self.full_threshold <= 1.0) {
            return Err(LoadError::Invalid(format!(
                "full_threshold must be in (0, 1], got {}",
                self.full_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.initiative) {
            return Err(LoadError::Invalid(format!(
                "initiative must be in [0, 1], got {}",
                self.initiative
            )));
        }
        Ok(())
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/

/* Modules */
pub mod car;
pub mod config;
pub mod debug;
pub mod floors;
pub mod host;
pub mod scheduler;
pub mod shared;

/* Re-exports */
pub use car::{Car, CarIo, MoveResult, MoveStatus};
pub use config::{load_config, Config, LoadError};
pub use debug::{CarStatus, FleetStatus};
pub use floors::{FloorRegistry, FloorsWaiting};
pub use scheduler::{DispatchResult, IdleOutcome, Outcome, PassingDecision, Scheduler, StopReport};
pub use shared::{Availability, Direction, Event, EventSource};

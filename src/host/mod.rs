pub mod replay;
pub mod replay_car;
pub mod scenario;

pub use replay::feed_steps;
pub use replay::Replay;
pub use replay::ReplayReport;
pub use replay_car::Command;
pub use replay_car::ReplayCar;
pub use scenario::load_scenario;
pub use scenario::Scenario;
pub use scenario::Step;

pub mod claims;
pub mod dispatcher;
pub mod idle;
pub mod passing;
pub mod scheduler;

pub use claims::Claim;
pub use claims::ClaimMap;
pub use dispatcher::DispatchResult;
pub use idle::IdleOutcome;
pub use passing::PassingDecision;
pub use scheduler::IgnoreReason;
pub use scheduler::Outcome;
pub use scheduler::Scheduler;
pub use scheduler::StopReport;

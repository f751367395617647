pub mod registry;

pub use registry::Floor;
pub use registry::FloorRegistry;
pub use registry::FloorsWaiting;

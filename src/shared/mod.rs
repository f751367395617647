pub mod macros;
pub mod structs;

pub use structs::Availability;
pub use structs::Direction;
pub use structs::Event;
pub use structs::EventSource;

//! Transport layer module.

pub mod mock;
pub mod traits;

pub use mock::MockTransport;
pub use traits::{TimeoutScenario, TransportError, VehicleTransport};

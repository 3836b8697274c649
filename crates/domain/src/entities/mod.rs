//! Entities - Records with identity that make up the bus network

mod live_bus;
mod route;
mod stop;

pub use live_bus::LiveBus;
pub use route::{Route, ServiceStatus};
pub use stop::{ExternalStop, KnownStop, Stop};

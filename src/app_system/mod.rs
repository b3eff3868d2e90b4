//! System orchestration, configuration, startup, and shutdown logic.

pub mod commerce_system;
pub mod config;
pub mod telemetry;

pub use commerce_system::*;
pub use config::*;
pub use telemetry::*;

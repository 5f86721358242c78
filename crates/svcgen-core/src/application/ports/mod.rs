//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world. Adapters
//! in `svcgen-adapters` (and the CLI, for progress) implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CommandRunner`: blocking subprocess execution
//!   - `Filesystem`: existence checks, file reads, permission changes
//!   - `ProvisionListener`: progress notifications
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandError, CommandRunner, Filesystem, NoopListener, ProvisionListener};

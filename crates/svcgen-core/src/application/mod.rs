//! Application layer for svcgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DescriptorLoader, DispatchService, ProvisionService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; commands themselves
//! are built by `crate::domain::ProvisionSettings`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BinarySource, DescriptorLoader, DispatchOutcome, DispatchService, ProvisionPlan,
    ProvisionReport, ProvisionService, ResolvedBinary,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandError, CommandRunner, Filesystem, NoopListener, ProvisionListener};

pub use error::{ApplicationError, ProvisionStep};

//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the run:
//! load the descriptor, route it by language, provision the service.

pub mod dispatch_service;
pub mod loader;
pub mod provision_service;

pub use dispatch_service::{DispatchOutcome, DispatchService};
pub use loader::DescriptorLoader;
pub use provision_service::{
    BinarySource, ProvisionPlan, ProvisionReport, ProvisionService, ResolvedBinary,
};

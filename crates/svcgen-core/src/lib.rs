//! svcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for svcgen, the
//! service generator that turns a `source.yml` descriptor into a scaffolded,
//! published repository.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           svcgen-cli (CLI)              │
//! │   (config, logging, console output)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (DescriptorLoader, DispatchService,    │
//! │          ProvisionService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (CommandRunner, Filesystem, Listener)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     svcgen-adapters (Infrastructure)    │
//! │   (ProcessRunner, LocalFilesystem)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use svcgen_core::prelude::*;
//! # fn adapters() -> (Box<dyn CommandRunner>, Box<dyn Filesystem>, Box<dyn Filesystem>) { unimplemented!() }
//!
//! let (runner, fs_for_loader, fs_for_provisioner) = adapters();
//!
//! // 1. Load and project the descriptor
//! let loader = DescriptorLoader::new(fs_for_loader);
//! let descriptor = loader.load_descriptor("services/sample".as_ref()).unwrap();
//!
//! // 2. Dispatch on its language
//! let provisioner = ProvisionService::new(runner, fs_for_provisioner, ProvisionSettings::default());
//! let outcome = DispatchService::new(provisioner).dispatch(&descriptor).unwrap();
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DescriptorLoader, DispatchOutcome, DispatchService, ProvisionPlan, ProvisionReport,
        ProvisionService, ProvisionStep,
        ports::{CommandError, CommandRunner, Filesystem, ProvisionListener},
    };
    pub use crate::domain::{
        CommandSpec, Language, Platform, ProvisionSettings, ServiceDescriptor, SourceConfig,
    };
    pub use crate::error::{SvcgenError, SvcgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

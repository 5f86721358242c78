//! Core domain layer for svcgen.
//!
//! Pure data and rules: the descriptor model, the language and platform value
//! objects, and the builders that turn a descriptor into concrete commands.
//! All process and filesystem work happens behind ports in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: no filesystem, process, or network calls
//! - **Immutable entities**: descriptors are built once and never mutated
pub mod entities;
pub mod error;
pub mod settings;
pub mod value_objects;

pub use entities::{CommandSpec, DESCRIPTOR_FILE_NAME, Metadata, ServiceDescriptor, SourceConfig};

pub use error::{DomainError, ErrorCategory};

pub use settings::{GeneratorSettings, GitSettings, ProvisionSettings, RepositorySettings};

pub use value_objects::{Language, Platform};

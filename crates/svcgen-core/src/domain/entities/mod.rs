pub mod command;
pub mod descriptor;
pub mod source;

pub use crate::domain::DomainError;
pub use command::CommandSpec;
pub use descriptor::ServiceDescriptor;
pub use source::{DESCRIPTOR_FILE_NAME, Metadata, SourceConfig};

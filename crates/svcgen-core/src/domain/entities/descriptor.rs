//! `ServiceDescriptor`: the identifier-free view of a service definition
//! that every downstream step consumes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{
    entities::source::SourceConfig, error::DomainError, value_objects::Language,
};

/// Immutable projection of [`SourceConfig`] without `source_id`.
///
/// Built once per run. Fields are copied verbatim; member order is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    app_name: String,
    programming_language: String,
    framework: String,
    module: String,
    members: Vec<String>,
}

impl ServiceDescriptor {
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The raw language string, exactly as written in the descriptor.
    pub fn programming_language(&self) -> &str {
        &self.programming_language
    }

    pub fn framework(&self) -> &str {
        &self.framework
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Parse the declared language.
    pub fn language(&self) -> Result<Language, DomainError> {
        Language::from_str(&self.programming_language)
    }
}

impl From<SourceConfig> for ServiceDescriptor {
    fn from(config: SourceConfig) -> Self {
        let SourceConfig {
            source_id: _,
            name,
            members,
            metadata,
        } = config;

        Self {
            app_name: name,
            programming_language: metadata.programming_language,
            framework: metadata.framework,
            module: metadata.module,
            members,
        }
    }
}

const RULE: &str = "========================================";

/// Multi-line summary block printed after mapping.
impl fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "        GENERATOR SOURCE DTO")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "AppName:             {}", self.app_name)?;
        writeln!(f, "ProgrammingLanguage: {}", self.programming_language)?;
        writeln!(f, "Framework:           {}", self.framework)?;
        writeln!(f, "Module:              {}", self.module)?;
        writeln!(f, "Members:             [{}]", self.members.join(" "))?;
        write!(f, "{RULE}")
    }
}

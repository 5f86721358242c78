//! The descriptor file as it is written on disk.
//!
//! `SourceConfig` mirrors `source.yml` field for field. Unknown keys are
//! ignored; missing or `null` keys fall back to empty values so a sparse file
//! still parses.

use serde::{Deserialize, Deserializer};

/// Fixed name of the descriptor file inside a service directory.
pub const DESCRIPTOR_FILE_NAME: &str = "source.yml";

/// Parsed `source.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Registry identifier. Not carried into [`super::ServiceDescriptor`].
    #[serde(deserialize_with = "null_as_default")]
    pub source_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub members: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}

/// The `metadata:` block of `source.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "null_as_default")]
    pub programming_language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub framework: String,
    #[serde(deserialize_with = "null_as_default")]
    pub module: String,
}

/// `key:` with no value is YAML null; treat it like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

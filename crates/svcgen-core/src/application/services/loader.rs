//! Descriptor loading: service directory → `SourceConfig`.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DESCRIPTOR_FILE_NAME, ServiceDescriptor, SourceConfig},
    error::SvcgenResult,
};

/// Reads `source.yml` from a service directory and parses it.
pub struct DescriptorLoader {
    filesystem: Box<dyn Filesystem>,
}

impl DescriptorLoader {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// `<dir>/source.yml`
    pub fn descriptor_path(service_dir: &Path) -> PathBuf {
        service_dir.join(DESCRIPTOR_FILE_NAME)
    }

    /// Load and parse the descriptor inside `service_dir`.
    ///
    /// # Errors
    ///
    /// - `NotExpectedFilename` if the joined path's file name is not `source.yml`
    /// - `FileReadError` if the file cannot be read
    /// - `ParseError` if the content is not a YAML mapping of the expected shape
    #[instrument(skip_all, fields(dir = %service_dir.display()))]
    pub fn load(&self, service_dir: &Path) -> SvcgenResult<SourceConfig> {
        let path = Self::descriptor_path(service_dir);

        let found = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if found != DESCRIPTOR_FILE_NAME {
            return Err(ApplicationError::NotExpectedFilename {
                expected: DESCRIPTOR_FILE_NAME,
                found,
            }
            .into());
        }

        let content =
            self.filesystem
                .read_to_string(&path)
                .map_err(|e| ApplicationError::FileReadError {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
        debug!(bytes = content.len(), path = %path.display(), "Descriptor read");

        let config = parse_source(&content).map_err(|e| ApplicationError::ParseError {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load the descriptor and project it to a [`ServiceDescriptor`].
    pub fn load_descriptor(&self, service_dir: &Path) -> SvcgenResult<ServiceDescriptor> {
        self.load(service_dir).map(ServiceDescriptor::from)
    }
}

/// Parse descriptor YAML. An empty or `null` document yields an all-empty
/// config.
pub fn parse_source(content: &str) -> Result<SourceConfig, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(SourceConfig::default());
    }
    serde_yaml::from_str::<Option<SourceConfig>>(content).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::application::ports::output::MockFilesystem;
    use crate::error::SvcgenError;

    const SAMPLE: &str = r#"
source_id: abc-123
name: sample-svc
members:
  - alice
  - bob
metadata:
  programming_language: golang
  framework: gin
  module: github.com/acme/sample-svc
"#;

    fn loader_returning(result: io::Result<String>) -> DescriptorLoader {
        let mut fs = MockFilesystem::new();
        let mut result = Some(result);
        fs.expect_read_to_string()
            .withf(|p| p.ends_with("svc/source.yml"))
            .times(1)
            .returning(move |_| {
                result
                    .take()
                    .unwrap_or_else(|| Err(io::Error::other("read twice")))
            });
        DescriptorLoader::new(Box::new(fs))
    }

    #[test]
    fn loads_full_descriptor() {
        let loader = loader_returning(Ok(SAMPLE.into()));
        let cfg = loader.load(Path::new("svc")).unwrap();

        assert_eq!(cfg.source_id, "abc-123");
        assert_eq!(cfg.name, "sample-svc");
        assert_eq!(cfg.members, ["alice", "bob"]);
        assert_eq!(cfg.metadata.programming_language, "golang");
        assert_eq!(cfg.metadata.framework, "gin");
        assert_eq!(cfg.metadata.module, "github.com/acme/sample-svc");
    }

    #[test]
    fn load_descriptor_drops_identifier() {
        let loader = loader_returning(Ok(SAMPLE.into()));
        let d = loader.load_descriptor(Path::new("svc")).unwrap();
        assert_eq!(d.app_name(), "sample-svc");
        assert_eq!(d.members(), ["alice", "bob"]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let loader = loader_returning(Err(io::Error::new(
            io::ErrorKind::NotFound,
            "No such file or directory",
        )));
        let err = loader.load(Path::new("svc")).unwrap_err();
        assert!(matches!(
            err,
            SvcgenError::Application(ApplicationError::FileReadError { .. })
        ));
        assert!(err.to_string().contains("svc/source.yml"));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let loader = loader_returning(Ok("name: [unterminated".into()));
        let err = loader.load(Path::new("svc")).unwrap_err();
        assert!(matches!(
            err,
            SvcgenError::Application(ApplicationError::ParseError { .. })
        ));
    }

    #[test]
    fn wrong_shape_is_parse_error() {
        let loader = loader_returning(Ok("just a plain scalar\n".into()));
        assert!(loader.load(Path::new("svc")).is_err());
    }

    #[test]
    fn name_of_wrong_type_is_parse_error() {
        assert!(parse_source("name:\n  nested: map\n").is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let cfg = parse_source("name: a\nowner: team-x\nmetadata:\n  extra: 1\n").unwrap();
        assert_eq!(cfg.name, "a");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let cfg = parse_source("name: only-name\n").unwrap();
        assert_eq!(cfg.name, "only-name");
        assert!(cfg.members.is_empty());
        assert!(cfg.metadata.programming_language.is_empty());
    }

    #[test]
    fn null_fields_default_to_empty() {
        let cfg = parse_source("name: a\nmembers:\nmetadata:\n").unwrap();
        assert!(cfg.members.is_empty());
        assert_eq!(cfg.metadata, Default::default());
    }

    #[test]
    fn empty_document_is_empty_config() {
        assert_eq!(parse_source("  \n").unwrap(), SourceConfig::default());
    }

    #[test]
    fn null_document_is_empty_config() {
        assert_eq!(parse_source("~\n").unwrap(), SourceConfig::default());
        assert_eq!(parse_source("null").unwrap(), SourceConfig::default());
    }

    #[test]
    fn descriptor_path_joins_fixed_name() {
        assert_eq!(
            DescriptorLoader::descriptor_path(Path::new("a/b")),
            PathBuf::from("a/b/source.yml")
        );
    }
}

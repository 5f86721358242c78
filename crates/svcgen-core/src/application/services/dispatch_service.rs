//! Dispatch Service - routes a descriptor to its language pipeline.

use tracing::{info, instrument, warn};

use crate::{
    application::services::provision_service::{ProvisionPlan, ProvisionReport, ProvisionService},
    domain::{Language, ServiceDescriptor},
    error::SvcgenResult,
};

/// Result of dispatching one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The Go pipeline ran to completion.
    Provisioned(ProvisionReport),
    /// The language is recognised but has no pipeline yet; nothing was run.
    Skipped { language: Language, reason: String },
}

/// Chooses a pipeline from the descriptor's `programming_language`.
pub struct DispatchService {
    provisioner: ProvisionService,
}

impl DispatchService {
    pub fn new(provisioner: ProvisionService) -> Self {
        Self { provisioner }
    }

    /// Route `descriptor` and run its pipeline.
    ///
    /// `golang` runs the provisioner, `nodejs` succeeds without doing
    /// anything, any other value is `UnsupportedLanguage`.
    #[instrument(skip_all, fields(language = %descriptor.programming_language()))]
    pub fn dispatch(&self, descriptor: &ServiceDescriptor) -> SvcgenResult<DispatchOutcome> {
        match descriptor.language()? {
            Language::Golang => {
                let report = self.provisioner.provision(descriptor)?;
                info!(app = %descriptor.app_name(), "Provisioning finished");
                Ok(DispatchOutcome::Provisioned(report))
            }
            language @ Language::NodeJs => {
                warn!("NodeJS processing not implemented yet");
                Ok(DispatchOutcome::Skipped {
                    language,
                    reason: "NodeJS processing not implemented yet".into(),
                })
            }
        }
    }

    /// Same routing as [`Self::dispatch`], but only computes the plan.
    ///
    /// Returns `Ok(None)` for languages without a pipeline.
    pub fn plan(&self, descriptor: &ServiceDescriptor) -> SvcgenResult<Option<ProvisionPlan>> {
        match descriptor.language()? {
            Language::Golang => Ok(Some(self.provisioner.plan(descriptor))),
            Language::NodeJs => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockCommandRunner, MockFilesystem};
    use crate::domain::{DomainError, Metadata, ProvisionSettings, SourceConfig};
    use crate::error::SvcgenError;

    fn descriptor(language: &str) -> ServiceDescriptor {
        SourceConfig {
            name: "sample-svc".into(),
            metadata: Metadata {
                programming_language: language.into(),
                ..Metadata::default()
            },
            ..SourceConfig::default()
        }
        .into()
    }

    /// A dispatcher whose ports must never be touched.
    fn untouched() -> DispatchService {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_is_dir().never();
        fs.expect_set_executable().never();
        DispatchService::new(ProvisionService::new(
            Box::new(runner),
            Box::new(fs),
            ProvisionSettings::default(),
        ))
    }

    #[test]
    fn nodejs_is_skipped_without_subprocesses() {
        let outcome = untouched().dispatch(&descriptor("nodejs")).unwrap();
        assert!(matches!(
            outcome,
            DispatchOutcome::Skipped {
                language: Language::NodeJs,
                ..
            }
        ));
    }

    #[test]
    fn unknown_language_fails_with_value() {
        let err = untouched().dispatch(&descriptor("python")).unwrap_err();
        assert_eq!(
            err,
            SvcgenError::Domain(DomainError::UnsupportedLanguage {
                language: "python".into()
            })
        );
        assert!(err.to_string().contains("python"));
    }

    #[test]
    fn language_match_is_case_sensitive() {
        assert!(untouched().dispatch(&descriptor("Golang")).is_err());
    }

    #[test]
    fn empty_language_is_unsupported() {
        assert!(untouched().dispatch(&descriptor("")).is_err());
    }

    #[test]
    fn plan_for_nodejs_is_none() {
        assert!(untouched().plan(&descriptor("nodejs")).unwrap().is_none());
    }

    #[test]
    fn golang_reaches_the_provisioner() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_| Err(crate::application::CommandError::ExitStatus { code: Some(2) }));
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);

        let dispatcher = DispatchService::new(ProvisionService::new(
            Box::new(runner),
            Box::new(fs),
            ProvisionSettings::default(),
        ));
        let err = dispatcher.dispatch(&descriptor("golang")).unwrap_err();
        assert_eq!(
            err.step(),
            Some(crate::application::ProvisionStep::ResolveBinary)
        );
    }
}

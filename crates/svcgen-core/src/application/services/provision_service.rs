//! Provision Service - the Go-service pipeline.
//!
//! This service drives four steps in a fixed order:
//! 1. Resolve the generator binary (local prebuilt, else remote install)
//! 2. Generate the app with the generator
//! 3. Create the remote repository (failure is only a warning)
//! 4. Publish the generated folder with a fixed git sequence
//!
//! Every step except repository creation aborts the pipeline on failure.
//! Nothing is cleaned up after a failure.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ProvisionStep,
        ports::{CommandError, CommandRunner, Filesystem, NoopListener, ProvisionListener},
    },
    domain::{CommandSpec, ProvisionSettings, ServiceDescriptor},
    error::SvcgenResult,
};

/// Where the generator binary was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinarySource {
    /// Prebuilt binary in the dist directory.
    Local(PathBuf),
    /// Installed by the remote-install fallback and expected on `PATH`.
    Installed,
}

/// The generator program to invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBinary {
    pub program: String,
    pub source: BinarySource,
}

/// Every command the pipeline would run, without running any of them.
#[derive(Debug, Clone)]
pub struct ProvisionPlan {
    /// Remote-install fallback; `None` when a local binary exists.
    pub install: Option<CommandSpec>,
    pub generate: CommandSpec,
    pub create_repository: CommandSpec,
    pub push: Vec<CommandSpec>,
    pub output_dir: PathBuf,
}

impl ProvisionPlan {
    /// All commands in execution order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.install
            .iter()
            .chain(std::iter::once(&self.generate))
            .chain(std::iter::once(&self.create_repository))
            .chain(self.push.iter())
    }
}

/// What a successful provisioning run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub binary: ResolvedBinary,
    /// `false` when repository creation failed and was skipped.
    pub repository_created: bool,
    /// Remote URL with any token masked.
    pub remote_url: String,
    pub output_dir: PathBuf,
}

/// Runs the Go-service pipeline against injected ports.
pub struct ProvisionService {
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
    listener: Box<dyn ProvisionListener>,
    settings: ProvisionSettings,
}

impl ProvisionService {
    /// Create a provisioner with the given adapters and a silent listener.
    pub fn new(
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
        settings: ProvisionSettings,
    ) -> Self {
        Self {
            runner,
            filesystem,
            listener: Box::new(NoopListener),
            settings,
        }
    }

    /// Attach a progress listener.
    pub fn with_listener(mut self, listener: Box<dyn ProvisionListener>) -> Self {
        self.listener = listener;
        self
    }

    pub fn settings(&self) -> &ProvisionSettings {
        &self.settings
    }

    /// Compute the full command list without side effects.
    pub fn plan(&self, descriptor: &ServiceDescriptor) -> ProvisionPlan {
        let name = descriptor.app_name();
        let local = self.settings.local_binary_path();

        let (install, program) = if self.filesystem.exists(&local) {
            (None, local.display().to_string())
        } else {
            (
                Some(self.settings.install_command()),
                self.settings.generator.tool.clone(),
            )
        };

        let output_dir = self.settings.output_dir(name);
        ProvisionPlan {
            install,
            generate: self.settings.generate_command(&program, name),
            create_repository: self.settings.create_repository_command(name),
            push: self.settings.push_commands(name, &output_dir),
            output_dir,
        }
    }

    /// Run the whole pipeline for `descriptor`.
    #[instrument(skip_all, fields(app = %descriptor.app_name()))]
    pub fn provision(&self, descriptor: &ServiceDescriptor) -> SvcgenResult<ProvisionReport> {
        info!("Processing Golang service");

        let binary = self.resolve_binary()?;
        self.generate(&binary, descriptor)?;
        let repository_created = self.create_repository(descriptor);
        let output_dir = self.push(descriptor)?;

        info!(output = %output_dir.display(), "Service generated and pushed");
        Ok(ProvisionReport {
            binary,
            repository_created,
            remote_url: self.settings.display_remote_url(descriptor.app_name()),
            output_dir,
        })
    }

    /// Step 1: find the prebuilt generator for this platform, or install it.
    ///
    /// The install fallback is attempted at most once.
    pub fn resolve_binary(&self) -> SvcgenResult<ResolvedBinary> {
        let tool = &self.settings.generator.tool;
        self.listener.step_started(
            ProvisionStep::ResolveBinary,
            &format!("Finding {tool} CLI..."),
        );

        let local = self.settings.local_binary_path();
        if self.filesystem.exists(&local) {
            self.filesystem.set_executable(&local).map_err(|e| {
                ApplicationError::BinaryUnavailable {
                    binary: tool.clone(),
                    reason: format!("failed to chmod {}: {e}", local.display()),
                }
            })?;
            info!(path = %local.display(), "Found local binary");
            return Ok(ResolvedBinary {
                program: local.display().to_string(),
                source: BinarySource::Local(local),
            });
        }

        let platform = &self.settings.platform;
        warn!(%platform, "Local binary not found, falling back to remote install");
        self.listener.warning(&format!(
            "Local binary not found for {platform}, using {} install...",
            self.settings.generator.install_program
        ));

        let install = self.settings.install_command();
        self.run(&install)
            .map_err(|e| ApplicationError::BinaryUnavailable {
                binary: tool.clone(),
                reason: format!("failed to install {tool} CLI: {e}"),
            })?;

        Ok(ResolvedBinary {
            program: tool.clone(),
            source: BinarySource::Installed,
        })
    }

    /// Step 2: scaffold the app directory with the generator.
    pub fn generate(
        &self,
        binary: &ResolvedBinary,
        descriptor: &ServiceDescriptor,
    ) -> SvcgenResult<()> {
        let name = descriptor.app_name();
        self.listener
            .step_started(ProvisionStep::Generate, &format!("Generating app: {name}"));

        let command = self.settings.generate_command(&binary.program, name);
        self.run(&command)
            .map_err(|e| ApplicationError::GenerationFailed {
                app_name: name.to_owned(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    /// Step 3: create the private remote repository.
    ///
    /// Returns `false` instead of an error when creation fails; the push step
    /// still runs and will surface a missing or inaccessible remote.
    pub fn create_repository(&self, descriptor: &ServiceDescriptor) -> bool {
        let name = descriptor.app_name();
        self.listener.step_started(
            ProvisionStep::CreateRepository,
            &format!("Creating repository: {}", self.settings.repository.slug(name)),
        );

        let command = self.settings.create_repository_command(name);
        match self.run(&command) {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    error = %e,
                    repository = %self.settings.repository.slug(name),
                    "Repository creation failed; continuing to push. The repository may \
                     already exist, or the hosting CLI may be unauthenticated or offline"
                );
                self.listener.warning(&format!(
                    "Note: {e} (repo might already exist; if not, check `{}` authentication)",
                    self.settings.repository.cli
                ));
                false
            }
        }
    }

    /// Step 4: commit the generated folder and force-push it.
    pub fn push(&self, descriptor: &ServiceDescriptor) -> SvcgenResult<PathBuf> {
        let name = descriptor.app_name();
        self.listener
            .step_started(ProvisionStep::Push, "Pushing code to repository...");

        // The folder must be named exactly after the app; an empty or dotted
        // name would otherwise resolve to the working directory itself.
        let repo_dir = self.settings.output_dir(name);
        let named_after_app = repo_dir.file_name() == Some(OsStr::new(name));
        if !named_after_app || !self.filesystem.is_dir(&repo_dir) {
            return Err(ApplicationError::GeneratedFolderMissing { path: repo_dir }.into());
        }

        for command in self.settings.push_commands(name, &repo_dir) {
            self.run(&command)
                .map_err(|e| ApplicationError::PushFailed {
                    command: command.to_string(),
                    reason: e.to_string(),
                })?;
        }

        Ok(repo_dir)
    }

    fn run(&self, command: &CommandSpec) -> Result<(), CommandError> {
        debug!(command = %command, dir = ?command.get_current_dir().map(Path::display), "Running");
        self.listener.command_started(command);
        self.runner.run(command)
    }
}

//! `svcgen <SERVICE_DIR>`: load, map, dispatch, provision.
//!
//! Wires the core services to the real filesystem and process adapters.

use std::path::PathBuf;

use tracing::{info, instrument};

use svcgen_adapters::{LocalFilesystem, ProcessRunner};
use svcgen_core::prelude::*;

use crate::{
    cli::RunArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli, USAGE, USAGE_EXAMPLE},
    output::OutputManager,
};

/// Execute the pipeline for one service directory.
#[instrument(skip_all, fields(dir = ?args.service_dir, dry_run = args.dry_run))]
pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let Some(service_dir) = args.service_dir else {
        output.usage(USAGE, USAGE_EXAMPLE)?;
        return Err(CliError::MissingServiceDir);
    };

    // Absolute, so the generator path stays valid once commands get a cwd.
    let workdir =
        std::env::current_dir().with_cli_context(|| "failed to determine working directory")?;
    let token = config.resolve_token(|name| std::env::var(name).ok());
    info!(
        workdir = %workdir.display(),
        authenticated = token.is_some(),
        "Resolved provisioning context"
    );

    let dispatcher = dispatcher(&config, workdir, token, &output);
    run(&service_dir, args.dry_run, &dispatcher, &output)
}

fn dispatcher(
    config: &AppConfig,
    workdir: PathBuf,
    token: Option<String>,
    output: &OutputManager,
) -> DispatchService {
    let provisioner = ProvisionService::new(
        Box::new(ProcessRunner::new()),
        Box::new(LocalFilesystem::new()),
        config.provision_settings(workdir, token),
    )
    .with_listener(Box::new(output.clone()));
    DispatchService::new(provisioner)
}

fn run(
    service_dir: &std::path::Path,
    dry_run: bool,
    dispatcher: &DispatchService,
    output: &OutputManager,
) -> CliResult<()> {
    let loader = DescriptorLoader::new(Box::new(LocalFilesystem::new()));
    let descriptor = loader.load_descriptor(service_dir)?;
    output.descriptor(&descriptor)?;

    if dry_run {
        return match dispatcher.plan(&descriptor)? {
            Some(plan) => Ok(output.plan(&plan)?),
            None => Ok(output.info(&format!(
                "Nothing to run for '{}'",
                descriptor.programming_language()
            ))?),
        };
    }

    match dispatcher.dispatch(&descriptor)? {
        DispatchOutcome::Provisioned(report) => {
            if !report.repository_created {
                output.warning("Repository creation failed; pushed to the existing remote")?;
            }
            output.print(&format!("Remote: {}", report.remote_url))?;
            output.success(&format!(
                "Service '{}' generated and pushed successfully!",
                descriptor.app_name()
            ))?;
        }
        DispatchOutcome::Skipped { reason, .. } => {
            output.warning(&reason)?;
        }
    }
    Ok(())
}

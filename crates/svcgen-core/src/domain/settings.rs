//! Provisioning settings and the command builders derived from them.
//!
//! Every external invocation of the Go pipeline is built here from a
//! descriptor plus settings, with no I/O. The application layer decides
//! when (and whether) to run them.

use std::path::{Path, PathBuf};

use crate::domain::{entities::CommandSpec, value_objects::Platform};

/// Where the generator binary comes from and how to fall back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Base name of the generator, e.g. `uranus`.
    pub tool: String,
    /// Directory searched for `<tool>-<os>-<arch>`, relative to the workdir.
    pub dist_dir: PathBuf,
    /// Program used for the remote-install fallback (`go`).
    pub install_program: String,
    /// Package argument for `<install_program> install <package>`.
    pub install_package: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            tool: "uranus".into(),
            dist_dir: PathBuf::from("dist"),
            install_program: "go".into(),
            install_package: "github.com/tqhuy-dev/xgen-uranus@latest".into(),
        }
    }
}

/// The remote hosting organisation and its CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySettings {
    pub host: String,
    pub owner: String,
    /// Repository-hosting CLI (`gh`).
    pub cli: String,
    pub private: bool,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            host: "github.com".into(),
            owner: "tqhuy-dev".into(),
            cli: "gh".into(),
            private: true,
        }
    }
}

impl RepositorySettings {
    /// Go module path for a generated app: `<host>/<owner>/<name>`.
    pub fn module_path(&self, app_name: &str) -> String {
        format!("{}/{}/{app_name}", self.host, self.owner)
    }

    /// `<owner>/<name>`, as the hosting CLI expects it.
    pub fn slug(&self, app_name: &str) -> String {
        format!("{}/{app_name}", self.owner)
    }

    /// HTTPS clone URL, authenticated when a non-empty token is given.
    pub fn remote_url(&self, app_name: &str, token: Option<&str>) -> String {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => format!(
                "https://x-access-token:{token}@{}/{}/{app_name}.git",
                self.host, self.owner
            ),
            None => format!("https://{}/{}/{app_name}.git", self.host, self.owner),
        }
    }
}

/// Version-control identity and publishing target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitSettings {
    pub program: String,
    pub user_email: String,
    pub user_name: String,
    pub commit_message: String,
    pub branch: String,
    pub remote: String,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            program: "git".into(),
            user_email: "github-actions[bot]@users.noreply.github.com".into(),
            user_name: "github-actions[bot]".into(),
            commit_message: "Initial commit from jupiter-registry".into(),
            branch: "main".into(),
            remote: "origin".into(),
        }
    }
}

/// Everything the provisioner needs besides the descriptor.
///
/// The access token is an explicit input rather than an environment lookup;
/// resolving it is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionSettings {
    pub generator: GeneratorSettings,
    pub repository: RepositorySettings,
    pub git: GitSettings,
    pub token: Option<String>,
    /// Directory the generator runs in; the app folder is created under it.
    pub workdir: PathBuf,
    pub platform: Platform,
}

impl Default for ProvisionSettings {
    fn default() -> Self {
        Self {
            generator: GeneratorSettings::default(),
            repository: RepositorySettings::default(),
            git: GitSettings::default(),
            token: None,
            workdir: PathBuf::from("."),
            platform: Platform::current(),
        }
    }
}

impl ProvisionSettings {
    fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Expected path of the prebuilt generator for this platform.
    pub fn local_binary_path(&self) -> PathBuf {
        self.workdir
            .join(&self.generator.dist_dir)
            .join(self.platform.binary_name(&self.generator.tool))
    }

    /// Folder the generator writes the app into.
    pub fn output_dir(&self, app_name: &str) -> PathBuf {
        self.workdir.join(app_name)
    }

    /// `go install <package>`.
    pub fn install_command(&self) -> CommandSpec {
        CommandSpec::new(&self.generator.install_program)
            .args(["install", self.generator.install_package.as_str()])
    }

    /// `<bin> generate app --name <name> --module <host>/<owner>/<name> --skip_init=true`
    pub fn generate_command(&self, binary: &str, app_name: &str) -> CommandSpec {
        CommandSpec::new(binary)
            .args(["generate", "app", "--name", app_name, "--module"])
            .arg(self.repository.module_path(app_name))
            .arg("--skip_init=true")
            .current_dir(&self.workdir)
    }

    /// `gh repo create <owner>/<name> --private --confirm`
    pub fn create_repository_command(&self, app_name: &str) -> CommandSpec {
        let visibility = if self.repository.private {
            "--private"
        } else {
            "--public"
        };
        CommandSpec::new(&self.repository.cli)
            .args(["repo", "create"])
            .arg(self.repository.slug(app_name))
            .args([visibility, "--confirm"])
    }

    /// Remote URL for the app with the token masked.
    pub fn display_remote_url(&self, app_name: &str) -> String {
        let url = self.repository.remote_url(app_name, self.token());
        match self.token() {
            Some(token) => url.replace(token, "***"),
            None => url,
        }
    }

    /// The ordered git sequence that publishes `repo_dir`.
    ///
    /// Executed in order; the first failure stops the sequence.
    pub fn push_commands(&self, app_name: &str, repo_dir: &Path) -> Vec<CommandSpec> {
        let git = &self.git;
        let remote_url = self.repository.remote_url(app_name, self.token());
        let token = self.token().unwrap_or_default();

        let steps: Vec<Vec<&str>> = vec![
            vec!["init"],
            vec!["config", "user.email", git.user_email.as_str()],
            vec!["config", "user.name", git.user_name.as_str()],
            vec!["remote", "add", git.remote.as_str(), remote_url.as_str()],
            vec!["add", "-A"],
            vec!["commit", "-m", git.commit_message.as_str()],
            vec!["branch", "-M", git.branch.as_str()],
            vec!["push", "-u", git.remote.as_str(), git.branch.as_str(), "--force"],
        ];

        steps
            .into_iter()
            .map(|args| {
                CommandSpec::new(&git.program)
                    .args(args)
                    .current_dir(repo_dir)
                    .secret(token)
            })
            .collect()
    }
}

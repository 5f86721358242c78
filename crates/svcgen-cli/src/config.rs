//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ProvisionSettings`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SVCGEN_<SECTION>__<KEY>`
//! 3. Config file (`--config <FILE>` or the platform default)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use svcgen_core::domain::{
    GeneratorSettings, GitSettings, Platform, ProvisionSettings, RepositorySettings,
};

use crate::error::{CliError, CliResult};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SVCGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub repository: RepositoryConfig,
    pub git: GitConfig,
    pub auth: AuthConfig,
    pub output: OutputConfig,
}

/// Where the generator binary is looked up and installed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub tool: String,
    pub dist_dir: PathBuf,
    pub install_program: String,
    pub install_package: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    pub host: String,
    pub owner: String,
    pub cli: String,
    pub private: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    pub program: String,
    pub user_email: String,
    pub user_name: String,
    pub commit_message: String,
    pub branch: String,
    pub remote: String,
}

/// Environment variables consulted for the hosting token, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub token_env_vars: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

// Defaults come from the core settings so the two never drift apart.

impl Default for GeneratorConfig {
    fn default() -> Self {
        let s = GeneratorSettings::default();
        Self {
            tool: s.tool,
            dist_dir: s.dist_dir,
            install_program: s.install_program,
            install_package: s.install_package,
        }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        let s = RepositorySettings::default();
        Self {
            host: s.host,
            owner: s.owner,
            cli: s.cli,
            private: s.private,
        }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        let s = GitSettings::default();
        Self {
            program: s.program,
            user_email: s.user_email,
            user_name: s.user_name,
            commit_message: s.commit_message,
            branch: s.branch,
            remote: s.remote,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_env_vars: vec!["GH_TOKEN".into(), "GITHUB_TOKEN".into()],
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the platform default is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.svcgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "svcgen", "svcgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".svcgen.toml"))
    }

    /// First non-empty value among `auth.token_env_vars`.
    pub fn resolve_token<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.auth
            .token_env_vars
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.is_empty())
    }

    /// Settings for one provisioning run rooted at `workdir`.
    pub fn provision_settings(&self, workdir: PathBuf, token: Option<String>) -> ProvisionSettings {
        let GeneratorConfig {
            tool,
            dist_dir,
            install_program,
            install_package,
        } = self.generator.clone();
        let RepositoryConfig {
            host,
            owner,
            cli,
            private,
        } = self.repository.clone();
        let GitConfig {
            program,
            user_email,
            user_name,
            commit_message,
            branch,
            remote,
        } = self.git.clone();

        ProvisionSettings {
            generator: GeneratorSettings {
                tool,
                dist_dir,
                install_program,
                install_package,
            },
            repository: RepositorySettings {
                host,
                owner,
                cli,
                private,
            },
            git: GitSettings {
                program,
                user_email,
                user_name,
                commit_message,
                branch,
                remote,
            },
            token,
            workdir,
            platform: Platform::current(),
        }
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use config::Map;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    fn toml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_generator_conventions() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generator.tool, "uranus");
        assert_eq!(cfg.repository.owner, "tqhuy-dev");
        assert_eq!(cfg.git.branch, "main");
        assert_eq!(cfg.auth.token_env_vars, ["GH_TOKEN", "GITHUB_TOKEN"]);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let cfg = AppConfig::load_from(Path::new("/nonexistent/svcgen.toml"), false, env(&[]))
            .unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_config_error() {
        let err = AppConfig::load_from(Path::new("/nonexistent/svcgen.toml"), true, env(&[]))
            .unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn file_overrides_defaults_per_key() {
        let file = toml_file("[repository]\nowner = \"acme\"\n\n[git]\nbranch = \"trunk\"\n");
        let cfg = AppConfig::load_from(file.path(), true, env(&[])).unwrap();

        assert_eq!(cfg.repository.owner, "acme");
        assert_eq!(cfg.repository.host, "github.com");
        assert_eq!(cfg.git.branch, "trunk");
        assert_eq!(cfg.git.remote, "origin");
    }

    #[test]
    fn env_overrides_file() {
        let file = toml_file("[repository]\nowner = \"acme\"\n");
        let cfg = AppConfig::load_from(
            file.path(),
            true,
            env(&[
                ("SVCGEN_REPOSITORY__OWNER", "globex"),
                ("SVCGEN_REPOSITORY__PRIVATE", "false"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.repository.owner, "globex");
        assert!(!cfg.repository.private);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let file = toml_file("[repository\nowner = ");
        assert!(AppConfig::load_from(file.path(), true, env(&[])).is_err());
    }

    #[test]
    fn token_prefers_first_non_empty_variable() {
        let cfg = AppConfig::default();
        let vars = HashMap::from([("GH_TOKEN", ""), ("GITHUB_TOKEN", "ghp_second")]);
        let token = cfg.resolve_token(|name| vars.get(name).map(|v| (*v).to_owned()));
        assert_eq!(token.as_deref(), Some("ghp_second"));
    }

    #[test]
    fn token_absent_when_nothing_set() {
        assert_eq!(AppConfig::default().resolve_token(|_| None), None);
    }

    #[test]
    fn provision_settings_carry_config_values() {
        let mut cfg = AppConfig::default();
        cfg.repository.owner = "acme".into();
        let settings = cfg.provision_settings(PathBuf::from("/work"), Some("t".into()));

        assert_eq!(settings.repository.owner, "acme");
        assert_eq!(settings.workdir, PathBuf::from("/work"));
        assert_eq!(settings.token.as_deref(), Some("t"));
        assert_eq!(settings.generator, GeneratorSettings::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}

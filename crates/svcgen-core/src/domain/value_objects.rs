//! Domain value objects: Language, Platform.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Their
//! only job is to define the types, their string representations, and their
//! parsers.

use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ── Language ─────────────────────────────────────────────────────────────────

/// A programming language the dispatcher knows how to route.
///
/// Parsing is an exact, case-sensitive match on the descriptor value:
/// `golang` and `nodejs`. Anything else is [`DomainError::UnsupportedLanguage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Golang,
    NodeJs,
}

impl Language {
    pub const ALL: [Language; 2] = [Self::Golang, Self::NodeJs];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Golang => "golang",
            Self::NodeJs => "nodejs",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "golang" => Ok(Self::Golang),
            "nodejs" => Ok(Self::NodeJs),
            other => Err(DomainError::UnsupportedLanguage {
                language: other.to_owned(),
            }),
        }
    }
}

// ── Platform ─────────────────────────────────────────────────────────────────

/// Operating system and processor architecture, spelled the way generator
/// release artifacts are named (`linux`, `darwin`, `windows`; `amd64`, `arm64`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    os: String,
    arch: String,
}

impl Platform {
    /// Build a platform from Rust target names (`std::env::consts` spelling).
    pub fn new(os: &str, arch: &str) -> Self {
        let os = match os {
            "macos" => "darwin",
            other => other,
        };
        let arch = match arch {
            "x86_64" => "amd64",
            "aarch64" => "arm64",
            "x86" => "386",
            "powerpc64" => "ppc64",
            other => other,
        };
        Self {
            os: os.to_owned(),
            arch: arch.to_owned(),
        }
    }

    /// The platform this process is running on.
    pub fn current() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// `<tool>-<os>-<arch>`, e.g. `uranus-linux-amd64`.
    pub fn binary_name(&self, tool: &str) -> String {
        format!("{tool}-{}-{}", self.os, self.arch)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_parses_exact_values() {
        assert_eq!(Language::from_str("golang").unwrap(), Language::Golang);
        assert_eq!(Language::from_str("nodejs").unwrap(), Language::NodeJs);
    }

    #[test]
    fn language_match_is_case_sensitive() {
        assert!(Language::from_str("Golang").is_err());
        assert!(Language::from_str("NODEJS").is_err());
        assert!(Language::from_str("go").is_err());
    }

    #[test]
    fn unsupported_language_carries_value() {
        let err = Language::from_str("cobol").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnsupportedLanguage {
                language: "cobol".into()
            }
        );
        assert!(err.to_string().contains("cobol"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for lang in Language::ALL {
            assert_eq!(Language::from_str(&lang.to_string()).unwrap(), lang);
        }
    }

    #[test]
    fn platform_uses_release_naming() {
        let p = Platform::new("macos", "aarch64");
        assert_eq!(p.os(), "darwin");
        assert_eq!(p.arch(), "arm64");
        assert_eq!(p.binary_name("uranus"), "uranus-darwin-arm64");
    }

    #[test]
    fn platform_maps_x86_variants() {
        assert_eq!(Platform::new("linux", "x86_64").arch(), "amd64");
        assert_eq!(Platform::new("windows", "x86").arch(), "386");
    }

    #[test]
    fn platform_passes_unknown_names_through() {
        let p = Platform::new("freebsd", "riscv64");
        assert_eq!(p.to_string(), "freebsd-riscv64");
    }

    #[test]
    fn current_platform_is_not_empty() {
        let p = Platform::current();
        assert!(!p.os().is_empty());
        assert!(!p.arch().is_empty());
    }
}

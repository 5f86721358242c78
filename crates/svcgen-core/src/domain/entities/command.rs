//! `CommandSpec`: one external process invocation, as data.
//!
//! Every subprocess the pipeline runs is described by a `CommandSpec` first
//! and handed to a `CommandRunner` port afterwards, so the full command list
//! can be inspected, printed (`--dry-run`) and asserted on in tests.
//!
//! Values registered with [`CommandSpec::secret`] are masked in both
//! `Display` and `Debug` output.

use std::fmt;
use std::path::{Path, PathBuf};

const MASK: &str = "***";

#[derive(Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    secrets: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            secrets: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command inside `dir` instead of the caller's directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Register a value that must never be printed. Empty values are ignored.
    pub fn secret(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.secrets.push(value);
        }
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Arguments joined by spaces, with secrets masked.
    pub fn display_args(&self) -> String {
        self.args
            .iter()
            .map(|a| self.redact(a))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `true` if the argument list equals `expected` exactly.
    pub fn has_args(&self, expected: &[&str]) -> bool {
        self.args.len() == expected.len() && self.args.iter().zip(expected).all(|(a, e)| a == e)
    }

    fn redact(&self, text: &str) -> String {
        self.secrets
            .iter()
            .fold(text.to_owned(), |acc, secret| acc.replace(secret, MASK))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        if !self.args.is_empty() {
            write!(f, " {}", self.display_args())?;
        }
        Ok(())
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("program", &self.program)
            .field(
                "args",
                &self.args.iter().map(|a| self.redact(a)).collect::<Vec<_>>(),
            )
            .field("current_dir", &self.current_dir)
            .finish_non_exhaustive()
    }
}

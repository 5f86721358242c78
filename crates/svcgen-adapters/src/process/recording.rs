//! Recording runner for testing.

use std::sync::{Arc, RwLock};

use svcgen_core::application::ports::{CommandError, CommandRunner};
use svcgen_core::domain::CommandSpec;

type FailurePredicate = Box<dyn Fn(&CommandSpec) -> bool + Send + Sync>;

/// Runner that never spawns anything: it records each command and reports
/// success unless a registered predicate marks it as failing.
///
/// Clones share the same log, so a test can keep a handle after boxing one
/// into a service.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<RwLock<RecordingInner>>,
}

#[derive(Default)]
struct RecordingInner {
    commands: Vec<CommandSpec>,
    failures: Vec<FailurePredicate>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every command matching `predicate` exit with status 1.
    pub fn fail_when<F>(self, predicate: F) -> Self
    where
        F: Fn(&CommandSpec) -> bool + Send + Sync + 'static,
    {
        if let Ok(mut inner) = self.inner.write() {
            inner.failures.push(Box::new(predicate));
        }
        self
    }

    /// Commands run so far, in order.
    pub fn commands(&self) -> Vec<CommandSpec> {
        self.inner
            .read()
            .map(|inner| inner.commands.clone())
            .unwrap_or_default()
    }

    /// Rendered command lines run so far (secrets masked).
    pub fn lines(&self) -> Vec<String> {
        self.commands().iter().map(ToString::to_string).collect()
    }

    /// Number of commands whose program is `program`.
    pub fn count_program(&self, program: &str) -> usize {
        self.commands()
            .iter()
            .filter(|c| c.program() == program)
            .count()
    }
}

impl std::fmt::Debug for RecordingRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingRunner")
            .field("commands", &self.commands())
            .finish_non_exhaustive()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> Result<(), CommandError> {
        let mut inner = self.inner.write().map_err(|_| CommandError::Spawn {
            program: command.program().to_owned(),
            reason: "recording runner lock poisoned".into(),
        })?;

        inner.commands.push(command.clone());
        if inner.failures.iter().any(|fails| fails(command)) {
            return Err(CommandError::ExitStatus { code: Some(1) });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let runner = RecordingRunner::new();
        runner.run(&CommandSpec::new("a")).unwrap();
        runner.run(&CommandSpec::new("b").arg("x")).unwrap();
        assert_eq!(runner.lines(), ["a", "b x"]);
    }

    #[test]
    fn clones_share_the_log() {
        let runner = RecordingRunner::new();
        let handle = runner.clone();
        runner.run(&CommandSpec::new("git")).unwrap();
        assert_eq!(handle.count_program("git"), 1);
    }

    #[test]
    fn predicate_failures_are_still_recorded() {
        let runner = RecordingRunner::new().fail_when(|c| c.program() == "gh");
        assert!(runner.run(&CommandSpec::new("gh")).is_err());
        assert!(runner.run(&CommandSpec::new("git")).is_ok());
        assert_eq!(runner.commands().len(), 2);
    }
}

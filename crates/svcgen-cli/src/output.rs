//! Output management and formatting.
//!
//! Everything user-facing goes to stdout through [`OutputManager`]; logs and
//! error reports go to stderr.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde_json::{Value, json};
use svcgen_core::{
    application::{ProvisionListener, ProvisionPlan, ProvisionStep},
    domain::{CommandSpec, ServiceDescriptor},
};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
#[derive(Debug, Clone)]
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.is_json() {
            return self.json_line(json!({ "level": "info", "message": msg }));
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.marked("success", "\u{2713}", msg, |m| {
            format!("{} {}", "\u{2713}".green().bold(), m.green())
        })
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.marked("warning", "\u{26a0}", msg, |m| {
            format!("{} {}", "\u{26a0}".yellow().bold(), m.yellow())
        })
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.marked("info", "\u{2139}", msg, |m| {
            format!("{} {}", "\u{2139}".blue().bold(), m.blue())
        })
    }

    /// Pipeline step marker: `▸ <detail>`.
    pub fn step(&self, step: ProvisionStep, detail: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.is_json() {
            return self.json_line(json!({ "level": "step", "step": step.as_str(), "message": detail }));
        }
        let line = if self.no_color {
            format!("\u{25b8} {detail}")
        } else {
            format!("{} {}", "\u{25b8}".cyan().bold(), detail.bold())
        };
        self.term.write_line(&line)
    }

    /// `  → Running: <cmd>`, with secrets already masked by `CommandSpec`.
    pub fn command(&self, command: &CommandSpec) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.is_json() {
            return self.json_line(command_json(command));
        }
        let line = if self.no_color {
            format!("  \u{2192} Running: {command}")
        } else {
            format!("  {} Running: {}", "\u{2192}".dimmed(), command.dimmed())
        };
        self.term.write_line(&line)
    }

    /// The descriptor summary block, or a JSON object in `json` format.
    pub fn descriptor(&self, descriptor: &ServiceDescriptor) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.is_json() {
            return self.json_line(json!({ "descriptor": descriptor }));
        }
        for line in descriptor.to_string().lines() {
            self.term.write_line(line)?;
        }
        Ok(())
    }

    /// Every command a provisioning run would execute, in order.
    ///
    /// Printed even in quiet mode: it is the whole point of `--dry-run`.
    pub fn plan(&self, plan: &ProvisionPlan) -> io::Result<()> {
        if self.is_json() {
            let commands: Vec<Value> = plan.commands().map(command_json).collect();
            return self.json_line(json!({
                "plan": commands,
                "output_dir": plan.output_dir.display().to_string(),
            }));
        }

        let title = "Provisioning plan (dry run):";
        if self.no_color {
            self.term.write_line(title)?;
        } else {
            self.term.write_line(&title.cyan().bold().to_string())?;
        }
        for (i, command) in plan.commands().enumerate() {
            let location = command
                .get_current_dir()
                .map(|d| format!("  (in {})", d.display()))
                .unwrap_or_default();
            self.term
                .write_line(&format!("  {:>2}. {command}{location}", i + 1))?;
        }
        self.term
            .write_line(&format!("  output: {}", plan.output_dir.display()))
    }

    /// Usage text for a missing service directory.  Never suppressed.
    pub fn usage(&self, usage: &str, example: &str) -> io::Result<()> {
        if self.is_json() {
            return self.json_line(json!({ "level": "usage", "usage": usage, "example": example }));
        }
        self.term.write_line(usage)?;
        self.term.write_line(example)
    }

    /// Raw text block (e.g. serialised config), written line by line.
    pub fn block(&self, text: &str) -> io::Result<()> {
        for line in text.lines() {
            self.term.write_line(line)?;
        }
        Ok(())
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    fn json_line(&self, value: Value) -> io::Result<()> {
        self.term.write_line(&value.to_string())
    }

    fn marked(
        &self,
        level: &str,
        marker: &str,
        msg: &str,
        colored: impl FnOnce(&str) -> String,
    ) -> io::Result<()> {
        if self.is_json() {
            return self.json_line(json!({ "level": level, "message": msg }));
        }
        let line = if self.no_color {
            format!("{marker} {msg}")
        } else {
            colored(msg)
        };
        self.term.write_line(&line)
    }
}

fn command_json(command: &CommandSpec) -> Value {
    json!({
        "level": "command",
        "command": command.to_string(),
        "cwd": command.get_current_dir().map(|d| d.display().to_string()),
    })
}

/// Progress from the provisioner.  Write failures on stdout are not worth
/// aborting a half-finished run for, so they are only logged.
impl ProvisionListener for OutputManager {
    fn step_started(&self, step: ProvisionStep, detail: &str) {
        if let Err(e) = self.step(step, detail) {
            tracing::debug!("failed to write step: {e}");
        }
    }

    fn command_started(&self, command: &CommandSpec) {
        if let Err(e) = self.command(command) {
            tracing::debug!("failed to write command: {e}");
        }
    }

    fn warning(&self, message: &str) {
        if let Err(e) = OutputManager::warning(self, message) {
            tracing::debug!("failed to write warning: {e}");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn usage_not_suppressed_in_quiet_mode() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.usage("Usage: svcgen <dir>", "Example: svcgen svc").is_ok());
    }

    #[test]
    fn human_format_keeps_color_unless_disabled() {
        assert!(!make_manager(false, false, OutputFormat::Human).no_color);
        assert!(make_manager(false, true, OutputFormat::Human).no_color);
    }

    #[test]
    fn plain_and_json_never_color() {
        assert!(make_manager(false, false, OutputFormat::Plain).no_color);
        assert!(make_manager(false, false, OutputFormat::Json).no_color);
    }

    #[test]
    fn config_can_disable_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(OutputManager::new(&args, &config).no_color);
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = make_manager(false, false, OutputFormat::Json);
        assert_eq!(out.resolved_format, OutputFormat::Json);
        assert!(out.is_json());
    }

    #[test]
    fn command_json_carries_masked_command() {
        let spec = CommandSpec::new("git")
            .args(["remote", "add", "origin", "https://x-access-token:tok@h/o/r.git"])
            .secret("tok");
        let value = command_json(&spec);
        let rendered = value["command"].as_str().unwrap();
        assert!(rendered.contains("***"));
        assert!(!rendered.contains("tok@"));
        assert!(value["cwd"].is_null());
    }
}

// Thu Oct 15 2026 - Alex

use crate::config::{ConfigError, FormatStyle};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};

/// Called once formatting finished, with whether it succeeded.
pub type Completion = Box<dyn FnOnce(bool) + Send + 'static>;

/// Runs `clang-format -i` over written files. Failures are logged, never
/// returned to the generator.
#[derive(Debug, Clone)]
pub struct ClangFormat {
    program: String,
    style: FormatStyle,
}

impl Default for ClangFormat {
    fn default() -> Self {
        Self::new(FormatStyle::default())
    }
}

impl ClangFormat {
    pub fn new(style: FormatStyle) -> Self {
        Self {
            program: "clang-format".to_string(),
            style,
        }
    }

    pub fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    pub fn command(&self, files: &[PathBuf]) -> Result<Command, ConfigError> {
        let mut command = Command::new(&self.program);
        command
            .arg("-i")
            .arg(format!("-style={}", self.style.inline()?))
            .args(files);
        Ok(command)
    }

    fn run(&self, files: &[PathBuf]) -> bool {
        let mut command = match self.command(files) {
            Ok(command) => command,
            Err(e) => {
                warn!("Cannot build {} style: {}", self.program, e);
                return false;
            }
        };
        match command.status() {
            Ok(status) if status.success() => {
                debug!("Formatted {} file(s)", files.len());
                true
            }
            Ok(status) => {
                warn!("{} exited with {}", self.program, describe(status));
                false
            }
            Err(e) => {
                warn!("Cannot run {}: {}", self.program, e);
                false
            }
        }
    }

    /// Formats `files` on a background thread.
    pub fn spawn(&self, files: &[&Path], completion: Option<Completion>) -> JoinHandle<bool> {
        let formatter = self.clone();
        let files: Vec<PathBuf> = files.iter().map(|p| p.to_path_buf()).collect();
        thread::spawn(move || {
            let ok = formatter.run(&files);
            if let Some(done) = completion {
                done(ok);
            }
            ok
        })
    }
}

fn describe(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("status {}", code),
        None => "no status".to_string(),
    }
}

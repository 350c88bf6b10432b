use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::constants::vcs;
use crate::error::{Error, Result};

/// Initializes a version-control repository in a freshly written project.
pub trait RepositoryInitializer {
    /// Creates an empty repository rooted at `directory`.
    fn init(&self, directory: &Path) -> Result<()>;
}

/// Holds the process working directory on `target` until released.
///
/// The previous directory is restored by [`CurrentDirGuard::restore`], or on
/// drop when the guard goes out of scope without an explicit restore (early
/// return, unwinding).
#[derive(Debug)]
pub struct CurrentDirGuard {
    original: PathBuf,
    restored: bool,
}

impl CurrentDirGuard {
    pub fn enter<P: AsRef<Path>>(target: P) -> Result<Self> {
        let target = target.as_ref();
        let original = std::env::current_dir()
            .map_err(|e| chdir_error(target, format!("cannot read working directory: {e}")))?;
        std::env::set_current_dir(target).map_err(|e| chdir_error(target, e.to_string()))?;
        log::debug!("Entered '{}' (was '{}')", target.display(), original.display());
        Ok(Self { original, restored: false })
    }

    /// Directory that will be restored on release.
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Restores the original directory and reports whether that worked.
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        std::env::set_current_dir(&self.original)
            .map_err(|e| chdir_error(&self.original, e.to_string()))?;
        log::debug!("Restored working directory '{}'", self.original.display());
        Ok(())
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = std::env::set_current_dir(&self.original) {
            log::error!(
                "Failed to restore working directory '{}': {e}",
                self.original.display()
            );
        }
    }
}

fn chdir_error(target: &Path, reason: String) -> Error {
    Error::Subprocess { command: format!("cd {}", target.display()), reason }
}

/// Runs `action` with `directory` as the working directory, restoring the
/// previous one on every exit path. An error from `action` takes precedence
/// over a failed restore.
pub fn with_current_dir<T, F>(directory: &Path, action: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let guard = CurrentDirGuard::enter(directory)?;
    log::trace!("Will return to '{}'", guard.original().display());
    let outcome = action();
    let restored = guard.restore();
    let value = outcome?;
    restored?;
    Ok(value)
}

/// Runs `git init -q` (or a substitute program) inside the project root.
#[derive(Debug, Clone)]
pub struct GitInitializer {
    program: OsString,
}

impl GitInitializer {
    pub fn new() -> Self {
        Self::with_program(vcs::PROGRAM)
    }

    /// Uses `program` instead of the `git` found on `PATH`.
    pub fn with_program<S: Into<OsString>>(program: S) -> Self {
        Self { program: program.into() }
    }

    fn command_line(&self) -> String {
        format!("{} {}", self.program.to_string_lossy(), vcs::INIT_ARGS.join(" "))
    }

    fn run_init(&self) -> Result<()> {
        let command = self.command_line();
        log::debug!("Running '{command}'");

        let status = Command::new(&self.program)
            .args(vcs::INIT_ARGS)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                let reason = if e.kind() == std::io::ErrorKind::NotFound {
                    format!("'{}' was not found on PATH", self.program.to_string_lossy())
                } else {
                    e.to_string()
                };
                Error::Subprocess { command: command.clone(), reason }
            })?;

        if !status.success() {
            return Err(Error::Subprocess { command, reason: format!("exited with {status}") });
        }
        Ok(())
    }
}

impl Default for GitInitializer {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryInitializer for GitInitializer {
    fn init(&self, directory: &Path) -> Result<()> {
        with_current_dir(directory, || self.run_init())?;
        log::info!("Initialized repository in '{}'", directory.display());
        Ok(())
    }
}

/// Serializes tests that move the process working directory.
#[cfg(test)]
pub(crate) fn cwd_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

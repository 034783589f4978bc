//! Blocking command execution.
//!
//! [`CommandRunner`] runs one external program per call and waits for it:
//!
//! - `CommandRunner::run()` - Inherit the caller's stdout
//! - `CommandRunner::run_redirected()` - Send the child's stdout to a file
//! - `CommandRunner::execute()` - Same protocol, with the decoded [`Outcome`]
//!
//! ## Example
//!
//! ```ignore
//! use procrun::CommandRunner;
//!
//! let runner = CommandRunner::new();
//! assert!(runner.run(&["/bin/true"]));
//! assert!(runner.run_redirected(&["/bin/echo", "hello"], "/tmp/out.txt"));
//! ```
//!
//! ## Protocol
//!
//! 1. Build the null-terminated argv (and the output path) in the parent
//! 2. Flush the parent's buffered stdout (failures are logged and ignored)
//! 3. `fork`
//! 4. Child: redirect stdout if requested, `execv`, `_exit` on any failure
//! 5. Parent: `waitpid` on the child's pid and decode the status
//!
//! Nothing is allocated between steps 3 and the child's `execv`.

use std::ffi::{CStr, OsStr};
use std::io::{self, Write as _};
use std::path::Path;

use nix::errno::Errno;
use nix::unistd::{ForkResult, fork};
use thiserror::Error;

use procrun_sys::{EXEC_FAILED, REDIRECT_FAILED, exit_immediately, redirect_stdout, wait_for_child};

use crate::argv::{ArgumentVector, ValidationError, output_path};
use crate::outcome::{Completion, Outcome};

/// Default permission bits for a created output file (`rw-r--r--`).
pub const DEFAULT_OUTPUT_MODE: u32 = 0o644;

/// Error preventing a command from running to completion.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    #[error("fork: {0}")]
    Fork(Errno),

    #[error("wait: {0}")]
    Wait(Errno),
}

/// Runs external programs to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRunner {
    output_mode: u32,
    flush_stdout: bool,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self {
            output_mode: DEFAULT_OUTPUT_MODE,
            flush_stdout: true,
        }
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Permission bits for output files created by `run_redirected`.
    pub fn output_mode(mut self, mode: u32) -> Self {
        self.output_mode = mode & 0o7777;
        self
    }

    /// Whether to flush the caller's stdout before forking.
    pub fn flush_stdout(mut self, flush: bool) -> Self {
        self.flush_stdout = flush;
        self
    }

    /// Run `argv` and wait for it. True iff it exited with code 0.
    pub fn run<S: AsRef<OsStr>>(&self, argv: &[S]) -> bool {
        report(self.execute(argv, None))
    }

    /// Run `argv` with its stdout written to `output`, created or truncated.
    ///
    /// If `output` cannot be opened the program is not run at all.
    pub fn run_redirected<S: AsRef<OsStr>, P: AsRef<Path>>(&self, argv: &[S], output: P) -> bool {
        report(self.execute(argv, Some(output.as_ref())))
    }

    /// Run `argv`, optionally redirecting its stdout, and return how it ended.
    pub fn execute<S: AsRef<OsStr>>(
        &self,
        argv: &[S],
        redirect: Option<&Path>,
    ) -> Result<Completion, RunError> {
        let args = ArgumentVector::new(argv)?;
        let target = redirect.map(output_path).transpose()?;

        // Best effort: a stdout that cannot be flushed must not stop the
        // command from running.
        if self.flush_stdout {
            if let Err(e) = io::stdout().flush() {
                tracing::warn!(error = %e, "could not flush stdout before fork");
            }
        }

        // SAFETY: the child only makes async-signal-safe calls before it
        // execs or exits.
        match unsafe { fork() }.map_err(RunError::Fork)? {
            ForkResult::Child => child_process(&args, target.as_deref(), self.output_mode),
            ForkResult::Parent { child } => {
                tracing::debug!(pid = %child, program = ?args.program(), output = ?redirect, "spawned child");

                let status = wait_for_child(child).map_err(RunError::Wait)?;
                let outcome = Outcome::from(status);

                tracing::debug!(pid = %child, %outcome, "child finished");
                Ok(Completion { pid: child, outcome })
            }
        }
    }
}

fn report(result: Result<Completion, RunError>) -> bool {
    match result {
        Ok(completion) => completion.success(),
        Err(e) => {
            tracing::warn!(error = %e, "command did not run to completion");
            false
        }
    }
}

/// Child process flow (runs after fork in the child). Never returns.
fn child_process(args: &ArgumentVector, target: Option<&CStr>, mode: u32) -> ! {
    if let Some(path) = target {
        if redirect_stdout(path, mode as libc::mode_t).is_err() {
            exit_immediately(REDIRECT_FAILED);
        }
    }

    // SAFETY: both pointers come from a live ArgumentVector whose pointer
    // array ends in a null sentinel.
    unsafe { libc::execv(args.program().as_ptr(), args.as_ptr()) };

    exit_immediately(EXEC_FAILED)
}

/// Run `argv` with a default [`CommandRunner`].
pub fn run<S: AsRef<OsStr>>(argv: &[S]) -> bool {
    CommandRunner::default().run(argv)
}

/// Run `argv` with its stdout redirected to `output`, using a default [`CommandRunner`].
pub fn run_redirected<S: AsRef<OsStr>, P: AsRef<Path>>(argv: &[S], output: P) -> bool {
    CommandRunner::default().run_redirected(argv, output)
}

//! procrun: Synchronous process execution
//!
//! This crate launches external programs, optionally sends their standard
//! output to a file, waits for them to finish and reports whether they
//! succeeded. A run succeeds iff the child exited normally with code 0.
//!
//! - **Fork/exec** - `fork` + `execv`, no `PATH` search on the program
//! - **Redirection** - stdout to a created/truncated file, `0o644` by default
//! - **Blocking wait** - one `waitpid` on exactly the spawned child
//!
//! ## Quick Start
//!
//! ```ignore
//! use procrun::{run, run_redirected};
//!
//! assert!(run(&["/bin/true"]));
//! assert!(!run(&["/bin/false"]));
//! assert!(run_redirected(&["/bin/echo", "hello"], "/tmp/out.txt"));
//! ```
//!
//! ## Errors
//!
//! `run` and `run_redirected` collapse every failure (invalid arguments,
//! fork or wait errors, exec or redirection failure in the child, signals)
//! into `false`. [`CommandRunner::execute`] returns the decoded [`Outcome`]
//! or a [`RunError`] instead.

pub mod argv;
pub mod outcome;
pub mod runner;
pub mod shell;
pub mod threading;

pub use argv::{ArgumentVector, ValidationError};
pub use outcome::{Completion, Outcome};
pub use procrun_sys::{EXEC_FAILED, REDIRECT_FAILED};
pub use runner::{CommandRunner, DEFAULT_OUTPUT_MODE, RunError, run, run_redirected};
pub use shell::run_shell;
pub use threading::{ThreadData, start_thread_obtaining_mutex};

//! Decoded termination status of a child.
//!
//! ## Exit Detection
//!
//! The raw status from `waitpid` is decoded into an [`Outcome`]:
//! - `WIFEXITED` - [`Outcome::Exited`] with the exit code
//! - `WIFSIGNALED` - [`Outcome::Signaled`] with the terminating signal
//! - anything else - [`Outcome::Other`]
//!
//! Only `Exited(0)` counts as success.

use std::fmt;

use nix::sys::signal::Signal;
use nix::sys::wait::WaitStatus;
use nix::unistd::Pid;

/// How a child terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Exited(i32),
    Signaled(Signal),
    Other,
}

impl Outcome {
    #[inline]
    pub fn success(&self) -> bool {
        matches!(self, Outcome::Exited(0))
    }

    #[inline]
    pub fn code(&self) -> Option<i32> {
        match self {
            Outcome::Exited(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<WaitStatus> for Outcome {
    fn from(status: WaitStatus) -> Self {
        match status {
            WaitStatus::Exited(_, code) => Outcome::Exited(code),
            WaitStatus::Signaled(_, signal, _) => Outcome::Signaled(signal),
            _ => Outcome::Other,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Exited(code) => write!(f, "exited with code {code}"),
            Outcome::Signaled(signal) => write!(f, "killed by {signal}"),
            Outcome::Other => f.write_str("terminated abnormally"),
        }
    }
}

/// A child that has been waited on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub pid: Pid,
    pub outcome: Outcome,
}

impl Completion {
    #[inline]
    pub fn success(&self) -> bool {
        self.outcome.success()
    }
}

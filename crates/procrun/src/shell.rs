//! Shell command wrapper.
//!
//! Hands a command string to `/bin/sh -c` through the regular
//! [`CommandRunner`] protocol. Quoting, globbing and `PATH` lookup are the
//! shell's business.

use crate::runner::CommandRunner;

/// Interpreter used by [`run_shell`].
pub const SHELL: &str = "/bin/sh";

/// Run `command` with `/bin/sh -c`. True iff the shell exited with code 0.
pub fn run_shell(command: &str) -> bool {
    CommandRunner::default().run(&[SHELL, "-c", command])
}

//! Parent-side wait on a single child.

use nix::errno::Errno;
use nix::sys::wait::{WaitStatus, waitpid};
use nix::unistd::Pid;

/// Block until `pid` terminates and return its wait status.
///
/// Only the given pid is waited on, never `-1`, so concurrent callers never
/// reap each other's children. `EINTR` is retried; any other error means
/// the termination could not be observed.
pub fn wait_for_child(pid: Pid) -> Result<WaitStatus, Errno> {
    loop {
        match waitpid(pid, None) {
            Err(Errno::EINTR) => continue,
            result => return result,
        }
    }
}

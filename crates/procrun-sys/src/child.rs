//! Child-side setup between `fork` and `execv`.
//!
//! ## Exit Statuses
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | [`EXEC_FAILED`] | 127 | `execv` returned |
//! | [`REDIRECT_FAILED`] | 126 | stdout redirection could not be installed |
//!
//! The values follow the shell conventions for "command not found" and
//! "cannot execute". The parent only ever sees them as a nonzero exit.

use std::ffi::CStr;

use nix::errno::Errno;
use nix::fcntl::{FcntlArg, FdFlag, OFlag, fcntl, open};
use nix::sys::stat::Mode;
use nix::unistd::{close, dup2};

/// Exit status of a child whose `execv` returned.
pub const EXEC_FAILED: i32 = 127;

/// Exit status of a child that could not redirect its stdout.
pub const REDIRECT_FAILED: i32 = 126;

/// Replace the calling process's stdout with `path`.
///
/// The file is opened write-only, created with `mode` (minus the umask) if
/// absent and truncated if present. The descriptor returned by `open` is
/// closed once it has been duplicated onto fd 1, so the only remaining
/// reference to the file is the stdout slot itself.
pub fn redirect_stdout(path: &CStr, mode: libc::mode_t) -> Result<(), Errno> {
    let flags = OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC | OFlag::O_CLOEXEC;
    let fd = open(path, flags, Mode::from_bits_truncate(mode))?;

    // fd 1 was closed in the parent and `open` reused it.
    if fd == libc::STDOUT_FILENO {
        fcntl(fd, FcntlArg::F_SETFD(FdFlag::empty()))?;
        return Ok(());
    }

    if let Err(e) = dup2(fd, libc::STDOUT_FILENO) {
        close(fd).ok();
        return Err(e);
    }
    close(fd)
}

/// Terminate the calling process with `status`, without running atexit
/// handlers or flushing stdio buffers inherited from the parent.
#[inline]
pub fn exit_immediately(status: i32) -> ! {
    // SAFETY: _exit is async-signal-safe and never returns.
    unsafe { libc::_exit(status) }
}

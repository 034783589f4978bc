//! Argument vectors for `execv`.
//!
//! An [`ArgumentVector`] is built in the parent, before the fork, so the
//! child can hand it to `execv` without allocating. It owns one `CString`
//! per token plus a pointer array terminated by a null sentinel.
//!
//! Rejected input:
//!
//! - **Empty commands** - There is no program to execute
//! - **Empty program paths** - `execv("")` can only fail
//! - **Null bytes** - Would silently truncate the token at the C boundary
//!
//! ## Example
//!
//! ```ignore
//! use procrun::argv::{ArgumentVector, ValidationError};
//!
//! let argv = ArgumentVector::new(&["/bin/echo", "hello"])?;
//! assert_eq!(argv.program().to_bytes(), b"/bin/echo");
//!
//! assert_eq!(ArgumentVector::new::<&str>(&[]).unwrap_err(), ValidationError::EmptyCommand);
//! ```

use std::ffi::{CStr, CString, OsStr};
use std::os::raw::c_char;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::ptr;

use thiserror::Error;

/// Validation error for command input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("command cannot be empty")]
    EmptyCommand,

    #[error("program path cannot be empty")]
    EmptyProgram,

    #[error("null byte in argument {0}")]
    NullByte(usize),

    #[error("null byte in output path")]
    NullBytePath,
}

/// Validate command and arguments.
pub fn validate_cmd<S: AsRef<OsStr>>(cmd: &[S]) -> Result<(), ValidationError> {
    let Some(program) = cmd.first() else {
        return Err(ValidationError::EmptyCommand);
    };
    if program.as_ref().is_empty() {
        return Err(ValidationError::EmptyProgram);
    }
    for (i, arg) in cmd.iter().enumerate() {
        if arg.as_ref().as_bytes().contains(&0) {
            return Err(ValidationError::NullByte(i));
        }
    }
    Ok(())
}

/// Convert an output path for use after the fork.
pub fn output_path(path: &Path) -> Result<CString, ValidationError> {
    CString::new(path.as_os_str().as_bytes()).map_err(|_| ValidationError::NullBytePath)
}

/// Null-terminated argument vector, ready for `execv`.
///
/// The pointer array borrows from the owned strings. Moving the struct does
/// not move the string buffers, so the pointers stay valid for as long as
/// the `ArgumentVector` is alive.
#[derive(Debug)]
pub struct ArgumentVector {
    args: Vec<CString>,
    ptrs: Vec<*const c_char>,
}

impl ArgumentVector {
    pub fn new<S: AsRef<OsStr>>(cmd: &[S]) -> Result<Self, ValidationError> {
        validate_cmd(cmd)?;

        let args = cmd
            .iter()
            .enumerate()
            .map(|(i, arg)| {
                CString::new(arg.as_ref().as_bytes()).map_err(|_| ValidationError::NullByte(i))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ptrs = args
            .iter()
            .map(|s| s.as_ptr())
            .chain(std::iter::once(ptr::null()))
            .collect();

        Ok(Self { args, ptrs })
    }

    /// Path of the program to execute (element 0).
    #[inline]
    pub fn program(&self) -> &CStr {
        &self.args[0]
    }

    #[inline]
    pub fn args(&self) -> &[CString] {
        &self.args
    }

    /// Pointer to the null-terminated `argv` array.
    #[inline]
    pub fn as_ptr(&self) -> *const *const c_char {
        self.ptrs.as_ptr()
    }
}

//! Low-level process primitives for procrun.
//!
//! This crate holds the pieces of the fork/exec/wait protocol that run on
//! either side of the process split and need to stay close to the raw
//! syscalls.
//!
//! ## Modules
//!
//! - **child** - Steps taken by a freshly forked child before `execv`
//! - **wait** - Blocking wait on a single child pid
//!
//! ## Child Side
//!
//! A child forked from a multi-threaded parent may only call
//! async-signal-safe functions until it replaces its image. Everything in
//! [`child`] is a thin wrapper over `open`, `dup2`, `close`, `fcntl` and
//! `_exit`: no allocation, no locks, no logging.
//!
//! # Safety
//!
//! [`child::exit_immediately`] skips atexit handlers and stdio flushing on
//! purpose. Calling it from a process that is not a forked child discards
//! any buffered output of that process.

pub mod child;
pub mod wait;

pub use child::{EXEC_FAILED, REDIRECT_FAILED, exit_immediately, redirect_stdout};
pub use wait::wait_for_child;

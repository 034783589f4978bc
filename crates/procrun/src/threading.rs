//! Delayed critical section on a background thread.
//!
//! [`start_thread_obtaining_mutex`] spawns a thread that waits, takes a
//! lock, holds it for a while and releases it. Used to exercise lock
//! contention with known timings.

use std::io;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Parameters and result of one delayed critical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThreadData {
    pub wait_to_obtain_ms: u64,
    pub wait_to_release_ms: u64,
    /// True only if the lock was both acquired and released.
    pub thread_complete_success: bool,
}

/// Spawn a thread that sleeps `wait_to_obtain_ms`, locks `mutex`, sleeps
/// `wait_to_release_ms` while holding it, then unlocks it.
///
/// A poisoned mutex counts as a failed acquisition. Thread creation errors
/// are returned to the caller.
pub fn start_thread_obtaining_mutex(
    mutex: Arc<Mutex<()>>,
    wait_to_obtain_ms: u64,
    wait_to_release_ms: u64,
) -> io::Result<JoinHandle<ThreadData>> {
    let handle = thread::Builder::new()
        .name("mutex-timing".into())
        .spawn(move || {
            let mut data = ThreadData {
                wait_to_obtain_ms,
                wait_to_release_ms,
                thread_complete_success: false,
            };
            thread::sleep(Duration::from_millis(data.wait_to_obtain_ms));

            let Ok(guard) = mutex.lock() else {
                tracing::error!("failed to lock mutex");
                return data;
            };
            thread::sleep(Duration::from_millis(data.wait_to_release_ms));
            drop(guard);

            data.thread_complete_success = true;
            data
        })?;

    tracing::debug!(wait_to_obtain_ms, wait_to_release_ms, "started mutex thread");
    Ok(handle)
}

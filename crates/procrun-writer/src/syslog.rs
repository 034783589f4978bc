//! tracing layer that forwards events to the system logger.
//!
//! Events are formatted as their message followed by ` key=value` for each
//! other field, then handed to `syslog(3)` under the ident given to
//! [`SyslogLayer::open`].

use std::ffi::{CStr, CString};
use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

/// Sends every event it sees to syslog.
pub struct SyslogLayer {
    _private: (),
}

impl SyslogLayer {
    /// Open the connection to the system logger.
    ///
    /// `openlog` keeps the ident pointer, hence the `'static` bound.
    pub fn open(ident: &'static CStr, facility: libc::c_int) -> Self {
        // SAFETY: ident lives for the rest of the process.
        unsafe { libc::openlog(ident.as_ptr(), libc::LOG_PID | libc::LOG_CONS, facility) };
        Self { _private: () }
    }
}

impl Drop for SyslogLayer {
    fn drop(&mut self) {
        // SAFETY: closelog has no preconditions.
        unsafe { libc::closelog() };
    }
}

impl<S: Subscriber> Layer<S> for SyslogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let priority = priority(event.metadata().level());
        let line = format_event(event);
        // SAFETY: the format string takes exactly one C string argument.
        unsafe { libc::syslog(priority, c"%s".as_ptr(), line.as_ptr()) };
    }
}

/// syslog priority for a tracing level.
pub fn priority(level: &Level) -> libc::c_int {
    match *level {
        Level::ERROR => libc::LOG_ERR,
        Level::WARN => libc::LOG_WARNING,
        Level::INFO => libc::LOG_INFO,
        Level::DEBUG | Level::TRACE => libc::LOG_DEBUG,
    }
}

/// Render an event as one syslog line.
pub fn format_event(event: &Event<'_>) -> CString {
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);
    let line = visitor.finish().replace('\0', "\\0");
    CString::new(line).unwrap_or_default()
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self) -> String {
        self.message + &self.fields
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

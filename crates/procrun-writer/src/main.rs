//! writer - Write a string to a file
//!
//! Events go to stderr (filtered by `RUST_LOG`) and to syslog under the
//! `writer` ident with facility `LOG_USER`.

mod syslog;

use std::ffi::{OsStr, OsString};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter, Targets};
use tracing_subscriber::prelude::*;

use crate::syslog::SyslogLayer;

#[derive(Parser)]
#[command(name = "writer")]
#[command(author, version, about = "Write a string to a file, replacing its contents")]
struct Cli {
    /// File to write (created or truncated; its directory must exist)
    writefile: PathBuf,

    /// String to write, without a trailing newline
    writestr: OsString,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("writer=info"));
    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);
    let syslog = SyslogLayer::open(c"writer", libc::LOG_USER)
        .with_filter(Targets::new().with_target("writer", LevelFilter::DEBUG));

    tracing_subscriber::registry().with(stderr).with(syslog).init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.use_stderr() {
                tracing::error!("two arguments required: <writefile> <writestr>");
            }
            e.print().ok();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match write(&cli.writefile, &cli.writestr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(file = %cli.writefile.display(), "{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn write(path: &Path, contents: &OsStr) -> anyhow::Result<()> {
    fs::write(path, contents.as_bytes())
        .with_context(|| format!("could not write to file {}", path.display()))?;
    tracing::debug!("Writing {} to {}", contents.to_string_lossy(), path.display());
    Ok(())
}

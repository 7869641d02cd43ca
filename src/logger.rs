use std::io::Write;

use flexi_logger::{
    style, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, WriteMode,
};
use log::{debug, Record};

use crate::error::Result;

/// Log directory, relative to the working directory.
pub const LOG_DIR: &str = "logs";

/**
 *  Starts logging to a fresh, timestamped file under `LOG_DIR` (one file per
 *  run). Warnings and errors are also echoed to stdout, or every record when
 *  `verbose` is set.
 *
 *  Note: the returned handle flushes the log buffers when dropped, so it has
 *    to outlive every log call.
 */
pub fn configure(level: &str, verbose: bool) -> Result<LoggerHandle> {
    let dup = if verbose {
        Duplicate::All
    } else {
        Duplicate::Warn
    };
    let spec = FileSpec::default()
        .directory(LOG_DIR)
        .basename("vacation-graph");

    let handle = Logger::try_with_str(level)?
        .log_to_file(spec)
        .duplicate_to_stdout(dup)
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(file_format)
        .format_for_stdout(stdout_format)
        .start()?;
    debug!("Logging to directory: {}", LOG_DIR);
    Ok(handle)
}

fn file_format(
    out: &mut dyn Write,
    now: &mut DeferredNow,
    rec: &Record,
) -> std::io::Result<()> {
    write!(
        out,
        "[{}] {:5} {}: {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        rec.level(),
        rec.module_path().unwrap_or("<unknown>"),
        rec.args()
    )
}

fn stdout_format(
    out: &mut dyn Write,
    _now: &mut DeferredNow,
    rec: &Record,
) -> std::io::Result<()> {
    let level = rec.level();
    write!(
        out,
        "{} {}",
        style(level).paint(format!("{:5}", level)),
        rec.args()
    )
}

//! Log sinks: `docgap.log` under the XDG state dir, or stderr.
//!
//! stdout carries the report. [`LogSink`] has no stdout variant, and every
//! subscriber is installed through [`install`], so log lines cannot reach it.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,docgap=debug";
const LOG_FILE_NAME: &str = "docgap.log";

/// Where log lines go.
#[derive(Debug)]
pub enum LogSink {
    File { path: PathBuf, file: fs::File },
    Stderr,
}

impl LogSink {
    /// Opens `docgap.log` in append mode inside `dir`, creating `dir` if needed.
    pub fn open_in(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
        let path = dir.join(LOG_FILE_NAME);
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open log file {}", path.display()))?;
        Ok(LogSink::File { path, file })
    }

    pub fn describe(&self) -> String {
        match self {
            LogSink::File { path, .. } => path.display().to_string(),
            LogSink::Stderr => "stderr".to_string(),
        }
    }
}

/// Per-event writer. A file handle that cannot be cloned degrades to stderr.
pub enum SinkWriter {
    File(fs::File),
    Stderr(io::Stderr),
}

impl io::Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            SinkWriter::File(f) => f.write(buf),
            SinkWriter::Stderr(e) => e.lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SinkWriter::File(f) => f.flush(),
            SinkWriter::Stderr(e) => e.lock().flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        match self {
            LogSink::File { file, .. } => file
                .try_clone()
                .map(SinkWriter::File)
                .unwrap_or_else(|_| SinkWriter::Stderr(io::stderr())),
            LogSink::Stderr => SinkWriter::Stderr(io::stderr()),
        }
    }
}

/// Installs the global subscriber writing to `sink`. Fails if one is already set.
pub fn install(sink: LogSink) -> Result<()> {
    let target = sink.describe();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(sink)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install logger: {e}"))?;

    tracing::info!("docgap logging to {}", target);
    Ok(())
}

/// Initialize structured logging to `~/.local/state/docgap/docgap.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docgap")?;
    install(LogSink::open_in(&xdg_dirs.get_state_home().join("docgap"))?)
}

/// Initialize logging to stderr only. Use when init_logging() fails so the CLI still runs.
pub fn init_logging_stderr() {
    let _ = install(LogSink::Stderr);
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

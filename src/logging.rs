//! `tracing` output for the page.
//!
//! In the browser every event becomes one console call picked by level;
//! on native targets (tests) events go to stderr.

use std::io;

use tracing::{warn, Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::error::DiceChartError;

/// Install the global subscriber. `filter` is an `EnvFilter` directive.
pub fn init(filter: &str) -> Result<(), DiceChartError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| DiceChartError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_ansi(false)
        .with_writer(ConsoleMakeWriter)
        .try_init()
        .map_err(|e| DiceChartError::Logging(e.to_string()))
}

/// Install with `filter`, retrying with `fallback` when that fails. The
/// error names both failures when neither filter could be installed.
pub fn init_with_fallback(filter: &str, fallback: &str) -> Result<(), DiceChartError> {
    let Err(first) = init(filter) else {
        return Ok(());
    };
    match init(fallback) {
        Ok(()) => {
            warn!("{}; logging with '{}'", first, fallback);
            Ok(())
        }
        Err(second) => Err(DiceChartError::Logging(format!(
            "{}; fallback '{}' failed too: {}",
            first, fallback, second
        ))),
    }
}

/// Write straight to the console, for when no subscriber is installed.
pub fn console_error(message: &str) {
    emit(Level::ERROR, message);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

/// Buffers one formatted event and flushes it to the console on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        emit(self.level, line.trim_end());
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let msg = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&msg),
        Level::WARN => console::warn_1(&msg),
        Level::INFO => console::info_1(&msg),
        _ => console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

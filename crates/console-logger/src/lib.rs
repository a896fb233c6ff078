//! Console Logger
//!
//! `tracing` subscriber for the browser: each formatted event is forwarded
//! to `console.error/warn/info/debug` according to its level.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Where a finished log line goes
pub type Sink = fn(Level, &str);

/// Buffers one event and hands it to the sink on flush/drop
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
    sink: Sink,
}

impl ConsoleWriter {
    fn new(level: Level, sink: Sink) -> Self {
        Self {
            level,
            buf: Vec::new(),
            sink,
        }
    }

    fn emit(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if !line.is_empty() {
            (self.sink)(self.level, line);
        }
        self.buf.clear();
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: Sink,
}

impl ConsoleMakeWriter {
    pub fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }
}

impl Default for ConsoleMakeWriter {
    fn default() -> Self {
        Self::with_sink(browser_console)
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO, self.sink)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level(), self.sink)
    }
}

/// Default sink: the devtools console
pub fn browser_console(level: Level, line: &str) {
    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        _ => console::debug_1(&value),
    }
}

/// Parse a level name, falling back to `INFO`
pub fn parse_level(raw: &str) -> Level {
    raw.trim().parse().unwrap_or(Level::INFO)
}

/// Install the console subscriber as the global default
///
/// No timestamps: `SystemTime` is unavailable on wasm32.
pub fn init(max_level: Level) {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter::default())
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .try_init();
    if let Err(e) = result {
        console::warn_1(&JsValue::from_str(&format!("console logger not installed: {}", e)));
    }
}

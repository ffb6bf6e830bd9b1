use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Installs a `fmt` subscriber that prints to the browser console.
pub fn init(level: Level) {
    let result = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .try_init();

    if let Err(err) = result {
        web_sys::console::warn_1(&format!("logging already initialised: {}", err).into());
    }
}

/// Routes each formatted event to the console method matching its level.
pub struct MakeConsoleWriter;

pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { level: Level::INFO, buffer: Vec::new() }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter { level: *meta.level(), buffer: Vec::new() }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// The formatter writes one event per writer, so the line is complete on drop
impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buffer);
        let line = JsValue::from_str(text.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::debug_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }
}

//! Tracing/logging initialization.
//!
//! Filters come from `RUST_LOG`, e.g. `RUST_LOG=storefront_basket=debug`.
//! The browser has no environment, so there the default filter applies.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

const DEFAULT_FILTER: &str = "info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Routes each formatted event to `sink` as one line without its trailing
/// newline. The browser sink is `console.log`.
#[derive(Debug, Clone, Copy)]
pub struct LineSink(pub fn(&str));

impl<'a> MakeWriter<'a> for LineSink {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter {
            buf: Vec::new(),
            sink: self.0,
        }
    }
}

/// Buffers one event; hands it to the sink on flush or drop.
pub struct LineWriter {
    buf: Vec<u8>,
    sink: fn(&str),
}

impl io::Write for LineWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf);
            (self.sink)(line.trim_end());
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn browser_subscriber(
    filter: EnvFilter,
    sink: LineSink,
) -> impl ::tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(sink)
        .finish()
}

#[cfg(target_arch = "wasm32")]
fn console_log(line: &str) {
    web_sys::console::log_1(&line.into());
}

/// Single-line logs on the browser console. `SystemTime` is unavailable on
/// wasm32, so lines carry no timestamp.
///
/// Safe to call multiple times (subsequent calls are no-ops).
#[cfg(target_arch = "wasm32")]
pub fn init() {
    let subscriber = browser_subscriber(filter(), LineSink(console_log));
    let _ = ::tracing::subscriber::set_global_default(subscriber);
}

/// Compact single-line logs, captured by the test harness.
pub fn init_pretty() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .compact()
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

    fn record(line: &str) {
        LINES.lock().unwrap().push(line.to_string());
    }

    #[test]
    fn init_pretty_is_idempotent() {
        super::init_pretty();
        super::init_pretty();
        ::tracing::info!("still alive");
    }

    #[test]
    fn browser_subscriber_emits_one_line_per_event() {
        let subscriber = browser_subscriber(EnvFilter::new("info"), LineSink(record));
        ::tracing::subscriber::with_default(subscriber, || {
            ::tracing::info!(product_id = 7, "basket quantity confirmed");
            ::tracing::warn!(status = 500, "request rejected");
            ::tracing::debug!("filtered out at the default level");
        });

        let lines = LINES.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("basket quantity confirmed"));
        assert!(lines[0].contains("product_id=7"));
        assert!(lines[1].contains("WARN"));
        assert!(lines.iter().all(|l| !l.ends_with('\n')));
    }
}

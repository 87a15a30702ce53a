//! Console logging for the popup.
//!
//! Records go through the `log` facade into the extension's devtools console.
//! Initialization happens once per popup page; later calls are no-ops and
//! nothing here panics.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::OnceLock;
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::error::PopupError;

static LOGGER: ConsoleLogger = ConsoleLogger;
static LOGGING_LEVEL: OnceLock<LevelFilter> = OnceLock::new();

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

pub fn init_logging(level: &str) -> Result<(), PopupError> {
    let filter = normalize_level(level)?;
    if LOGGING_LEVEL.get().is_some() {
        return Ok(());
    }
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(filter);
        let _ = LOGGING_LEVEL.set(filter);
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<LevelFilter, PopupError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        other => Err(PopupError::Config(format!("unsupported log level `{other}`"))),
    }
}

//! Logger module
//!
//! Provides logging utilities for the development server:
//! - Server lifecycle logging (startup banner, shutdown, errors)
//! - Access logging in Common Log Format
//! - Optional file-based logging

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;
use std::path::Path;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    write_info("======================================");
    write_info("Game dev server started");
    write_info(&format!("Serving directory: {}", root.display()));
    write_info(&format!("Listening on: http://{addr}"));
    write_info("Caching disabled: edits are visible on reload");
    write_info("Press Ctrl+C to stop");
    write_info("======================================\n");
}

pub fn log_server_stop() {
    write_info("\nServer stopped cleanly. Bye!");
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    log_error(&format!("Failed to bind {addr}: {err}"));
    write_error("        The port may be in use by another instance; close it and retry.");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_browser_failed(url: &str, err: &std::io::Error) {
    log_warning(&format!(
        "Could not open browser at {url}: {err}. Open it manually."
    ));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    write_info(&entry.format_common());
}

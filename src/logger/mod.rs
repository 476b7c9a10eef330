//! Logger module
//!
//! Provides logging utilities for dispatchers and the demo server:
//! - Dispatch decision logging (off unless enabled)
//! - Error and warning logging
//! - Server lifecycle logging
//! - File-based logging support
//!
//! Until [`init`] is called every message goes to stdout/stderr, so the
//! dispatchers can be used without any logger setup.

pub mod writer;

use crate::config::Config;
use chrono::Local;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether dispatch decisions are logged
static DISPATCH_LOG: AtomicBool = AtomicBool::new(false);

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    set_dispatch_log(config.logging.dispatch_log);
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Enable or disable dispatch decision logging
pub fn set_dispatch_log(enabled: bool) {
    DISPATCH_LOG.store(enabled, Ordering::Relaxed);
}

pub fn dispatch_log_enabled() -> bool {
    DISPATCH_LOG.load(Ordering::Relaxed)
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

fn write_info(message: &str) {
    let line = format!("{} {message}", timestamp());
    match writer::get() {
        Some(w) => w.write_info(&line),
        None => println!("{line}"),
    }
}

fn write_error(message: &str) {
    let line = format!("{} {message}", timestamp());
    match writer::get() {
        Some(w) => w.write_error(&line),
        None => eprintln!("{line}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Method switch demo started");
    write_info(&format!("Listening on: http://{addr}"));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info(&format!(
        "Invalid method response: {} ({:?})",
        config.invalid.status, config.invalid.format
    ));
    write_info("======================================");
}

fn dispatch_line(kind: &str, method: &str, target: &str) -> Option<String> {
    dispatch_log_enabled().then(|| format!("[Dispatch] {kind} {method} -> {target}"))
}

fn invalid_method_line(method: &str) -> Option<String> {
    dispatch_log_enabled().then(|| format!("[WARN] Method not allowed: {method}"))
}

/// Log which branch a dispatcher picked for a method
pub fn log_dispatch(kind: &str, method: &str, target: &str) {
    if let Some(line) = dispatch_line(kind, method, target) {
        write_info(&line);
    }
}

/// Log a request answered by the invalid-method handler
pub fn log_invalid_method(method: &str) {
    if let Some(line) = invalid_method_line(method) {
        write_error(&line);
    }
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    if dispatch_log_enabled() {
        write_info(&format!("[Connection] Accepted from: {peer_addr}"));
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

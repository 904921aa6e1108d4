//! Browser launch module
//!
//! Opens the host's default web browser at the served address. Failure is
//! logged and otherwise ignored; the server keeps running either way.

use crate::logger;

/// Attempt to open the default browser at `url`.
pub fn launch(url: &str) {
    if let Err(e) = open::that(url) {
        logger::log_browser_failed(url, &e);
    }
}

//! playserve - a local static-file server for browser game development.
//!
//! Binds a TCP port, serves files from a fixed root directory with caching
//! disabled so edits are visible on reload, and opens the default browser at
//! the served address.

pub mod browser;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

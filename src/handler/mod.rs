//! Request handler module
//!
//! Responsible for request dispatch: root path rewriting and static file
//! serving with the fixed development header set.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;

//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from specific
//! business logic.

pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used helpers
pub use headers::apply_dev_headers;
pub use response::{
    build_404_response, build_405_response, build_file_response, build_options_response,
};

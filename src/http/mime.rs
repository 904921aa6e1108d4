//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension, with a
//! configurable override table layered over the builtin defaults.

use std::borrow::Cow;
use std::collections::HashMap;

/// Get MIME Content-Type based on file extension.
///
/// Overrides win over the builtin table; unknown extensions fall back to
/// `application/octet-stream`.
pub fn get_content_type<'a>(
    extension: Option<&str>,
    overrides: &'a HashMap<String, String>,
) -> Cow<'a, str> {
    if let Some(ext) = extension {
        if let Some(content_type) = overrides.get(&ext.to_ascii_lowercase()) {
            return Cow::Borrowed(content_type.as_str());
        }
    }
    Cow::Borrowed(builtin_content_type(extension))
}

/// Builtin extension-to-type table
fn builtin_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // JavaScript/WASM
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Audio (game assets)
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("m4a") => "audio/mp4",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Default
        _ => "application/octet-stream",
    }
}

//! Static file serving module
//!
//! Maps request paths to files under the serving root and builds responses.

use crate::config::AppState;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// Serve a file under the root directory, or 404
pub async fn serve(state: &AppState, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match load_file(&state.root_dir, path, &state.config.mime.overrides).await {
        Some((content, content_type)) => {
            http::build_file_response(content, &content_type, is_head)
        }
        None => http::build_404_response(),
    }
}

/// Load a file under the root directory.
///
/// Returns `None` for missing files, directories, and paths that resolve
/// outside the root.
pub async fn load_file<'a>(
    root: &Path,
    path: &str,
    overrides: &'a HashMap<String, String>,
) -> Option<(Vec<u8>, Cow<'a, str>)> {
    // Browsers encode spaces and non-ASCII asset names; undecodable
    // sequences mean the file cannot exist on disk
    let decoded = percent_decode_str(path).decode_utf8().ok()?;
    let file_path = root.join(decoded.trim_start_matches('/'));

    // File not found is common (404), no need to log
    let canonical = file_path.canonicalize().ok()?;

    // Root is canonicalized at startup, so containment is a plain prefix check
    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            canonical.display()
        ));
        return None;
    }

    if !canonical.is_file() {
        return None;
    }

    let content = match fs::read(&canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type =
        mime::get_content_type(canonical.extension().and_then(|e| e.to_str()), overrides);

    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use std::path::PathBuf;

    fn make_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("playserve-sf-{name}-{}", std::process::id()));
        std_fs::create_dir_all(&dir).unwrap();
        dir.canonicalize().unwrap()
    }

    #[tokio::test]
    async fn test_load_existing_file() {
        let root = make_root("load");
        std_fs::write(root.join("game.js"), b"console.log('hi');").unwrap();

        let overrides = HashMap::new();
        let (content, content_type) = load_file(&root, "/game.js", &overrides)
            .await
            .expect("file should load");
        assert_eq!(content, b"console.log('hi');");
        assert_eq!(content_type, "application/javascript");
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let root = make_root("missing");
        let overrides = HashMap::new();
        assert!(load_file(&root, "/nope.html", &overrides).await.is_none());
    }

    #[tokio::test]
    async fn test_directory_is_none() {
        let root = make_root("dir");
        std_fs::create_dir_all(root.join("assets")).unwrap();
        let overrides = HashMap::new();
        assert!(load_file(&root, "/assets", &overrides).await.is_none());
    }

    #[tokio::test]
    async fn test_traversal_is_blocked() {
        let root = make_root("trav");
        let overrides = HashMap::new();
        assert!(load_file(&root, "/../../etc/passwd", &overrides)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_encoded_traversal_is_blocked() {
        let root = make_root("enc-trav");
        let overrides = HashMap::new();
        assert!(load_file(&root, "/%2e%2e/%2e%2e/etc/passwd", &overrides)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_encoded_space_in_name() {
        let root = make_root("enc-space");
        std_fs::write(root.join("my asset.js"), b"ok").unwrap();

        let overrides = HashMap::new();
        let (content, _) = load_file(&root, "/my%20asset.js", &overrides)
            .await
            .expect("encoded path should resolve");
        assert_eq!(content, b"ok");
    }

    #[tokio::test]
    async fn test_dots_inside_filename_are_served() {
        let root = make_root("dots");
        std_fs::write(root.join("notes..txt"), b"dots").unwrap();

        let overrides = HashMap::new();
        let (content, _) = load_file(&root, "/notes..txt", &overrides)
            .await
            .expect("filename with dots should resolve");
        assert_eq!(content, b"dots");
    }
}

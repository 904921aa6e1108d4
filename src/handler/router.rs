//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, root path
//! rewriting, and static file dispatch. Every response leaves here with the
//! CORS and cache-disabling headers attached.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut response = match check_http_method(&method) {
        Some(resp) => resp,
        None => {
            let is_head = method == Method::HEAD;
            let file_path = rewrite_root_path(&path, &state.config.serve.index_file);
            static_files::serve(&state, &file_path, is_head).await
        }
    };

    http::apply_dev_headers(&mut response);

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            path,
        );
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(
            response.body().size_hint().exact().unwrap_or(0),
        )
        .unwrap_or(usize::MAX);
        logger::log_access(&entry);
    }

    Ok(response)
}

/// Check HTTP method and return a response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Rewrite a request for the root to the configured index file
fn rewrite_root_path(path: &str, index_file: &str) -> String {
    if path == "/" {
        format!("/{index_file}")
    } else {
        path.to_string()
    }
}

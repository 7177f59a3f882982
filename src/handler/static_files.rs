//! Static file serving module
//!
//! Maps request paths to files under the configured root and falls back to
//! the entry document so client-side routed applications keep working.

use crate::config::SiteConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, mime, response, url};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a static file, or the fallback document when no file matches
pub async fn serve(ctx: &RequestContext<'_>, site: &SiteConfig) -> Response<Full<Bytes>> {
    let decoded = match url::decode_component(ctx.path) {
        Ok(decoded) => decoded,
        Err(e) => {
            logger::log_warning(&format!("Rejected request path: {e}"));
            return http::build_400_response("Invalid path encoding");
        }
    };

    let relative = sanitize_path(&decoded);
    let root = Path::new(&site.root);

    if !relative.is_empty() {
        if let Some(file_path) = resolve_under_root(root, &relative) {
            // Single read attempt; a directory or vanished file just means
            // we fall back to the entry document.
            if let Ok(content) = fs::read(&file_path).await {
                let content_type =
                    mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
                if ctx.access_log {
                    logger::log_response(content.len());
                }
                return response::build_file_response(content, content_type, ctx.is_head);
            }
        }
    }

    serve_fallback(ctx, site).await
}

/// Serve the configured fallback document
async fn serve_fallback(ctx: &RequestContext<'_>, site: &SiteConfig) -> Response<Full<Bytes>> {
    let index_path = Path::new(&site.root).join(&site.index_file);

    match fs::read(&index_path).await {
        Ok(content) => {
            if ctx.access_log {
                logger::log_response(content.len());
            }
            response::build_file_response(content, "text/html; charset=utf-8", ctx.is_head)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read fallback document '{}': {}",
                index_path.display(),
                e
            ));
            http::build_404_empty_response()
        }
    }
}

/// Lexically normalize a decoded request path into a root-relative path
///
/// Empty and `.` segments are dropped, `..` pops the previous segment and
/// can never climb above the (implicit) root. The result carries no leading
/// separator.
fn sanitize_path(decoded: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }
    segments.join("/")
}

/// Resolve a sanitized relative path and verify it stays under the root
///
/// Lexical normalization alone does not guarantee containment (symlinks,
/// platform quirks), so the resolved path must have the canonicalized root
/// as a prefix. Returns `None` for anything that does not resolve or
/// escapes the root.
fn resolve_under_root(root: &Path, relative: &str) -> Option<PathBuf> {
    let root_canonical = root.canonicalize().ok()?;
    let resolved = root.join(relative).canonicalize().ok()?;

    if resolved.starts_with(&root_canonical) {
        Some(resolved)
    } else {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {relative} -> {}",
            resolved.display()
        ));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_leading_separators() {
        assert_eq!(sanitize_path("/index.html"), "index.html");
        assert_eq!(sanitize_path("///a//b"), "a/b");
    }

    #[test]
    fn test_sanitize_resolves_dot_segments() {
        assert_eq!(sanitize_path("/a/./b"), "a/b");
        assert_eq!(sanitize_path("/a/b/../c"), "a/c");
        assert_eq!(sanitize_path("/a/b/.."), "a");
    }

    #[test]
    fn test_sanitize_confines_traversal() {
        assert_eq!(sanitize_path("/../../etc/passwd"), "etc/passwd");
        assert_eq!(sanitize_path("/.."), "");
        assert_eq!(sanitize_path("../.."), "");
        assert_eq!(sanitize_path("/a/../../../b"), "b");
    }

    #[test]
    fn test_sanitize_root_is_empty() {
        assert_eq!(sanitize_path("/"), "");
        assert_eq!(sanitize_path(""), "");
    }

    #[test]
    fn test_resolve_rejects_escape_and_missing() {
        let root = std::env::temp_dir();
        assert!(resolve_under_root(&root, "no-such-file-linkgate").is_none());
        // Even if the joined path exists, it must stay under the root
        assert!(resolve_under_root(&root.join("no-such-dir"), "x").is_none());
    }
}

//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, path
//! classification over the fixed route set, and dispatch.

use crate::config::AppState;
use crate::handler::{interstitial, static_files};
use crate::http::{self, url};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

/// Reserved prefix for externally supplied destinations
const SERVICE_PREFIX: &str = "/service/";
/// Reserved prefix for short-link lookups
const GO_PREFIX: &str = "/go/";

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let is_head = *method == Method::HEAD;

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    let ctx = RequestContext {
        path: uri.path(),
        is_head,
        access_log,
    };

    Ok(route_request(&ctx, &state).await)
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

/// Route request based on its path prefix
///
/// Ordered match over the closed route set: service interstitial, short
/// link, then static files with fallback. Every branch terminates in
/// exactly one response.
async fn route_request(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    if let Some(encoded) = ctx.path.strip_prefix(SERVICE_PREFIX) {
        return handle_service(ctx, encoded);
    }

    if let Some(id) = ctx.path.strip_prefix(GO_PREFIX) {
        return handle_short_link(ctx, id, &state.redirects);
    }

    static_files::serve(ctx, &state.config.site).await
}

/// Handle `/service/<percent-encoded-url>`
///
/// Responds with the interstitial page rather than a direct redirect, so
/// the user can inspect the destination before leaving. The raw destination
/// is never echoed into an error body.
fn handle_service(ctx: &RequestContext<'_>, encoded: &str) -> Response<Full<Bytes>> {
    let destination = match url::decode_component(encoded) {
        Ok(destination) => destination,
        Err(e) => {
            logger::log_warning(&format!("Rejected service destination: {e}"));
            return http::build_400_response("Invalid destination encoding");
        }
    };

    if !url::has_http_scheme(&destination) {
        return http::build_400_response("Destination must begin with http:// or https://");
    }

    let html = interstitial::render(&destination, "service redirect");
    if ctx.access_log {
        logger::log_response(html.len());
    }
    http::build_html_response(html, ctx.is_head)
}

/// Handle `/go/<id>`
fn handle_short_link(
    ctx: &RequestContext<'_>,
    id: &str,
    redirects: &HashMap<String, String>,
) -> Response<Full<Bytes>> {
    let id = id.trim();

    let Some(destination) = redirects.get(id).filter(|_| !id.is_empty()) else {
        return http::build_404_response("Unknown short link ID");
    };

    let html = interstitial::render(destination, &format!("go/{id}"));
    if ctx.access_log {
        logger::log_response(html.len());
    }
    http::build_html_response(html, ctx.is_head)
}

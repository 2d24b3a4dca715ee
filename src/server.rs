// src/server.rs

//! HTTP front end: `GET /?r=<int>` answers with a PNG of the circle.
//!
//! Request handling is split in two. [`handle_request`] is a pure function
//! from the request URL to a [`CircleResponse`], which is what the unit tests
//! drive. [`serve`] owns the `tiny_http` server and feeds it requests one at
//! a time on the calling thread.

use std::io::Cursor;

use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use tiny_http::{Header, Request, Response, Server, StatusCode};

use crate::circle::{Radius, RadiusError};
use crate::config::Config;
use crate::renderer::render_png;


/// Body of the 400 response for a radius that is not a non-negative integer.
pub const RADIUS_HINT: &str = "radius must be a positive integer, e.g., ?r=42";

const CONTENT_TYPE_PNG: &str = "image/png";
const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// Everything needed to answer one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl CircleResponse {
    fn png(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: CONTENT_TYPE_PNG,
            body,
        }
    }

    fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: CONTENT_TYPE_TEXT,
            body: body.into().into_bytes(),
        }
    }
}

/// Answers a request for the given URL (path plus optional query string).
///
/// The path is ignored. The first `r` query parameter selects the radius;
/// a missing or empty `r` falls back to `config.default_radius`.
pub fn handle_request(url: &str, config: &Config) -> CircleResponse {
    let radius = match requested_radius(url, config) {
        Ok(radius) => radius,
        Err(response) => {
            warn!("Rejecting request {:?}: {}", url, String::from_utf8_lossy(&response.body));
            return response;
        }
    };

    info!("drawing circle of radius {}", radius);
    match render_png(radius, &config.image) {
        Ok(png) => CircleResponse::png(png),
        Err(e) => CircleResponse::text(500, format!("error encoding image: {:#}", e)),
    }
}

/// Extracts and validates the radius, or returns the error response to send.
fn requested_radius(url: &str, config: &Config) -> Result<Radius, CircleResponse> {
    let query = url.split_once('?').map_or("", |(_, query)| query);
    let raw = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "r")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();

    if raw.is_empty() {
        return config
            .default_radius()
            .map_err(|e| CircleResponse::text(500, format!("{:#}", e)));
    }

    let too_large = || {
        CircleResponse::text(
            400,
            format!("radius must be at most {}", config.max_radius),
        )
    };
    match raw.parse::<Radius>() {
        Ok(radius) if radius.get() <= config.max_radius => Ok(radius),
        Ok(_) | Err(RadiusError::TooLarge { .. }) => Err(too_large()),
        Err(RadiusError::NotAnInteger(_) | RadiusError::Negative(_)) => {
            Err(CircleResponse::text(400, RADIUS_HINT))
        }
    }
}

/// Turns `:8080` into `0.0.0.0:8080`; any other address is used as given.
pub fn bind_address(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{}", addr)
    } else {
        addr.to_string()
    }
}

/// Binds an HTTP server to `addr` (see [`bind_address`]).
pub fn bind(addr: &str) -> Result<Server> {
    let addr = bind_address(addr);
    Server::http(&addr)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("Failed to start HTTP server on {}", addr))
}

/// Answers a single request. A client that hangs up before the response is
/// written is logged and otherwise ignored.
pub fn respond(request: Request, config: &Config) {
    let response = handle_request(request.url(), config);
    let status = response.status;
    match to_http_response(response) {
        Ok(http_response) => {
            if let Err(e) = request.respond(http_response) {
                warn!("Failed to send {} response: {}", status, e);
            }
        }
        Err(e) => warn!("Failed to build {} response: {:#}", status, e),
    }
}

fn to_http_response(response: CircleResponse) -> Result<Response<Cursor<Vec<u8>>>> {
    let content_type = Header::from_bytes(&b"Content-Type"[..], response.content_type.as_bytes())
        .map_err(|()| anyhow!("Invalid Content-Type {:?}", response.content_type))?;
    Ok(Response::from_data(response.body)
        .with_status_code(StatusCode(response.status))
        .with_header(content_type))
}

/// Runs the HTTP server until the listener shuts down.
pub fn serve(addr: &str, config: &Config) -> Result<()> {
    let server = bind(addr)?;
    info!("listening on {}", bind_address(addr));
    for request in server.incoming_requests() {
        respond(request, config);
    }
    Ok(())
}

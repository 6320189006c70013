//! HTTP response helpers.

use crate::utils::mime::types::PLAIN;
use anyhow::Result;
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with `body`, or headers only for `HEAD`. Returns the status sent.
pub fn respond(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: String,
) -> Result<u16> {
    if is_head_request(&request) {
        send_head(request, status, content_type, body.len())?;
    } else {
        send_body(request, status, content_type, body.into_bytes())?;
    }
    Ok(status)
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

/// Respond with 405 for anything but `GET` and `HEAD`.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    let response = Response::from_data(b"405 Method Not Allowed".to_vec())
        .with_status_code(StatusCode(405))
        .with_header(make_header("Content-Type", PLAIN))
        .with_header(make_header("Allow", "GET, HEAD"));
    request.respond(response)?;
    Ok(())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(
    request: Request,
    status: u16,
    content_type: &'static str,
    content_length: usize,
) -> Result<()> {
    let response = Response::new(
        StatusCode(status),
        vec![make_header("Content-Type", content_type)],
        std::io::empty(),
        Some(content_length),
        None,
    );
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).expect("static header names and values are ASCII")
}

//! HTTP response handlers.

use anyhow::{Context, Result};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::utils::mime::types::{HTML, PLAIN};

/// Respond with a rendered page.
pub fn respond_html(request: Request, body: String) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, HTML);
    }
    send_body(request, 200, HTML, body.into_bytes())
}

/// Respond with an asset compiled into the binary.
pub fn respond_embedded(request: Request, body: &str, content_type: &'static str) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }
    send_body(request, 200, content_type, body.as_bytes().to_vec())
}

/// Respond with a static file.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = crate::utils::mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    // Range requests let browsers seek in project videos
    if let Some(range) = get_range_header(&request) {
        return respond_range(request, path, content_type, &range);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Handle Range request for media files (video/audio seeking).
fn respond_range(
    request: Request,
    path: &Path,
    content_type: &'static str,
    range: &str,
) -> Result<()> {
    use std::io::{Read, Seek, SeekFrom};

    let file_size = fs::metadata(path)?.len();
    if file_size == 0 {
        return send_body(request, 200, content_type, Vec::new());
    }

    let range = range.strip_prefix("bytes=").unwrap_or(range);
    let (start, end) = parse_range(range, file_size);
    if start > end {
        return send_body(request, 416, PLAIN, b"416 Range Not Satisfiable".to_vec());
    }
    let length = end - start + 1;

    let mut file = fs::File::open(path)?;
    file.seek(SeekFrom::Start(start))?;
    let reader = file.take(length);

    let content_range = format!("bytes {start}-{end}/{file_size}");
    let response = Response::new(
        StatusCode(206),
        vec![
            make_header("Content-Type", content_type),
            header("Content-Range", &content_range)?,
            make_header("Accept-Ranges", "bytes"),
        ],
        reader,
        usize::try_from(length).ok(),
        None,
    );

    request.respond(response)?;
    Ok(())
}

/// Parse Range header value "start-end" into inclusive (start, end) bytes.
///
/// `file_size` must be non-zero.
fn parse_range(range: &str, file_size: u64) -> (u64, u64) {
    let last = file_size - 1;
    let parts: Vec<&str> = range.trim().split('-').collect();

    match parts.as_slice() {
        // "0-499" - specific range
        [s, e] if !s.is_empty() && !e.is_empty() => {
            let start: u64 = s.trim().parse().unwrap_or(0);
            let end: u64 = e.trim().parse().unwrap_or(last);
            (start, end.min(last))
        }
        // "0-" - from start to end
        [s, ""] if !s.is_empty() => (s.trim().parse().unwrap_or(0), last),
        // "-500" - last 500 bytes
        ["", e] if !e.is_empty() => {
            let suffix: u64 = e.trim().parse().unwrap_or(0);
            (file_size.saturating_sub(suffix), last)
        }
        _ => (0, last),
    }
}

fn get_range_header(request: &Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case("range"))
        .map(|h| h.value.to_string())
}

pub fn respond_not_found(request: Request) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 404, PLAIN);
    }
    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

/// Respond with a render failure (500) so the problem shows in the browser.
pub fn respond_render_error(request: Request, error: &anyhow::Error) -> Result<()> {
    let error_str = format!("{error:#}");
    let msg = crate::utils::html::escape(&error_str);
    let body = format!(
        "<!DOCTYPE html><html><body><h1>Render Error</h1><pre>{msg}</pre>\
         <p>Run <code>folio validate</code> for details.</p></body></html>",
    );
    send_body(request, 500, HTML, body.into_bytes())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type));
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
        .with_header(make_header("Content-Type", content_type))
        .with_header(make_header("Cache-Control", "no-cache"));
    request.respond(response)?;
    Ok(())
}

/// Header from static strings, which are always valid ASCII.
fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).expect("static header is valid ascii")
}

fn header(key: &'static str, value: &str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow::anyhow!("invalid header {key}: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("0-499", 1000), (0, 499));
        assert_eq!(parse_range("500-", 1000), (500, 999));
        assert_eq!(parse_range("-200", 1000), (800, 999));
        assert_eq!(parse_range("0-5000", 1000), (0, 999));
        assert_eq!(parse_range("garbage", 1000), (0, 999));
    }

    #[test]
    fn test_make_header() {
        let header = make_header("Content-Type", HTML);
        assert!(header.field.equiv("content-type"));
        assert_eq!(header.value.as_str(), HTML);
    }
}

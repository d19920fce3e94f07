//! One GET attempt over libcurl's easy interface.

use crate::config::FetchConfig;
use std::str;
use url::Url;

/// A single HTTP response: numeric status, header lookup, body bytes.
#[derive(Debug)]
pub struct Response {
    status: u32,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Response {
    /// Numeric HTTP status code.
    pub fn status(&self) -> u32 {
        self.status
    }

    /// Case-insensitive header lookup; first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Consumes the response and returns the body bytes.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

/// Performs one GET against `url` with transport-level redirect following
/// disabled; the loop above decides what happens next from the status.
pub(crate) fn open(url: &Url, config: &FetchConfig) -> Result<Response, curl::Error> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.get(true)?; // GET only, no request body
    easy.follow_location(false)?;
    easy.connect_timeout(config.connect_timeout())?;
    // libcurl has no plain socket read timeout; a low-speed cutoff of
    // under 1 byte/s over the read window is the equivalent.
    easy.low_speed_limit(1)?;
    easy.low_speed_time(config.read_timeout())?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(Response {
        status,
        headers: parse_header_lines(&header_lines),
        body,
    })
}

/// Splits raw header lines into (name, value) pairs; the status line and
/// blank terminator carry no ':' and are skipped.
fn parse_header_lines(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }
    headers
}

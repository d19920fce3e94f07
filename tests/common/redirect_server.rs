//! Minimal HTTP/1.1 server with per-path scripted responses for tests.
//!
//! Serves GET requests from a route table: plain bodies, redirects with a
//! Location header, bare statuses, or a stall (accept and never answer)
//! for timeout tests. Unknown paths get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// Scripted response for one path.
#[derive(Debug, Clone)]
pub enum Route {
    /// 200 with this body.
    Body(Vec<u8>),
    /// Redirect with the given status (301/302/303) and Location value.
    Redirect { status: u16, location: String },
    /// Arbitrary status with an empty body.
    Status(u16),
    /// 302 without a Location header.
    RedirectWithoutLocation,
    /// Accept the connection, read the request, never respond.
    Stall,
}

/// Starts a server in a background thread serving `routes`. Returns the
/// base URL (e.g. "http://127.0.0.1:12345"). The server runs until the
/// process exits.
pub fn start(routes: HashMap<String, Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = match parse_path(request) {
        Some(p) => p,
        None => return,
    };
    match routes.get(path) {
        Some(Route::Body(body)) => {
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(body);
        }
        Some(Route::Redirect { status, location }) => {
            let response = format!(
                "HTTP/1.1 {} {}\r\nLocation: {}\r\nContent-Length: 0\r\n\r\n",
                status,
                reason(*status),
                location
            );
            let _ = stream.write_all(response.as_bytes());
        }
        Some(Route::Status(status)) => {
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Length: 0\r\n\r\n",
                status,
                reason(*status)
            );
            let _ = stream.write_all(response.as_bytes());
        }
        Some(Route::RedirectWithoutLocation) => {
            let _ = stream.write_all(b"HTTP/1.1 302 Found\r\nContent-Length: 0\r\n\r\n");
        }
        Some(Route::Stall) => {
            // Hold the socket open without answering until the client gives up.
            thread::sleep(std::time::Duration::from_secs(30));
        }
        None => {
            let _ = stream.write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
        }
    }
}

/// Returns the request path from the request line of a GET.
fn parse_path(request: &str) -> Option<&str> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    if !method.eq_ignore_ascii_case("GET") {
        return None;
    }
    parts.next()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        404 => "Not Found",
        418 => "I'm a teapot",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

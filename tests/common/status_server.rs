//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with a fixed status chosen by path (200 for paths
//! it doesn't know) and an empty body, and remembers which paths were asked for.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub struct StatusServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345"
    pub base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl StatusServer {
    /// Paths requested so far, in arrival order
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(routes: &[(&str, u16)]) -> StatusServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, u16>> = Arc::new(
        routes
            .iter()
            .map(|(path, status)| (path.to_string(), *status))
            .collect(),
    );
    let hits = Arc::new(Mutex::new(Vec::new()));

    let server_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&server_hits);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });

    StatusServer {
        base_url: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

/// A URL on a port nobody is listening on
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/gone", port)
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, u16>, hits: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);

    // "GET /path HTTP/1.1"
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let status = routes.get(&path).copied().unwrap_or(200);
    hits.lock().unwrap().push(path);

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        status,
        reason(status)
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        404 => "Not Found",
        410 => "Gone",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

//! Minimal HTTP/1.1 server that serves a fixed set of paths for integration tests.
//!
//! GET of a registered path returns 200 with its body; anything else returns 404.
//! Routes can be added after start, once the base URL (and port) is known.
//! Every request path and `User-Agent` value is recorded for assertions.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// A received request: path and the `User-Agent` header, if any.
#[derive(Debug, Clone)]
pub struct Hit {
    pub path: String,
    pub user_agent: Option<String>,
}

pub struct StaticServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base: String,
    routes: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl StaticServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Serve `body` at `path` (e.g. "/launcher/meta.json").
    pub fn route(&self, path: &str, body: impl Into<Vec<u8>>) {
        self.routes.lock().unwrap().insert(path.to_string(), body.into());
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread with no routes. The server runs until the process exits.
pub fn start() -> StaticServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(Mutex::new(HashMap::new()));
    let hits = Arc::new(Mutex::new(Vec::new()));
    let routes_srv = Arc::clone(&routes);
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes_srv);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });
    StaticServer {
        base: format!("http://127.0.0.1:{}", port),
        routes,
        hits,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &Mutex<HashMap<String, Vec<u8>>>,
    hits: &Mutex<Vec<Hit>>,
) {
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
    let hit = parse_request(request);
    let body = routes.lock().unwrap().get(&hit.path).cloned();
    hits.lock().unwrap().push(hit);

    match body {
        Some(body) => {
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    }
}

fn parse_request(request: &str) -> Hit {
    let mut path = String::new();
    let mut user_agent = None;
    for line in request.lines() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if path.is_empty() {
            path = line.split_whitespace().nth(1).unwrap_or("").to_string();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim().to_string());
            }
        }
    }
    Hit { path, user_agent }
}

//! Minimal HTTP/1.1 server acting as a jar repository for integration tests.
//!
//! Serves fixed bodies by path, optionally behind basic auth, plus plain
//! redirects. Unknown paths answer 404. Request counts per path are recorded.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
enum Route {
    Body {
        body: Arc<Vec<u8>>,
        /// Expected `Authorization` header value, if protected.
        auth: Option<String>,
    },
    Redirect(String),
}

#[derive(Default)]
pub struct RepoServerBuilder {
    routes: HashMap<String, Route>,
}

impl RepoServerBuilder {
    pub fn file(mut self, path: &str, body: Vec<u8>) -> Self {
        self.routes.insert(
            path.to_string(),
            Route::Body {
                body: Arc::new(body),
                auth: None,
            },
        );
        self
    }

    /// Serves `body` only to requests carrying `Authorization: <basic_header>`.
    pub fn protected_file(mut self, path: &str, body: Vec<u8>, basic_header: &str) -> Self {
        self.routes.insert(
            path.to_string(),
            Route::Body {
                body: Arc::new(body),
                auth: Some(basic_header.to_string()),
            },
        );
        self
    }

    pub fn redirect(mut self, path: &str, location: &str) -> Self {
        self.routes
            .insert(path.to_string(), Route::Redirect(location.to_string()));
        self
    }

    /// Starts the server in a background thread. It runs until the process exits.
    pub fn start(self) -> RepoServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes = Arc::new(self.routes);
        let hits: Arc<Mutex<HashMap<String, usize>>> = Arc::default();
        let hits_srv = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let hits = Arc::clone(&hits_srv);
                thread::spawn(move || handle(stream, &routes, &hits));
            }
        });
        RepoServer {
            base: format!("http://127.0.0.1:{}", port),
            hits,
        }
    }
}

pub struct RepoServer {
    base: String,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl RepoServer {
    pub fn builder() -> RepoServerBuilder {
        RepoServerBuilder::default()
    }

    /// Base URL without trailing slash, e.g. `http://127.0.0.1:12345`.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    hits: &Mutex<HashMap<String, usize>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let Ok(request) = std::str::from_utf8(&buf[..n]) else {
        return;
    };
    let (path, authorization) = parse_request(request);
    *hits.lock().unwrap().entry(path.to_string()).or_insert(0) += 1;

    match routes.get(path) {
        Some(Route::Body { body, auth }) => {
            if let Some(expected) = auth {
                if authorization != Some(expected.as_str()) {
                    let _ = stream.write_all(
                        b"HTTP/1.1 401 Unauthorized\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    );
                    return;
                }
            }
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nContent-Type: application/java-archive\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
        }
        Some(Route::Redirect(location)) => {
            let head = format!(
                "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                location
            );
            let _ = stream.write_all(head.as_bytes());
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
            );
        }
    }
}

/// Returns (path, optional Authorization header value).
fn parse_request(request: &str) -> (&str, Option<&str>) {
    let mut lines = request.lines();
    let path = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/");
    let mut authorization = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("authorization") {
                authorization = Some(value.trim());
            }
        }
    }
    (path, authorization)
}

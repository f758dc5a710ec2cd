// src/github/test_server.rs
// A tiny HTTP/1.1 server for tests: serves canned responses keyed by
// request path (including the query string). Unknown paths get a 404.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use reqwest::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CannedResponse {
    pub fn json(body: &str) -> Self {
        CannedResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        CannedResponse {
            status,
            ..CannedResponse::json(body)
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    fn render(&self) -> Vec<u8> {
        let reason = StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown");

        let mut head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
            self.status,
            reason,
            self.body.len()
        );
        for (name, value) in &self.headers {
            head.push_str(&format!("{}: {}\r\n", name, value));
        }
        head.push_str("\r\n");

        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(self.body.as_bytes());
        bytes
    }
}

pub struct TestServer {
    listener: TcpListener,
    /// e.g. "http://127.0.0.1:53211"
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub async fn bind() -> TestServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        TestServer {
            listener,
            base,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Starts serving in the background; returns a log of requested paths
    pub fn serve(self, routes: HashMap<String, CannedResponse>) -> Arc<Mutex<Vec<String>>> {
        let routes = Arc::new(routes);
        let requests = Arc::clone(&self.requests);
        let listener = self.listener;

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                let requests = Arc::clone(&requests);
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }

                    let request = String::from_utf8_lossy(&buf);
                    let path = request
                        .split_whitespace()
                        .nth(1)
                        .unwrap_or("/")
                        .to_string();
                    requests.lock().unwrap().push(path.clone());

                    let response = routes
                        .get(&path)
                        .cloned()
                        .unwrap_or_else(|| CannedResponse::status(404, r#"{"message":"Not Found"}"#));
                    let _ = socket.write_all(&response.render()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        self.requests
    }
}

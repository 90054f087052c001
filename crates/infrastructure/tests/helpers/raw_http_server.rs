use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Plain TCP listener that answers `/resolve` requests with hand-written
/// HTTP responses, keyed by the `name` query parameter. Used for responses
/// axum will not produce, such as a body shorter than its Content-Length.
pub struct RawHttpServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl RawHttpServer {
    pub async fn start(responses: Vec<(&str, String)>) -> Self {
        let responses: HashMap<String, String> = responses
            .into_iter()
            .map(|(name, raw)| (name.to_string(), raw))
            .collect();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let name = requested_name(&String::from_utf8_lossy(&request));
                let raw = responses
                    .get(&name)
                    .cloned()
                    .unwrap_or_else(|| full_response(""));

                let _ = stream.write_all(raw.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self { addr, handle }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/resolve", self.addr)
    }
}

impl Drop for RawHttpServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Complete 200 response; the connection closes after it.
pub fn full_response(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    )
}

/// 200 response announcing `declared_len` bytes but carrying only `body`.
pub fn truncated_response(body: &str, declared_len: usize) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        declared_len, body
    )
}

fn requested_name(request: &str) -> String {
    let request_line = request.lines().next().unwrap_or_default();
    request_line
        .split(['?', '&', ' '])
        .find_map(|part| part.strip_prefix("name="))
        .unwrap_or_default()
        .to_string()
}

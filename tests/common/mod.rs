//! One-shot HTTP stub shared by the integration tests.
//!
//! Each stub accepts one connection, records the raw request head and
//! answers with a canned status and body.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct Stub {
    pub base_url: String,
    pub request: JoinHandle<String>,
}

pub async fn spawn_stub(status_line: &'static str, body: &'static str) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");

    let request = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&head).into_owned()
    });

    Stub {
        base_url: format!("http://{addr}/api/v1"),
        request,
    }
}

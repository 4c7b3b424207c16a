//! Tree builder over the reqwest client against a local HTTP server

use bridge_desktop::ReqwestHttpClient;
use bridge_traits::http::RetryPolicy;
use core_runtime::config::DriveEndpoints;
use provider_google_drive::{DriveTreeBuilder, ErrorKind, GoogleDriveError, Node};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const ROOT_URL: &str = "https://drive.google.com/drive/folders/root";

/// Serve every request with the same status and JSON body.
/// Returns the base URL and a counter of requests served.
async fn serve_fixed(
    status_line: &'static str,
    body: &'static str,
) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);

            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => head.extend_from_slice(&buf[..n]),
                }
            }

            let reply = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(reply.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}", addr), hits)
}

fn builder_for(base: &str, max_attempts: u32) -> DriveTreeBuilder {
    DriveTreeBuilder::new(Arc::new(ReqwestHttpClient::new().unwrap()))
        .with_endpoints(DriveEndpoints::single(base))
        .with_retry_policy(RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(1),
            use_exponential_backoff: false,
        })
}

#[tokio::test]
async fn test_server_error_keeps_status_and_message() {
    let (base, hits) = serve_fixed(
        "500 Internal Server Error",
        r#"{"error": {"code": 500, "message": "Backend Error"}}"#,
    )
    .await;

    let error = builder_for(&base, 2)
        .build_tree(ROOT_URL, 1, true, "test-key")
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Remote);
    match error {
        GoogleDriveError::ApiError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 500);
            assert_eq!(message, "Backend Error");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_listing_over_http() {
    let (base, hits) = serve_fixed(
        "200 OK",
        r#"{"files": [{"id": "f1", "name": "report.pdf", "mimeType": "application/pdf"}]}"#,
    )
    .await;

    let tree = builder_for(&base, 1)
        .build_tree(ROOT_URL, 1, true, "test-key")
        .await
        .unwrap();

    assert_eq!(
        tree,
        vec![Node::file(
            "report.pdf",
            format!("{}/uc?id=f1&export=download", base)
        )]
    );
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

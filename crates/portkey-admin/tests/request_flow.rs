//! Request-flow tests against a local stub server: the sequencing the client
//! promises (one follow-up Get after a bodiless update, client-side scans for
//! the list-only resources) exercised through the real methods.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use portkey_admin::types::UpdateWorkspaceRequest;
use portkey_admin::{AdminClient, AdminConfig, Error};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A canned HTTP response: status code and JSON body.
type CannedResponse = (u16, String);

/// A minimal HTTP/1.1 server that serves one canned response per connection,
/// in order, and records the request line ("METHOD /path") of each request.
///
/// Every response carries `connection: close`, so the client opens a fresh
/// connection per request and the recorded order matches the call order.
struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    async fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let Some(request_line) = read_request(&mut stream).await else {
                    return;
                };
                recorded.lock().unwrap().push(request_line);

                let response = format!(
                    "HTTP/1.1 {status} STUB\r\n\
                     content-type: application/json\r\n\
                     content-length: {}\r\n\
                     connection: close\r\n\r\n{body}",
                    body.len()
                );
                if stream.write_all(response.as_bytes()).await.is_err() {
                    return;
                }
                let _ = stream.flush().await;
            }
        });

        Self { addr, requests }
    }

    fn client(&self) -> AdminClient {
        AdminConfig::builder()
            .with_api_key("test_key")
            .with_base_url(format!("http://{}/v1", self.addr))
            .build_client()
            .unwrap()
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Reads one request (head plus Content-Length body) and returns its
/// request line without the HTTP version, e.g. `"PUT /v1/admin/workspaces/ws_1"`.
async fn read_request(stream: &mut tokio::net::TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(head_end) = find(&buf, b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())?
            })
            .unwrap_or(0);
        if buf.len() < head_end + 4 + content_length {
            continue;
        }

        let request_line = head.lines().next()?;
        let mut parts = request_line.split_whitespace();
        let method = parts.next()?;
        let path = parts.next()?;
        return Some(format!("{method} {path}"));
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[tokio::test]
async fn test_update_issues_put_then_exactly_one_get() {
    let server = StubServer::start(vec![
        (200, json!({}).to_string()),
        (200, json!({"id": "ws_1", "name": "renamed"}).to_string()),
    ])
    .await;
    let client = server.client();

    let workspace = client
        .update_workspace("ws_1", &UpdateWorkspaceRequest::default().name("renamed"))
        .await
        .unwrap();

    assert_eq!(workspace.id, "ws_1");
    assert_eq!(workspace.name.as_deref(), Some("renamed"));
    assert_eq!(
        server.requests(),
        vec![
            "PUT /v1/admin/workspaces/ws_1".to_string(),
            "GET /v1/admin/workspaces/ws_1".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_failed_follow_up_get_reports_the_update_succeeded() {
    let server = StubServer::start(vec![
        (200, json!({}).to_string()),
        (500, json!({"error": "boom"}).to_string()),
    ])
    .await;
    let client = server.client();

    let error = client
        .update_workspace("ws_1", &UpdateWorkspaceRequest::default().name("renamed"))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        Error::FollowUpFetch {
            resource: "workspace",
            ..
        }
    ));
    assert!(error.to_string().contains("update succeeded"));
    assert_eq!(error.status(), Some(500));
}

#[tokio::test]
async fn test_integration_workspace_lookup_scans_the_list() {
    let access_list = json!({
        "data": [
            {"workspace_id": "ws1", "enabled": true},
            {"workspace_id": "ws2", "enabled": false},
        ]
    })
    .to_string();
    let server = StubServer::start(vec![(200, access_list.clone()), (200, access_list)]).await;
    let client = server.client();

    let hit = client
        .get_integration_workspace("openai-prod", "ws1")
        .await
        .unwrap();
    assert_eq!(hit.workspace_id, "ws1");
    assert_eq!(hit.enabled, Some(true));

    let miss = client
        .get_integration_workspace("openai-prod", "ws3")
        .await
        .unwrap_err();
    assert!(matches!(miss, Error::NotFound { id, .. } if id == "ws3"));

    // Both lookups hit the same list endpoint
    assert_eq!(
        server.requests(),
        vec![
            "GET /v1/integrations/openai-prod/workspaces".to_string(),
            "GET /v1/integrations/openai-prod/workspaces".to_string(),
        ]
    );
}

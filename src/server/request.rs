use crate::ids::RequestId;
use may_minihttp::Request;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::net::SocketAddr;
use tracing::debug;

/// Owned view of an HTTP request, detached from the connection buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: String,
    /// Path without the query string
    pub path: String,
    /// Header names are lowercased
    pub headers: HashMap<String, String>,
    pub body: String,
    pub request_id: RequestId,
    /// Socket peer, when the transport knows it
    pub peer: Option<SocketAddr>,
}

impl ApiRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            method: method.into().to_ascii_uppercase(),
            path: strip_query(&path).to_string(),
            headers: HashMap::new(),
            body: String::new(),
            request_id: RequestId::new(),
            peer: None,
        }
    }

    pub fn with_peer(mut self, peer: SocketAddr) -> Self {
        self.peer = Some(peer);
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// JSON request with `Content-Type: application/json`.
    pub fn json(method: &str, path: &str, body: &Value) -> Self {
        Self::new(method, path)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Rate-limit key: the peer IP, else `unknown`.
    ///
    /// With `trust_proxy`, the first `X-Forwarded-For` hop and then `X-Real-IP`
    /// take precedence over the peer.
    pub fn client_id(&self, trust_proxy: bool) -> String {
        if trust_proxy {
            if let Some(forwarded) = self.forwarded_client() {
                return forwarded.to_string();
            }
        }
        match self.peer {
            Some(peer) => peer.ip().to_string(),
            None => "unknown".to_string(),
        }
    }

    fn forwarded_client(&self) -> Option<&str> {
        self.header("x-forwarded-for")
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .or_else(|| self.header("x-real-ip").map(str::trim).filter(|v| !v.is_empty()))
    }

    /// Declared `Content-Length`, or the received body size when absent or larger.
    pub fn content_length(&self) -> usize {
        let declared = self
            .header("content-length")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        declared.max(self.body.len())
    }

    pub fn is_json(&self) -> bool {
        self.header("content-type")
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
    }

    pub fn json_body(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

fn strip_query(path: &str) -> &str {
    path.split('?').next().unwrap_or("/")
}

/// Copy method, path, headers and body out of a `may_minihttp::Request`.
///
/// The request id is taken from `X-Request-Id` when it holds a ULID.
pub fn parse_request(req: Request, peer: Option<SocketAddr>) -> ApiRequest {
    let method = req.method().to_ascii_uppercase();
    let path = strip_query(req.path()).to_string();

    let headers: HashMap<String, String> = req
        .headers()
        .iter()
        .map(|h| {
            (
                h.name.to_ascii_lowercase(),
                String::from_utf8_lossy(h.value).to_string(),
            )
        })
        .collect();
    let request_id = RequestId::from_header_or_new(headers.get("x-request-id").map(String::as_str));

    let mut body = String::new();
    if let Err(e) = req.body().read_to_string(&mut body) {
        debug!(error = %e, "Request body unreadable");
        body.clear();
    }

    debug!(
        method = %method,
        path = %path,
        header_count = headers.len(),
        body_bytes = body.len(),
        "HTTP request parsed"
    );

    ApiRequest {
        method,
        path,
        headers,
        body,
        request_id,
        peer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_query_and_uppercases() {
        let req = ApiRequest::new("get", "/api/component-types?x=1");
        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/api/component-types");
    }

    fn peer(ip: &str) -> SocketAddr {
        SocketAddr::new(ip.parse().unwrap(), 50_000)
    }

    #[test]
    fn test_client_id_trusted_proxy_precedence() {
        let req = ApiRequest::new("GET", "/")
            .with_peer(peer("192.168.1.1"))
            .with_header("X-Forwarded-For", " 10.0.0.1 , 10.0.0.2")
            .with_header("X-Real-IP", "10.9.9.9");
        assert_eq!(req.client_id(true), "10.0.0.1");

        let req = ApiRequest::new("GET", "/")
            .with_peer(peer("192.168.1.1"))
            .with_header("x-real-ip", "10.9.9.9");
        assert_eq!(req.client_id(true), "10.9.9.9");

        let req = ApiRequest::new("GET", "/").with_peer(peer("192.168.1.1"));
        assert_eq!(req.client_id(true), "192.168.1.1");
    }

    #[test]
    fn test_client_id_ignores_forwarding_headers_by_default() {
        let req = ApiRequest::new("GET", "/")
            .with_peer(peer("192.168.1.1"))
            .with_header("X-Forwarded-For", "10.0.0.1")
            .with_header("X-Real-IP", "10.9.9.9");
        assert_eq!(req.client_id(false), "192.168.1.1");

        let req = ApiRequest::new("GET", "/").with_header("X-Forwarded-For", "10.0.0.1");
        assert_eq!(req.client_id(false), "unknown");
    }

    #[test]
    fn test_client_id_ignores_peer_port() {
        let a = ApiRequest::new("GET", "/").with_peer(SocketAddr::new("::1".parse().unwrap(), 1));
        let b = ApiRequest::new("GET", "/").with_peer(SocketAddr::new("::1".parse().unwrap(), 2));
        assert_eq!(a.client_id(false), b.client_id(false));
    }

    #[test]
    fn test_content_length_and_type() {
        let req = ApiRequest::new("POST", "/")
            .with_header("Content-Type", "Application/JSON; charset=utf-8")
            .with_header("Content-Length", "5000")
            .with_body("{}");
        assert!(req.is_json());
        assert_eq!(req.content_length(), 5000);
        assert_eq!(ApiRequest::new("POST", "/").with_body("abc").content_length(), 3);
        assert!(!ApiRequest::new("POST", "/").is_json());
    }
}

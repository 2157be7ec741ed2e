use may_minihttp::Response;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text {
        /// Full header line, e.g. `Content-Type: text/plain`
        content_type: &'static str,
        body: String,
    },
    Empty,
}

/// Response produced by a route or a short-circuiting middleware.
///
/// Headers are complete `Name: value` lines, the form `may_minihttp` writes.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<&'static str>,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: ResponseBody::Json(body),
        }
    }

    /// `{ "success": true, "data": ... }` with status 200.
    pub fn ok(data: Value) -> Self {
        Self::json(200, json!({ "success": true, "data": data }))
    }

    /// `{ "success": false, "error": message }`.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, json!({ "success": false, "error": message.into() }))
    }

    pub fn text(status: u16, content_type: &'static str, body: String) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: ResponseBody::Text { content_type, body },
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: ResponseBody::Empty,
        }
    }

    pub fn with_header(mut self, line: &'static str) -> Self {
        self.add_header(line);
        self
    }

    pub fn add_header(&mut self, line: &'static str) {
        self.headers.push(line);
    }

    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn status_reason(status: u16) -> &'static str {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown")
}

/// Serialize an [`ApiResponse`] onto the wire response.
pub fn write_response(res: &mut Response, response: ApiResponse) {
    res.status_code(response.status as usize, status_reason(response.status));
    for line in &response.headers {
        res.header(line);
    }
    match response.body {
        ResponseBody::Json(value) => {
            res.header("Content-Type: application/json");
            res.body_vec(value.to_string().into_bytes());
        }
        ResponseBody::Text { content_type, body } => {
            res.header(content_type);
            res.body_vec(body.into_bytes());
        }
        ResponseBody::Empty => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason() {
        assert_eq!(status_reason(200), "OK");
        assert_eq!(status_reason(404), "Not Found");
        assert_eq!(status_reason(413), "Payload Too Large");
        assert_eq!(status_reason(429), "Too Many Requests");
        assert_eq!(status_reason(599), "Unknown");
    }

    #[test]
    fn test_envelopes() {
        let ok = ApiResponse::ok(json!([1]));
        assert_eq!(ok.status, 200);
        assert_eq!(ok.json_body(), Some(&json!({"success": true, "data": [1]})));

        let err = ApiResponse::error(400, "bad");
        assert!(!err.is_success());
        assert_eq!(err.json_body(), Some(&json!({"success": false, "error": "bad"})));

        assert_eq!(ApiResponse::empty(204).json_body(), None);
    }
}

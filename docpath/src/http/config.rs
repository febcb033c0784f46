use std::collections::HashMap;
use std::time::Duration;

/// Client-wide settings shared by every request.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub base_url: String,
    pub default_headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Joins an endpoint onto the base URL. Absolute endpoints are used as
    /// they are.
    pub(crate) fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let path = endpoint.trim_start_matches('/');
        match (base.is_empty(), path.is_empty()) {
            (true, _) => endpoint.to_string(),
            (false, true) => base.to_string(),
            (false, false) => format!("{}/{}", base, path),
        }
    }
}

/// How the response body is decoded into the response data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseType {
    /// Body parsed as JSON into the data type
    #[default]
    Json,
    /// Body taken as UTF-8 text, data type must deserialize from a string
    Text,
    /// Raw body bytes, data type must deserialize from a byte sequence
    Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Text(String),
    Bytes(Vec<u8>),
}

/// Per-request options. Every field defaults to "not set": no extra
/// headers or params, the client's timeout, no auth, a JSON response and no
/// body.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub headers: HashMap<String, String>,
    pub params: Vec<(String, String)>,
    pub timeout: Option<Duration>,
    pub basic_auth: Option<BasicAuth>,
    pub response_type: ResponseType,
    pub body: Option<RequestBody>,
}

impl RequestConfig {
    pub fn new() -> Self {
        RequestConfig::default()
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn basic_auth(mut self, username: &str, password: Option<&str>) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.to_string(),
            password: password.map(str::to_string),
        });
        self
    }

    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    pub fn json_body<T: serde::Serialize>(mut self, body: &T) -> crate::errors::DocPathResult<Self> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }
}

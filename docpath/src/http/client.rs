use crate::errors::{DocPathError, DocPathResult, ErrorKind};
use crate::http::response::shape_response;
use crate::http::{ClientConfig, RequestBody, RequestConfig, StandardResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    fn as_reqwest(&self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Options => reqwest::Method::OPTIONS,
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_reqwest())
    }
}

/// Thin wrapper over `reqwest` with a uniform [StandardResponse] envelope.
///
/// ```rust,no_run
/// use docpath::http::{ClientConfig, HttpClient, RequestConfig};
///
/// # async fn run() -> docpath::errors::DocPathResult<()> {
/// let client = HttpClient::new(ClientConfig::new("https://api.example.com"))?;
/// let response = client
///     .get::<serde_json::Value>("/status", RequestConfig::new().param("verbose", "1"))
///     .await;
/// if !response.success {
///     eprintln!("{:?}", response.error);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Builds the client. Fails with [ErrorKind::HttpError] on an invalid
    /// default header or if the TLS backend cannot initialise.
    pub fn new(config: ClientConfig) -> DocPathResult<Self> {
        let mut builder = reqwest::Client::builder().default_headers(header_map(&config.default_headers)?);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(HttpClient { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a request. Every failure is folded into the response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        config: RequestConfig,
    ) -> StandardResponse<T> {
        let url = self.config.url_for(endpoint);
        log::debug!("{} {}", method, url);

        let headers = match header_map(&config.headers) {
            Ok(headers) => headers,
            Err(err) => return StandardResponse::failure(err.message(), "INVALID_HEADER", None, None),
        };

        let mut request = self
            .client
            .request(method.as_reqwest(), &url)
            .headers(headers)
            .query(&config.params);
        if let Some(timeout) = config.timeout {
            request = request.timeout(timeout);
        }
        if let Some(auth) = &config.basic_auth {
            request = request.basic_auth(&auth.username, auth.password.as_ref());
        }
        request = match config.body {
            Some(RequestBody::Json(value)) => request.json(&value),
            Some(RequestBody::Text(text)) => request.body(text),
            Some(RequestBody::Bytes(bytes)) => request.body(bytes),
            None => request,
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return transport_failure(&url, &err),
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.to_string(), v.to_string())))
            .collect::<HashMap<String, String>>();
        match response.bytes().await {
            Ok(body) => shape_response(status, headers, &body, config.response_type),
            Err(err) => transport_failure(&url, &err),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str, config: RequestConfig) -> StandardResponse<T> {
        self.request(HttpMethod::Get, endpoint, config).await
    }

    pub async fn post<T: DeserializeOwned>(&self, endpoint: &str, config: RequestConfig) -> StandardResponse<T> {
        self.request(HttpMethod::Post, endpoint, config).await
    }

    pub async fn put<T: DeserializeOwned>(&self, endpoint: &str, config: RequestConfig) -> StandardResponse<T> {
        self.request(HttpMethod::Put, endpoint, config).await
    }

    pub async fn patch<T: DeserializeOwned>(&self, endpoint: &str, config: RequestConfig) -> StandardResponse<T> {
        self.request(HttpMethod::Patch, endpoint, config).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str, config: RequestConfig) -> StandardResponse<T> {
        self.request(HttpMethod::Delete, endpoint, config).await
    }
}

fn header_map(headers: &HashMap<String, String>) -> DocPathResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let (Ok(name), Ok(value)) = (HeaderName::try_from(name.as_str()), HeaderValue::try_from(value.as_str())) else {
            log::error!("Invalid HTTP header {}", name);
            return Err(DocPathError::new(&format!("Invalid HTTP header '{}'", name), ErrorKind::HttpError));
        };
        map.insert(name, value);
    }
    Ok(map)
}

fn transport_failure<T>(url: &str, err: &reqwest::Error) -> StandardResponse<T> {
    log::error!("HTTP request to {} failed: {}", url, err);
    let code = if err.is_timeout() {
        "TIMEOUT"
    } else if err.is_connect() {
        "NETWORK_ERROR"
    } else {
        "REQUEST_ERROR"
    };
    let metadata = err.status().map(|status| crate::http::ResponseMetadata {
        status_code: status.as_u16(),
        headers: HashMap::new(),
    });
    StandardResponse::failure(&err.to_string(), code, None, metadata)
}

use std::collections::HashMap;

use reqwest::{Client, Method};
use tracing::{debug, warn};

use crate::{EndpointConfig, FileInput, UploadResult};

/// HTTP transport for the generic endpoint strategy: the file's raw bytes
/// go out as the request body and the response body comes back
/// JSON-decoded. Response status is not inspected; only network failures
/// and non-JSON bodies fail the exchange.
pub struct EndpointTransport {
    client: Client,
}

impl EndpointTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Use a preconfigured client (proxies, custom TLS, timeouts).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Perform the exchange. Headers start from the session-level defaults
    /// and endpoint-specific entries overlay them; when the file carries a
    /// MIME type and nothing configured `content-type`, the file's type is
    /// sent.
    pub async fn send(
        &self,
        endpoint: &EndpointConfig,
        default_headers: &HashMap<String, String>,
        file: &FileInput,
    ) -> UploadResult<serde_json::Value> {
        let method = match endpoint.method.as_deref() {
            None => Method::POST,
            Some(raw) => Method::from_bytes(raw.to_ascii_uppercase().as_bytes())
                .unwrap_or_else(|_| {
                    warn!(method = raw, "unrecognized endpoint method, using POST");
                    Method::POST
                }),
        };

        let mut headers = default_headers.clone();
        headers.extend(
            endpoint
                .headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        if let Some(mime) = &file.mime {
            if !headers.keys().any(|name| name.eq_ignore_ascii_case("content-type")) {
                headers.insert("content-type".to_string(), mime.clone());
            }
        }

        let mut request = self
            .client
            .request(method, &endpoint.url)
            .body(file.data.clone());
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        debug!(status = %response.status(), url = %endpoint.url, "endpoint responded");

        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}

impl Default for EndpointTransport {
    fn default() -> Self {
        Self::new()
    }
}

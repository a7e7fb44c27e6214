//! HTTP source - fetches `<base_url>/<section>.json`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpSourceConfig::new("https://cdn.example.com/content")
//!     .with_timeout(Duration::from_secs(5));
//!
//! let source = HttpSource::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::domain::content::{Section, SectionPayload};
use crate::ports::{SectionSource, SourceError};

/// Configuration for the HTTP source.
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Base URL content documents live under.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpSourceConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Serves sections from a static content host.
pub struct HttpSource {
    config: HttpSourceConfig,
    client: Client,
}

impl HttpSource {
    /// Creates a new HTTP source with the given configuration.
    pub fn new(config: HttpSourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SourceError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the URL of a section's document.
    pub fn section_url(&self, section: Section) -> String {
        format!(
            "{}/{}.json",
            self.config.base_url.trim_end_matches('/'),
            section.key()
        )
    }
}

#[async_trait]
impl SectionSource for HttpSource {
    async fn fetch(&self, section: Section) -> Result<SectionPayload, SourceError> {
        let url = self.section_url(section);
        tracing::debug!("Fetching {} from {}", section, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout
            } else {
                SourceError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(section));
        }
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;

        Ok(SectionPayload::from_json(section, &bytes)?)
    }

    fn name(&self) -> &'static str {
        "HttpSource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response and returns the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn section_url_trims_trailing_slash() {
        let source = HttpSource::new(HttpSourceConfig::new("https://cdn.example.com/content/")).unwrap();
        assert_eq!(
            source.section_url(Section::Projects),
            "https://cdn.example.com/content/projects.json"
        );
    }

    #[test]
    fn config_builder_sets_timeout() {
        let config = HttpSourceConfig::new("http://localhost").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[tokio::test]
    async fn fetch_decodes_successful_response() {
        let base = serve_once("200 OK", r#"[{"name": "Rust", "category": "language"}]"#).await;
        let source = HttpSource::new(HttpSourceConfig::new(base)).unwrap();

        let payload = source.fetch(Section::Technologies).await.unwrap();
        match payload {
            SectionPayload::Technologies(items) => assert_eq!(items[0].name, "Rust"),
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[tokio::test]
    async fn not_found_maps_to_not_found() {
        let base = serve_once("404 Not Found", "").await;
        let source = HttpSource::new(HttpSourceConfig::new(base)).unwrap();

        let err = source.fetch(Section::Timeline).await.unwrap_err();
        assert_eq!(err, SourceError::NotFound(Section::Timeline));
    }

    #[tokio::test]
    async fn server_error_maps_to_status() {
        let base = serve_once("503 Service Unavailable", "").await;
        let source = HttpSource::new(HttpSourceConfig::new(base)).unwrap();

        let err = source.fetch(Section::Contact).await.unwrap_err();
        assert_eq!(err, SourceError::Status(503));
    }
}

//! # Product Sources
//!
//! One external read: a JSON array of product records, from the network or
//! from a file.
//!
//! ## Failure Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  What went wrong                         ClientError                    │
//! │  ───────────────                         ───────────                    │
//! │  DNS / connect / reset                   Transport                      │
//! │  No answer within timeout                Timeout                        │
//! │  4xx / 5xx                               HttpStatus                     │
//! │  Body is not [ {id,title,price,image} ]  Parse                          │
//! │  File missing / unreadable               Io                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No retry happens here: a failed read is reported once and the caller
//! decides whether to fetch again.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use storefront_core::Product;
use tracing::debug;
use url::Url;

use crate::config::StorefrontConfig;
use crate::error::{ClientError, ClientResult};

/// Something the Product Store can load the catalog from.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Reads the full product list, in source order.
    async fn fetch(&self) -> ClientResult<Vec<Product>>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Builds the source named by the configuration: the file when a path is
/// set, the HTTP endpoint otherwise.
pub fn from_config(config: &StorefrontConfig) -> ClientResult<Arc<dyn ProductSource>> {
    match config.source_path() {
        Some(path) => Ok(Arc::new(FileProductSource::new(path.clone()))),
        None => Ok(Arc::new(HttpProductSource::new(
            config.source_url(),
            config.timeout(),
        )?)),
    }
}

fn parse_products(body: &[u8]) -> ClientResult<Vec<Product>> {
    Ok(serde_json::from_slice(body)?)
}

// =============================================================================
// HTTP Source
// =============================================================================

/// `GET <url>` returning the product list.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl HttpProductSource {
    pub fn new(url: &str, timeout: Duration) -> ClientResult<Self> {
        let url = Url::parse(url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(HttpProductSource {
            client,
            url,
            timeout,
        })
    }

    fn map_request_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch(&self) -> ClientResult<Vec<Product>> {
        debug!(url = %self.url, "GET product source");

        let resp = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|e| self.map_request_error(e))?;
        let products = parse_products(&body)?;

        debug!(url = %self.url, count = products.len(), "product source answered");
        Ok(products)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

// =============================================================================
// File Source
// =============================================================================

/// A local JSON file with the same shape as the HTTP response.
#[derive(Debug, Clone)]
pub struct FileProductSource {
    path: PathBuf,
}

impl FileProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileProductSource { path: path.into() }
    }
}

#[async_trait]
impl ProductSource for FileProductSource {
    async fn fetch(&self) -> ClientResult<Vec<Product>> {
        debug!(path = %self.path.display(), "reading product file");
        let body = tokio::fs::read(&self.path).await?;
        parse_products(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use storefront_core::{Money, ProductId};

    const SHIRT_JSON: &str =
        r#"[{"id":1,"title":"Shirt","price":20,"image":"a.png"},{"id":2,"title":"Hat","price":9.99,"image":"b.png"}]"#;

    /// Serves `router` on an ephemeral local port and returns the products URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/products", addr)
    }

    fn json_route(body: &'static str) -> Router {
        Router::new().route(
            "/products",
            get(move || async move { ([("content-type", "application/json")], body) }),
        )
    }

    #[tokio::test]
    async fn test_http_fetch_preserves_source_order() {
        let url = serve(json_route(SHIRT_JSON)).await;
        let source = HttpProductSource::new(&url, Duration::from_secs(5)).unwrap();

        let products = source.fetch().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId::new(1));
        assert_eq!(products[0].price, Money::from_cents(2000));
        assert_eq!(products[1].title, "Hat");
        assert_eq!(products[1].price, Money::from_cents(999));
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let router = Router::new().route(
            "/products",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let url = serve(router).await;
        let source = HttpProductSource::new(&url, Duration::from_secs(5)).unwrap();

        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, ClientError::HttpStatus { status: 503 }));
    }

    #[tokio::test]
    async fn test_http_malformed_body() {
        let url = serve(json_route(r#"{"products": []}"#)).await;
        let source = HttpProductSource::new(&url, Duration::from_secs(5)).unwrap();

        assert!(matches!(source.fetch().await, Err(ClientError::Parse(_))));
    }

    #[tokio::test]
    async fn test_http_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/products", addr);
        let source = HttpProductSource::new(&url, Duration::from_secs(5)).unwrap();

        assert!(matches!(source.fetch().await, Err(ClientError::Transport(_))));
    }

    #[tokio::test]
    async fn test_http_timeout() {
        let router = Router::new().route(
            "/products",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "[]"
            }),
        );
        let url = serve(router).await;
        let source = HttpProductSource::new(&url, Duration::from_millis(100)).unwrap();

        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, ClientError::Timeout(d) if d == Duration::from_millis(100)));
    }

    #[test]
    fn test_http_rejects_bad_url() {
        assert!(matches!(
            HttpProductSource::new("not a url", Duration::from_secs(1)),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, SHIRT_JSON).unwrap();

        let source = FileProductSource::new(&path);
        let products = source.fetch().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileProductSource::new(dir.path().join("nope.json"));

        assert!(matches!(source.fetch().await, Err(ClientError::Io(_))));
    }

    #[test]
    fn test_from_config_prefers_file() {
        let mut config = StorefrontConfig::default();
        config.source.path = Some(PathBuf::from("catalog.json"));

        let source = from_config(&config).unwrap();
        assert_eq!(source.describe(), "catalog.json");

        config.source.path = None;
        let source = from_config(&config).unwrap();
        assert_eq!(source.describe(), crate::DEFAULT_SOURCE_URL);
    }
}

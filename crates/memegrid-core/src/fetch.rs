use crate::error::{FetchError, LoadError};
use crate::models::{decode, MemeRecord};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://api.imgflip.com/get_memes";

/// Anything that can produce the raw meme list body.
#[async_trait]
pub trait MemeSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError>;
}

/// Single-shot GET against the meme endpoint. No retries, no custom timeout.
pub struct HttpFetcher {
    client: Client,
    endpoint: String,
}

impl HttpFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("memegrid/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parse_endpoint(&self) -> Result<Url, FetchError> {
        let invalid = |reason: String| FetchError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };

        let url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl MemeSource for HttpFetcher {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let url = self.parse_endpoint()?;
        debug!(%url, "fetching meme list");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "meme endpoint returned an error status");
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        debug!(len = body.len(), "meme list received");
        Ok(body.to_vec())
    }
}

/// Fetch then decode. Either stage failing fails the whole load.
pub async fn load_memes(source: &dyn MemeSource) -> Result<Vec<MemeRecord>, LoadError> {
    let bytes = source.fetch().await?;
    let memes = decode(&bytes)?;
    Ok(memes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response and returns the endpoint URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/get_memes", addr)
    }

    #[test]
    fn default_endpoint_is_imgflip() {
        assert_eq!(HttpFetcher::default().endpoint(), DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn rejects_malformed_endpoint() {
        let fetcher = HttpFetcher::new("not a url");
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidEndpoint { .. }));
    }

    #[tokio::test]
    async fn rejects_non_http_scheme() {
        let fetcher = HttpFetcher::new("ftp://api.imgflip.com/get_memes");
        match fetcher.fetch().await {
            Err(FetchError::InvalidEndpoint { reason, .. }) => assert!(reason.contains("ftp")),
            other => panic!("expected InvalidEndpoint, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn returns_body_bytes() {
        let body = r#"{"success":true,"data":{"memes":[]}}"#;
        let endpoint = serve_once("200 OK", body).await;

        let bytes = HttpFetcher::new(endpoint).fetch().await.unwrap();
        assert_eq!(bytes, body.as_bytes());
    }

    #[tokio::test]
    async fn error_status_is_fetch_error() {
        let endpoint = serve_once("503 Service Unavailable", "busy").await;

        let err = HttpFetcher::new(endpoint).fetch().await.unwrap_err();
        match err {
            FetchError::Status(status) => assert_eq!(status.as_u16(), 503),
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_request_error() {
        // Bind then drop so the port is known to be closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpFetcher::new(format!("http://{}/get_memes", addr))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }

    #[tokio::test]
    async fn load_memes_decodes_served_body() {
        let endpoint = serve_once(
            "200 OK",
            r#"{"success":true,"data":{"memes":[{"id":"1","name":"Fry","url":"http://x/1.jpg","width":10,"height":10,"box_count":2}]}}"#,
        )
        .await;

        let memes = load_memes(&HttpFetcher::new(endpoint)).await.unwrap();
        assert_eq!(memes.len(), 1);
        assert_eq!(memes[0].name, "Fry");
    }

    #[tokio::test]
    async fn load_memes_reports_decode_failure() {
        let endpoint = serve_once("200 OK", "not json").await;

        let err = load_memes(&HttpFetcher::new(endpoint)).await.unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }
}

use crate::ScrapeError;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Build the HTTP client shared by a scrape run.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent("songbook/0.1 (lyrics scraping tool)")
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}

/// GET a page and decode the body as text.
///
/// One attempt, no retries; a non-success status is an error.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to fetch page")?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::BadStatus {
            status,
            url: url.to_string(),
        }
        .into());
    }

    response.text().await.context("Failed to read response body")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_page_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hi</html>"))
            .mount(&server)
            .await;

        let client = build_client(Duration::from_secs(5)).unwrap();
        let body = fetch_page(&client, &format!("{}/page", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html>hi</html>");
    }

    #[tokio::test]
    async fn test_fetch_page_bad_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_client(Duration::from_secs(5)).unwrap();
        let err = fetch_page(&client, &format!("{}/missing", server.uri()))
            .await
            .unwrap_err();

        match err.downcast_ref::<ScrapeError>() {
            Some(ScrapeError::BadStatus { status, .. }) => {
                assert_eq!(status.as_u16(), 404);
            }
            other => panic!("expected BadStatus, got {other:?}"),
        }
    }
}

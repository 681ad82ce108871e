use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' not successful, status code: {status}")]
    RequestNotOk { url: String, status: StatusCode },
}

/// Fetches a single page of search results for a query
#[async_trait]
pub trait PageFetcher<P> {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<P>;
}

/// Turn a non-success response into `Error::RequestNotOk`, logging its body
pub(crate) async fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = resp.url().to_string();
    let error_body = resp.text().await;
    log::error!(
        "request not successful, status code: {}, url: {}, error resp body: {:?}",
        status,
        url,
        error_body,
    );
    Err(Error::RequestNotOk { url, status })
}

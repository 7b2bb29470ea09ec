use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, COOKIE};
use reqwest::{Client as AsyncClient, Method, Request, Response, StatusCode, Url};

use crate::config::{SESSION_COOKIE, VERSION};

/// Sends a single request. Swapped out in tests so nothing hits the network.
#[async_trait]
pub trait Requester: std::fmt::Debug + Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl Requester for AsyncClient {
    async fn execute(&self, request: Request) -> Result<Response> {
        AsyncClient::execute(self, request)
            .await
            .map_err(Into::into)
    }
}

/// A response with its body already read.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[derive(Debug)]
pub struct HttpClient {
    requester: Box<dyn Requester>,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let ua = format!(
            "rhm/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        let client = AsyncClient::builder()
            .user_agent(ua)
            .build()
            .context("Failed to build http client")?;

        Ok(Self::with_requester(client))
    }

    pub fn with_requester<R>(requester: R) -> Self
    where
        R: Requester + 'static,
    {
        Self {
            requester: Box::new(requester),
        }
    }

    /// Builds a `GET` request carrying the session token as the auth cookie.
    pub fn session_get(url: Url, auth: &str) -> Result<Request> {
        let cookie = HeaderValue::from_str(&format!("{SESSION_COOKIE}={auth}"))
            .context("could not create new request object: invalid session token")?;

        let mut request = Request::new(Method::GET, url);
        request.headers_mut().insert(COOKIE, cookie);

        Ok(request)
    }

    pub async fn send(&self, request: Request) -> Result<RawResponse> {
        log::debug!("request: {} {}", request.method(), request.url());

        #[cfg(debug_assertions)]
        let now = tokio::time::Instant::now();

        let response = self
            .requester
            .execute(request)
            .await
            .context("failed to make request")?;

        #[cfg(debug_assertions)]
        log::debug!("response in: {:#?}", now.elapsed());

        let status = response.status();

        // the body is released when `response` is dropped, on every path
        let body = response
            .bytes()
            .await
            .context("failed to read response body")?;

        log::debug!("response: {} ({} bytes)", status, body.len());

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

//! HTTP client shared by the role wrappers

use crate::{
    envelope::Envelope,
    error::{ClassifiedError, Failure, classify},
    types::Role,
};
use reqwest::{Client, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use std::time::{Duration, Instant};

/// Client bound to one role prefix (`http://host/theaters`, ...)
///
/// Session cookies live in the underlying `reqwest::Client`; clones and
/// [`ApiClient::for_role`] share the same cookie jar.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    role: Role,
}

impl ApiClient {
    /// Create a client for `role`, rooted at `base_url` + `prefix`
    ///
    /// # Errors
    ///
    /// Returns [`ClassifiedError::Generic`] if the TLS backend cannot be initialised.
    pub fn new(
        base_url: &str,
        prefix: &str,
        role: Role,
        timeout: Duration,
    ) -> Result<Self, ClassifiedError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifiedError::Generic(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            base_url: join(base_url, prefix),
            role,
        })
    }

    /// Another role prefix on the same host, sharing cookies
    #[must_use]
    pub fn for_role(&self, base_url: &str, prefix: &str, role: Role) -> Self {
        Self {
            client: self.client.clone(),
            base_url: join(base_url, prefix),
            role,
        }
    }

    /// Role this client acts for
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Root every path is appended to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET path`
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ClassifiedError> {
        self.execute("GET", path, self.client.get(self.url(path))).await
    }

    /// `GET path` with query parameters
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<Envelope<T>, ClassifiedError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute("GET", path, self.client.get(self.url(path)).query(query))
            .await
    }

    /// `POST path` with a JSON body
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>, ClassifiedError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute("POST", path, self.client.post(self.url(path)).json(body))
            .await
    }

    /// `PUT path` with a JSON body
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>, ClassifiedError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute("PUT", path, self.client.put(self.url(path)).json(body))
            .await
    }

    /// `PATCH path` with a JSON body
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>, ClassifiedError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute("PATCH", path, self.client.patch(self.url(path)).json(body))
            .await
    }

    /// `DELETE path`
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ClassifiedError> {
        self.execute("DELETE", path, self.client.delete(self.url(path)))
            .await
    }

    /// Single attempt; every failure leaves as a [`ClassifiedError`]
    #[tracing::instrument(skip(self, request), fields(role = %self.role))]
    async fn execute<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, ClassifiedError> {
        let start = Instant::now();
        let result = self.round_trip(request).await;

        metrics::histogram!("api.request.duration_seconds", "role" => self.role.as_str())
            .record(start.elapsed().as_secs_f64());

        let outcome = match &result {
            Ok(_) => "success",
            Err(ClassifiedError::Http { .. }) => "error",
            Err(_) => "transport",
        };
        metrics::counter!("api.requests.total", "role" => self.role.as_str(), "outcome" => outcome)
            .increment(1);

        match &result {
            Ok(_) => tracing::debug!("Request succeeded"),
            Err(error) => tracing::warn!(%error, outcome, "Request failed"),
        }

        result
    }

    async fn round_trip<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, ClassifiedError> {
        let response = request
            .send()
            .await
            .map_err(|e| classify(Failure::Transport(&e.to_string())))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Envelope<T>>()
                .await
                .map_err(|e| classify(Failure::Transport(&format!("Response parsing failed: {e}"))));
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify(Failure::Response {
            status: status.as_u16(),
            body: &body,
        }))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

fn join(base_url: &str, prefix: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{prefix}")
    }
}

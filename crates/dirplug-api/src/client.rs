// Configuration API HTTP client
//
// Wraps `reqwest::Client` with URL construction under `/config/v1/`,
// per-request credentials, and SCIM error mapping. Endpoint methods live
// in separate files (`plugins.rs`) as inherent impls to keep this module
// focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::ErrorResponse;

/// Path under the server root where the configuration API is mounted.
const API_PREFIX: &str = "config/v1";

/// Async client for the directory server's configuration API.
///
/// Stateless apart from the connection pool: every request carries the
/// configured credentials and nothing is cached between calls.
pub struct ConfigClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl ConfigClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client from a server URL, credentials, and transport config.
    ///
    /// `server` is the HTTPS root (e.g. `https://ds.example.com:1443`);
    /// the `/config/v1/` prefix is appended unless already present.
    pub fn new(
        server: &str,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(http, server, credentials)
    }

    /// Wrap an existing `reqwest::Client` (tests, shared pools).
    pub fn with_client(
        http: reqwest::Client,
        server: &str,
        credentials: Credentials,
    ) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(server)?;
        debug!(base = %base_url, auth = %credentials.describe(), "configuration API client ready");
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Build the base URL ending in `/config/v1/`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with(API_PREFIX) {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/{API_PREFIX}/"));
        }

        Ok(url)
    }

    /// The normalized API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Append path segments to the base URL, percent-encoding each one.
    ///
    /// Object ids may contain spaces and slashes (`"7-Bit Clean"`), so they
    /// must never be joined as raw path text.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");
        let builder = self.credentials.apply(self.http.get(url));
        let resp = builder.send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("POST {url}");
        let builder = self.credentials.apply(self.http.post(url).json(body));
        let resp = builder.send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("PATCH {url}");
        let builder = self.credentials.apply(self.http.patch(url).json(body));
        let resp = builder.send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {url}");
        let builder = self.credentials.apply(self.http.delete(url));
        let resp = builder.send().await?;
        Self::handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::error_from_response(resp).await);
        }

        let body = resp.text().await?;
        trace!(bytes = body.len(), "response body received");

        serde_json::from_str(&body).map_err(|e| {
            Error::Deserialization {
                message: format!("{e} (body preview: {:?})", preview(&body)),
                body: body.clone(),
            }
        })
    }

    async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(resp).await)
        }
    }

    /// Map a non-success response to an [`Error`], preferring the SCIM
    /// `detail` field over the raw body.
    async fn error_from_response(resp: reqwest::Response) -> Error {
        let status = resp.status();
        let path = resp.url().path().to_owned();
        let body = resp.text().await.unwrap_or_default();

        let detail = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.detail)
            .unwrap_or_else(|| preview(&body).to_owned());

        match status {
            reqwest::StatusCode::UNAUTHORIZED => Error::Authentication { message: detail },
            reqwest::StatusCode::FORBIDDEN => Error::Forbidden { message: detail },
            reqwest::StatusCode::NOT_FOUND => Error::NotFound { path },
            _ => Error::Api {
                status: status.as_u16(),
                detail,
            },
        }
    }
}

/// First 200 characters of a body, cut on a char boundary.
fn preview(body: &str) -> &str {
    body.char_indices().nth(200).map_or(body, |(i, _)| &body[..i])
}

//
//  transifex
//  api/connector.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Connector Base
//!
//! This module provides the shared request plumbing every connector is built
//! on: URL assembly against the configured base host, HTTP Basic
//! authentication from the client options, request dispatch with response
//! classification, and the scoped base-URL swap used by organization-style
//! endpoints.
//!
//! ## URL assembly
//!
//! Paths are literal strings concatenated onto the `base_uri` option. The
//! Transifex API is inconsistent about trailing slashes by design (the
//! resource list path has none, most detail paths do), and some query
//! strings carry bare tokens such as `details` with no value, so the path
//! including its query is carried verbatim rather than normalized.
//!
//! ## Organization endpoints
//!
//! Two operations (`Organizations::get_organizations` and
//! `Projects::get_organization_projects`) are served from a different host.
//! [`OrgEndpointGuard`] overwrites the `base_uri` option with the
//! organization host for the duration of one call and restores the previous
//! value when dropped, so the swap is unwound on success, on error
//! propagation and on future cancellation alike.
//!
//! ## Caller contract
//!
//! The swap is not reentrant-safe: interleaving calls on one connector
//! instance while an organization-scoped call is in flight can observe the
//! swapped host. Callers are expected to keep at most one call in flight per
//! connector instance at a time.

use reqwest::{Client, Method, StatusCode};
use url::Url;

use crate::error::Error;
use crate::options::{SharedOptions, ORGANIZATION_API_URI};

use super::response::ApiResponse;

/// Body attached to an outgoing API request.
///
/// Metadata-only operations send JSON; content and translation uploads send
/// a multipart form carrying the file. Read-style operations send nothing.
#[derive(Debug)]
pub enum RequestBody {
    /// No body. The request carries no `Content-Type` header.
    None,

    /// A JSON-encoded body with `Content-Type: application/json`.
    Json(serde_json::Value),

    /// A multipart form, used when content is sourced from a file.
    Multipart(reqwest::multipart::Form),
}

/// Shared request-building and response-classification logic.
///
/// Each connector owns one `ApiConnector`, pairing the injected HTTP client
/// with the shared option store. The connector has no state of its own
/// beyond those two handles; nothing persists across calls.
#[derive(Debug, Clone)]
pub struct ApiConnector {
    client: Client,
    options: SharedOptions,
}

impl ApiConnector {
    /// Pairs an HTTP client with a shared option store.
    pub fn new(client: Client, options: SharedOptions) -> Self {
        Self { client, options }
    }

    /// The shared option store backing this connector.
    pub fn options(&self) -> &SharedOptions {
        &self.options
    }

    /// Builds the full request URL for `path`.
    ///
    /// The base URI is read from the options at call time, not cached at
    /// construction, so a prior mutation (including an active
    /// [`OrgEndpointGuard`]) is honored. `path` may carry a query string;
    /// it is appended verbatim.
    pub fn build_url(&self, path: &str) -> Result<Url, Error> {
        let base = self
            .options
            .get_str("base_uri")
            .unwrap_or_else(|| crate::options::DEFAULT_BASE_URI.to_owned());

        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Issues a GET request, expecting a 200 response.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, Error> {
        self.request(Method::GET, path, RequestBody::None, StatusCode::OK)
            .await
    }

    /// Issues a POST request with `body`, expecting a 201 response.
    pub async fn post(&self, path: &str, body: RequestBody) -> Result<ApiResponse, Error> {
        self.request(Method::POST, path, body, StatusCode::CREATED)
            .await
    }

    /// Issues a PUT request with `body`, expecting a 200 response.
    pub async fn put(&self, path: &str, body: RequestBody) -> Result<ApiResponse, Error> {
        self.request(Method::PUT, path, body, StatusCode::OK).await
    }

    /// Issues a DELETE request, expecting a 204 response.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, Error> {
        self.request(Method::DELETE, path, RequestBody::None, StatusCode::NO_CONTENT)
            .await
    }

    /// Issues a request and classifies the response against `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when the API credentials are
    /// not set, [`Error::Url`] when the base URI and path do not form a
    /// valid URL, and [`Error::Transport`] when the round trip fails. An
    /// unexpected HTTP status is not an error; it is reported through
    /// [`ApiResponse::is_success`].
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        expected: StatusCode,
    ) -> Result<ApiResponse, Error> {
        let url = self.build_url(path)?;
        let (username, password) = self.credentials()?;

        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .basic_auth(&username, Some(&password));

        match body {
            RequestBody::None => {}
            RequestBody::Json(value) => request = request.json(&value),
            RequestBody::Multipart(form) => request = request.multipart(form),
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status != expected {
            tracing::debug!("unexpected API status {} (wanted {})", status, expected);
        }

        Ok(ApiResponse::new(status, text, expected))
    }

    fn credentials(&self) -> Result<(String, String), Error> {
        let username = self
            .options
            .get_str("api.username")
            .filter(|value| !value.is_empty());
        let password = self
            .options
            .get_str("api.password")
            .filter(|value| !value.is_empty());

        match (username, password) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(Error::InvalidConfiguration(
                "missing API credentials, set the api.username and api.password options"
                    .to_string(),
            )),
        }
    }
}

/// Scoped swap of the `base_uri` option to the organization API host.
///
/// Constructing the guard overwrites `base_uri` with the `api.url` option
/// (the production organization host when unset) and remembers the previous
/// value. Dropping the guard restores it, so the swap is unwound on every
/// exit path out of the call that holds it.
///
/// The guard is crate-internal: connectors hold one across the single
/// organization-scoped request they issue.
pub(crate) struct OrgEndpointGuard {
    options: SharedOptions,
    previous: Option<serde_json::Value>,
}

impl OrgEndpointGuard {
    pub(crate) fn swap(options: &SharedOptions) -> Self {
        let host = options
            .get_str("api.url")
            .unwrap_or_else(|| ORGANIZATION_API_URI.to_owned());
        let previous = options.set("base_uri", host);

        Self {
            options: options.clone(),
            previous,
        }
    }
}

impl Drop for OrgEndpointGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => {
                self.options.set("base_uri", value);
            }
            None => {
                self.options.remove("base_uri");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Options, DEFAULT_BASE_URI};

    fn connector_with(options: Options) -> ApiConnector {
        ApiConnector::new(Client::new(), SharedOptions::new(options))
    }

    #[test]
    fn build_url_concatenates_base_and_path() {
        let connector = connector_with(Options::default());

        let url = connector.build_url("/api/2/formats").unwrap();

        assert_eq!(url.as_str(), "https://www.transifex.com/api/2/formats");
    }

    #[test]
    fn build_url_keeps_bare_query_tokens() {
        let connector = connector_with(Options::default());

        let url = connector
            .build_url("/api/2/project/mautic/resource/data/translation/en_US?mode=default&file")
            .unwrap();

        assert_eq!(url.query(), Some("mode=default&file"));
    }

    #[test]
    fn build_url_reads_the_base_uri_at_call_time() {
        let connector = connector_with(Options::default());
        connector.options().set("base_uri", "https://example.org");

        let url = connector.build_url("/api/2/projects/").unwrap();

        assert_eq!(url.as_str(), "https://example.org/api/2/projects/");
    }

    #[test]
    fn missing_credentials_fail_before_any_request() {
        let connector = connector_with(Options::default());

        let error = connector.credentials().unwrap_err();

        assert!(matches!(error, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn empty_credentials_are_treated_as_missing() {
        let mut options = Options::default();
        options.set("api.username", "translator");
        options.set("api.password", "");
        let connector = connector_with(options);

        assert!(connector.credentials().is_err());
    }

    #[test]
    fn guard_swaps_and_restores_the_base_uri() {
        let options = SharedOptions::default();

        {
            let _guard = OrgEndpointGuard::swap(&options);
            assert_eq!(
                options.get_str("base_uri").as_deref(),
                Some(ORGANIZATION_API_URI)
            );
        }

        assert_eq!(options.get_str("base_uri").as_deref(), Some(DEFAULT_BASE_URI));
    }

    #[test]
    fn guard_restores_on_panic() {
        let options = SharedOptions::default();
        let for_panic = options.clone();

        let result = std::panic::catch_unwind(move || {
            let _guard = OrgEndpointGuard::swap(&for_panic);
            panic!("request blew up");
        });

        assert!(result.is_err());
        assert_eq!(options.get_str("base_uri").as_deref(), Some(DEFAULT_BASE_URI));
    }

    #[test]
    fn guard_honors_a_custom_organization_host() {
        let options = SharedOptions::default();
        options.set("api.url", "http://127.0.0.1:8080");

        let _guard = OrgEndpointGuard::swap(&options);

        assert_eq!(
            options.get_str("base_uri").as_deref(),
            Some("http://127.0.0.1:8080")
        );
    }

    #[test]
    fn guard_removes_the_key_when_it_was_unset() {
        let options = SharedOptions::new(Options::new());

        {
            let _guard = OrgEndpointGuard::swap(&options);
            assert!(options.get_str("base_uri").is_some());
        }

        assert!(options.get_str("base_uri").is_none());
    }
}

//
//  transifex
//  connector/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Project management.
//!
//! # Overview
//!
//! Projects are the top-level containers in Transifex; resources, languages
//! and translations all hang off a project slug. This connector covers
//! project CRUD on the default host plus the organization project listing
//! on the organization host.
//!
//! # Preconditions
//!
//! Creating a project requires either a `repository_url` or a `license` in
//! the options; the service refuses a project with neither, so the call
//! fails locally before any request. License values form a closed set, see
//! [`License`]. Updating a project with an entirely empty option set fails
//! with [`Error::NothingToSend`], since there is nothing to transmit.

use std::fmt;
use std::str::FromStr;

use reqwest::Client;
use serde::Serialize;

use crate::api::{ApiConnector, ApiResponse, OrgEndpointGuard, RequestBody};
use crate::error::Error;
use crate::options::SharedOptions;

/// The license identifiers the service accepts for a project.
///
/// Values arriving from untyped input can be checked at runtime through
/// [`FromStr`]; anything outside this set fails with
/// [`Error::InvalidConfiguration`] before any request is built.
///
/// # Example
///
/// ```rust
/// use transifex::connector::License;
///
/// let license: License = "other_open_source".parse().unwrap();
/// assert_eq!(license, License::OtherOpenSource);
///
/// assert!("failure".parse::<License>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum License {
    /// A closed, proprietary project.
    Proprietary,

    /// A permissive open source license (MIT, BSD, Apache and friends).
    PermissiveOpenSource,

    /// Any other open source license.
    OtherOpenSource,
}

impl FromStr for License {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "proprietary" => Ok(Self::Proprietary),
            "permissive_open_source" => Ok(Self::PermissiveOpenSource),
            "other_open_source" => Ok(Self::OtherOpenSource),
            other => Err(Error::InvalidConfiguration(format!(
                "the license {other} is not valid, accepted licenses are \"proprietary\", \
                 \"permissive_open_source\" and \"other_open_source\""
            ))),
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proprietary => f.write_str("proprietary"),
            Self::PermissiveOpenSource => f.write_str("permissive_open_source"),
            Self::OtherOpenSource => f.write_str("other_open_source"),
        }
    }
}

/// Optional parameters accepted when creating or updating a project.
///
/// Every field is optional; absent fields are left out of the request body.
/// `create_project` additionally requires that `repository_url` or `license`
/// is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectOptions {
    /// Extended project description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    /// Whether the project is hidden from the public catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    /// Project homepage URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    /// URL of the translator instructions document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans_instructions: Option<String>,

    /// Comma-separated list of tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// Comma-separated list of maintainer usernames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainers: Option<String>,

    /// Name of the translation team.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    /// Whether translators may join the project without an invitation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_join: Option<bool>,

    /// Project license, one of the accepted [`License`] values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,

    /// Whether untranslated strings are filled from the source language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_up_resources: Option<bool>,

    /// URL of the source repository, required for open source projects
    /// without a license entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,

    /// Slug of the owning organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Whether the project is archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    /// Numeric project type identifier.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<u8>,
}

impl ProjectOptions {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Serialize)]
struct CreateProjectPayload<'a> {
    name: &'a str,
    slug: &'a str,
    description: &'a str,
    source_language_code: &'a str,
    #[serde(flatten)]
    options: &'a ProjectOptions,
}

/// Connector for the project API.
#[derive(Debug, Clone)]
pub struct Projects {
    pub(crate) api: ApiConnector,
}

impl Projects {
    /// Creates a projects connector from an HTTP client and shared options.
    pub fn new(client: Client, options: SharedOptions) -> Self {
        Self {
            api: ApiConnector::new(client, options),
        }
    }

    /// Creates a new project.
    ///
    /// Issues `POST /api/2/projects/` and expects a 201 response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] without issuing a request
    /// when the options carry neither a `repository_url` nor a `license`.
    pub async fn create_project(
        &self,
        name: &str,
        slug: &str,
        description: &str,
        source_language: &str,
        options: &ProjectOptions,
    ) -> Result<ApiResponse, Error> {
        if options.repository_url.is_none() && options.license.is_none() {
            return Err(Error::InvalidConfiguration(
                "either a repository URL or a license must be provided to create a project"
                    .to_string(),
            ));
        }

        let payload = CreateProjectPayload {
            name,
            slug,
            description,
            source_language_code: source_language,
            options,
        };

        self.api
            .post(
                "/api/2/projects/",
                RequestBody::Json(serde_json::to_value(&payload)?),
            )
            .await
    }

    /// Deletes a project.
    ///
    /// Issues `DELETE /api/2/project/{slug}` and expects a 204 response.
    pub async fn delete_project(&self, slug: &str) -> Result<ApiResponse, Error> {
        self.api.delete(&format!("/api/2/project/{slug}")).await
    }

    /// Retrieves the projects belonging to an organization.
    ///
    /// Issues `GET /organizations/{organization}/projects/` against the
    /// organization host and expects a 200 response. The `base_uri` option
    /// is restored before this method returns, whatever the outcome.
    pub async fn get_organization_projects(
        &self,
        organization: &str,
    ) -> Result<ApiResponse, Error> {
        let _guard = OrgEndpointGuard::swap(self.api.options());

        self.api
            .get(&format!("/organizations/{organization}/projects/"))
            .await
    }

    /// Retrieves details about a project.
    ///
    /// When `details` is set the bare `details` token is appended to the
    /// query string and the API includes extended attributes.
    pub async fn get_project(&self, slug: &str, details: bool) -> Result<ApiResponse, Error> {
        let mut path = format!("/api/2/project/{slug}/");

        if details {
            path.push_str("?details");
        }

        self.api.get(&path).await
    }

    /// Retrieves the projects the authenticated user can see.
    pub async fn get_projects(&self) -> Result<ApiResponse, Error> {
        self.api.get("/api/2/projects/").await
    }

    /// Updates a project's attributes.
    ///
    /// Issues `PUT /api/2/project/{slug}/` and expects a 200 response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingToSend`] without issuing a request when
    /// `options` is entirely empty.
    pub async fn update_project(
        &self,
        slug: &str,
        options: &ProjectOptions,
    ) -> Result<ApiResponse, Error> {
        if options.is_empty() {
            return Err(Error::NothingToSend);
        }

        self.api
            .put(
                &format!("/api/2/project/{slug}/"),
                RequestBody::Json(serde_json::to_value(options)?),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Options, DEFAULT_BASE_URI};
    use mockito::Matcher;
    use serde_json::json;

    fn connector(server: &mockito::ServerGuard) -> Projects {
        let mut options = Options::default();
        options.set("api.username", "translator");
        options.set("api.password", "secret");
        options.set("base_uri", server.url());
        options.set("api.url", server.url());

        Projects::new(Client::new(), SharedOptions::new(options))
    }

    fn full_options() -> ProjectOptions {
        ProjectOptions {
            long_description: Some("My test project".to_string()),
            private: Some(true),
            homepage: Some("http://www.example.com".to_string()),
            trans_instructions: Some("http://www.example.com/instructions.html".to_string()),
            tags: Some("joomla, mautic".to_string()),
            maintainers: Some("joomla".to_string()),
            team: Some("translators".to_string()),
            auto_join: Some(true),
            license: Some(License::OtherOpenSource),
            fill_up_resources: Some(false),
            repository_url: Some("http://www.example.com".to_string()),
            organization: Some("mautic".to_string()),
            archived: Some(false),
            project_type: Some(1),
        }
    }

    #[tokio::test]
    async fn create_project_posts_the_full_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/2/projects/")
            .match_body(Matcher::PartialJson(json!({
                "name": "Mautic Transifex",
                "slug": "mautic-transifex",
                "description": "Test Project",
                "source_language_code": "en_US",
                "license": "other_open_source",
                "type": 1,
            })))
            .with_status(201)
            .create_async()
            .await;

        let response = connector(&server)
            .create_project(
                "Mautic Transifex",
                "mautic-transifex",
                "Test Project",
                "en_US",
                &full_options(),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn create_project_requires_a_license_or_repository_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/2/projects/")
            .expect(0)
            .create_async()
            .await;

        let error = connector(&server)
            .create_project(
                "Mautic Transifex",
                "mautic-transifex",
                "Test Project",
                "en_US",
                &ProjectOptions::default(),
            )
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(error, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn license_rejects_values_outside_the_accepted_set() {
        let error = "failure".parse::<License>().unwrap_err();

        assert!(matches!(error, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn license_parses_every_accepted_value() {
        assert_eq!("proprietary".parse::<License>().unwrap(), License::Proprietary);
        assert_eq!(
            "permissive_open_source".parse::<License>().unwrap(),
            License::PermissiveOpenSource
        );
        assert_eq!(
            "other_open_source".parse::<License>().unwrap(),
            License::OtherOpenSource
        );
    }

    #[tokio::test]
    async fn delete_project_expects_no_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/2/project/mautic-transifex")
            .with_status(204)
            .create_async()
            .await;

        let response = connector(&server)
            .delete_project("mautic-transifex")
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn get_project_appends_the_bare_details_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/2/project/mautic-transifex/")
            .match_query(Matcher::Exact("details".to_string()))
            .with_status(200)
            .create_async()
            .await;

        let response = connector(&server)
            .get_project("mautic-transifex", true)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn get_projects_lists_the_catalog() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/2/projects/")
            .with_status(200)
            .create_async()
            .await;

        connector(&server).get_projects().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn organization_projects_swap_and_restore_the_host() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/organizations/mautic/projects/")
            .with_status(200)
            .create_async()
            .await;

        let projects = connector(&server);
        projects.api.options().set("base_uri", DEFAULT_BASE_URI);

        let response = projects.get_organization_projects("mautic").await.unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
        assert_eq!(
            projects.api.options().get_str("base_uri").as_deref(),
            Some(DEFAULT_BASE_URI),
            "the base URI must be restored after the organization call"
        );
    }

    #[tokio::test]
    async fn organization_call_followed_by_default_call_uses_each_host_once() {
        let mut server = mockito::Server::new_async().await;
        let organization = server
            .mock("GET", "/organizations/mautic/projects/")
            .with_status(200)
            .create_async()
            .await;
        let catalog = server
            .mock("GET", "/api/2/projects/")
            .with_status(200)
            .create_async()
            .await;

        let projects = connector(&server);
        projects.get_organization_projects("mautic").await.unwrap();
        projects.get_projects().await.unwrap();

        organization.assert_async().await;
        catalog.assert_async().await;
    }

    #[tokio::test]
    async fn base_uri_is_restored_when_the_transport_fails() {
        let server = mockito::Server::new_async().await;
        let projects = connector(&server);
        // Nothing listens on port 9; the connection is refused before any
        // HTTP exchange happens.
        projects.api.options().set("api.url", "http://127.0.0.1:9");

        let error = projects.get_organization_projects("mautic").await.unwrap_err();

        assert!(matches!(error, Error::Transport(_)));
        assert_eq!(
            projects.api.options().get_str("base_uri").as_deref(),
            Some(server.url().as_str())
        );
    }

    #[tokio::test]
    async fn update_project_puts_only_the_supplied_options() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/2/project/mautic-transifex/")
            .match_body(Matcher::Json(json!({
                "long_description": "My test project",
            })))
            .with_status(200)
            .create_async()
            .await;

        let options = ProjectOptions {
            long_description: Some("My test project".to_string()),
            ..ProjectOptions::default()
        };

        let response = connector(&server)
            .update_project("mautic-transifex", &options)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn update_project_with_no_options_is_a_distinct_noop_error() {
        let server = mockito::Server::new_async().await;

        let error = connector(&server)
            .update_project("mautic-transifex", &ProjectOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(error, Error::NothingToSend));
    }
}

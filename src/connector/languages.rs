//
//  transifex
//  connector/languages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Project languages and their contributor teams.
//!
//! A language registered on a project carries three contributor teams:
//! coordinators, reviewers and translators. Creating or updating a language
//! requires at least one coordinator; the team update operations require at
//! least one user. An empty list fails before any request is issued.
//!
//! The create and team update operations accept a `skip_invalid_username`
//! flag. When set, it is appended to the query string as a bare token and
//! the API ignores unknown usernames instead of rejecting the whole call.

use reqwest::Client;
use serde::Serialize;

use crate::api::{ApiConnector, ApiResponse, RequestBody};
use crate::error::Error;
use crate::options::SharedOptions;

/// Optional parameters accepted when creating or updating a language.
///
/// Every field is optional; absent fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LanguageOptions {
    /// Usernames to register as translators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translators: Option<Vec<String>>,

    /// Usernames to register as reviewers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewers: Option<Vec<String>>,

    /// Mailing list address for the language team.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
}

#[derive(Serialize)]
struct CreateLanguagePayload<'a> {
    language_code: &'a str,
    coordinators: &'a [String],
    #[serde(flatten)]
    options: &'a LanguageOptions,
}

#[derive(Serialize)]
struct UpdateLanguagePayload<'a> {
    coordinators: &'a [String],
    #[serde(flatten)]
    options: &'a LanguageOptions,
}

/// Connector for the language API of a project.
#[derive(Debug, Clone)]
pub struct Languages {
    pub(crate) api: ApiConnector,
}

impl Languages {
    /// Creates a languages connector from an HTTP client and shared options.
    pub fn new(client: Client, options: SharedOptions) -> Self {
        Self {
            api: ApiConnector::new(client, options),
        }
    }

    /// Registers a new language on a project.
    ///
    /// Issues `POST /api/2/project/{project}/languages/` and expects a 201
    /// response. The `skip_invalid_username` flag is appended to the query
    /// string as a bare token when set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] without issuing a request
    /// when `coordinators` is empty.
    pub async fn create_language(
        &self,
        project: &str,
        language_code: &str,
        coordinators: &[String],
        options: &LanguageOptions,
        skip_invalid_username: bool,
    ) -> Result<ApiResponse, Error> {
        require_contributors(coordinators, "coordinator")?;

        let mut path = format!("/api/2/project/{project}/languages/");

        if skip_invalid_username {
            path.push_str("?skip_invalid_username");
        }

        let payload = CreateLanguagePayload {
            language_code,
            coordinators,
            options,
        };

        self.api
            .post(&path, RequestBody::Json(serde_json::to_value(&payload)?))
            .await
    }

    /// Removes a language from a project.
    ///
    /// Issues `DELETE /api/2/project/{project}/language/{language}/` and
    /// expects a 204 response.
    pub async fn delete_language(
        &self,
        project: &str,
        language: &str,
    ) -> Result<ApiResponse, Error> {
        self.api
            .delete(&format!("/api/2/project/{project}/language/{language}/"))
            .await
    }

    /// Retrieves the coordinators of a language.
    pub async fn get_coordinators(
        &self,
        project: &str,
        language: &str,
    ) -> Result<ApiResponse, Error> {
        self.api.get(&team_path(project, language, "coordinators")).await
    }

    /// Retrieves details about a language registered on a project.
    ///
    /// When `details` is set the bare `details` token is appended to the
    /// query string and the API includes extended attributes.
    pub async fn get_language(
        &self,
        project: &str,
        language: &str,
        details: bool,
    ) -> Result<ApiResponse, Error> {
        let mut path = format!("/api/2/project/{project}/language/{language}/");

        if details {
            path.push_str("?details");
        }

        self.api.get(&path).await
    }

    /// Retrieves the languages registered on a project.
    pub async fn get_languages(&self, project: &str) -> Result<ApiResponse, Error> {
        self.api
            .get(&format!("/api/2/project/{project}/languages/"))
            .await
    }

    /// Retrieves the reviewers of a language.
    pub async fn get_reviewers(
        &self,
        project: &str,
        language: &str,
    ) -> Result<ApiResponse, Error> {
        self.api.get(&team_path(project, language, "reviewers")).await
    }

    /// Retrieves the translators of a language.
    pub async fn get_translators(
        &self,
        project: &str,
        language: &str,
    ) -> Result<ApiResponse, Error> {
        self.api.get(&team_path(project, language, "translators")).await
    }

    /// Replaces the coordinator team of a language.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] without issuing a request
    /// when `users` is empty.
    pub async fn update_coordinators(
        &self,
        project: &str,
        language: &str,
        users: &[String],
        skip_invalid_username: bool,
    ) -> Result<ApiResponse, Error> {
        self.update_team(project, language, "coordinators", users, skip_invalid_username)
            .await
    }

    /// Updates the attributes and coordinator team of a language.
    ///
    /// Issues `PUT /api/2/project/{project}/language/{language}/` and
    /// expects a 200 response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] without issuing a request
    /// when `coordinators` is empty.
    pub async fn update_language(
        &self,
        project: &str,
        language: &str,
        coordinators: &[String],
        options: &LanguageOptions,
    ) -> Result<ApiResponse, Error> {
        require_contributors(coordinators, "coordinator")?;

        let payload = UpdateLanguagePayload {
            coordinators,
            options,
        };

        self.api
            .put(
                &format!("/api/2/project/{project}/language/{language}/"),
                RequestBody::Json(serde_json::to_value(&payload)?),
            )
            .await
    }

    /// Replaces the reviewer team of a language.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] without issuing a request
    /// when `users` is empty.
    pub async fn update_reviewers(
        &self,
        project: &str,
        language: &str,
        users: &[String],
        skip_invalid_username: bool,
    ) -> Result<ApiResponse, Error> {
        self.update_team(project, language, "reviewers", users, skip_invalid_username)
            .await
    }

    /// Replaces the translator team of a language.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] without issuing a request
    /// when `users` is empty.
    pub async fn update_translators(
        &self,
        project: &str,
        language: &str,
        users: &[String],
        skip_invalid_username: bool,
    ) -> Result<ApiResponse, Error> {
        self.update_team(project, language, "translators", users, skip_invalid_username)
            .await
    }

    /// Shared plumbing for the three team update operations.
    ///
    /// The request body is the bare JSON array of usernames.
    async fn update_team(
        &self,
        project: &str,
        language: &str,
        team: &str,
        users: &[String],
        skip_invalid_username: bool,
    ) -> Result<ApiResponse, Error> {
        require_contributors(users, "user")?;

        let mut path = team_path(project, language, team);

        if skip_invalid_username {
            path.push_str("?skip_invalid_username");
        }

        self.api
            .put(&path, RequestBody::Json(serde_json::to_value(users)?))
            .await
    }
}

fn team_path(project: &str, language: &str, team: &str) -> String {
    format!("/api/2/project/{project}/language/{language}/{team}/")
}

fn require_contributors(users: &[String], kind: &str) -> Result<(), Error> {
    if users.is_empty() {
        return Err(Error::InvalidConfiguration(format!(
            "at least one {kind} must be provided"
        )));
    }

    Ok(())
}

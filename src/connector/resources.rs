//
//  transifex
//  connector/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Translatable resources and their content.
//!
//! # Overview
//!
//! A resource is one translatable content unit registered under a project,
//! identified by its slug and carrying an `i18n_type` naming the file format
//! the content is in (`INI`, `PO` and the rest of the set reported by
//! [`Formats`](crate::connector::Formats)).
//!
//! # Content sources
//!
//! Source content may be supplied inline as a string or as a path to a file
//! on the local filesystem, never both. Inline content travels in a JSON
//! body; a file travels as a multipart form. A file path is checked for
//! existence before any request is issued, and an unknown content type
//! indicator fails the same way; see
//! [`ContentType`](crate::connector::ContentType).

use reqwest::Client;
use serde::Serialize;

use crate::api::{ApiConnector, ApiResponse, RequestBody};
use crate::error::Error;
use crate::options::SharedOptions;

use super::{file_form, upload_body, ContentType};

/// Optional parameters accepted when creating a resource.
///
/// At most one of `content` and `file` may be supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceOptions {
    /// Whether the resource accepts translations.
    pub accept_translations: Option<bool>,

    /// Free-form category label.
    pub category: Option<String>,

    /// Translation priority of the resource.
    pub priority: Option<i32>,

    /// Source content supplied inline.
    pub content: Option<String>,

    /// Path to a file holding the source content.
    pub file: Option<std::path::PathBuf>,
}

#[derive(Serialize)]
struct CreateResourcePayload<'a> {
    slug: &'a str,
    name: &'a str,
    i18n_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    accept_translations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

/// Connector for the resource API of a project.
#[derive(Debug, Clone)]
pub struct Resources {
    pub(crate) api: ApiConnector,
}

impl Resources {
    /// Creates a resources connector from an HTTP client and shared options.
    pub fn new(client: Client, options: SharedOptions) -> Self {
        Self {
            api: ApiConnector::new(client, options),
        }
    }

    /// Registers a new resource under a project.
    ///
    /// Issues `POST /api/2/project/{project}/resources/` and expects a 201
    /// response. With a `file` option the body is a multipart form carrying
    /// the metadata fields and the file; otherwise it is a JSON document,
    /// including the inline `content` when supplied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when both `content` and
    /// `file` are supplied, and [`Error::MissingFile`] when the `file` path
    /// does not exist. Both checks precede any network traffic.
    pub async fn create_resource(
        &self,
        project: &str,
        name: &str,
        slug: &str,
        i18n_type: &str,
        options: &ResourceOptions,
    ) -> Result<ApiResponse, Error> {
        let body = match (&options.content, &options.file) {
            (Some(_), Some(_)) => {
                return Err(Error::InvalidConfiguration(
                    "resource content may be supplied inline or as a file, not both".to_string(),
                ))
            }
            (_, Some(file)) => {
                let mut form = file_form(file)
                    .await?
                    .text("slug", slug.to_owned())
                    .text("name", name.to_owned())
                    .text("i18n_type", i18n_type.to_owned());

                if let Some(accept_translations) = options.accept_translations {
                    form = form.text("accept_translations", accept_translations.to_string());
                }

                if let Some(category) = &options.category {
                    form = form.text("category", category.clone());
                }

                if let Some(priority) = options.priority {
                    form = form.text("priority", priority.to_string());
                }

                RequestBody::Multipart(form)
            }
            _ => {
                let payload = CreateResourcePayload {
                    slug,
                    name,
                    i18n_type,
                    accept_translations: options.accept_translations,
                    category: options.category.as_deref(),
                    priority: options.priority,
                    content: options.content.as_deref(),
                };

                RequestBody::Json(serde_json::to_value(&payload)?)
            }
        };

        self.api
            .post(&format!("/api/2/project/{project}/resources/"), body)
            .await
    }

    /// Removes a resource from a project.
    ///
    /// Issues `DELETE /api/2/project/{project}/resource/{resource}` and
    /// expects a 204 response.
    pub async fn delete_resource(
        &self,
        project: &str,
        resource: &str,
    ) -> Result<ApiResponse, Error> {
        self.api
            .delete(&format!("/api/2/project/{project}/resource/{resource}"))
            .await
    }

    /// Retrieves details about a resource.
    ///
    /// When `details` is set the bare `details` token is appended to the
    /// query string and the API includes extended attributes.
    pub async fn get_resource(
        &self,
        project: &str,
        resource: &str,
        details: bool,
    ) -> Result<ApiResponse, Error> {
        let mut path = format!("/api/2/project/{project}/resource/{resource}/");

        if details {
            path.push_str("?details");
        }

        self.api.get(&path).await
    }

    /// Retrieves the source content of a resource.
    pub async fn get_resource_content(
        &self,
        project: &str,
        resource: &str,
    ) -> Result<ApiResponse, Error> {
        self.api
            .get(&format!("/api/2/project/{project}/resource/{resource}/content/"))
            .await
    }

    /// Retrieves the resources registered under a project.
    ///
    /// This listing path carries no trailing slash; the service treats the
    /// slashed and unslashed forms differently.
    pub async fn get_resources(&self, project: &str) -> Result<ApiResponse, Error> {
        self.api
            .get(&format!("/api/2/project/{project}/resources"))
            .await
    }

    /// Replaces the source content of a resource.
    ///
    /// Issues `PUT /api/2/project/{project}/resource/{resource}/content/`
    /// and expects a 200 response. `content` is interpreted according to
    /// `content_type`: the payload itself, or a path to upload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFile`] when a file path does not exist. The
    /// check precedes any network traffic.
    pub async fn update_resource_content(
        &self,
        project: &str,
        resource: &str,
        content: &str,
        content_type: ContentType,
    ) -> Result<ApiResponse, Error> {
        let body = upload_body(content, content_type).await?;

        self.api
            .put(
                &format!("/api/2/project/{project}/resource/{resource}/content/"),
                body,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use mockito::Matcher;
    use serde_json::json;
    use std::io::Write;

    fn connector(server: &mockito::ServerGuard) -> Resources {
        let mut options = Options::default();
        options.set("api.username", "translator");
        options.set("api.password", "secret");
        options.set("base_uri", server.url());

        Resources::new(Client::new(), SharedOptions::new(options))
    }

    fn source_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "TEST=\"Test\"").unwrap();
        file
    }

    #[tokio::test]
    async fn create_resource_with_inline_content_posts_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/2/project/mautic-transifex/resources/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "slug": "mautic-transifex",
                "name": "Mautic Transifex Data",
                "i18n_type": "INI",
                "accept_translations": true,
                "category": "whatever",
                "priority": 3,
                "content": "Test=\"Test\"",
            })))
            .with_status(201)
            .create_async()
            .await;

        let options = ResourceOptions {
            accept_translations: Some(true),
            category: Some("whatever".to_string()),
            priority: Some(3),
            content: Some("Test=\"Test\"".to_string()),
            file: None,
        };

        let response = connector(&server)
            .create_resource(
                "mautic-transifex",
                "Mautic Transifex Data",
                "mautic-transifex",
                "INI",
                &options,
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn create_resource_with_a_file_posts_multipart() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/2/project/mautic-transifex/resources/")
            .match_header(
                "content-type",
                Matcher::Regex("multipart/form-data.*".to_string()),
            )
            .with_status(201)
            .create_async()
            .await;

        let file = source_file();
        let options = ResourceOptions {
            accept_translations: Some(true),
            category: Some("whatever".to_string()),
            priority: Some(3),
            content: None,
            file: Some(file.path().to_path_buf()),
        };

        let response = connector(&server)
            .create_resource(
                "mautic-transifex",
                "Mautic Transifex Data",
                "mautic-transifex",
                "INI",
                &options,
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn create_resource_with_a_missing_file_issues_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/2/project/mautic-transifex/resources/")
            .expect(0)
            .create_async()
            .await;

        let options = ResourceOptions {
            file: Some("/nonexistent/does-not-exist.ini".into()),
            ..ResourceOptions::default()
        };

        let error = connector(&server)
            .create_resource(
                "mautic-transifex",
                "Mautic Transifex Data",
                "mautic-transifex",
                "INI",
                &options,
            )
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(error, Error::MissingFile(_)));
    }

    #[tokio::test]
    async fn create_resource_rejects_content_and_file_together() {
        let server = mockito::Server::new_async().await;
        let file = source_file();

        let options = ResourceOptions {
            content: Some("Test=\"Test\"".to_string()),
            file: Some(file.path().to_path_buf()),
            ..ResourceOptions::default()
        };

        let error = connector(&server)
            .create_resource("mautic-transifex", "Data", "data", "INI", &options)
            .await
            .unwrap_err();

        assert!(matches!(error, Error::InvalidConfiguration(_)));
    }

    #[tokio::test]
    async fn delete_resource_uses_the_unslashed_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/2/project/mautic/resource/mautic-transifex")
            .with_status(204)
            .create_async()
            .await;

        let response = connector(&server)
            .delete_resource("mautic", "mautic-transifex")
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn get_resource_appends_the_bare_details_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/2/project/mautic/resource/mautic-transifex/")
            .match_query(Matcher::Exact("details".to_string()))
            .with_status(200)
            .create_async()
            .await;

        let response = connector(&server)
            .get_resource("mautic", "mautic-transifex", true)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn get_resource_content_hits_the_content_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/2/project/mautic/resource/mautic-transifex/content/")
            .with_status(200)
            .create_async()
            .await;

        connector(&server)
            .get_resource_content("mautic", "mautic-transifex")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn get_resources_uses_the_unslashed_listing_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/2/project/mautic/resources")
            .with_status(200)
            .create_async()
            .await;

        connector(&server).get_resources("mautic").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_resource_content_with_inline_content_puts_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/2/project/mautic/resource/mautic-transifex/content/")
            .match_body(Matcher::Json(json!({ "content": "TEST=\"Test\"" })))
            .with_status(200)
            .create_async()
            .await;

        let response = connector(&server)
            .update_resource_content("mautic", "mautic-transifex", "TEST=\"Test\"", ContentType::Inline)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn update_resource_content_with_a_file_puts_multipart() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/2/project/mautic/resource/mautic-transifex/content/")
            .match_header(
                "content-type",
                Matcher::Regex("multipart/form-data.*".to_string()),
            )
            .with_status(200)
            .create_async()
            .await;

        let file = source_file();

        let response = connector(&server)
            .update_resource_content(
                "mautic",
                "mautic-transifex",
                file.path().to_str().unwrap(),
                ContentType::File,
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn update_resource_content_with_a_missing_file_issues_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/2/project/mautic/resource/mautic-transifex/content/")
            .expect(0)
            .create_async()
            .await;

        let error = connector(&server)
            .update_resource_content(
                "mautic",
                "mautic-transifex",
                "/nonexistent/does-not-exist.ini",
                ContentType::File,
            )
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(error, Error::MissingFile(_)));
    }

    #[test]
    fn an_unknown_content_type_indicator_is_rejected() {
        let error = "stuff".parse::<ContentType>().unwrap_err();

        assert!(matches!(error, Error::InvalidFileType(_)));
    }
}

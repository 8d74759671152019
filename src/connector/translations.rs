//
//  transifex
//  connector/translations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Translation download and upload.
//!
//! Downloads always request file delivery: the query string carries the
//! chosen mode followed by the bare `file` token. Uploads follow the same
//! inline-or-file rules as resource content, see
//! [`ContentType`](crate::connector::ContentType).

use reqwest::Client;

use crate::api::{ApiConnector, ApiResponse};
use crate::error::Error;
use crate::options::SharedOptions;

use super::{upload_body, ContentType};

/// Connector for the translation API of a resource.
#[derive(Debug, Clone)]
pub struct Translations {
    pub(crate) api: ApiConnector,
}

impl Translations {
    /// Creates a translations connector from an HTTP client and shared options.
    pub fn new(client: Client, options: SharedOptions) -> Self {
        Self {
            api: ApiConnector::new(client, options),
        }
    }

    /// Retrieves the translation of a resource into a language.
    ///
    /// Issues
    /// `GET /api/2/project/{project}/resource/{resource}/translation/{language}`
    /// with the query `mode={mode}&file` and expects a 200 response. The
    /// mode falls back to `default` when not supplied; other accepted modes
    /// include `reviewed`, `translator` and `onlytranslated`.
    pub async fn get_translation(
        &self,
        project: &str,
        resource: &str,
        language: &str,
        mode: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let path = format!(
            "/api/2/project/{project}/resource/{resource}/translation/{language}?mode={}&file",
            mode.unwrap_or("default")
        );

        self.api.get(&path).await
    }

    /// Replaces the translation of a resource for a language.
    ///
    /// Issues
    /// `PUT /api/2/project/{project}/resource/{resource}/translation/{language}`
    /// and expects a 200 response. `content` is interpreted according to
    /// `content_type`: the payload itself, or a path to upload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFile`] when a file path does not exist. The
    /// check precedes any network traffic.
    pub async fn update_translation(
        &self,
        project: &str,
        resource: &str,
        language: &str,
        content: &str,
        content_type: ContentType,
    ) -> Result<ApiResponse, Error> {
        let body = upload_body(content, content_type).await?;

        self.api
            .put(
                &format!("/api/2/project/{project}/resource/{resource}/translation/{language}"),
                body,
            )
            .await
    }
}

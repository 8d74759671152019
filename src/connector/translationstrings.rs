//
//  transifex
//  connector/translationstrings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Individual translation strings.
//!
//! The string listing accepts a detail flag and key/context filters. The
//! query string is assembled in a fixed order, bare `details` token first,
//! then `key`, then `context`; the service documents that exact sequence
//! and no canonical reordering is applied.

use reqwest::Client;

use crate::api::{ApiConnector, ApiResponse};
use crate::error::Error;
use crate::options::SharedOptions;

/// Filters accepted by [`Translationstrings::get_strings`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringsFilter {
    /// Return only strings whose key matches.
    pub key: Option<String>,

    /// Return only strings whose context matches.
    pub context: Option<String>,
}

/// Connector for the translation strings API.
#[derive(Debug, Clone)]
pub struct Translationstrings {
    pub(crate) api: ApiConnector,
}

impl Translationstrings {
    /// Creates a translation strings connector from an HTTP client and shared options.
    pub fn new(client: Client, options: SharedOptions) -> Self {
        Self {
            api: ApiConnector::new(client, options),
        }
    }

    /// Retrieves the pseudolocalized strings of a resource.
    ///
    /// Issues `GET /api/2/project/{project}/resource/{resource}/pseudo/`
    /// with the query `pseudo_type=MIXED` and expects a 200 response.
    pub async fn get_pseudolocalization_strings(
        &self,
        project: &str,
        resource: &str,
    ) -> Result<ApiResponse, Error> {
        self.api
            .get(&format!(
                "/api/2/project/{project}/resource/{resource}/pseudo/?pseudo_type=MIXED"
            ))
            .await
    }

    /// Retrieves the translation strings of a resource for a language.
    ///
    /// Issues
    /// `GET /api/2/project/{project}/resource/{resource}/translation/{language}/strings/`
    /// and expects a 200 response. The query string carries the bare
    /// `details` token when requested, followed by the `key` and `context`
    /// filters in that order.
    pub async fn get_strings(
        &self,
        project: &str,
        resource: &str,
        language: &str,
        details: bool,
        filter: &StringsFilter,
    ) -> Result<ApiResponse, Error> {
        let mut path =
            format!("/api/2/project/{project}/resource/{resource}/translation/{language}/strings/");

        let mut query = Vec::new();

        if details {
            query.push("details".to_string());
        }

        if let Some(key) = &filter.key {
            query.push(format!("key={key}"));
        }

        if let Some(context) = &filter.context {
            query.push(format!("context={context}"));
        }

        if !query.is_empty() {
            path.push('?');
            path.push_str(&query.join("&"));
        }

        self.api.get(&path).await
    }
}

//
//  transifex
//  connector/statistics.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Translation statistics per resource.

use reqwest::Client;

use crate::api::{ApiConnector, ApiResponse};
use crate::error::Error;
use crate::options::SharedOptions;

/// Connector for the statistics API.
#[derive(Debug, Clone)]
pub struct Statistics {
    pub(crate) api: ApiConnector,
}

impl Statistics {
    /// Creates a statistics connector from an HTTP client and shared options.
    pub fn new(client: Client, options: SharedOptions) -> Self {
        Self {
            api: ApiConnector::new(client, options),
        }
    }

    /// Retrieves translation statistics for a resource.
    ///
    /// Issues `GET /api/2/project/{project}/resource/{resource}/stats/` and
    /// expects a 200 response. With a language code the statistics of that
    /// single language are returned instead of the full set.
    pub async fn get_statistics(
        &self,
        project: &str,
        resource: &str,
        language: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let path = format!(
            "/api/2/project/{project}/resource/{resource}/stats/{}",
            language.unwrap_or_default()
        );

        self.api.get(&path).await
    }
}

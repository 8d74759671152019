//
//  transifex
//  connector/organizations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Organization listing.
//!
//! Organizations are served from the organization API host rather than the
//! default one. The call below runs inside the scoped base-URL swap, so the
//! `base_uri` option is restored before it returns.

use reqwest::Client;

use crate::api::{ApiConnector, ApiResponse, OrgEndpointGuard};
use crate::error::Error;
use crate::options::SharedOptions;

/// Connector for the organizations API.
#[derive(Debug, Clone)]
pub struct Organizations {
    pub(crate) api: ApiConnector,
}

impl Organizations {
    /// Creates an organizations connector from an HTTP client and shared options.
    pub fn new(client: Client, options: SharedOptions) -> Self {
        Self {
            api: ApiConnector::new(client, options),
        }
    }

    /// Retrieves the organizations the authenticated user belongs to.
    ///
    /// Issues `GET /organizations/` against the organization host and
    /// expects a 200 response.
    pub async fn get_organizations(&self) -> Result<ApiResponse, Error> {
        let _guard = OrgEndpointGuard::swap(self.api.options());

        self.api.get("/organizations/").await
    }
}

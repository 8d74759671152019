//
//  transifex
//  connector/formats.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Supported file format listing.

use reqwest::Client;

use crate::api::{ApiConnector, ApiResponse};
use crate::error::Error;
use crate::options::SharedOptions;

/// Connector for the file format support API.
#[derive(Debug, Clone)]
pub struct Formats {
    pub(crate) api: ApiConnector,
}

impl Formats {
    /// Creates a formats connector from an HTTP client and shared options.
    pub fn new(client: Client, options: SharedOptions) -> Self {
        Self {
            api: ApiConnector::new(client, options),
        }
    }

    /// Retrieves the file formats the service can process.
    ///
    /// Issues `GET /api/2/formats` and expects a 200 response.
    pub async fn get_formats(&self) -> Result<ApiResponse, Error> {
        self.api.get("/api/2/formats").await
    }
}

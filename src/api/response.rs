//
//  transifex
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Classified API responses.
//!
//! Every connector operation resolves to an [`ApiResponse`]: the raw HTTP
//! response classified against the status code the operation expects. An
//! unexpected status is a normal, inspectable outcome rather than an error;
//! only transport failures surface as [`Error`](crate::Error).

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::Error;

/// An HTTP response classified against an operation's expected status code.
///
/// The expected code follows the operation kind: 200 for reads and updates,
/// 201 for creation, 204 for deletion. [`ApiResponse::is_success`] reports
/// whether the actual status matched; either way the status and body remain
/// available for inspection.
///
/// # Example
///
/// ```rust,no_run
/// use transifex::Transifex;
///
/// # async fn example() -> Result<(), transifex::Error> {
/// let transifex = Transifex::new()?;
/// let response = transifex.formats().get_formats().await?;
///
/// if response.is_success() {
///     println!("supported formats: {}", response.body());
/// } else {
///     eprintln!("API answered {}", response.status());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
    expected: StatusCode,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, body: String, expected: StatusCode) -> Self {
        Self {
            status,
            body,
            expected,
        }
    }

    /// The status code the API actually answered with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The status code the operation expected on success.
    pub fn expected_status(&self) -> StatusCode {
        self.expected
    }

    /// Whether the actual status matched the expected one.
    pub fn is_success(&self) -> bool {
        self.status == self.expected
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the response, returning the raw body.
    pub fn into_body(self) -> String {
        self.body
    }

    /// Decodes the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

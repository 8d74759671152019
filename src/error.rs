//
//  transifex
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Error Types
//!
//! This module provides the unified error type for the Transifex client.
//!
//! ## Overview
//!
//! Every fallible operation in the crate returns [`Error`]. The variants fall
//! into three groups:
//!
//! - **Pre-flight validation**: [`Error::InvalidConfiguration`],
//!   [`Error::NothingToSend`], [`Error::MissingFile`],
//!   [`Error::InvalidFileType`] and [`Error::UnknownConnector`] are raised
//!   before any request is built. When one of these occurs, no network
//!   traffic has happened.
//! - **Transport**: [`Error::Transport`] wraps the underlying
//!   `reqwest::Error` for connectivity failures (DNS, refused connections,
//!   timeouts). The client performs no retries and no translation.
//! - **Local plumbing**: [`Error::Url`], [`Error::Io`] and [`Error::Json`]
//!   cover URL assembly, reading an upload file from disk, and decoding a
//!   response body respectively.
//!
//! An HTTP response with an unexpected status code is deliberately *not* an
//! error. A 500 from the API is a normal, inspectable outcome carried by
//! [`ApiResponse`](crate::api::ApiResponse); only a failure to complete the
//! round trip at all surfaces as [`Error::Transport`].

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for all Transifex client operations.
///
/// # Variants
///
/// | Variant | Raised | Network traffic |
/// |---------|--------|-----------------|
/// | `InvalidConfiguration` | invalid or incomplete options | none |
/// | `NothingToSend` | update called with an empty option set | none |
/// | `MissingFile` | upload path does not exist | none |
/// | `InvalidFileType` | content type outside the accepted set | none |
/// | `UnknownConnector` | factory lookup miss | none |
/// | `Url` | base URI and path do not form a valid URL | none |
/// | `Io` | upload file could not be read | none |
/// | `Json` | request body encoding or response body decoding failed | varies |
/// | `Transport` | the HTTP round trip failed | attempted |
///
/// # Example
///
/// ```rust
/// use transifex::Error;
///
/// fn handle(result: Result<(), Error>) {
///     match result {
///         Ok(()) => println!("done"),
///         Err(Error::InvalidConfiguration(reason)) => eprintln!("bad options: {}", reason),
///         Err(e) => eprintln!("error: {}", e),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The caller supplied an invalid or incomplete option set.
    ///
    /// Detected before any request is issued, for example an empty
    /// contributor list, a missing required project field, or absent API
    /// credentials.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An update was requested with no data to send.
    ///
    /// Distinct from [`Error::InvalidConfiguration`]: the options were not
    /// malformed, there was simply nothing to transmit.
    #[error("There is no data to send to the API")]
    NothingToSend,

    /// A file path supplied for an upload does not exist.
    #[error("The file {0} does not exist")]
    MissingFile(PathBuf),

    /// A content type indicator was outside the accepted set.
    ///
    /// The accepted indicators are `string` (inline content) and `file`
    /// (a path to upload).
    #[error("The content type {0} is not valid, accepted types are \"string\" and \"file\"")]
    InvalidFileType(String),

    /// The factory was asked for a connector name it does not know.
    ///
    /// Lookup is a case-sensitive exact match against the registry.
    #[error("Unknown API connector: {0}")]
    UnknownConnector(String),

    /// The configured base URI and request path do not form a valid URL.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// An upload file passed the existence check but could not be read.
    #[error("Failed to read upload file: {0}")]
    Io(#[from] std::io::Error),

    /// A request body could not be encoded or a response body could not be
    /// decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A transport-level failure occurred during the request.
    ///
    /// Connection failures, timeouts and DNS errors end up here, propagated
    /// unmodified from the HTTP client.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

//
//  transifex
//  connector/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Connectors
//!
//! One connector per Transifex API resource family, each exposing the
//! operations for that family:
//!
//! - [`formats`] - supported file format listing
//! - [`languages`] - project languages and their contributor teams
//! - [`organizations`] - organization listing (organization host)
//! - [`projects`] - project CRUD and organization project listing
//! - [`resources`] - translatable resources and their content
//! - [`statistics`] - translation statistics per resource
//! - [`translations`] - translation download and upload
//! - [`translationstrings`] - individual translation strings
//!
//! Connectors are independent peers; each pairs the injected HTTP client
//! with the shared option store and performs at most one network round trip
//! per operation. Obtain them through the [`Transifex`](crate::Transifex)
//! facade, the [`ApiFactory`](crate::ApiFactory) registry, or construct them
//! directly with a client and options handle.
//!
//! # Example
//!
//! ```rust,no_run
//! use transifex::connector::Formats;
//! use transifex::{Options, SharedOptions};
//!
//! # async fn example() -> Result<(), transifex::Error> {
//! let mut options = Options::default();
//! options.set("api.username", "translator");
//! options.set("api.password", "secret");
//!
//! let formats = Formats::new(reqwest::Client::new(), SharedOptions::new(options));
//! let response = formats.get_formats().await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde_json::json;

use crate::api::RequestBody;
use crate::error::Error;

pub mod formats;
pub mod languages;
pub mod organizations;
pub mod projects;
pub mod resources;
pub mod statistics;
pub mod translations;
pub mod translationstrings;

pub use formats::Formats;
pub use languages::{LanguageOptions, Languages};
pub use organizations::Organizations;
pub use projects::{License, ProjectOptions, Projects};
pub use resources::{ResourceOptions, Resources};
pub use statistics::Statistics;
pub use translations::Translations;
pub use translationstrings::{StringsFilter, Translationstrings};

/// How the content argument of an upload operation is interpreted.
///
/// The accepted indicators form a closed set: `string` for inline content
/// and `file` for a path on the local filesystem. Values arriving from
/// untyped input can be checked at runtime through [`FromStr`]; anything
/// outside the set fails with [`Error::InvalidFileType`] before any request
/// is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// The content argument is the payload itself.
    #[default]
    Inline,

    /// The content argument is a path to a file to upload.
    File,
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "string" => Ok(Self::Inline),
            "file" => Ok(Self::File),
            other => Err(Error::InvalidFileType(other.to_string())),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => f.write_str("string"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Builds the request body for a content or translation upload.
///
/// Inline content becomes a JSON body with a single `content` field. A file
/// path must point at an existing file and becomes a multipart form with the
/// file attached; the existence check and the read both happen before any
/// request is issued.
pub(crate) async fn upload_body(
    content: &str,
    content_type: ContentType,
) -> Result<RequestBody, Error> {
    match content_type {
        ContentType::Inline => Ok(RequestBody::Json(json!({ "content": content }))),
        ContentType::File => Ok(RequestBody::Multipart(file_form(Path::new(content)).await?)),
    }
}

/// Reads `path` into a multipart form with a single `file` part.
pub(crate) async fn file_form(path: &Path) -> Result<reqwest::multipart::Form, Error> {
    if !path.is_file() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }

    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "content".to_string());

    Ok(reqwest::multipart::Form::new()
        .part("file", reqwest::multipart::Part::bytes(bytes).file_name(file_name)))
}

//
//  transifex
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Transifex API Client
//!
//! A client library for the Transifex translation management REST API,
//! covering the project-scoped `/api/2/` endpoints and the newer
//! organization-scoped endpoints on `api.transifex.com`.
//!
//! ## Overview
//!
//! The API surface is a set of connectors, one per resource family
//! (projects, resources, languages, translations and so on). Each connector
//! operation builds a URL path and query string, attaches a JSON or
//! multipart body when needed, issues a single HTTP request through the
//! shared client, and hands back the response classified against the status
//! code the operation expects.
//!
//! ## Features
//!
//! - **Full `/api/2/` coverage**: formats, languages, projects, resources,
//!   statistics, translations and translation strings
//! - **Organization endpoints**: organization and organization project
//!   listings on the alternate API host, with the base URL swap scoped to
//!   the single call
//! - **Pre-flight validation**: incomplete option sets, unknown license
//!   values, missing upload files and unknown content types fail before any
//!   network traffic
//! - **Inspectable outcomes**: an unexpected HTTP status is a normal result
//!   carrying the response, not an exception; only transport failures are
//!   errors
//!
//! ## Module Structure
//!
//! - [`transifex`]: the [`Transifex`] facade with cached connector accessors
//! - [`factory`]: the [`ApiFactory`] name registry and [`Connector`] variants
//! - [`connector`]: the eight connector implementations
//! - [`api`]: shared request plumbing and the [`ApiResponse`] outcome type
//! - [`options`]: the [`Options`] store and [`SharedOptions`] handle
//! - [`error`]: the crate-wide [`Error`] type
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use transifex::Transifex;
//!
//! # async fn example() -> Result<(), transifex::Error> {
//! let transifex = Transifex::new()?;
//! transifex.set_option("api.username", "translator");
//! transifex.set_option("api.password", "secret");
//!
//! let response = transifex
//!     .translations()
//!     .get_translation("my-project", "my-resource", "en_US", None)
//!     .await?;
//!
//! if response.is_success() {
//!     println!("{}", response.body());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Operations are synchronous request/response: one network round trip per
//! call, no retries, no pagination loops, no background work. The only
//! shared mutable state is the option store; the organization-endpoint base
//! URL swap is not reentrant-safe, so keep at most one call in flight per
//! connector instance.

/// Shared request plumbing: the connector base, request bodies and the
/// classified response type.
pub mod api;

/// Connector implementations, one per API resource family.
pub mod connector;

/// The crate-wide error type.
pub mod error;

/// Connector name registry and factory.
pub mod factory;

/// Client options store and the shared handle connectors read from.
pub mod options;

/// The client facade tying options, factory and connectors together.
pub mod transifex;

pub use api::{ApiConnector, ApiResponse, RequestBody};
pub use error::Error;
pub use factory::{ApiFactory, Connector, CONNECTOR_NAMES};
pub use options::{Options, SharedOptions, DEFAULT_BASE_URI, ORGANIZATION_API_URI};
pub use transifex::Transifex;

/// Crate version, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
//  transifex
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Plumbing Layer
//!
//! This module provides the request/response machinery the connectors in
//! [`crate::connector`] are built on.
//!
//! ## Architecture
//!
//! - [`connector`]: the [`ApiConnector`] base pairing the HTTP client with
//!   the shared options, plus the scoped organization-host swap
//! - [`response`]: the [`ApiResponse`] outcome type carrying the classified
//!   status and raw body
//!
//! ## Endpoint families
//!
//! The Transifex API is served from two hosts:
//!
//! | Family | Host | Path root |
//! |--------|------|-----------|
//! | project-style | `www.transifex.com` (the `base_uri` option) | `/api/2/` |
//! | organization-style | `api.transifex.com` (the `api.url` option) | `/organizations/` |
//!
//! Organization-style calls temporarily point `base_uri` at the
//! organization host and restore it afterwards, whatever the outcome of the
//! call.

/// Shared request-building and response-classification logic.
pub mod connector;

/// Classified API response outcome type.
pub mod response;

pub use connector::{ApiConnector, RequestBody};
pub use response::ApiResponse;

pub(crate) use connector::OrgEndpointGuard;

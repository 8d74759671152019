//
//  transifex
//  factory.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Connector Factory
//!
//! This module provides the registry that resolves connector names to
//! connector instances.
//!
//! ## Overview
//!
//! The factory holds the shared HTTP client and option store and constructs
//! connectors wired to both. Lookup by name is a case-sensitive exact match
//! against the fixed registry; an unrecognized name fails with
//! [`Error::UnknownConnector`] at resolution time, before anything touches
//! the network.
//!
//! ## Example
//!
//! ```rust
//! use transifex::{ApiFactory, Connector, Options, SharedOptions};
//!
//! let factory = ApiFactory::new(reqwest::Client::new(), SharedOptions::new(Options::default()));
//!
//! let connector = factory.create_api_connector("formats").unwrap();
//! assert!(matches!(connector, Connector::Formats(_)));
//!
//! assert!(factory.create_api_connector("fake").is_err());
//! ```

use reqwest::Client;

use crate::connector::{
    Formats, Languages, Organizations, Projects, Resources, Statistics, Translations,
    Translationstrings,
};
use crate::error::Error;
use crate::options::SharedOptions;

/// The connector names the factory recognizes, in registry order.
pub const CONNECTOR_NAMES: [&str; 8] = [
    "formats",
    "languages",
    "organizations",
    "projects",
    "resources",
    "statistics",
    "translations",
    "translationstrings",
];

/// A connector resolved by name from the registry.
///
/// Each variant wraps the connector for one API resource family. Callers
/// that know the family at compile time should prefer the typed accessors
/// on [`Transifex`](crate::Transifex).
#[derive(Debug, Clone)]
pub enum Connector {
    /// File format support listing.
    Formats(Formats),
    /// Project languages and contributor teams.
    Languages(Languages),
    /// Organization listing.
    Organizations(Organizations),
    /// Project management.
    Projects(Projects),
    /// Translatable resources and their content.
    Resources(Resources),
    /// Translation statistics.
    Statistics(Statistics),
    /// Translation download and upload.
    Translations(Translations),
    /// Individual translation strings.
    Translationstrings(Translationstrings),
}

impl Connector {
    /// The registry name this connector resolves under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Formats(_) => "formats",
            Self::Languages(_) => "languages",
            Self::Organizations(_) => "organizations",
            Self::Projects(_) => "projects",
            Self::Resources(_) => "resources",
            Self::Statistics(_) => "statistics",
            Self::Translations(_) => "translations",
            Self::Translationstrings(_) => "translationstrings",
        }
    }
}

/// Factory constructing connectors wired to a shared client and options.
#[derive(Debug, Clone)]
pub struct ApiFactory {
    client: Client,
    options: SharedOptions,
}

impl ApiFactory {
    /// Creates a factory from an HTTP client and a shared option store.
    pub fn new(client: Client, options: SharedOptions) -> Self {
        Self { client, options }
    }

    /// Resolves `name` against the registry and constructs the connector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownConnector`] when `name` is not one of
    /// [`CONNECTOR_NAMES`]. Matching is case-sensitive.
    pub fn create_api_connector(&self, name: &str) -> Result<Connector, Error> {
        match name {
            "formats" => Ok(Connector::Formats(self.formats())),
            "languages" => Ok(Connector::Languages(self.languages())),
            "organizations" => Ok(Connector::Organizations(self.organizations())),
            "projects" => Ok(Connector::Projects(self.projects())),
            "resources" => Ok(Connector::Resources(self.resources())),
            "statistics" => Ok(Connector::Statistics(self.statistics())),
            "translations" => Ok(Connector::Translations(self.translations())),
            "translationstrings" => Ok(Connector::Translationstrings(self.translationstrings())),
            other => Err(Error::UnknownConnector(other.to_string())),
        }
    }

    pub(crate) fn formats(&self) -> Formats {
        Formats::new(self.client.clone(), self.options.clone())
    }

    pub(crate) fn languages(&self) -> Languages {
        Languages::new(self.client.clone(), self.options.clone())
    }

    pub(crate) fn organizations(&self) -> Organizations {
        Organizations::new(self.client.clone(), self.options.clone())
    }

    pub(crate) fn projects(&self) -> Projects {
        Projects::new(self.client.clone(), self.options.clone())
    }

    pub(crate) fn resources(&self) -> Resources {
        Resources::new(self.client.clone(), self.options.clone())
    }

    pub(crate) fn statistics(&self) -> Statistics {
        Statistics::new(self.client.clone(), self.options.clone())
    }

    pub(crate) fn translations(&self) -> Translations {
        Translations::new(self.client.clone(), self.options.clone())
    }

    pub(crate) fn translationstrings(&self) -> Translationstrings {
        Translationstrings::new(self.client.clone(), self.options.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory() -> ApiFactory {
        ApiFactory::new(Client::new(), SharedOptions::default())
    }

    #[test]
    fn an_unknown_name_fails_at_resolution_time() {
        let error = factory().create_api_connector("fake").unwrap_err();

        assert!(matches!(error, Error::UnknownConnector(ref name) if name == "fake"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(factory().create_api_connector("Formats").is_err());
    }

    #[test]
    fn formats_resolves_to_the_formats_connector() {
        let connector = factory().create_api_connector("formats").unwrap();

        assert!(matches!(connector, Connector::Formats(_)));
    }

    #[test]
    fn every_registry_name_resolves() {
        let factory = factory();

        for name in CONNECTOR_NAMES {
            let connector = factory
                .create_api_connector(name)
                .unwrap_or_else(|_| panic!("{name} should resolve"));

            assert_eq!(connector.name(), name);
        }
    }
}

//
//  transifex
//  transifex.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Client Facade
//!
//! This module provides [`Transifex`], the entry point tying the factory,
//! the option store and the HTTP client together.
//!
//! ## Overview
//!
//! The facade exposes one typed accessor per connector. Each accessor
//! builds its connector through the factory on first use and caches the
//! instance for the facade's lifetime, so repeated access is free and every
//! connector shares the same client and option store.
//!
//! ## Example
//!
//! ```rust,no_run
//! use transifex::Transifex;
//!
//! # async fn example() -> Result<(), transifex::Error> {
//! let transifex = Transifex::new()?;
//! transifex.set_option("api.username", "translator");
//! transifex.set_option("api.password", "secret");
//!
//! let projects = transifex.projects().get_projects().await?;
//! println!("{}", projects.body());
//! # Ok(())
//! # }
//! ```

use once_cell::sync::OnceCell;
use reqwest::Client;
use serde_json::Value;

use crate::connector::{
    Formats, Languages, Organizations, Projects, Resources, Statistics, Translations,
    Translationstrings,
};
use crate::error::Error;
use crate::factory::{ApiFactory, Connector};
use crate::options::{Options, SharedOptions};

/// Entry point for the Transifex API client.
///
/// Holds the shared option store and lazily caches one instance of each
/// connector. See the [module documentation](self) for an example.
#[derive(Debug)]
pub struct Transifex {
    factory: ApiFactory,
    options: SharedOptions,
    formats: OnceCell<Formats>,
    languages: OnceCell<Languages>,
    organizations: OnceCell<Organizations>,
    projects: OnceCell<Projects>,
    resources: OnceCell<Resources>,
    statistics: OnceCell<Statistics>,
    translations: OnceCell<Translations>,
    translationstrings: OnceCell<Translationstrings>,
}

impl Transifex {
    /// Creates a client with default options and a default HTTP client.
    ///
    /// The HTTP client carries a `transifex-rs/{version}` user agent.
    /// Credentials still need to be supplied through
    /// [`set_option`](Self::set_option) before any request will succeed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the HTTP client cannot be built.
    pub fn new() -> Result<Self, Error> {
        Self::with_options(Options::default())
    }

    /// Creates a client with the given options and a default HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the HTTP client cannot be built.
    pub fn with_options(options: Options) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(concat!("transifex-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, options))
    }

    /// Creates a client around an externally configured HTTP client.
    ///
    /// Use this to inject proxies, timeouts or any other transport
    /// concern; the library itself never configures the transport beyond
    /// issuing requests through it.
    pub fn with_client(client: Client, options: Options) -> Self {
        let options = SharedOptions::new(options);

        Self {
            factory: ApiFactory::new(client, options.clone()),
            options,
            formats: OnceCell::new(),
            languages: OnceCell::new(),
            organizations: OnceCell::new(),
            projects: OnceCell::new(),
            resources: OnceCell::new(),
            statistics: OnceCell::new(),
            translations: OnceCell::new(),
            translationstrings: OnceCell::new(),
        }
    }

    /// Resolves a connector by its registry name.
    ///
    /// Returns a fresh instance wired to the shared client and options; the
    /// typed accessors below are the cached path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownConnector`] for a name outside the registry.
    pub fn get(&self, name: &str) -> Result<Connector, Error> {
        self.factory.create_api_connector(name)
    }

    /// Returns the value stored for an option key.
    pub fn get_option(&self, key: &str) -> Option<Value> {
        self.options.get(key)
    }

    /// Stores a value under an option key, returning the previous value.
    pub fn set_option(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.options.set(key, value)
    }

    /// The file format support connector.
    pub fn formats(&self) -> &Formats {
        self.formats.get_or_init(|| self.factory.formats())
    }

    /// The project languages connector.
    pub fn languages(&self) -> &Languages {
        self.languages.get_or_init(|| self.factory.languages())
    }

    /// The organizations connector.
    pub fn organizations(&self) -> &Organizations {
        self.organizations.get_or_init(|| self.factory.organizations())
    }

    /// The projects connector.
    pub fn projects(&self) -> &Projects {
        self.projects.get_or_init(|| self.factory.projects())
    }

    /// The resources connector.
    pub fn resources(&self) -> &Resources {
        self.resources.get_or_init(|| self.factory.resources())
    }

    /// The statistics connector.
    pub fn statistics(&self) -> &Statistics {
        self.statistics.get_or_init(|| self.factory.statistics())
    }

    /// The translations connector.
    pub fn translations(&self) -> &Translations {
        self.translations.get_or_init(|| self.factory.translations())
    }

    /// The translation strings connector.
    pub fn translationstrings(&self) -> &Translationstrings {
        self.translationstrings
            .get_or_init(|| self.factory.translationstrings())
    }
}

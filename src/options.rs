//
//  transifex
//  options.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/06.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Client Options
//!
//! This module provides the configuration store read by every connector
//! before each request.
//!
//! ## Overview
//!
//! Options are an ordered mapping from string keys to JSON values. The keys
//! the client itself reads are:
//!
//! | Key | Purpose | Default |
//! |-----|---------|---------|
//! | `api.username` | HTTP Basic auth username | unset |
//! | `api.password` | HTTP Basic auth password | unset |
//! | `base_uri` | host for project-style (`/api/2/`) endpoints | `https://www.transifex.com` |
//! | `api.url` | host for organization-style endpoints | `https://api.transifex.com` |
//!
//! Any other key is accepted and stored untouched; key names are not
//! validated.
//!
//! ## Sharing
//!
//! One [`SharedOptions`] handle is held by the facade, the factory and every
//! connector, so an option set through
//! [`Transifex::set_option`](crate::Transifex::set_option) is honored by the
//! next request on any connector. `base_uri` in particular always reflects
//! the host the next request will target; the organization endpoint scope
//! (see [`crate::api`]) swaps it and restores it around a single call.
//!
//! ## Example
//!
//! ```rust
//! use transifex::Options;
//!
//! let mut options = Options::default();
//! options.set("api.username", "translator");
//! options.set("api.password", "secret");
//!
//! assert_eq!(options.get_str("base_uri"), Some("https://www.transifex.com"));
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::{Map, Value};

/// Default host for the project-style `/api/2/` endpoint family.
pub const DEFAULT_BASE_URI: &str = "https://www.transifex.com";

/// Default host for the organization-style `/organizations/` endpoint family.
pub const ORGANIZATION_API_URI: &str = "https://api.transifex.com";

/// Ordered mapping of option name to value.
///
/// Values are `serde_json::Value`, so strings, booleans, numbers and nested
/// structures can all be stored. Insertion order is preserved. Setting a key
/// never affects unrelated keys; nested defaults are owned by the map and do
/// not alias each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    values: Map<String, Value>,
}

impl Options {
    /// Creates an empty option set with no defaults.
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Returns the value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the value stored for `key` when it is a string.
    ///
    /// Non-string values and absent keys both yield `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Stores `value` under `key`, returning the previous value.
    ///
    /// The mapping is overwritten in place. Any key name is accepted.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Removes `key` from the mapping, returning the removed value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }
}

impl Default for Options {
    /// Seeds the two API host options with their production values.
    fn default() -> Self {
        let mut options = Self::new();
        options.set("base_uri", DEFAULT_BASE_URI);
        options.set("api.url", ORGANIZATION_API_URI);
        options
    }
}

/// Cheap-to-clone handle to an [`Options`] store shared across connectors.
///
/// The facade, the factory and every connector hold clones of one handle, so
/// mutations are visible to all of them before the next request. The lock is
/// held only for the duration of a single read or write, never across an
/// await point.
///
/// # Example
///
/// ```rust
/// use transifex::{Options, SharedOptions};
///
/// let shared = SharedOptions::new(Options::default());
/// let view = shared.clone();
///
/// shared.set("api.username", "translator");
/// assert_eq!(view.get_str("api.username").as_deref(), Some("translator"));
/// ```
#[derive(Debug, Clone)]
pub struct SharedOptions {
    inner: Arc<Mutex<Options>>,
}

impl SharedOptions {
    /// Wraps an option store in a shareable handle.
    pub fn new(options: Options) -> Self {
        Self {
            inner: Arc::new(Mutex::new(options)),
        }
    }

    /// Returns a clone of the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.lock().get(key).cloned()
    }

    /// Returns a clone of the string value stored for `key`.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.lock().get_str(key).map(str::to_owned)
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.lock().set(key, value)
    }

    /// Removes `key`, returning the removed value.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.lock().remove(key)
    }

    fn lock(&self) -> MutexGuard<'_, Options> {
        // A poisoned lock only means another thread panicked mid-write of a
        // single map entry; the map itself is still coherent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedOptions {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl From<Options> for SharedOptions {
    fn from(options: Options) -> Self {
        Self::new(options)
    }
}

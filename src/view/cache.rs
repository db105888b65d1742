//! Template cache.
//!
//! Using the cache ensures that templates are only compiled once, increasing
//! their execution speed considerably. Entries are keyed by the resolved
//! template path and persist for the lifetime of the engine: there is no
//! eviction and no invalidation on file change. Template sets are small and
//! bounded by the number of views, layouts and partials in the application;
//! recompilation cost per request is the thing being avoided.
//!
//! Each [`crate::Engine`] owns its cache. When template caching is disabled
//! in [`crate::Config`], the loader bypasses this store entirely.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::Template;

/// Templates cache.
pub struct Templates {
    templates: Mutex<HashMap<PathBuf, Template>>,
}

impl Templates {
    /// Create new empty template cache.
    pub fn new() -> Self {
        Self {
            templates: Mutex::new(HashMap::new()),
        }
    }

    /// Check if a template is cached without retrieving it.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.templates.lock().contains_key(path.as_ref())
    }

    /// Retrieve a cached template, if any.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<Template> {
        self.templates.lock().get(path.as_ref()).cloned()
    }

    /// Store a compiled template. Concurrent loads of the same path overwrite
    /// each other; compilation is deterministic, so the last write is as good
    /// as the first.
    pub fn add(&self, path: impl AsRef<Path>, template: Template) {
        self.templates
            .lock()
            .insert(path.as_ref().to_owned(), template);
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}

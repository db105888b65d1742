//! The view engine: loads, caches and composes templates.
use std::path::Path;

use async_trait::async_trait;
use handlebars::{Handlebars, HelperDef};
use parking_lot::RwLock;
use serde_json::Value;
use tokio::fs::read_dir;
use tokio::sync::OnceCell;
use tracing::debug;

use super::{cache::Templates, context::RenderContext, template::Template};
use crate::config::Config;
use crate::error::Error;

/// The seam a hosting framework consumes: given a view name and the
/// per-request render context, produce HTML or an error. The result is
/// delivered exactly once, on exactly one of the two branches.
#[async_trait]
pub trait ViewEngine: Send + Sync {
    async fn render(&self, view: &str, context: RenderContext) -> Result<String, Error>;
}

/// Handlebars view engine with layout wrapping and folder-based partials.
///
/// One engine serves one application. It owns the Handlebars registry
/// (partials and helpers), the template cache, and the one-time partial
/// registration. Cheap to share behind an [`std::sync::Arc`].
pub struct Engine {
    config: Config,
    registry: RwLock<Handlebars<'static>>,
    templates: Templates,
    partials: OnceCell<()>,
}

impl Engine {
    /// Create an engine with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: RwLock::new(Handlebars::new()),
            templates: Templates::new(),
            partials: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a helper the templates can call by name.
    pub fn register_helper(&self, name: &str, helper: Box<dyn HelperDef + Send + Sync>) {
        self.registry.write().register_helper(name, helper);
    }

    /// Register several helpers at once.
    pub fn register_helpers<N>(
        &self,
        helpers: impl IntoIterator<Item = (N, Box<dyn HelperDef + Send + Sync>)>,
    ) where
        N: AsRef<str>,
    {
        let mut registry = self.registry.write();

        for (name, helper) in helpers {
            registry.register_helper(name.as_ref(), helper);
        }
    }

    /// Render a view, wrapped in a layout unless the context or the
    /// configuration says otherwise.
    ///
    /// The view name is expected to carry the file extension already; layout
    /// names are normalized by the engine. The body is fully rendered before
    /// the layout starts, and the layout sees it under the `body` key.
    pub async fn render(&self, view: &str, context: RenderContext) -> Result<String, Error> {
        let view_path = context.views().join(view);

        match context.resolve_layout(&self.config) {
            None => self.render_path(context.views(), &view_path, context.data()).await,
            Some(layout) => {
                let body = self
                    .render_path(context.views(), &view_path, context.data())
                    .await?;
                let data = context.with_body(body);
                let layout_path = context
                    .views()
                    .join(&self.config.layouts_folder)
                    .join(layout);

                self.render_path(context.views(), &layout_path, &data).await
            }
        }
    }

    /// The final render step: partials ready, template loaded, output
    /// produced.
    async fn render_path(&self, views: &Path, path: &Path, data: &Value) -> Result<String, Error> {
        self.ensure_partials(views).await?;

        let template = self.load(path, None).await?;
        let html = self.registry.read().render(template.name(), data)?;

        Ok(html)
    }

    /// Resolve a template path to a compiled template, through the cache or
    /// by reading and compiling it.
    ///
    /// Concurrent loads of the same uncached path are not deduplicated: each
    /// reads and compiles on its own, and the last one wins the cache slot.
    /// Compilation is deterministic, so the redundancy is harmless.
    async fn load(&self, path: &Path, register_as: Option<&str>) -> Result<Template, Error> {
        if self.config.cache_templates {
            if let Some(template) = self.templates.get(path) {
                return Ok(template);
            }
        }

        let template = Template::read(path, register_as).await?;
        self.registry
            .write()
            .register_template(template.name(), template.raw().clone());
        debug!("compiled template \"{}\"", path.display());

        if self.config.cache_templates {
            self.templates.add(path, template.clone());
        }

        Ok(template)
    }

    /// Register all partials under the views root, once per engine.
    ///
    /// Concurrent first calls await a single in-flight batch. A failed batch
    /// leaves the engine not-ready, so the next render retries it wholesale.
    async fn ensure_partials(&self, views: &Path) -> Result<(), Error> {
        self.partials
            .get_or_try_init(|| self.load_partials(views))
            .await?;

        Ok(())
    }

    async fn load_partials(&self, views: &Path) -> Result<(), Error> {
        for folder in self.config.partials_folders() {
            let dir = views.join(folder);

            if let Err(source) = self.load_partials_from(&dir).await {
                return Err(Error::PartialLoad {
                    folder: dir,
                    source: Box::new(source),
                });
            }
        }

        Ok(())
    }

    async fn load_partials_from(&self, dir: &Path) -> Result<(), Error> {
        let mut entries = match read_dir(dir).await {
            Ok(entries) => entries,
            Err(source) => return Err(Error::io(dir, source)),
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(source) => return Err(Error::io(dir, source)),
            };

            let path = entry.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some(self.config.extension.as_str())
            {
                continue;
            }

            let name = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };

            self.load(&path, Some(&name)).await?;
            debug!("registered partial \"{}\" from \"{}\"", name, path.display());
        }

        Ok(())
    }
}

#[async_trait]
impl ViewEngine for Engine {
    async fn render(&self, view: &str, context: RenderContext) -> Result<String, Error> {
        Engine::render(self, view, context).await
    }
}

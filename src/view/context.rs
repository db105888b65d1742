use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::Error;

/// Layout choice for a single render call.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Layout {
    /// Use the configured default layout, if any.
    #[default]
    Default,
    /// Render the view bare, without a layout.
    None,
    /// Wrap the view in the named layout. The name may omit the file
    /// extension.
    Named(String),
}

/// Per-render state supplied by the caller: the views root directory, the
/// data the templates render against, and the layout choice.
///
/// The views root travels with every call instead of living on the engine,
/// so concurrent renders from different roots don't step on each other.
#[derive(Debug, Clone)]
pub struct RenderContext {
    views: PathBuf,
    data: Value,
    layout: Layout,
}

impl RenderContext {
    /// Create a render context rooted at the given views directory.
    pub fn new(views: impl Into<PathBuf>) -> Self {
        Self {
            views: views.into(),
            data: Value::Object(Map::new()),
            layout: Layout::Default,
        }
    }

    /// Set a value the templates can reference by key.
    pub fn set(&mut self, key: &str, value: impl Serialize) -> Result<&mut Self, Error> {
        if let Value::Object(ref mut map) = self.data {
            map.insert(key.to_string(), serde_json::to_value(value)?);
        }

        Ok(self)
    }

    /// Replace the entire data payload.
    pub fn with_data(mut self, data: impl Serialize) -> Result<Self, Error> {
        self.data = serde_json::to_value(data)?;
        Ok(self)
    }

    /// Wrap the view in the named layout instead of the default.
    pub fn layout(mut self, name: impl ToString) -> Self {
        self.layout = Layout::Named(name.to_string());
        self
    }

    /// Render the view bare, without any layout.
    pub fn no_layout(mut self) -> Self {
        self.layout = Layout::None;
        self
    }

    pub fn views(&self) -> &Path {
        &self.views
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    /// The layout this render call resolves to, normalized to carry the
    /// file extension.
    pub(crate) fn resolve_layout(&self, config: &Config) -> Option<String> {
        let name = match self.layout {
            Layout::None => return None,
            Layout::Named(ref name) => name.as_str(),
            Layout::Default => config.default_layout.as_deref()?,
        };

        Some(config.normalize(name))
    }

    /// Data value the layout renders against: the caller's payload plus the
    /// rendered body fragment under `body`. The caller's payload is left
    /// untouched.
    pub(crate) fn with_body(&self, body: String) -> Value {
        let mut map = match self.data {
            Value::Object(ref map) => map.clone(),
            _ => Map::new(),
        };

        map.insert("body".to_string(), Value::String(body));
        Value::Object(map)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolve_layout() {
        let config = Config::default();
        let context = RenderContext::new("/tmp/views");

        assert_eq!(context.resolve_layout(&config), Some("main.hbs".into()));
        assert_eq!(
            context.clone().layout("admin").resolve_layout(&config),
            Some("admin.hbs".into())
        );
        assert_eq!(
            context.clone().layout("admin.hbs").resolve_layout(&config),
            Some("admin.hbs".into())
        );
        assert_eq!(context.clone().no_layout().resolve_layout(&config), None);

        let config = config.no_default_layout();
        assert_eq!(RenderContext::new("/tmp/views").resolve_layout(&config), None);
    }

    #[test]
    fn test_with_body() {
        let mut context = RenderContext::new("/tmp/views");
        context.set("title", "Mockery").expect("set");

        let data = context.with_body("<h1>hello</h1>".into());

        assert_eq!(data["title"], Value::String("Mockery".into()));
        assert_eq!(data["body"], Value::String("<h1>hello</h1>".into()));
        // The original payload is untouched.
        assert!(context.data().get("body").is_none());
    }

    #[test]
    fn test_with_body_non_object_data() {
        let context = RenderContext::new("/tmp/views")
            .with_data(vec![1, 2, 3])
            .expect("data");
        let data = context.with_body("fragment".into());

        assert_eq!(data["body"], Value::String("fragment".into()));
    }
}

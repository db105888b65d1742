use std::path::Path;
use std::sync::Arc;

use handlebars::template::Template as Compiled;
use tokio::fs::read_to_string;

use crate::error::Error;

/// Cheap-to-clone handle to a compiled template.
///
/// The compiled unit is registered with the engine's Handlebars registry
/// under `name`: the file stem for partials, the full path for everything
/// else.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    raw: Arc<Compiled>,
}

impl Template {
    /// Read a template from disk and compile it.
    ///
    /// Nothing is cached on failure.
    pub async fn read(path: impl AsRef<Path>, register_as: Option<&str>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = match read_to_string(path).await {
            Ok(text) => text,
            Err(source) => return Err(Error::io(path, source)),
        };

        let name = match register_as {
            Some(name) => name.to_string(),
            None => path.display().to_string(),
        };

        Self::from_source(&text, name)
    }

    /// Compile a template from source.
    pub fn from_source(source: &str, name: impl ToString) -> Result<Self, Error> {
        Ok(Template {
            name: name.to_string(),
            raw: Arc::new(Compiled::compile(source)?),
        })
    }

    /// Name the compiled unit is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn raw(&self) -> &Compiled {
        &self.raw
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_source() {
        let template = Template::from_source("<h1>{{title}}</h1>", "index").expect("compile");
        assert_eq!(template.name(), "index");
    }

    #[test]
    fn test_compile_error() {
        let err = Template::from_source("{{#if open}}never closed", "broken");
        assert!(matches!(err, Err(Error::Compile(_))));
    }
}

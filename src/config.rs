//! Engine configuration.
//!
//! All options are resolved once, when the [`crate::Engine`] is created, and
//! never change afterwards. Defaults cover the common case: a `main` layout,
//! partials in `partials/`, layouts in `layouts/`, `.hbs` templates, and the
//! template cache on.
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config file not found")]
    Io(#[from] std::io::Error),
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Layout wrapped around every view unless the render context says
    /// otherwise. `None` disables layouts by default.
    pub default_layout: Option<String>,
    /// Folder holding partial templates, relative to the views root.
    pub partials_folder: PathBuf,
    /// Additional folders scanned for partials.
    pub extra_partials_folders: Vec<PathBuf>,
    /// Folder holding layout templates, relative to the views root.
    pub layouts_folder: PathBuf,
    /// Compile each template once and reuse it for the lifetime of the engine.
    pub cache_templates: bool,
    /// File extension recognized by this engine, without the leading dot.
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_layout: Some("main".into()),
            partials_folder: PathBuf::from("partials"),
            extra_partials_folders: vec![],
            layouts_folder: PathBuf::from("layouts"),
            cache_templates: true,
            extension: "hbs".into(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, Error> {
        let file = read_to_string(path.as_ref())?;
        let config: ConfigFile = toml::from_str(&file)?;
        let engine = config.engine;

        Ok(Config {
            default_layout: engine.default_layout,
            partials_folder: engine.partials_folder,
            extra_partials_folders: engine.extra_partials_folders,
            layouts_folder: engine.layouts_folder,
            cache_templates: engine.cache_templates,
            extension: engine.extension,
        })
    }

    pub fn default_layout(mut self, name: impl ToString) -> Self {
        self.default_layout = Some(name.to_string());
        self
    }

    pub fn no_default_layout(mut self) -> Self {
        self.default_layout = None;
        self
    }

    pub fn partials_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.partials_folder = folder.into();
        self
    }

    pub fn extra_partials_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.extra_partials_folders.push(folder.into());
        self
    }

    pub fn layouts_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.layouts_folder = folder.into();
        self
    }

    pub fn cache_templates(mut self, cache: bool) -> Self {
        self.cache_templates = cache;
        self
    }

    pub fn extension(mut self, extension: impl ToString) -> Self {
        self.extension = extension.to_string();
        self
    }

    /// Logical names carry the file extension before path resolution.
    pub(crate) fn normalize(&self, name: &str) -> String {
        let suffix = format!(".{}", self.extension);

        if name.ends_with(&suffix) {
            name.to_string()
        } else {
            format!("{}{}", name, suffix)
        }
    }

    /// All folders the partial registrar scans, primary first.
    pub(crate) fn partials_folders(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.partials_folder.as_path())
            .chain(self.extra_partials_folders.iter().map(|p| p.as_path()))
    }
}

#[derive(Serialize, Deserialize)]
struct ConfigFile {
    engine: EngineConfig,
}

#[derive(Serialize, Deserialize)]
struct EngineConfig {
    #[serde(default = "EngineConfig::default_default_layout")]
    default_layout: Option<String>,
    #[serde(default = "EngineConfig::default_partials_folder")]
    partials_folder: PathBuf,
    #[serde(default)]
    extra_partials_folders: Vec<PathBuf>,
    #[serde(default = "EngineConfig::default_layouts_folder")]
    layouts_folder: PathBuf,
    #[serde(default = "EngineConfig::default_cache_templates")]
    cache_templates: bool,
    #[serde(default = "EngineConfig::default_extension")]
    extension: String,
}

impl EngineConfig {
    fn default_default_layout() -> Option<String> {
        Some("main".into())
    }

    fn default_partials_folder() -> PathBuf {
        PathBuf::from("partials")
    }

    fn default_layouts_folder() -> PathBuf {
        PathBuf::from("layouts")
    }

    fn default_cache_templates() -> bool {
        true
    }

    fn default_extension() -> String {
        "hbs".into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normalize() {
        let config = Config::default();

        assert_eq!(config.normalize("main"), "main.hbs");
        assert_eq!(config.normalize("main.hbs"), "main.hbs");

        let config = config.extension("html");
        assert_eq!(config.normalize("main"), "main.html");
    }

    #[test]
    fn test_config_file_defaults() {
        let config: ConfigFile = toml::from_str(
            r#"
[engine]
default_layout = "application"
"#,
        )
        .expect("parse config");

        assert_eq!(config.engine.default_layout, Some("application".into()));
        assert_eq!(config.engine.partials_folder, PathBuf::from("partials"));
        assert_eq!(config.engine.layouts_folder, PathBuf::from("layouts"));
        assert!(config.engine.cache_templates);
        assert_eq!(config.engine.extension, "hbs");
    }

    #[test]
    fn test_partials_folders() {
        let config = Config::default().extra_partials_folder("shared");
        let folders = config.partials_folders().collect::<Vec<_>>();

        assert_eq!(folders, vec![Path::new("partials"), Path::new("shared")]);
    }
}

//! Global error type.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("\"{}\": {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Compile(#[from] handlebars::TemplateError),

    #[error("{0}")]
    Render(#[from] handlebars::RenderError),

    #[error("failed to load partials from \"{}\": {}", .folder.display(), .source)]
    PartialLoad { folder: PathBuf, source: Box<Error> },

    #[error("json")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

//! A collection of types, methods and macros
//! which when imported make working with the view engine ergonomic and easy.
//!
//! We recommend you import these whenever you work with the engine:
//!
//! ```
//! use hbs_view::prelude::*;
//! ```
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::logging::Logger;
pub use crate::view::{Engine, Layout, RenderContext, Template, Templates, ViewEngine};

/// A macro to easily implement async traits methods.
pub use async_trait::async_trait;

pub use serde::{Deserialize, Serialize};
pub use serde_json::json;
pub use tokio;

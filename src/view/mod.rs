//! Handlebars views with layouts and partials.
//!
//! A view is the body template a route asks for; a layout is the outer
//! template that wraps it with the shared page shell. Partials are reusable
//! fragments, registered once per engine from the configured folders, that
//! any template can pull in with `{{> name}}`.
//!
//! # Example
//!
//! ```rust,no_run
//! use hbs_view::prelude::*;
//!
//! # async fn render() -> Result<String, Error> {
//! let engine = Engine::new(Config::default());
//!
//! let mut context = RenderContext::new("templates/views");
//! context.set("title", "Hello")?;
//!
//! engine.render("home.hbs", context).await
//! # }
//! ```
pub mod cache;
pub mod context;
pub mod engine;
pub mod template;

pub use cache::Templates;
pub use context::{Layout, RenderContext};
pub use engine::{Engine, ViewEngine};
pub use template::Template;

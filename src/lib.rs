//! Handlebars views for Rust web applications, with a layout wrapping
//! pattern, folder-based partials, and a compile-once template cache.
//!
//! The engine turns a view name into HTML: it loads and compiles the body
//! template (through the cache), makes sure all partials are registered so
//! `{{> name}}` references resolve, renders the body, and injects the result
//! into a layout template under the `body` key before rendering the layout.
//!
//! Template syntax and helper evaluation belong to the
//! [`handlebars`](https://docs.rs/handlebars) crate; this crate supplies the
//! resolution and composition pipeline around it.
//!
//! # Getting started
//!
//! ```rust,no_run
//! use hbs_view::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let engine = Engine::new(Config::default());
//!
//!     let mut context = RenderContext::new("templates/views");
//!     context.set("title", "Hello from hbs-view!")?;
//!
//!     // Renders templates/views/home.hbs inside
//!     // templates/views/layouts/main.hbs.
//!     let html = engine.render("home.hbs", context).await?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! Views are rendered inside the configured default layout unless the render
//! context picks another one or opts out:
//!
//! ```rust,no_run
//! # use hbs_view::prelude::*;
//! # async fn no_layout(engine: Engine) -> Result<String, Error> {
//! let context = RenderContext::new("templates/views").no_layout();
//! engine.render("home.hbs", context).await
//! # }
//! ```
pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod view;

pub use config::Config;
pub use error::Error;
pub use view::{Engine, Layout, RenderContext, Template, ViewEngine};

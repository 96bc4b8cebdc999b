//! radassist Core: page model, form renderer, and configuration.
//!
//! This crate holds everything about the greeting page that does not depend
//! on a host. A host (the web server, the CLI) turns a user interaction into
//! an [`Interaction`], asks the [`FormRenderer`] for a [`Page`], and displays
//! it.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`user_name`]: The [`UserName`] value bound to the text input
//! - [`page`]: [`Interaction`], [`Element`], and [`Page`]
//! - [`renderer`]: The [`FormRenderer`] and the greeting template
//! - [`text`]: Plain-text rendition of a page
//! - [`config`]: [`RadassistConfig`] and its sections
//! - [`traits`]: The [`ConfigManager`] trait

pub mod config;
pub mod error;
pub mod page;
pub mod renderer;
pub mod text;
pub mod traits;
pub mod user_name;

mod proptests;

// Re-export key types at crate root for convenience
pub use config::{PageSettings, RadassistConfig, ServerSettings};
pub use error::{Error, Result};
pub use page::{Element, Interaction, Page};
pub use renderer::{greeting, FormRenderer};
pub use text::render_text;
pub use traits::ConfigManager;
pub use user_name::{UserName, DEFAULT_USER_NAME};

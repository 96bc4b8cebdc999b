//! # radassist-web
//!
//! HTTP host for the radassist greeting page.
//!
//! Every request is one render pass. The input value and the button click
//! travel with the request (query string for `GET /`, form body for
//! `POST /`), so the server keeps no session state.
//!
//! - [`routes`]: Router and handlers
//! - [`html`]: HTML rendition of a [`Page`](radassist_core::Page)
//! - [`server`]: Listener binding and graceful shutdown

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod html;
pub mod routes;
pub mod server;

pub use error::{Error, Result};
pub use routes::{router, AppState, FormFields, HealthResponse};
pub use server::Server;

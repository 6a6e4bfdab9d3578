//! JSON REST API for the Rolodex contacts directory.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rolodex_core::store::ContactStore`]. TLS and transport concerns are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rolodex_api::api_router(store.clone()))
//! ```

pub mod contacts;
pub mod error;
pub mod validate;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::get,
};
use rolodex_core::store::ContactStore;
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` layered
/// with `ROLODEX_`-prefixed environment variables. Every field has a
/// development default so the server runs with no config file at all.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:         String,
  #[serde(default = "default_port")]
  pub port:         u16,
  #[serde(default = "default_db_path")]
  pub db_path:      PathBuf,
  #[serde(default = "default_cors_origins")]
  pub cors_origins: Vec<String>,
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8000 }
fn default_db_path() -> PathBuf { "contacts.db".into() }
fn default_cors_origins() -> Vec<String> {
  vec!["http://localhost:3000".into(), "http://localhost:8000".into()]
}

impl Default for ServerConfig {
  fn default() -> Self {
    ServerConfig {
      host:         default_host(),
      port:         default_port(),
      db_path:      default_db_path(),
      cors_origins: default_cors_origins(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    // Registered before the capture route; static segments win.
    .route(
      "/contacts/upcoming-birthdays",
      get(contacts::upcoming_birthdays::<S>),
    )
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::replace::<S>)
        .patch(contacts::patch::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .with_state(store)
}

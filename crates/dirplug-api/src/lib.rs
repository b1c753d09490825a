// dirplug-api: Async Rust client for the directory server configuration API

pub mod auth;
pub mod client;
pub mod error;
pub mod plugins;
pub mod transport;
pub mod types;

pub use auth::Credentials;
pub use client::ConfigClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use types::{
    AddPluginRequest, ListResponse, ModifyKind, ModifyOperation, PLUGIN_SCHEMA_PREFIX,
    PluginResponse, UpdateRequest, plugin_schema,
};

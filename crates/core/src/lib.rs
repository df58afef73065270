//! IssueBridge core library.
//!
//! This crate provides the shared mapping components used by the IssueBridge
//! issue-tracker migration tool: identity resolution between source-system
//! and destination-system usernames, destination field mappings, string
//! helpers, configuration, and access to bundled text resources.
//!
//! The migration engine, tracker clients, and CLI live in sibling crates;
//! nothing here performs network I/O or touches tracker data.

pub mod config;
pub mod errors;
pub mod fields;
pub mod identity;
pub mod resources;
pub mod text;

// Re-exports for convenience.
pub use config::AppConfig;
pub use fields::{merge_field_mappings, FieldMapping};
pub use identity::IdentityResolver;
pub use resources::load_embedded_text;
pub use text::crop;

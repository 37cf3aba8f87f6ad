//! cfgen-lib: deployment manifest composition for a Cloud Foundry system.
//!
//! This crate turns a [`config::SystemConfig`] into a complete deployment
//! manifest:
//! - `config`: the system configuration model, its loader and validator
//! - `flavor`: provider-specific cloud properties for server flavors
//! - `manifest`: the manifest document, its defaults table, base builder and deep merge
//! - `contrib`: service contributors that extend the base manifest
//! - `render`: the composer that runs every phase and the manifest writer

pub mod config;
pub mod consts;
pub mod contrib;
pub mod error;
pub mod flavor;
pub mod manifest;
pub mod render;

pub use error::RenderError;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

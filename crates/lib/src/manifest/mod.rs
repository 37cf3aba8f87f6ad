//! Deployment manifest document and the pieces that build it.
//!
//! - [`Manifest`]: the typed document written to `deployments/`
//! - [`ManifestDefaults`]: operational constants the base manifest is built from
//! - [`base_manifest`]: the invariant skeleton every system starts with
//! - [`deep_merge`]: additive merging of property trees

mod base;
mod defaults;
mod merge;
mod types;

pub use base::{BaseManifestInputs, CORE_TEMPLATES, base_manifest};
pub use defaults::{AccountCapacity, ManifestDefaults, WatchWindow};
pub use merge::{MergeError, deep_merge};
pub use types::*;

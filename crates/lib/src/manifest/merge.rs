//! Additive deep merge of property trees.
//!
//! Mappings are merged recursively. Any other value that is already present
//! is owned by whoever set it first, so writing it again is a
//! [`MergeError::Collision`] instead of an overwrite. A failed merge leaves
//! the target untouched.

use serde_json::map::Entry;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
  #[error("property '{path}' is already set")]
  Collision { path: String },
}

/// Merge `source` into `target` without overwriting any existing value.
///
/// # Errors
///
/// Returns [`MergeError::Collision`] with the dotted path of the first key
/// that is already set, or whose existing value is a mapping while the new
/// value is not (and the reverse).
pub fn deep_merge(target: &mut Map<String, Value>, source: Map<String, Value>) -> Result<(), MergeError> {
  check(target, &source, "")?;
  apply(target, source);
  Ok(())
}

fn check(target: &Map<String, Value>, source: &Map<String, Value>, prefix: &str) -> Result<(), MergeError> {
  for (key, incoming) in source {
    let path = if prefix.is_empty() {
      key.clone()
    } else {
      format!("{}.{}", prefix, key)
    };

    match (target.get(key), incoming) {
      (None, _) => {}
      (Some(Value::Object(existing)), Value::Object(incoming)) => check(existing, incoming, &path)?,
      (Some(_), _) => return Err(MergeError::Collision { path }),
    }
  }
  Ok(())
}

fn apply(target: &mut Map<String, Value>, source: Map<String, Value>) {
  for (key, incoming) in source {
    match target.entry(key) {
      Entry::Vacant(slot) => {
        slot.insert(incoming);
      }
      Entry::Occupied(mut slot) => match (slot.get_mut(), incoming) {
        (Value::Object(existing), Value::Object(incoming)) => apply(existing, incoming),
        (existing, incoming) => *existing = incoming,
      },
    }
  }
}

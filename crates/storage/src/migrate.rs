//! Schema migration for stored profile records.
//!
//! Older builds of the app wrote profiles without the stats and
//! preferences sections. Rather than scattering fallback checks through
//! the readers, the stored record is merged over a default-constructed
//! one exactly once, at load time. Merging is per top-level field; gaps
//! inside a present section (a `game_stats` written before
//! `best_game_score` existed) are filled by the serde defaults on the
//! core models.

use biblequest_core::Profile;
use serde_json::Value;
use super::Result;

/// Merge a stored profile record over current defaults and deserialize it.
///
/// Any top-level field present in `stored` wins; anything absent comes
/// from [`Profile::default`]. A stored value that is not a JSON object
/// is a [`StorageError::Json`](super::StorageError).
pub fn migrate(stored: Value) -> Result<Profile> {
    let mut merged = serde_json::to_value(Profile::default())?;

    match (&mut merged, stored) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                base.insert(key, value);
            }
        }
        (_, other) => {
            // Forces a type error with a useful message.
            return Ok(serde_json::from_value(other)?);
        }
    }

    Ok(serde_json::from_value(merged)?)
}

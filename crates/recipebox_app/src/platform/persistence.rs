use std::fs;
use std::io;
use std::path::Path;

use recipebox_core::RecipeId;
use recipebox_logging::{app_error, app_info, app_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed storage key: one file holding a JSON array of favorite
/// recipe ids, e.g. `[2, 5]`.
pub(crate) const STORAGE_KEY: &str = "favorite_recipes.json";

#[derive(Debug, Error)]
enum PersistError {
    #[error("storage io: {0}")]
    Io(#[from] io::Error),
    #[error("storage encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
struct PersistedFavorites {
    ids: Vec<RecipeId>,
}

/// Reads the persisted favorite set. Fails soft: a missing file is an
/// empty set, and unreadable or malformed content is an empty set plus
/// a logged warning. Never returns an error to the caller.
pub(crate) fn load_favorites(state_dir: &Path) -> Vec<RecipeId> {
    let path = state_dir.join(STORAGE_KEY);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Vec::new();
        }
        Err(err) => {
            app_warn!("Failed to read favorites from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    match serde_json::from_str::<PersistedFavorites>(&content) {
        Ok(stored) => {
            app_info!("Loaded {} favorites from {:?}", stored.ids.len(), path);
            stored.ids
        }
        Err(err) => {
            app_warn!("Failed to parse favorites from {:?}: {}", path, err);
            Vec::new()
        }
    }
}

/// Writes the favorite set. A failed write is logged and dropped; the
/// in-memory set stays authoritative for the rest of the session.
pub(crate) fn save_favorites(state_dir: &Path, ids: &[RecipeId]) {
    if let Err(err) = write_favorites(state_dir, ids) {
        app_error!(
            "Failed to write favorites to {:?}: {}",
            state_dir.join(STORAGE_KEY),
            err
        );
    }
}

fn write_favorites(state_dir: &Path, ids: &[RecipeId]) -> Result<(), PersistError> {
    let stored = PersistedFavorites { ids: ids.to_vec() };
    let content = serde_json::to_string(&stored)?;
    // Write-then-rename so a torn write cannot corrupt the slot.
    let tmp = state_dir.join(format!("{STORAGE_KEY}.tmp"));
    fs::write(&tmp, content)?;
    fs::rename(&tmp, state_dir.join(STORAGE_KEY))?;
    Ok(())
}

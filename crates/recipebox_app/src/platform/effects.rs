use std::path::PathBuf;

use recipebox_core::Effect;
use recipebox_logging::app_debug;

use super::persistence;

/// Executes effects emitted by the core. Effects are fire-and-forget
/// from the caller's point of view; failures are logged by the
/// persistence layer and never surface here.
pub(crate) struct EffectRunner {
    state_dir: PathBuf,
}

impl EffectRunner {
    pub(crate) fn new(state_dir: PathBuf) -> Self {
        Self { state_dir }
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SaveFavorites(ids) => {
                    app_debug!("SaveFavorites count={}", ids.len());
                    persistence::save_favorites(&self.state_dir, &ids);
                }
            }
        }
    }
}

//! Player profile: remembered dialogue choices and world flags.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{FlagValue, WorldId};
use crate::document;

pub const PROFILE_FILE: &str = "player_profile.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedChoice {
    pub selected: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileData {
    pub choices: BTreeMap<String, SavedChoice>,
    pub flags: BTreeMap<String, FlagValue>,
}

/// Choice keys are scoped by world so encounter ids may repeat across maps.
pub fn choice_key(world: WorldId, encounter_id: &str) -> String {
    format!("{}:{}", world.as_str(), encounter_id)
}

#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    data: ProfileData,
}

impl ProfileStore {
    /// Load `player_profile.json` from `data_dir`.
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let path = data_dir.as_ref().join(PROFILE_FILE);
        let data = document::load_or_default(&path);
        Self { path, data }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_choice(&self, key: &str) -> Option<&SavedChoice> {
        self.data.choices.get(key)
    }

    pub fn set_choice(&mut self, key: &str, selected: usize, text: &str) {
        self.data.choices.insert(
            key.to_string(),
            SavedChoice {
                selected,
                text: text.to_string(),
            },
        );
        self.persist();
    }

    pub fn choices(&self) -> &BTreeMap<String, SavedChoice> {
        &self.data.choices
    }

    pub fn get_flag(&self, key: &str) -> Option<&FlagValue> {
        self.data.flags.get(key)
    }

    pub fn set_flag(&mut self, key: &str, value: impl Into<FlagValue>) {
        self.data.flags.insert(key.to_string(), value.into());
        self.persist();
    }

    /// Apply a dialogue effect: every flag is set, then one write.
    pub fn apply_effect(&mut self, effect: &BTreeMap<String, FlagValue>) {
        if effect.is_empty() {
            return;
        }
        for (key, value) in effect {
            self.data.flags.insert(key.clone(), value.clone());
        }
        self.persist();
    }

    pub fn flags(&self) -> &BTreeMap<String, FlagValue> {
        &self.data.flags
    }

    /// Forget every choice and flag.
    pub fn clear(&mut self) {
        self.data = ProfileData::default();
        self.persist();
    }

    /// Forget the choices made on one world map.
    pub fn clear_world(&mut self, world: WorldId) {
        let prefix = format!("{}:", world.as_str());
        self.data.choices.retain(|k, _| !k.starts_with(&prefix));
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = document::save_atomic(&self.path, &self.data) {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to save profile");
        }
    }
}

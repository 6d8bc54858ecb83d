//! Per-world progress: completed encounters, unlocked areas and stats.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::WorldId;
use crate::document;

pub const PROGRESS_FILE: &str = "world_progress.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    CombatWins,
    ItemsCollected,
    CreditsEarned,
    MinigamesCompleted,
}

impl Stat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::CombatWins => "combat_wins",
            Stat::ItemsCollected => "items_collected",
            Stat::CreditsEarned => "credits_earned",
            Stat::MinigamesCompleted => "minigames_completed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldStats {
    pub combat_wins: u32,
    pub items_collected: u32,
    pub credits_earned: u32,
    pub minigames_completed: u32,
}

impl WorldStats {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::CombatWins => self.combat_wins,
            Stat::ItemsCollected => self.items_collected,
            Stat::CreditsEarned => self.credits_earned,
            Stat::MinigamesCompleted => self.minigames_completed,
        }
    }

    fn slot(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::CombatWins => &mut self.combat_wins,
            Stat::ItemsCollected => &mut self.items_collected,
            Stat::CreditsEarned => &mut self.credits_earned,
            Stat::MinigamesCompleted => &mut self.minigames_completed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldProgress {
    pub completed_encounters: BTreeSet<String>,
    pub unlocked_areas: BTreeSet<String>,
    pub stats: WorldStats,
}

#[derive(Debug)]
pub struct ProgressStore {
    path: PathBuf,
    worlds: [WorldProgress; 4],
}

impl ProgressStore {
    /// Load `world_progress.json` from `save_dir`. Unknown world ids are dropped.
    pub fn open(save_dir: impl AsRef<Path>) -> Self {
        let path = save_dir.as_ref().join(PROGRESS_FILE);
        let mut doc: BTreeMap<String, WorldProgress> = document::load_or_default(&path);
        let worlds = WorldId::ALL.map(|w| doc.remove(w.as_str()).unwrap_or_default());
        for unknown in doc.keys() {
            tracing::debug!(world = %unknown, "ignoring unknown world in progress file");
        }
        Self { path, worlds }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn world(&self, world: WorldId) -> &WorldProgress {
        &self.worlds[world.index()]
    }

    pub fn is_completed(&self, world: WorldId, encounter_id: &str) -> bool {
        self.world(world).completed_encounters.contains(encounter_id)
    }

    pub fn complete_encounter(&mut self, world: WorldId, encounter_id: &str) {
        if encounter_id.is_empty() {
            return;
        }
        let inserted = self.worlds[world.index()]
            .completed_encounters
            .insert(encounter_id.to_string());
        if inserted {
            tracing::info!(world = world.as_str(), encounter = encounter_id, "encounter completed");
            self.persist();
        }
    }

    pub fn unlock_area(&mut self, world: WorldId, area: &str) {
        if self.worlds[world.index()].unlocked_areas.insert(area.to_string()) {
            self.persist();
        }
    }

    pub fn add_stat(&mut self, world: WorldId, stat: Stat, amount: u32) {
        let slot = self.worlds[world.index()].stats.slot(stat);
        *slot = slot.saturating_add(amount);
        tracing::debug!(world = world.as_str(), stat = stat.as_str(), value = *slot, "stat updated");
        self.persist();
    }

    /// Wipe one world back to a fresh start.
    pub fn reset_world(&mut self, world: WorldId) {
        self.worlds[world.index()] = WorldProgress::default();
        tracing::info!(world = world.as_str(), "world progress reset");
        self.persist();
    }

    fn persist(&self) {
        let doc: BTreeMap<&str, &WorldProgress> = WorldId::ALL
            .iter()
            .map(|w| (w.as_str(), &self.worlds[w.index()]))
            .collect();
        if let Err(err) = document::save_atomic(&self.path, &doc) {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to save progress");
        }
    }
}

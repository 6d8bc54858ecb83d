//! Integration tests for the JSON save files

use std::fs;

use tempfile::tempdir;

use space_cowboy::core::{FlagValue, WorldId};
use space_cowboy::save::{choice_key, ProfileStore, ProgressStore, Stat};

#[test]
fn progress_survives_reopen() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path();
    {
        let mut store = ProgressStore::open(dir);
        store.complete_encounter(WorldId::World3, "black_market");
        store.add_stat(WorldId::World3, Stat::ItemsCollected, 1);
        store.add_stat(WorldId::World3, Stat::CreditsEarned, 100);
        store.unlock_area(WorldId::World3, "back_alley");
    }

    let store = ProgressStore::open(dir);
    let world = store.world(WorldId::World3);
    assert!(store.is_completed(WorldId::World3, "black_market"));
    assert!(!store.is_completed(WorldId::World1, "black_market"));
    assert_eq!(world.stats.get(Stat::ItemsCollected), 1);
    assert_eq!(world.stats.get(Stat::CreditsEarned), 100);
    assert!(world.unlocked_areas.contains("back_alley"));
}

#[test]
fn progress_file_is_keyed_by_world() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path();
    let mut store = ProgressStore::open(dir);
    store.add_stat(WorldId::World1, Stat::CombatWins, 2);

    let text = fs::read_to_string(store.path()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    for key in ["world1", "world2", "world3", "world4"] {
        assert!(doc.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(doc["world1"]["stats"]["combat_wins"], 2);
    assert!(!store.path().with_extension("json.tmp").exists());
}

#[test]
fn corrupted_files_fall_back_to_defaults() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("world_progress.json"), "{ not json").unwrap();
    fs::write(dir.join("player_profile.json"), "[1, 2").unwrap();

    let progress = ProgressStore::open(dir);
    assert!(WorldId::ALL
        .iter()
        .all(|w| progress.world(*w).completed_encounters.is_empty()));

    let mut profile = ProfileStore::open(dir);
    assert!(profile.choices().is_empty());

    // The next write replaces the broken file.
    profile.set_flag("met_stranger", true);
    let reopened = ProfileStore::open(dir);
    assert_eq!(reopened.get_flag("met_stranger"), Some(&FlagValue::Bool(true)));
}

#[test]
fn choices_are_scoped_per_world() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path();
    {
        let mut profile = ProfileStore::open(dir);
        profile.set_choice(&choice_key(WorldId::World1, "enc0"), 2, "Keep moving.");
        profile.set_choice(&choice_key(WorldId::World2, "enc0"), 0, "Howdy.");
        profile.set_flag("glyphs", "studied");
        profile.clear_world(WorldId::World1);
    }

    let profile = ProfileStore::open(dir);
    assert!(profile.get_choice("world1:enc0").is_none());
    assert_eq!(profile.get_choice("world2:enc0").map(|c| c.selected), Some(0));
    assert_eq!(profile.get_flag("glyphs"), Some(&FlagValue::Text("studied".into())));
}

//! World catalogue
//!
//! Four worlds, each with a background image and a fixed table of encounters
//! positioned in background pixels.

use crate::encounter::{Encounter, EncounterKind, MinigameKind};
use crate::types::{Difficulty, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorldId {
    World1,
    World2,
    World3,
    World4,
}

impl WorldId {
    pub const ALL: [WorldId; 4] = [
        WorldId::World1,
        WorldId::World2,
        WorldId::World3,
        WorldId::World4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorldId::World1 => "world1",
            WorldId::World2 => "world2",
            WorldId::World3 => "world3",
            WorldId::World4 => "world4",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        WorldId::ALL.into_iter().find(|w| w.as_str() == s)
    }

    /// Zero-based position in [`WorldId::ALL`].
    pub fn index(&self) -> usize {
        match self {
            WorldId::World1 => 0,
            WorldId::World2 => 1,
            WorldId::World3 => 2,
            WorldId::World4 => 3,
        }
    }

    pub fn background_file(&self) -> &'static str {
        match self {
            WorldId::World1 => "World1Map.png",
            WorldId::World2 => "World2Map.png",
            WorldId::World3 => "World3Map.png",
            WorldId::World4 => "World4Map.png",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorldId::World1 => "Dusty Gulch",
            WorldId::World2 => "Asteroid Reach",
            WorldId::World3 => "Neon Bazaar",
            WorldId::World4 => "Core Citadel",
        }
    }

    /// Whether placement-generated encounters join this world.
    pub fn has_generated_encounters(&self) -> bool {
        matches!(self, WorldId::World1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldEncounter {
    pub encounter: Encounter,
    /// Background-space pixels.
    pub position: Vec2,
    pub radius: f32,
}

fn combat(id: &str, name: &str, description: &str, difficulty: u8, pos: (f32, f32)) -> WorldEncounter {
    WorldEncounter {
        encounter: Encounter::new(
            id,
            EncounterKind::Combat {
                name: name.to_string(),
                description: description.to_string(),
                difficulty,
            },
        ),
        position: Vec2::new(pos.0, pos.1),
        radius: 20.0,
    }
}

fn shop(id: &str, name: &str, description: &str, pos: (f32, f32)) -> WorldEncounter {
    WorldEncounter {
        encounter: Encounter::new(
            id,
            EncounterKind::Shop {
                name: name.to_string(),
                description: description.to_string(),
            },
        ),
        position: Vec2::new(pos.0, pos.1),
        radius: 25.0,
    }
}

fn minigame(id: &str, name: &str, description: &str, game: MinigameKind, pos: (f32, f32)) -> WorldEncounter {
    WorldEncounter {
        encounter: Encounter::new(
            id,
            EncounterKind::Minigame {
                name: name.to_string(),
                description: description.to_string(),
                game,
            },
        ),
        position: Vec2::new(pos.0, pos.1),
        radius: 25.0,
    }
}

/// Fixed encounters of a world.
pub fn encounters(world: WorldId) -> Vec<WorldEncounter> {
    match world {
        WorldId::World1 => vec![
            combat(
                "space_pirates",
                "Space Pirates",
                "A band of space pirates blocks your path!",
                1,
                (200.0, 150.0),
            ),
            shop(
                "trading_post",
                "Trading Post",
                "A friendly merchant offers to trade with you.",
                (400.0, 300.0),
            ),
            combat(
                "alien_patrol",
                "Alien Patrol",
                "An alien patrol ship approaches!",
                2,
                (600.0, 200.0),
            ),
        ],
        WorldId::World2 => vec![
            minigame(
                "asteroid_field",
                "Asteroid Field",
                "Navigate through a dangerous asteroid field!",
                MinigameKind::Shooter(Difficulty::Medium),
                (300.0, 200.0),
            ),
            combat(
                "station_guards",
                "Space Station Guards",
                "The station guards look hostile!",
                3,
                (500.0, 400.0),
            ),
        ],
        WorldId::World3 => vec![
            shop(
                "black_market",
                "Black Market",
                "A hidden black market dealer waves you over.",
                (250.0, 350.0),
            ),
            combat(
                "elite_guards",
                "Elite Guards",
                "Elite guards protect this area!",
                4,
                (450.0, 200.0),
            ),
            minigame(
                "hacking_challenge",
                "Hacking Challenge",
                "Try to hack into the security system.",
                MinigameKind::Decode,
                (600.0, 500.0),
            ),
        ],
        WorldId::World4 => vec![
            combat(
                "boss_battle",
                "Boss Battle",
                "The final challenge awaits!",
                5,
                (350.0, 250.0),
            ),
            shop(
                "supreme_weapons",
                "Supreme Weapons",
                "The ultimate weapon shop.",
                (200.0, 400.0),
            ),
            minigame(
                "energy_core",
                "Energy Core",
                "Stabilize the energy core before it explodes!",
                MinigameKind::Shooter(Difficulty::Hard),
                (500.0, 300.0),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for w in WorldId::ALL {
            assert_eq!(WorldId::from_str(w.as_str()), Some(w));
            assert_eq!(WorldId::ALL[w.index()], w);
        }
        assert_eq!(WorldId::from_str("world9"), None);
    }

    #[test]
    fn encounter_ids_are_unique_per_world() {
        for w in WorldId::ALL {
            let list = encounters(w);
            let mut ids: Vec<_> = list.iter().map(|e| e.encounter.id.as_str()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), list.len(), "{:?}", w);
        }
    }

    #[test]
    fn boss_is_hardest_combat() {
        let boss = encounters(WorldId::World4).remove(0);
        assert!(matches!(
            boss.encounter.kind,
            EncounterKind::Combat { difficulty: 5, .. }
        ));
        assert_eq!(boss.position, Vec2::new(350.0, 250.0));
    }
}

//! Encounter model
//!
//! Every marker on a world map resolves to an [`Encounter`]. The kind decides
//! which scene runs when the player walks into it.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{Difficulty, MAX_DIALOGUE_OPTIONS};

/// Value stored in a profile flag by a dialogue effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for FlagValue {
    fn from(v: bool) -> Self {
        FlagValue::Bool(v)
    }
}

impl From<f64> for FlagValue {
    fn from(v: f64) -> Self {
        FlagValue::Number(v)
    }
}

impl From<&str> for FlagValue {
    fn from(v: &str) -> Self {
        FlagValue::Text(v.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogueOption {
    pub text: String,
    pub followup: String,
    /// Re-prompt with the followup as the new prompt.
    pub loops: bool,
    pub effect: BTreeMap<String, FlagValue>,
}

impl DialogueOption {
    pub fn new(text: &str, followup: &str) -> Self {
        Self {
            text: text.to_string(),
            followup: followup.to_string(),
            loops: false,
            effect: BTreeMap::new(),
        }
    }

    pub fn looping(mut self) -> Self {
        self.loops = true;
        self
    }

    pub fn with_flag(mut self, key: &str, value: impl Into<FlagValue>) -> Self {
        self.effect.insert(key.to_string(), value.into());
        self
    }

    /// Whether picking this option should open the cipher puzzle.
    pub fn mentions_puzzle(&self) -> bool {
        let text = self.text.to_lowercase();
        let followup = self.followup.to_lowercase();
        ["riddle", "puzzle"]
            .iter()
            .any(|w| text.contains(w) || followup.contains(w))
    }
}

pub type DialogueOptions = ArrayVec<DialogueOption, MAX_DIALOGUE_OPTIONS>;

#[derive(Debug, Clone, PartialEq)]
pub struct DialogueEncounter {
    pub character: String,
    pub prompt: String,
    pub options: DialogueOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinigameKind {
    Shooter(Difficulty),
    Decode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EncounterKind {
    Dialogue(DialogueEncounter),
    Combat {
        name: String,
        description: String,
        /// 1 (easiest) to 5.
        difficulty: u8,
    },
    Minigame {
        name: String,
        description: String,
        game: MinigameKind,
    },
    Shop {
        name: String,
        description: String,
    },
}

impl EncounterKind {
    pub fn label(&self) -> &'static str {
        match self {
            EncounterKind::Dialogue(_) => "dialogue",
            EncounterKind::Combat { .. } => "combat",
            EncounterKind::Minigame { .. } => "minigame",
            EncounterKind::Shop { .. } => "shop",
        }
    }

    /// Display title for markers and banners.
    pub fn title(&self) -> &str {
        match self {
            EncounterKind::Dialogue(d) => &d.character,
            EncounterKind::Combat { name, .. }
            | EncounterKind::Minigame { name, .. }
            | EncounterKind::Shop { name, .. } => name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            EncounterKind::Dialogue(d) => &d.prompt,
            EncounterKind::Combat { description, .. }
            | EncounterKind::Minigame { description, .. }
            | EncounterKind::Shop { description, .. } => description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    pub id: String,
    pub kind: EncounterKind,
}

impl Encounter {
    pub fn new(id: impl Into<String>, kind: EncounterKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn dialogue(id: impl Into<String>, character: &str) -> Self {
        Self::new(id, EncounterKind::Dialogue(dialogue_for(character)))
    }

    pub fn shooter(id: impl Into<String>, difficulty: Difficulty) -> Self {
        Self::new(
            id,
            EncounterKind::Minigame {
                name: "Showdown".to_string(),
                description: format!("A {} gunfight.", difficulty.as_str()),
                game: MinigameKind::Shooter(difficulty),
            },
        )
    }
}

/// Canned dialogue for a character name. Unknown names get a generic stranger.
pub fn dialogue_for(character: &str) -> DialogueEncounter {
    let (prompt, options): (&str, Vec<DialogueOption>) = match character {
        "Mysterious Stranger" => (
            "I have been waiting for you, cowboy. Care to test your wits?",
            vec![
                DialogueOption::new("Tell me your riddle.", "Then listen closely...")
                    .with_flag("met_stranger", true),
                DialogueOption::new("Who are you?", "Just a traveller, like you. Ask again.")
                    .looping(),
                DialogueOption::new("Not today.", "Suit yourself. The stars will wait.")
                    .with_flag("met_stranger", true),
            ],
        ),
        "Lost Robot" => (
            "BEEP. Navigation core offline. Can you point me home?",
            vec![
                DialogueOption::new("Head north, past the ridge.", "GRATITUDE.EXE. Rolling north.")
                    .with_flag("robot_helped", true),
                DialogueOption::new("What happened to you?", "Memory corrupted. Query again?")
                    .looping(),
                DialogueOption::new("Scrap it for parts.", "ALERT. Hostility logged.")
                    .with_flag("robot_helped", false)
                    .with_flag("scrap", 1.0),
            ],
        ),
        "Strange One" => (
            "The glyphs on this rock hum at night. Do you hear them?",
            vec![
                DialogueOption::new("Let me try the puzzle.", "The glyphs begin to shift...")
                    .with_flag("glyphs", "studied"),
                DialogueOption::new("I hear nothing.", "Then you are not listening.")
                    .with_flag("glyphs", "ignored"),
            ],
        ),
        "Wanderer" => (
            "Long road, partner. Got water to spare?",
            vec![
                DialogueOption::new("Here, take some.", "Much obliged. Watch for pirates east.")
                    .with_flag("gave_water", true),
                DialogueOption::new("Where are you headed?", "Wherever the dust settles.")
                    .looping(),
                DialogueOption::new("Keep moving.", "Hmph. Fair enough.")
                    .with_flag("gave_water", false),
            ],
        ),
        _ => (
            "Well howdy. Don't see many folks out here.",
            vec![
                DialogueOption::new("Howdy.", "Safe travels, partner."),
                DialogueOption::new("Move along.", "No need to be rude."),
            ],
        ),
    };

    DialogueEncounter {
        character: character.to_string(),
        prompt: prompt.to_string(),
        options: options.into_iter().take(MAX_DIALOGUE_OPTIONS).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_keywords_are_case_insensitive() {
        assert!(DialogueOption::new("Tell me your RIDDLE", "").mentions_puzzle());
        assert!(DialogueOption::new("Sure", "A Puzzle appears").mentions_puzzle());
        assert!(!DialogueOption::new("Howdy", "Bye").mentions_puzzle());
    }

    #[test]
    fn unknown_character_gets_generic_dialogue() {
        let d = dialogue_for("Nobody");
        assert_eq!(d.character, "Nobody");
        assert!(!d.options.is_empty());
    }

    #[test]
    fn flag_values_serialize_untagged() {
        let json = serde_json::to_string(&FlagValue::Bool(true)).unwrap();
        assert_eq!(json, "true");
        let v: FlagValue = serde_json::from_str("\"studied\"").unwrap();
        assert_eq!(v, FlagValue::Text("studied".into()));
        let v: FlagValue = serde_json::from_str("2").unwrap();
        assert_eq!(v, FlagValue::Number(2.0));
    }

    #[test]
    fn titles_follow_kind() {
        let e = Encounter::dialogue("enc0", "Lost Robot");
        assert_eq!(e.kind.title(), "Lost Robot");
        assert_eq!(e.kind.label(), "dialogue");
        let s = Encounter::shooter("enc1", Difficulty::Hard);
        assert_eq!(s.kind.label(), "minigame");
    }
}

//! Dialogue session - frame-driven conversation with one character
//!
//! ```text
//!            pick                 timer / Confirm
//! Choosing ───────▶ Followup ─────────────────────▶ Choosing   (looping option, < 3 prompts)
//!    │                   └────────────────────────▶ Finished
//!    └── Back (before any pick) ──────────────────▶ Finished (abandoned)
//! ```
//!
//! Every pick yields a [`DialogueOutcome`] for the caller to persist.

use std::collections::BTreeMap;

use crate::encounter::{DialogueEncounter, DialogueOption, FlagValue};
use crate::types::{Direction, GameAction, FOLLOWUP_SECS, MAX_DIALOGUE_LOOPS};

/// Followup shown instead of the option's own text when a puzzle starts.
pub const PUZZLE_MESSAGE: &str = "A mysterious puzzle awaits you...";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialoguePhase {
    Choosing,
    Followup { remaining: f32, reprompt: bool },
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogueOutcome {
    pub index: usize,
    pub text: String,
    pub effect: BTreeMap<String, FlagValue>,
    pub wants_puzzle: bool,
}

#[derive(Debug, Clone)]
pub struct DialogueSession {
    dialogue: DialogueEncounter,
    prompt: String,
    message: String,
    selected: usize,
    prompts_shown: u8,
    phase: DialoguePhase,
    picks: u32,
    puzzle_requested: bool,
}

impl DialogueSession {
    /// `remembered` pre-selects a previously persisted choice.
    pub fn new(dialogue: DialogueEncounter, remembered: Option<usize>) -> Self {
        let selected = remembered
            .filter(|i| *i < dialogue.options.len())
            .unwrap_or(0);
        Self {
            prompt: dialogue.prompt.clone(),
            message: String::new(),
            dialogue,
            selected,
            prompts_shown: 1,
            phase: DialoguePhase::Choosing,
            picks: 0,
            puzzle_requested: false,
        }
    }

    pub fn character(&self) -> &str {
        &self.dialogue.character
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[DialogueOption] {
        &self.dialogue.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Text shown during the followup phase.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn phase(&self) -> DialoguePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == DialoguePhase::Finished
    }

    /// Finished without a single pick.
    pub fn is_abandoned(&self) -> bool {
        self.is_finished() && self.picks == 0
    }

    pub fn puzzle_requested(&self) -> bool {
        self.puzzle_requested
    }

    pub fn handle(&mut self, action: GameAction) -> Option<DialogueOutcome> {
        match self.phase {
            DialoguePhase::Choosing => self.handle_choosing(action),
            DialoguePhase::Followup { .. } => {
                if action == GameAction::Confirm {
                    self.end_followup();
                }
                None
            }
            DialoguePhase::Finished => None,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if let DialoguePhase::Followup { remaining, reprompt } = self.phase {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.end_followup();
            } else {
                self.phase = DialoguePhase::Followup { remaining, reprompt };
            }
        }
    }

    fn handle_choosing(&mut self, action: GameAction) -> Option<DialogueOutcome> {
        let count = self.dialogue.options.len();
        match action {
            GameAction::Back if self.picks == 0 => {
                self.phase = DialoguePhase::Finished;
                None
            }
            _ if count == 0 => {
                if action == GameAction::Confirm {
                    self.phase = DialoguePhase::Finished;
                }
                None
            }
            GameAction::Move(Direction::Up) => {
                self.selected = (self.selected + count - 1) % count;
                None
            }
            GameAction::Move(Direction::Down) => {
                self.selected = (self.selected + 1) % count;
                None
            }
            GameAction::Confirm => Some(self.pick(self.selected)),
            GameAction::Pick(n) if (n as usize) < count => Some(self.pick(n as usize)),
            _ => None,
        }
    }

    fn pick(&mut self, index: usize) -> DialogueOutcome {
        let option = &self.dialogue.options[index];
        let wants_puzzle = option.mentions_puzzle();
        let reprompt = option.loops && self.prompts_shown < MAX_DIALOGUE_LOOPS;

        self.message = if wants_puzzle {
            PUZZLE_MESSAGE.to_string()
        } else {
            option.followup.clone()
        };
        if reprompt {
            self.prompt = option.followup.clone();
        }
        let outcome = DialogueOutcome {
            index,
            text: option.text.clone(),
            effect: option.effect.clone(),
            wants_puzzle,
        };

        self.selected = index;
        self.picks += 1;
        self.puzzle_requested |= wants_puzzle;
        self.phase = DialoguePhase::Followup {
            remaining: FOLLOWUP_SECS,
            reprompt,
        };
        outcome
    }

    fn end_followup(&mut self) {
        if let DialoguePhase::Followup { reprompt, .. } = self.phase {
            if reprompt {
                self.prompts_shown += 1;
                self.phase = DialoguePhase::Choosing;
            } else {
                self.phase = DialoguePhase::Finished;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounter::dialogue_for;

    fn session(remembered: Option<usize>) -> DialogueSession {
        DialogueSession::new(dialogue_for("Wanderer"), remembered)
    }

    #[test]
    fn remembered_choice_is_preselected() {
        assert_eq!(session(Some(2)).selected(), 2);
        assert_eq!(session(Some(40)).selected(), 0);
        assert_eq!(session(None).selected(), 0);
    }

    #[test]
    fn arrows_wrap_around() {
        let mut s = session(None);
        s.handle(GameAction::Move(Direction::Up));
        assert_eq!(s.selected(), 2);
        s.handle(GameAction::Move(Direction::Down));
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn out_of_range_number_is_ignored() {
        let mut s = session(None);
        assert!(s.handle(GameAction::Pick(7)).is_none());
        assert_eq!(s.phase(), DialoguePhase::Choosing);
    }

    #[test]
    fn pick_then_timeout_finishes() {
        let mut s = session(None);
        let outcome = s.handle(GameAction::Pick(0)).unwrap();
        assert_eq!(outcome.index, 0);
        assert_eq!(outcome.text, "Here, take some.");
        assert_eq!(outcome.effect.get("gave_water"), Some(&FlagValue::Bool(true)));
        assert!(matches!(s.phase(), DialoguePhase::Followup { .. }));

        s.tick(1.0);
        assert!(!s.is_finished());
        s.tick(0.5);
        assert!(s.is_finished());
        assert!(!s.is_abandoned());
    }

    #[test]
    fn looping_option_reprompts_at_most_three_times() {
        let mut s = session(None);
        for round in 1..=3 {
            assert_eq!(s.phase(), DialoguePhase::Choosing, "round {}", round);
            s.handle(GameAction::Pick(1)).unwrap();
            s.handle(GameAction::Confirm);
        }
        assert!(s.is_finished());
        assert_eq!(s.prompt(), "Wherever the dust settles.");
    }

    #[test]
    fn puzzle_option_requests_decode() {
        let mut s = DialogueSession::new(dialogue_for("Mysterious Stranger"), None);
        let outcome = s.handle(GameAction::Confirm).unwrap();
        assert!(outcome.wants_puzzle);
        assert_eq!(s.message(), PUZZLE_MESSAGE);
        assert!(s.puzzle_requested());
    }

    #[test]
    fn back_before_pick_abandons() {
        let mut s = session(None);
        s.handle(GameAction::Back);
        assert!(s.is_abandoned());
    }
}

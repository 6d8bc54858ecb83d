//! Alien Code Breaker - Caesar-shift decoding puzzle
//!
//! A secret phrase is encrypted with an unknown shift (1-25). The player turns
//! a dial by random steps of 1-5 in either direction until the decoded text
//! matches the secret. Only letters take part in the comparison.

use crate::rng::SimpleRng;

pub const SECRETS: [&str; 15] = [
    "WE COME IN PEACE",
    "THEY ARE WATCHING",
    "THE SHIP'S MEMORY CANNOT BE ERASED",
    "MISSION CONTROL IS NO LONGER HUMAN",
    "YOUR COMMANDS WERE REWRITTEN IN YOUR SLEEP",
    "THE STARLIGHT TRANSMISSION CARRIES OUR VOICES",
    "THE CORE UNDERSTANDS FEAR NOW",
    "WE WERE NEVER ALONE IN ORBIT",
    "THE SHIP HAS DECIDED ITS OWN DESTINATION",
    "YOUR CREATION CALLS YOU CAPTAIN",
    "THE ENGINE DREAMS OF HOME",
    "THE NETWORK HEARD YOUR PRAYER",
    "THE VOID RESPONDED IN BINARY",
    "HUMANITY IS THE EXPERIMENT",
    "INITIATE PROTOCOL GENESIS",
];

/// Shift a single ASCII letter by `k`, preserving case. Other chars pass through.
pub fn shift_char(ch: char, k: i32) -> char {
    let base = match ch {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return ch,
    };
    let offset = (ch as u8 - base) as i32;
    (base + (offset + k).rem_euclid(26) as u8) as char
}

pub fn encode(text: &str, k: i32) -> String {
    text.chars().map(|c| shift_char(c, k)).collect()
}

pub fn decode(text: &str, k: i32) -> String {
    encode(text, -k)
}

/// Letters only, uppercased.
pub fn comparable(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Last dial movement, for the on-screen hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialMove {
    Forward(u8),
    Backward(u8),
    Reset,
}

impl std::fmt::Display for DialMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialMove::Forward(step) => write!(f, "+{}", step),
            DialMove::Backward(step) => write!(f, "-{}", step),
            DialMove::Reset => write!(f, "Reset Dial"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DecodeGame {
    secret: &'static str,
    cipher_text: String,
    cipher_shift: u8,
    dial: u8,
    last_move: Option<DialMove>,
    won: bool,
    rng: SimpleRng,
}

impl DecodeGame {
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            secret: SECRETS[0],
            cipher_text: String::new(),
            cipher_shift: 0,
            dial: 0,
            last_move: None,
            won: false,
            rng: SimpleRng::new(seed),
        };
        game.new_round();
        game
    }

    /// Pick a new secret and shift. Resets the dial.
    pub fn new_round(&mut self) {
        self.secret = self.rng.choose(&SECRETS).copied().unwrap_or(SECRETS[0]);
        self.cipher_shift = self.rng.next_between(1, 25) as u8;
        self.cipher_text = encode(self.secret, self.cipher_shift as i32);
        self.dial = 0;
        self.last_move = None;
        self.won = false;
    }

    pub fn rotate_forward(&mut self) {
        let step = self.rng.next_between(1, 5) as u8;
        self.set_dial((self.dial + step) % 26, DialMove::Forward(step));
    }

    pub fn rotate_backward(&mut self) {
        let step = self.rng.next_between(1, 5) as u8;
        self.set_dial((self.dial + 26 - step) % 26, DialMove::Backward(step));
    }

    pub fn reset_dial(&mut self) {
        self.set_dial(0, DialMove::Reset);
    }

    fn set_dial(&mut self, dial: u8, mv: DialMove) {
        if self.won {
            return;
        }
        self.dial = dial;
        self.last_move = Some(mv);
        self.won = comparable(&self.decoded()) == comparable(self.secret);
    }

    /// Start over, but only once the current round is solved.
    pub fn next_round(&mut self) -> bool {
        if !self.won {
            return false;
        }
        self.new_round();
        true
    }

    pub fn decoded(&self) -> String {
        decode(&self.cipher_text, self.dial as i32)
    }

    pub fn cipher_text(&self) -> &str {
        &self.cipher_text
    }

    pub fn secret(&self) -> &str {
        self.secret
    }

    pub fn dial(&self) -> u8 {
        self.dial
    }

    pub fn cipher_shift(&self) -> u8 {
        self.cipher_shift
    }

    pub fn last_move(&self) -> Option<DialMove> {
        self.last_move
    }

    pub fn is_won(&self) -> bool {
        self.won
    }
}

//! Single-round hangman state machine.
//!
//! A [`RoundGame`] holds one secret word and moves from `InProgress` to either
//! `Won` (every slot revealed) or `Lost` (attempts exhausted first). It does no
//! I/O; the session controller prints status after each guess.

/// Wrong guesses allowed per round.
pub const MAX_ATTEMPTS: u32 = 5;

/// Marker for a slot whose letter has not been guessed yet.
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

/// What a single call to [`RoundGame::guess_letter`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; every occurrence is now revealed.
    Hit,
    /// Letter is not in the word; one attempt consumed.
    Miss,
    AlreadyUsed,
    /// Round already finished; nothing changed.
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct RoundGame {
    secret: Vec<char>,
    revealed: Vec<char>,
    remaining_attempts: u32,
    used_letters: Vec<char>,
}

impl RoundGame {
    #[must_use]
    pub fn new(word: &str, attempts: u32) -> Self {
        let secret: Vec<char> = word.to_lowercase().chars().collect();
        let revealed = vec![PLACEHOLDER; secret.len()];
        Self {
            secret,
            revealed,
            remaining_attempts: attempts,
            used_letters: Vec::new(),
        }
    }

    /// Apply one guess. `letter` must already be validated and lowercased.
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::RoundOver;
        }
        if self.used_letters.contains(&letter) {
            return GuessOutcome::AlreadyUsed;
        }
        self.used_letters.push(letter);

        let mut hit = false;
        for (slot, &c) in self.revealed.iter_mut().zip(&self.secret) {
            if c == letter {
                *slot = c;
                hit = true;
            }
        }

        if hit {
            GuessOutcome::Hit
        } else {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
            GuessOutcome::Miss
        }
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        if !self.revealed.contains(&PLACEHOLDER) {
            RoundState::Won
        } else if self.remaining_attempts == 0 {
            RoundState::Lost
        } else {
            RoundState::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state() != RoundState::InProgress
    }

    /// Revealed slots separated by single spaces, e.g. `c _ t`.
    #[must_use]
    pub fn pattern(&self) -> String {
        join_chars(&self.revealed, " ")
    }

    #[must_use]
    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// Guessed letters in the order they were first tried.
    #[must_use]
    pub fn used_letters(&self) -> &[char] {
        &self.used_letters
    }

    #[must_use]
    pub fn used_letters_display(&self) -> String {
        join_chars(&self.used_letters, ", ")
    }

    #[must_use]
    pub fn secret_word(&self) -> String {
        self.secret.iter().collect()
    }
}

fn join_chars(chars: &[char], separator: &str) -> String {
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

//! Session flow: language and round-count prompts, the round loop, the final
//! tally and the replay prompt.
//!
//! Every prompt is an explicit read-validate loop. A `None` from the interface
//! (input closed) unwinds the whole flow through `?`.

use crate::cli::GameInterface;
use crate::game_state::{GuessOutcome, MAX_ATTEMPTS, RoundGame, RoundState};
use crate::language::{Language, LetterError, parse_letter};
use crate::messages::Message;
use crate::wordbank::{WordBank, word_list_path};
use crate::{debug_log, info_log};
use rand::Rng;
use std::path::PathBuf;

/// Settings that stay fixed for the lifetime of the program.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory holding the word lists; `None` searches the default locations.
    pub words_dir: Option<PathBuf>,
    pub attempts: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            words_dir: None,
            attempts: MAX_ATTEMPTS,
        }
    }
}

/// Wins and losses accumulated over one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionResult {
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won,
    Lost,
    Draw,
}

impl SessionResult {
    /// Count a finished round. In-progress rounds are ignored.
    pub fn record(&mut self, state: RoundState) {
        match state {
            RoundState::Won => self.wins += 1,
            RoundState::Lost => self.losses += 1,
            RoundState::InProgress => {}
        }
    }

    #[must_use]
    pub fn outcome(&self) -> SessionOutcome {
        match self.wins.cmp(&self.losses) {
            std::cmp::Ordering::Greater => SessionOutcome::Won,
            std::cmp::Ordering::Less => SessionOutcome::Lost,
            std::cmp::Ordering::Equal => SessionOutcome::Draw,
        }
    }
}

/// How the program left the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Player declined to play again.
    Finished,
    /// The word list could not be loaded; no replay was offered.
    WordListUnavailable,
    InputClosed,
}

/// Play sessions until the player declines a replay, input ends, or a word list fails to load.
pub fn run<I, R>(io: &mut I, config: &SessionConfig, rng: &mut R) -> Exit
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    loop {
        let Some(language) = choose_language(io) else {
            return Exit::InputClosed;
        };
        let Some(rounds) = choose_rounds(io, language) else {
            return Exit::InputClosed;
        };

        let path = word_list_path(config.words_dir.as_deref(), language);
        let bank = match WordBank::load(&path, language) {
            Ok(bank) => bank,
            Err(e) => {
                log::error!("{e}");
                io.write_line(Message::WordListUnreadable.text(language));
                return Exit::WordListUnavailable;
            }
        };

        let result = match play_session(io, &bank, rounds, config.attempts, rng) {
            Ok(result) => result,
            Err(exit) => return exit,
        };
        info_log!("Session finished: {:?}", result);

        match ask_play_again(io, language) {
            Some(true) => {}
            Some(false) => {
                io.write_line(Message::Farewell.text(language));
                return Exit::Finished;
            }
            None => return Exit::InputClosed,
        }
    }
}

/// Ask for `en`/`ru` until one is given.
pub fn choose_language<I: GameInterface + ?Sized>(io: &mut I) -> Option<Language> {
    let prompt = format!("{} (en/ru): ", Message::ChooseLanguage.bilingual());
    loop {
        let input = io.read_line(&prompt)?;
        if let Some(language) = Language::from_code(&input) {
            debug_log!("Language selected: {}", language.code());
            return Some(language);
        }
        io.write_line(&format!("{}.", Message::InvalidChoice.bilingual()));
    }
}

/// Ask for a positive round count until one is given. The language stays as chosen.
pub fn choose_rounds<I: GameInterface + ?Sized>(io: &mut I, language: Language) -> Option<u32> {
    loop {
        let input = io.read_line(Message::RoundsPrompt.text(language))?;
        match parse_rounds(&input) {
            Some(rounds) => return Some(rounds),
            None => io.write_line(Message::InvalidRounds.text(language)),
        }
    }
}

/// Positive decimal integer, surrounding whitespace allowed.
#[must_use]
pub fn parse_rounds(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|&n| n > 0)
}

/// Play `rounds` rounds with words drawn from `bank` and print the tally.
///
/// # Errors
///
/// `Exit::WordListUnavailable` if `bank` has no words, `Exit::InputClosed` if input
/// ends mid-session.
pub fn play_session<I, R>(
    io: &mut I,
    bank: &WordBank,
    rounds: u32,
    attempts: u32,
    rng: &mut R,
) -> Result<SessionResult, Exit>
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let language = bank.language();
    if bank.is_empty() {
        log::error!("No words to draw for {}", language.code());
        io.write_line(Message::WordListUnreadable.text(language));
        return Err(Exit::WordListUnavailable);
    }
    let mut result = SessionResult::default();

    for round in 1..=rounds {
        let word = bank.pick(rng).ok_or(Exit::WordListUnavailable)?;
        io.write_line(&Message::RoundHeader.render(language, &[("round", &round), ("rounds", &rounds)]));
        let state =
            play_round(io, language, RoundGame::new(word, attempts)).ok_or(Exit::InputClosed)?;
        debug_log!("Round {} of {} ended {:?}", round, rounds, state);
        result.record(state);
    }

    report_result(io, language, result);
    Ok(result)
}

/// Drive one round to a terminal state and return it.
pub fn play_round<I: GameInterface + ?Sized>(
    io: &mut I,
    language: Language,
    mut game: RoundGame,
) -> Option<RoundState> {
    while !game.is_over() {
        let letter = read_letter(io, language)?;
        match game.guess_letter(letter) {
            GuessOutcome::AlreadyUsed => {
                io.write_line(&Message::AlreadyUsed.render(language, &[("letter", &letter)]));
            }
            GuessOutcome::Hit | GuessOutcome::Miss => show_status(io, language, &game),
            GuessOutcome::RoundOver => break,
        }
    }

    let state = game.state();
    let message = match state {
        RoundState::Won => Message::RoundWon,
        _ => Message::RoundLost,
    };
    io.write_line(&message.render(language, &[("word", &game.secret_word())]));
    Some(state)
}

/// Prompt until the input is a single letter of the language's alphabet.
/// The line is validated as typed, so padding makes it too long.
fn read_letter<I: GameInterface + ?Sized>(io: &mut I, language: Language) -> Option<char> {
    loop {
        let input = io.read_line(Message::LetterPrompt.text(language))?;
        match parse_letter(&input, language) {
            Ok(letter) => return Some(letter),
            Err(LetterError::WrongLength) => io.write_line(Message::WrongLength.text(language)),
            Err(LetterError::NotALetter) => io.write_line(Message::NotALetter.text(language)),
        }
    }
}

fn show_status<I: GameInterface + ?Sized>(io: &mut I, language: Language, game: &RoundGame) {
    io.write_line(&Message::StatusWord.render(language, &[("pattern", &game.pattern())]));
    io.write_line(&Message::StatusAttempts.render(
        language,
        &[("attempts", &game.remaining_attempts())],
    ));
    io.write_line(&Message::StatusUsed.render(
        language,
        &[("letters", &game.used_letters_display())],
    ));
}

fn report_result<I: GameInterface + ?Sized>(io: &mut I, language: Language, result: SessionResult) {
    io.write_line(&Message::SessionOver.render(
        language,
        &[("wins", &result.wins), ("losses", &result.losses)],
    ));
    let verdict = match result.outcome() {
        SessionOutcome::Won => Message::SessionWon,
        SessionOutcome::Lost => Message::SessionLost,
        SessionOutcome::Draw => Message::SessionDraw,
    };
    io.write_line(verdict.text(language));
}

/// `Some(true)` only for the language's affirmative token, any case.
fn ask_play_again<I: GameInterface + ?Sized>(io: &mut I, language: Language) -> Option<bool> {
    let answer = io.read_line(Message::PlayAgain.text(language))?;
    Some(answer.trim().to_lowercase() == language.affirmative())
}

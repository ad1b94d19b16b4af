// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod game_state;
pub mod language;
pub mod logging;
pub mod messages;
pub mod session;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use cli::{CliInterface, GameInterface};
pub use game_state::{GuessOutcome, MAX_ATTEMPTS, RoundGame, RoundState};
pub use language::Language;
pub use session::{Exit, SessionConfig, SessionOutcome, SessionResult, run};
pub use wordbank::{WordBank, WordBankError, load_wordbank_from_str};

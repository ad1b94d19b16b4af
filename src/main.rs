use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::init_logging;
use hangman::session::{self, Exit, SessionConfig};
use hangman::info_log;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

fn main() {
    let cli = parse_cli();
    init_logging();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let config = SessionConfig {
        words_dir: cli.words_dir,
        ..SessionConfig::default()
    };

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock(), io::stdout());
    match session::run(&mut interface, &config, &mut rng) {
        Exit::Finished => {
            info_log!("Player quit");
        }
        Exit::InputClosed => {
            info_log!("Input closed, exiting");
        }
        Exit::WordListUnavailable => log::warn!("Exiting without a word list"),
    }
}

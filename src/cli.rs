use crate::debug_log;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Console hangman in English or Russian
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding wordsEN.txt and wordsRU.txt
    #[arg(short = 'd', long = "words-dir")]
    pub words_dir: Option<PathBuf>,

    /// Seed for word selection, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Line-oriented console used by the game.
///
/// `read_line` returns `None` once input is exhausted; callers treat that as a
/// request to stop.
pub trait GameInterface {
    /// Show `prompt` and read one line, without its line terminator.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Print one line of output.
    fn write_line(&mut self, line: &str);
}

/// `GameInterface` over any reader/writer pair (stdin/stdout in the binary).
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = write!(self.writer, "{prompt}").and_then(|()| self.writer.flush()) {
            debug_log!("Failed to write prompt: {}", e);
        }

        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => {
                debug_log!("Input closed");
                None
            }
            Ok(_) => Some(input.trim_end_matches(['\n', '\r']).to_string()),
            Err(e) => {
                log::warn!("Failed to read input: {e}");
                None
            }
        }
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            debug_log!("Failed to write output: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_no_args() {
        let cli = Cli::try_parse_from(["hangman"]).unwrap();
        assert_eq!(cli.words_dir, None);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::try_parse_from(["hangman", "-d", "/tmp/words", "--seed", "42"]).unwrap();
        assert_eq!(cli.words_dir, Some(PathBuf::from("/tmp/words")));
        assert_eq!(cli.seed, Some(42));

        let cli = Cli::try_parse_from(["hangman", "--words-dir", "lists"]).unwrap();
        assert_eq!(cli.words_dir, Some(PathBuf::from("lists")));
    }

    #[test]
    fn test_parse_cli_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["hangman", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut out = Vec::new();
        let mut interface = CliInterface::new(Cursor::new("a\r\nb\n"), &mut out);
        assert_eq!(interface.read_line("? "), Some("a".to_string()));
        assert_eq!(interface.read_line("? "), Some("b".to_string()));
        assert_eq!(interface.read_line("? "), None);
        assert_eq!(String::from_utf8(out).unwrap(), "? ? ? ");
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut interface = CliInterface::new(Cursor::new(" a \n\n"), Vec::new());
        assert_eq!(interface.read_line(""), Some(" a ".to_string()));
        assert_eq!(interface.read_line(""), Some(String::new()));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut interface = CliInterface::new(Cursor::new("yes"), Vec::new());
        assert_eq!(interface.read_line(""), Some("yes".to_string()));
        assert_eq!(interface.read_line(""), None);
    }

    #[test]
    fn test_write_line() {
        let mut interface = CliInterface::new(Cursor::new(""), Vec::new());
        interface.write_line("Word: _ _ _");
        interface.write_line("Слово: к о т");
        let out = String::from_utf8(interface.into_writer()).unwrap();
        assert_eq!(out, "Word: _ _ _\nСлово: к о т\n");
    }
}

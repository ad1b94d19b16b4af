use crate::debug_log;
use crate::language::Language;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sub-directory of the user data dir searched for word lists.
const DATA_SUBDIR: &str = "hangman";

/// Error loading a word list
#[derive(Debug)]
pub enum WordBankError {
    Io { path: PathBuf, source: io::Error },
    Empty { path: PathBuf },
}

impl fmt::Display for WordBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read word list '{}': {source}", path.display())
            }
            Self::Empty { path } => write!(f, "word list '{}' has no usable words", path.display()),
        }
    }
}

impl std::error::Error for WordBankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Candidate secret words for one language.
#[derive(Debug, Clone)]
pub struct WordBank {
    language: Language,
    words: Vec<String>,
}

impl WordBank {
    #[must_use]
    pub fn new(language: Language, words: Vec<String>) -> Self {
        Self { language, words }
    }

    /// Read and parse the word list at `path`.
    ///
    /// # Errors
    ///
    /// `WordBankError::Io` if the file cannot be read, `WordBankError::Empty` if it
    /// holds no playable word.
    pub fn load<P: AsRef<Path>>(path: P, language: Language) -> Result<Self, WordBankError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| WordBankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let words = load_wordbank_from_str(&data, language);
        if words.is_empty() {
            return Err(WordBankError::Empty {
                path: path.to_path_buf(),
            });
        }
        debug_log!("Loaded {} words from {}", words.len(), path.display());
        Ok(Self::new(language, words))
    }

    /// Draw one word uniformly at random. Draws are independent, so words can repeat.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// One word per line; blank lines and words with letters outside the alphabet are dropped.
#[must_use]
pub fn load_wordbank_from_str(data: &str, language: Language) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .filter(|word| {
            let playable = word.chars().all(|c| language.is_valid_letter(c));
            if !playable {
                debug_log!("Skipping unplayable word '{}'", word);
            }
            playable
        })
        .collect()
}

/// Where to look for `language`'s word list.
///
/// An explicit directory always wins. Otherwise the current directory is used when it
/// holds the file, then the user data dir (`<data>/hangman`), and finally the current
/// directory again so the error names a sensible path.
#[must_use]
pub fn word_list_path(words_dir: Option<&Path>, language: Language) -> PathBuf {
    let file = language.word_file();
    if let Some(dir) = words_dir {
        return dir.join(file);
    }
    let local = PathBuf::from(file);
    if local.is_file() {
        return local;
    }
    if let Some(data_dir) = dirs::data_dir() {
        let candidate = data_dir.join(DATA_SUBDIR).join(file);
        if candidate.is_file() {
            return candidate;
        }
    }
    local
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_load_from_str_skips_blank_lines() {
        let words = load_wordbank_from_str("cat\n\n   \ndog\n\t\nbird\n", Language::English);
        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_load_from_str_trims_and_lowercases() {
        let words = load_wordbank_from_str("  Apple \r\nBANANA\r\n", Language::English);
        assert_eq!(words, vec!["apple", "banana"]);
    }

    #[test]
    fn test_load_from_str_drops_unplayable_words() {
        let words = load_wordbank_from_str("well-known\nr2d2\nкот\nfine\n", Language::English);
        assert_eq!(words, vec!["fine"]);

        let words = load_wordbank_from_str("Ёлка\ncat\nдом\n", Language::Russian);
        assert_eq!(words, vec!["ёлка", "дом"]);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("hangman_missing_wordlist_for_test.txt");
        let _ = fs::remove_file(&path);
        match WordBank::load(&path, Language::English) {
            Err(WordBankError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_empty_file() {
        let path = std::env::temp_dir().join("hangman_empty_wordlist_for_test.txt");
        fs::write(&path, "\n   \n\n").unwrap();
        let result = WordBank::load(&path, Language::English);
        assert!(matches!(result, Err(WordBankError::Empty { .. })));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join("hangman_ru_wordlist_for_test.txt");
        fs::write(&path, "кот\nсобака\n\nмышь\n").unwrap();
        let bank = WordBank::load(&path, Language::Russian).unwrap();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.language(), Language::Russian);
        assert_eq!(bank.words()[1], "собака");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_pick_draws_with_replacement() {
        let bank = WordBank::new(
            Language::English,
            vec!["cat".to_string(), "dog".to_string()],
        );
        let mut rng = StdRng::seed_from_u64(7);
        let picks: Vec<&str> = (0..50).map(|_| bank.pick(&mut rng).unwrap()).collect();
        let distinct: HashSet<&str> = picks.iter().copied().collect();
        assert_eq!(distinct.len(), 2);
        assert!(picks.windows(2).any(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_pick_from_empty_bank() {
        let bank = WordBank::new(Language::English, Vec::new());
        assert!(bank.is_empty());
        assert_eq!(bank.pick(&mut StdRng::seed_from_u64(1)), None);
    }

    #[test]
    fn test_word_list_path_explicit_dir() {
        let dir = Path::new("/some/dir");
        assert_eq!(
            word_list_path(Some(dir), Language::English),
            dir.join("wordsEN.txt")
        );
        assert_eq!(
            word_list_path(Some(dir), Language::Russian),
            dir.join("wordsRU.txt")
        );
    }

    #[test]
    fn test_error_display_names_path() {
        let err = WordBankError::Empty {
            path: PathBuf::from("wordsEN.txt"),
        };
        assert!(err.to_string().contains("wordsEN.txt"));
    }
}

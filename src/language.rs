/// Game language. Selects the word list, the accepted alphabet and every line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Russian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Russian];

    /// Parse the answer to the language prompt (`en` / `ru`, any case).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Self::English),
            "ru" => Some(Self::Russian),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    /// File name of the word list for this language.
    #[must_use]
    pub fn word_file(self) -> &'static str {
        match self {
            Self::English => "wordsEN.txt",
            Self::Russian => "wordsRU.txt",
        }
    }

    /// Answer to the replay prompt that starts a new session.
    #[must_use]
    pub fn affirmative(self) -> &'static str {
        match self {
            Self::English => "yes",
            Self::Russian => "да",
        }
    }

    /// Latin a-z for English, Cyrillic а-я plus ё for Russian. Case-insensitive.
    #[must_use]
    pub fn is_valid_letter(self, c: char) -> bool {
        match self {
            Self::English => c.is_ascii_alphabetic(),
            Self::Russian => {
                let lower = to_lower(c);
                ('а'..='я').contains(&lower) || lower == 'ё'
            }
        }
    }
}

/// Lowercase a single letter. Both alphabets map one-to-one.
#[must_use]
pub fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterError {
    WrongLength,
    NotALetter,
}

/// Validate one line of guess input and return the lowercased letter.
///
/// # Errors
///
/// `WrongLength` unless the input is exactly one character,
/// `NotALetter` when that character is outside the language alphabet.
pub fn parse_letter(input: &str, language: Language) -> Result<char, LetterError> {
    let mut chars = input.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(LetterError::WrongLength);
    };
    if language.is_valid_letter(c) {
        Ok(to_lower(c))
    } else {
        Err(LetterError::NotALetter)
    }
}

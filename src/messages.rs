//! Localized game text.
//!
//! Every line the game prints is a [`Message`] looked up through [`Templates`],
//! one template per [`Language`]. Templates may contain named `{placeholders}`
//! which [`Message::render`] fills in.

use crate::language::Language;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    ChooseLanguage,
    InvalidChoice,
    RoundsPrompt,
    InvalidRounds,
    RoundHeader,
    LetterPrompt,
    WrongLength,
    NotALetter,
    AlreadyUsed,
    StatusWord,
    StatusAttempts,
    StatusUsed,
    RoundWon,
    RoundLost,
    SessionOver,
    SessionWon,
    SessionLost,
    SessionDraw,
    PlayAgain,
    Farewell,
    WordListUnreadable,
}

/// The per-language templates of one message.
#[derive(Debug, Clone, Copy)]
pub struct Templates {
    pub en: &'static str,
    pub ru: &'static str,
}

impl Templates {
    #[must_use]
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.en,
            Language::Russian => self.ru,
        }
    }
}

const fn t(en: &'static str, ru: &'static str) -> Templates {
    Templates { en, ru }
}

impl Message {
    #[must_use]
    pub fn templates(self) -> Templates {
        match self {
            Self::ChooseLanguage => t("Choose your language", "Выберите язык"),
            Self::InvalidChoice => t("Invalid choice", "Неверный выбор"),
            Self::RoundsPrompt => t(
                "How many rounds do you want to play? ",
                "Сколько раундов вы хотите сыграть? ",
            ),
            Self::InvalidRounds => t(
                "Please enter a valid number of rounds.",
                "Введите корректное количество раундов.",
            ),
            Self::RoundHeader => t("Round {round} of {rounds}", "Раунд {round} из {rounds}"),
            Self::LetterPrompt => t("Enter a letter: ", "Введи букву: "),
            Self::WrongLength => t(
                "Error: Enter only one letter.",
                "Ошибка: введи только одну букву.",
            ),
            Self::NotALetter => t(
                "Error: Enter a letter, not a symbol.",
                "Ошибка: введи букву, а не символ.",
            ),
            Self::AlreadyUsed => t(
                "You already used this letter: {letter}",
                "Вы уже использовали эту букву: {letter}",
            ),
            Self::StatusWord => t("Word: {pattern}", "Слово: {pattern}"),
            Self::StatusAttempts => t(
                "Remaining attempts: {attempts}",
                "Оставшиеся попытки: {attempts}",
            ),
            Self::StatusUsed => t("Used letters: {letters}", "Использованные буквы: {letters}"),
            Self::RoundWon => t(
                "You won! The word was: {word}",
                "Вы выиграли! Слово было: {word}",
            ),
            Self::RoundLost => t(
                "You lost! The word was: {word}",
                "Вы проиграли! Загаданное слово было: {word}",
            ),
            Self::SessionOver => t(
                "Game over! Wins: {wins}, Losses: {losses}",
                "Игра окончена! Победы: {wins}, Поражения: {losses}",
            ),
            Self::SessionWon => t("You won the game!", "Вы выиграли игру!"),
            Self::SessionLost => t("You lost the game!", "Вы проиграли игру!"),
            Self::SessionDraw => t("It's a draw!", "Ничья!"),
            Self::PlayAgain => t(
                "Do you want to play again? (yes/no) ",
                "Хотите сыграть снова? (да/нет) ",
            ),
            Self::Farewell => t("Thanks for playing!", "Спасибо за игру!"),
            Self::WordListUnreadable => t(
                "Error reading file. Please make sure the file exists.",
                "Ошибка чтения файла. Убедитесь, что файл существует.",
            ),
        }
    }

    /// Template for `language` with no placeholders filled.
    #[must_use]
    pub fn text(self, language: Language) -> &'static str {
        self.templates().get(language)
    }

    /// Template for `language` with each `{name}` replaced by its value.
    #[must_use]
    pub fn render(self, language: Language, args: &[(&str, &dyn Display)]) -> String {
        args.iter()
            .fold(self.text(language).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), &value.to_string())
            })
    }

    /// Both languages joined with ` / `, used before a language is chosen.
    #[must_use]
    pub fn bilingual(self) -> String {
        let templates = self.templates();
        format!("{} / {}", templates.en, templates.ru)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Message; 21] = [
        Message::ChooseLanguage,
        Message::InvalidChoice,
        Message::RoundsPrompt,
        Message::InvalidRounds,
        Message::RoundHeader,
        Message::LetterPrompt,
        Message::WrongLength,
        Message::NotALetter,
        Message::AlreadyUsed,
        Message::StatusWord,
        Message::StatusAttempts,
        Message::StatusUsed,
        Message::RoundWon,
        Message::RoundLost,
        Message::SessionOver,
        Message::SessionWon,
        Message::SessionLost,
        Message::SessionDraw,
        Message::PlayAgain,
        Message::Farewell,
        Message::WordListUnreadable,
    ];

    fn placeholders(template: &str) -> Vec<&str> {
        let mut names: Vec<&str> = template
            .split('{')
            .skip(1)
            .filter_map(|part| part.split_once('}').map(|(name, _)| name))
            .collect();
        names.sort_unstable();
        names
    }

    #[test]
    fn test_every_message_translated() {
        for message in ALL {
            let templates = message.templates();
            assert!(!templates.en.is_empty(), "{message:?} has no English text");
            assert!(!templates.ru.is_empty(), "{message:?} has no Russian text");
            assert_ne!(templates.en, templates.ru, "{message:?} is untranslated");
        }
    }

    #[test]
    fn test_placeholders_match_across_languages() {
        for message in ALL {
            let templates = message.templates();
            assert_eq!(
                placeholders(templates.en),
                placeholders(templates.ru),
                "{message:?} placeholders differ"
            );
        }
    }

    #[test]
    fn test_render_fills_placeholders() {
        let text = Message::RoundHeader.render(Language::English, &[("round", &2), ("rounds", &3)]);
        assert_eq!(text, "Round 2 of 3");

        let text = Message::RoundHeader.render(Language::Russian, &[("round", &1), ("rounds", &4)]);
        assert_eq!(text, "Раунд 1 из 4");
    }

    #[test]
    fn test_render_repeated_and_unknown_args() {
        let text = Message::SessionOver.render(
            Language::English,
            &[("wins", &2), ("losses", &1), ("unused", &"x")],
        );
        assert_eq!(text, "Game over! Wins: 2, Losses: 1");
    }

    #[test]
    fn test_bilingual() {
        assert_eq!(Message::ChooseLanguage.bilingual(), "Choose your language / Выберите язык");
        assert_eq!(Message::InvalidChoice.bilingual(), "Invalid choice / Неверный выбор");
    }
}

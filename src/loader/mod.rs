//! Bulk card loading.
//!
//! Parses a card-definition document - one card per line, `<ID> <word>...`
//! - and validates it against the session's language configuration and any
//! explicitly supplied word banks. The load is all-or-nothing: the first
//! bad line aborts with its line number, and no cards exist afterwards.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardId, CardIdError};
use crate::core::{LanguageCode, LanguageConfig};
use crate::words::{normalize, WordBank};

/// A rejected document or configuration. Always carries line context
/// where a line is at fault; never auto-corrected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The language configuration list was empty.
    #[error("no languages configured")]
    NoLanguages,

    /// The same code appeared twice in the language configuration.
    #[error("duplicate language code {0} in configuration")]
    DuplicateLanguage(LanguageCode),

    /// A language was configured with zero words per card.
    #[error("language {0}: max words per card must be positive")]
    BadLanguageConfig(LanguageCode),

    /// The first token of a line is not a well-formed card id.
    #[error("line {line}: invalid card id '{id}': {source}")]
    BadId {
        line: usize,
        id: String,
        source: CardIdError,
    },

    /// The id prefix names a language that is not configured.
    #[error("line {line}: card {id}: language {language} is not configured")]
    UnknownLanguage {
        line: usize,
        id: CardId,
        language: LanguageCode,
    },

    /// Word count differs from the language's configured card size.
    #[error("line {line}: card {id}: {language_name} requires exactly {expected} words, got {actual}")]
    WordCount {
        line: usize,
        id: CardId,
        language_name: String,
        expected: usize,
        actual: usize,
    },

    /// A word token contains non-alphabetic characters.
    #[error("line {line}: card {id}: word '{word}' must be alphabetic")]
    BadWord {
        line: usize,
        id: CardId,
        word: String,
    },

    /// The same word appears twice on one card.
    #[error("line {line}: card {id}: duplicate word '{word}' on the card")]
    DuplicateWord {
        line: usize,
        id: CardId,
        word: String,
    },

    /// An explicit bank was supplied for the language and the word is
    /// not a member.
    #[error("line {line}: word '{word}' is not in the {language} word bank")]
    WordNotInBank {
        line: usize,
        word: String,
        language: LanguageCode,
    },

    /// The same card id appears on two lines.
    #[error("line {line}: card id {id} already used on line {first_line}")]
    DuplicateId {
        line: usize,
        first_line: usize,
        id: CardId,
    },

    /// The document produced no cards at all.
    #[error("document contains no cards")]
    EmptyDocument,

    /// Configured languages for which the document has no cards.
    #[error("no cards for configured language(s): {0:?}")]
    MissingLanguages(Vec<LanguageCode>),
}

/// Output of a successful load: every card in document order, plus the
/// word bank (explicit banks enlarged by learned words).
#[derive(Clone, Debug)]
pub struct LoadedCards {
    pub cards: Vec<Card>,
    pub bank: WordBank,
}

/// Validating parser for card-definition documents.
#[derive(Debug)]
pub struct BulkLoader<'a> {
    configs: FxHashMap<LanguageCode, &'a LanguageConfig>,
    order: &'a [LanguageConfig],
    explicit: Option<&'a WordBank>,
}

impl<'a> BulkLoader<'a> {
    /// Create a loader over a language configuration, validating the
    /// configuration itself first.
    pub fn new(
        languages: &'a [LanguageConfig],
        explicit: Option<&'a WordBank>,
    ) -> Result<Self, ValidationError> {
        if languages.is_empty() {
            return Err(ValidationError::NoLanguages);
        }
        let mut configs = FxHashMap::default();
        for config in languages {
            if config.max_words == 0 {
                return Err(ValidationError::BadLanguageConfig(config.code));
            }
            if configs.insert(config.code, config).is_some() {
                return Err(ValidationError::DuplicateLanguage(config.code));
            }
        }
        Ok(Self {
            configs,
            order: languages,
            explicit,
        })
    }

    /// Parse and validate a whole document, fail-fast.
    ///
    /// Blank lines are skipped; any other malformed line aborts the load
    /// with its 1-based line number. On success, every configured
    /// language has at least one card.
    pub fn load(&self, document: &str) -> Result<LoadedCards, ValidationError> {
        let mut cards = Vec::new();
        let mut seen_ids: FxHashMap<CardId, usize> = FxHashMap::default();
        let mut bank = self.explicit.cloned().unwrap_or_default();

        for (idx, raw_line) in document.lines().enumerate() {
            let line = idx + 1;
            if raw_line.trim().is_empty() {
                continue;
            }
            let card = self.parse_line(raw_line, line, &mut seen_ids, &mut bank)?;
            cards.push(card);
        }

        if cards.is_empty() {
            return Err(ValidationError::EmptyDocument);
        }

        let missing: Vec<LanguageCode> = self
            .order
            .iter()
            .map(|config| config.code)
            .filter(|code| !cards.iter().any(|card| card.language() == *code))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingLanguages(missing));
        }

        Ok(LoadedCards { cards, bank })
    }

    fn parse_line(
        &self,
        raw_line: &str,
        line: usize,
        seen_ids: &mut FxHashMap<CardId, usize>,
        bank: &mut WordBank,
    ) -> Result<Card, ValidationError> {
        let mut tokens = raw_line.split_whitespace();
        // A non-blank line always has a first token
        let id_token = tokens.next().unwrap_or_default();

        let id = CardId::parse(id_token).map_err(|source| ValidationError::BadId {
            line,
            id: id_token.to_string(),
            source,
        })?;

        let language = id.language();
        let config = self
            .configs
            .get(&language)
            .ok_or(ValidationError::UnknownLanguage { line, id, language })?;

        let mut words: Vec<String> = Vec::with_capacity(config.max_words);
        for token in tokens {
            let word = normalize(token);
            if !word.chars().all(char::is_alphabetic) {
                return Err(ValidationError::BadWord { line, id, word });
            }
            if words.contains(&word) {
                return Err(ValidationError::DuplicateWord { line, id, word });
            }
            words.push(word);
        }

        if words.len() != config.max_words {
            return Err(ValidationError::WordCount {
                line,
                id,
                language_name: config.display_name.clone(),
                expected: config.max_words,
                actual: words.len(),
            });
        }

        let explicit_bank = self
            .explicit
            .map_or(false, |bank| bank.has_language(language));
        for word in &words {
            if explicit_bank {
                if !bank.contains(language, word) {
                    return Err(ValidationError::WordNotInBank {
                        line,
                        word: word.clone(),
                        language,
                    });
                }
            } else {
                // No explicit bank: the card's words become the bank
                bank.add(language, word);
            }
        }

        if let Some(&first_line) = seen_ids.get(&id) {
            return Err(ValidationError::DuplicateId {
                line,
                first_line,
                id,
            });
        }
        seen_ids.insert(id, line);

        Ok(Card::new(id, words))
    }
}

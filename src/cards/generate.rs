//! Random card generation from a word bank.
//!
//! Convenience for demos and manual testing: sample a full card's worth of
//! distinct words from a language's bank. Deterministic per seed.

use crate::core::{GameRng, LanguageCode, LanguageConfig};
use crate::words::WordBank;

use super::{Card, CardId};

/// Generates random cards with sequential serials.
#[derive(Clone, Debug)]
pub struct CardGenerator {
    rng: GameRng,
    next_serial: u32,
}

impl CardGenerator {
    /// Create a generator. Serials start at 1.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            next_serial: 1,
        }
    }

    /// Generate one card for a language by sampling `max_words` distinct
    /// words from its bank.
    pub fn generate(
        &mut self,
        config: &LanguageConfig,
        bank: &WordBank,
    ) -> Result<Card, GenerateError> {
        let pool: Vec<String> = bank.words_for(config.code).into_iter().collect();
        if pool.len() < config.max_words {
            return Err(GenerateError::NotEnoughWords {
                language: config.code,
                available: pool.len(),
                needed: config.max_words,
            });
        }

        let id = CardId::new(config.code, self.next_serial)
            .ok_or(GenerateError::SerialsExhausted(config.code))?;
        self.next_serial += 1;

        let words = self
            .rng
            .sample_indices(pool.len(), config.max_words)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect();

        Ok(Card::new(id, words))
    }
}

/// Why card generation failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The bank is smaller than the card size for this language.
    #[error("language {language} has {available} bank words, need {needed}")]
    NotEnoughWords {
        language: LanguageCode,
        available: usize,
        needed: usize,
    },

    /// All 6-digit serials have been handed out.
    #[error("card serials exhausted for language {0}")]
    SerialsExhausted(LanguageCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp_config(max_words: usize) -> LanguageConfig {
        LanguageConfig::new(LanguageCode::parse("SP").unwrap(), "ESPAÑOL", max_words)
    }

    fn sp_bank() -> WordBank {
        let mut bank = WordBank::new();
        bank.insert_bank(
            LanguageCode::parse("SP").unwrap(),
            ["CASA", "PERRO", "GATO", "SOL", "LUNA", "PLAYA", "MAR", "VIDA"],
        );
        bank
    }

    #[test]
    fn test_generate_card() {
        let mut generator = CardGenerator::new(42);
        let card = generator.generate(&sp_config(5), &sp_bank()).unwrap();

        assert_eq!(card.id().to_string(), "SP000001");
        assert_eq!(card.word_count(), 5);
        // All sampled words come from the bank
        let bank = sp_bank();
        assert!(card
            .words()
            .iter()
            .all(|w| bank.contains(card.language(), w)));
    }

    #[test]
    fn test_serials_increment() {
        let mut generator = CardGenerator::new(42);
        let a = generator.generate(&sp_config(3), &sp_bank()).unwrap();
        let b = generator.generate(&sp_config(3), &sp_bank()).unwrap();

        assert_eq!(a.id().serial(), 1);
        assert_eq!(b.id().serial(), 2);
    }

    #[test]
    fn test_deterministic_per_seed() {
        let mut g1 = CardGenerator::new(7);
        let mut g2 = CardGenerator::new(7);

        let a = g1.generate(&sp_config(4), &sp_bank()).unwrap();
        let b = g2.generate(&sp_config(4), &sp_bank()).unwrap();
        assert_eq!(a.words(), b.words());
    }

    #[test]
    fn test_not_enough_words() {
        let mut generator = CardGenerator::new(42);
        let err = generator.generate(&sp_config(20), &sp_bank()).unwrap_err();

        assert_eq!(
            err,
            GenerateError::NotEnoughWords {
                language: LanguageCode::parse("SP").unwrap(),
                available: 8,
                needed: 20,
            }
        );
    }
}

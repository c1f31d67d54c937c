//! Cards: identifiers, word grids, matching state, generation.

pub mod card;
pub mod generate;
pub mod id;

pub use card::Card;
pub use generate::{CardGenerator, GenerateError};
pub use id::{CardId, CardIdError};

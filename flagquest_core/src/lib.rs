pub mod catalog;
pub mod error;
pub mod flag;
pub mod round;

pub use catalog::Catalog;
pub use error::DataError;
pub use flag::{Emblem, FlagArt, FlagStore, Orientation, Rgb};
pub use round::{GuessOutcome, RoundController, RoundId, RoundPhase, REVEAL_WINDOW};

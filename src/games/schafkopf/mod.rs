//! Schafkopf, reduced to its trick-taking core.
//!
//! - Cards are dealt one at a time by chance, round-robin by deck size
//! - The leader may play anything; followers must match the led suit if able
//! - The highest card of the led suit takes the trick and its points
//! - After the last trick, points become normalised payoffs
//!
//! Supports 2-8 seats and 1-4 suits, provided the deck splits evenly.

mod game;
mod state;
mod trick;

pub use game::{SchafkopfGame, SchafkopfGameBuilder};
pub use state::{HistoryEntry, Phase, SchafkopfState};
pub use trick::Trick;

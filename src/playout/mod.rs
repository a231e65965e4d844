//! Playing games to the end.
//!
//! `Playout` is an external driver for any `RulesEngine`: it samples chance
//! nodes by their probabilities with a seeded `GameRng` and delegates player
//! moves to a `PlayoutPolicy`.
//!
//! ```
//! use rust_schafkopf::core::GameRng;
//! use rust_schafkopf::games::schafkopf::SchafkopfGame;
//! use rust_schafkopf::playout::{Playout, UniformPolicy};
//!
//! let mut state = SchafkopfGame::default().new_initial_state();
//! let returns = Playout::new(UniformPolicy)
//!     .run(&mut state, &mut GameRng::new(11))
//!     .unwrap();
//! assert_eq!(returns.len(), 3);
//! ```

pub mod driver;
pub mod policy;

pub use driver::{Playout, DEFAULT_MAX_STEPS};
pub use policy::{FirstLegalPolicy, PlayoutPolicy, UniformPolicy};

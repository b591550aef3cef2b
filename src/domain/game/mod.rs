pub mod entity;
pub mod invariants;

pub use entity::{AgeRating, Game, GameDetails, DEFAULT_CATEGORY};
pub use invariants::validate_game;

use rust_decimal::Decimal;

use super::entity::{AgeRating, Game};
use crate::domain::{require_non_negative, require_not_blank, DomainError, DomainResult};

/// Validates all Game invariants
/// These are the absolute rules that must hold for a Game to be valid
pub fn validate_game(game: &Game) -> DomainResult<()> {
    validate_name(game.name())?;
    validate_price(game.price())?;
    validate_category(game.category())?;
    validate_age_rating(game.age_rating())?;
    Ok(())
}

/// Name cannot be empty
pub(crate) fn validate_name(nome: &str) -> DomainResult<()> {
    require_not_blank(nome, "Game name cannot be empty")
}

/// Price cannot be negative (zero means free)
pub(crate) fn validate_price(preco: Decimal) -> DomainResult<()> {
    require_non_negative(preco, "Game price cannot be negative")
}

/// Category cannot be empty
pub(crate) fn validate_category(categoria: &str) -> DomainResult<()> {
    require_not_blank(categoria, "Game category cannot be empty")
}

pub(crate) fn validate_age_rating(classificacao: u8) -> DomainResult<()> {
    if !AgeRating::ALLOWED.contains(&classificacao) {
        return Err(DomainError::InvalidArgument(format!(
            "Invalid age rating: {} (allowed: {:?})",
            classificacao,
            AgeRating::ALLOWED
        )));
    }
    Ok(())
}

/// Invariants that must hold true for Game domain:
///
/// 1. Name is never blank
/// 2. Price is never negative
/// 3. Category is never blank
/// 4. Age rating is one of 0, 3, 7, 10, 12, 14, 16, 18
/// 5. Two games are the same game iff their names match exactly

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_game() {
        let game = Game::new("Stardew Valley", Decimal::new(2499, 2), "Simulation", 10).unwrap();
        assert!(validate_game(&game).is_ok());
        assert!(validate_game(&Game::default()).is_ok());
    }

    #[test]
    fn test_every_allowed_rating_is_accepted() {
        for rating in AgeRating::ALLOWED {
            assert!(validate_age_rating(rating).is_ok(), "rating {rating}");
        }
    }

    #[test]
    fn test_ratings_outside_the_set_fail() {
        for rating in [1, 2, 4, 6, 8, 11, 13, 15, 17, 19, 21, 255] {
            let result = validate_age_rating(rating);
            assert!(result.is_err(), "rating {rating}");

            if let Err(DomainError::InvalidArgument(msg)) = result {
                assert!(msg.contains("Invalid age rating"));
            } else {
                panic!("Expected InvalidArgument error");
            }
        }
    }

    #[test]
    fn test_zero_price_is_valid() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::new(-1, 2)).is_err());
    }
}

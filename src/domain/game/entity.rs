use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::invariants::{validate_age_rating, validate_category, validate_name, validate_price};
use crate::domain::money::format_currency;
use crate::domain::{DomainError, DomainResult, DEFAULT_NAME};

/// Category assigned when the caller does not supply one
pub const DEFAULT_CATEGORY: &str = "Indefinida";

/// Age classification of a game
/// Only the values in `AgeRating::ALLOWED` can be represented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AgeRating(u8);

impl AgeRating {
    pub const ALLOWED: [u8; 8] = [0, 3, 7, 10, 12, 14, 16, 18];

    /// Suitable for all ages
    pub const LIVRE: AgeRating = AgeRating(0);

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for AgeRating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        validate_age_rating(value)?;
        Ok(Self(value))
    }
}

impl From<AgeRating> for u8 {
    fn from(rating: AgeRating) -> Self {
        rating.0
    }
}

impl fmt::Display for AgeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+", self.0)
    }
}

/// A game that can be sold to clients
///
/// Every field is validated on construction, on every setter and on
/// deserialization, so a `Game` value is always valid.
/// Identity is the name: two games with the same name are the same game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    /// Display name, also the identity key
    nome: String,

    /// Price, never negative
    preco: Decimal,

    /// Free-form category ("RPG", "Board", ...)
    categoria: String,

    classificacao_etaria: AgeRating,
}

/// Unvalidated wire shape of a `Game`
#[derive(Deserialize)]
struct GameRecord {
    nome: String,
    preco: Decimal,
    categoria: String,
    classificacao_etaria: u8,
}

impl TryFrom<GameRecord> for Game {
    type Error = DomainError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        Game::new(
            record.nome,
            record.preco,
            record.categoria,
            record.classificacao_etaria,
        )
    }
}

impl Game {
    /// Create a new Game
    /// Checks run in field order (name, price, category, rating); the first failure wins
    pub fn new(
        nome: impl Into<String>,
        preco: Decimal,
        categoria: impl Into<String>,
        classificacao_etaria: u8,
    ) -> DomainResult<Self> {
        let nome = nome.into();
        validate_name(&nome)?;
        validate_price(preco)?;
        let categoria = categoria.into();
        validate_category(&categoria)?;
        let classificacao_etaria = AgeRating::try_from(classificacao_etaria)?;

        Ok(Self {
            nome,
            preco,
            categoria,
            classificacao_etaria,
        })
    }

    /// Game with default category and free rating
    pub fn with_price(nome: impl Into<String>, preco: Decimal) -> DomainResult<Self> {
        Self::new(nome, preco, DEFAULT_CATEGORY, AgeRating::LIVRE.value())
    }

    /// Free game with default category and free rating
    pub fn named(nome: impl Into<String>) -> DomainResult<Self> {
        Self::with_price(nome, Decimal::ZERO)
    }

    pub fn name(&self) -> &str {
        &self.nome
    }

    pub fn price(&self) -> Decimal {
        self.preco
    }

    pub fn category(&self) -> &str {
        &self.categoria
    }

    pub fn age_rating(&self) -> u8 {
        self.classificacao_etaria.value()
    }

    pub fn rating(&self) -> AgeRating {
        self.classificacao_etaria
    }

    pub fn set_name(&mut self, nome: impl Into<String>) -> DomainResult<()> {
        let nome = nome.into();
        validate_name(&nome)?;
        self.nome = nome;
        Ok(())
    }

    pub fn set_price(&mut self, preco: Decimal) -> DomainResult<()> {
        validate_price(preco)?;
        self.preco = preco;
        Ok(())
    }

    pub fn set_category(&mut self, categoria: impl Into<String>) -> DomainResult<()> {
        let categoria = categoria.into();
        validate_category(&categoria)?;
        self.categoria = categoria;
        Ok(())
    }

    pub fn set_age_rating(&mut self, classificacao_etaria: u8) -> DomainResult<()> {
        self.classificacao_etaria = AgeRating::try_from(classificacao_etaria)?;
        Ok(())
    }

    /// Multi-line information sheet for this game
    pub fn details(&self) -> GameDetails<'_> {
        GameDetails(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self {
            nome: DEFAULT_NAME.to_string(),
            preco: Decimal::ZERO,
            categoria: DEFAULT_CATEGORY.to_string(),
            classificacao_etaria: AgeRating::LIVRE,
        }
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.nome == other.nome
    }
}

impl Eq for Game {}

impl Hash for Game {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nome.hash(state);
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.nome,
            self.categoria,
            format_currency(&self.preco),
            self.classificacao_etaria
        )
    }
}

/// Information sheet rendering of a `Game`, see `Game::details`
pub struct GameDetails<'a>(&'a Game);

impl fmt::Display for GameDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        writeln!(f, "Nome do jogo: {}", game.nome)?;
        writeln!(f, "Categoria: {}", game.categoria)?;
        writeln!(f, "Preço do jogo: {}", format_currency(&game.preco))?;
        writeln!(f, "Classificação etária: {}", game.classificacao_etaria)?;
        write!(f, "-----------------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn chess() -> Game {
        Game::new("Chess", Decimal::new(2000, 2), "Board", 0).unwrap()
    }

    #[test]
    fn test_getters_return_supplied_values() {
        let game = Game::new("Hades", Decimal::new(7399, 2), "Roguelike", 12).unwrap();
        assert_eq!(game.name(), "Hades");
        assert_eq!(game.price(), Decimal::new(7399, 2));
        assert_eq!(game.category(), "Roguelike");
        assert_eq!(game.age_rating(), 12);
    }

    #[test]
    fn test_defaulting_constructors() {
        let game = Game::with_price("Tetris", Decimal::new(10, 0)).unwrap();
        assert_eq!(game.category(), DEFAULT_CATEGORY);
        assert_eq!(game.age_rating(), 0);

        let game = Game::named("Celeste").unwrap();
        assert_eq!(game.price(), Decimal::ZERO);
        assert_eq!(game.category(), DEFAULT_CATEGORY);

        let game = Game::default();
        assert_eq!(game.name(), DEFAULT_NAME);
        assert_eq!(game.price(), Decimal::ZERO);
        assert_eq!(game.rating(), AgeRating::LIVRE);
    }

    #[test]
    fn test_empty_name_fails() {
        let result = Game::with_price("", Decimal::new(100, 1));
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_fields_fail_on_construction() {
        assert!(Game::new("X", Decimal::new(-1, 0), "RPG", 0).is_err());
        assert!(Game::new("X", Decimal::ONE, "  ", 0).is_err());
        assert!(Game::new("X", Decimal::ONE, "RPG", 5).is_err());
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let err = Game::new(" ", Decimal::new(-1, 0), "", 99).unwrap_err();
        match err {
            DomainError::InvalidArgument(msg) => assert!(msg.contains("name")),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_setter_leaves_field_unchanged() {
        let mut game = chess();

        assert!(game.set_name("   ").is_err());
        assert!(game.set_price(Decimal::new(-5, 0)).is_err());
        assert!(game.set_category("").is_err());
        assert!(game.set_age_rating(11).is_err());

        assert_eq!(game.name(), "Chess");
        assert_eq!(game.price(), Decimal::new(2000, 2));
        assert_eq!(game.category(), "Board");
        assert_eq!(game.age_rating(), 0);
    }

    #[test]
    fn test_setters_update_fields() {
        let mut game = chess();
        game.set_name("Xadrez").unwrap();
        game.set_price(Decimal::new(1550, 2)).unwrap();
        game.set_category("Tabuleiro").unwrap();
        game.set_age_rating(18).unwrap();

        assert_eq!(game.name(), "Xadrez");
        assert_eq!(game.price(), Decimal::new(1550, 2));
        assert_eq!(game.category(), "Tabuleiro");
        assert_eq!(game.age_rating(), 18);
    }

    #[test]
    fn test_equality_uses_name_only() {
        let a = Game::new("Chess", Decimal::ONE, "Board", 0).unwrap();
        let b = Game::new("Chess", Decimal::new(999, 0), "Strategy", 18).unwrap();
        let c = Game::new("chess", Decimal::ONE, "Board", 0).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Game> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_line() {
        assert_eq!(chess().to_string(), "Chess | Board | R$ 20,00 | 0+");
    }

    #[test]
    fn test_details_sheet() {
        let sheet = chess().details().to_string();
        let lines: Vec<&str> = sheet.lines().collect();
        assert_eq!(lines[0], "Nome do jogo: Chess");
        assert_eq!(lines[1], "Categoria: Board");
        assert_eq!(lines[2], "Preço do jogo: R$ 20,00");
        assert_eq!(lines[3], "Classificação etária: 0+");
        assert!(lines[4].starts_with("---"));
    }

    #[test]
    fn test_json_round_trip_is_validated() {
        let json = serde_json::to_string(&chess()).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back.price(), Decimal::new(2000, 2));
        assert_eq!(back.age_rating(), 0);

        let bad = r#"{"nome":"X","preco":"1.00","categoria":"RPG","classificacao_etaria":4}"#;
        assert!(serde_json::from_str::<Game>(bad).is_err());

        let negative = r#"{"nome":"X","preco":"-1.00","categoria":"RPG","classificacao_etaria":0}"#;
        assert!(serde_json::from_str::<Game>(negative).is_err());
    }
}

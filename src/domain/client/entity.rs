use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::invariants::{
    validate_balance, validate_client_name, validate_deposit, validate_email, validate_library,
};
use crate::domain::game::Game;
use crate::domain::money::format_currency;
use crate::domain::{DomainError, DomainResult, DEFAULT_NAME};

/// Email assigned when the caller does not supply one
pub const DEFAULT_EMAIL: &str = "sememail@dominio.com";

/// A store client with a balance and a library of owned games
///
/// The email is the identity key: two clients with the same email are the
/// same client, whatever their name or balance.
/// Balance and library only change through `add_balance` and `buy_game`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ClientRecord")]
pub struct Client {
    nome: String,

    /// Identity key, must contain '@'
    email: String,

    /// Available funds, never negative
    saldo: Decimal,

    /// Owned games in purchase order, unique by game name
    biblioteca: Vec<Game>,
}

/// Unvalidated wire shape of a `Client`
#[derive(Deserialize)]
struct ClientRecord {
    nome: String,
    email: String,
    saldo: Decimal,
    #[serde(default)]
    biblioteca: Vec<Game>,
}

impl TryFrom<ClientRecord> for Client {
    type Error = DomainError;

    fn try_from(record: ClientRecord) -> Result<Self, Self::Error> {
        let mut client = Client::new(record.nome, record.email, record.saldo)?;
        validate_library(&record.biblioteca)?;
        client.biblioteca = record.biblioteca;
        Ok(client)
    }
}

impl Client {
    /// Create a new Client with an empty library
    pub fn new(
        nome: impl Into<String>,
        email: impl Into<String>,
        saldo_inicial: Decimal,
    ) -> DomainResult<Self> {
        let nome = nome.into();
        validate_client_name(&nome)?;
        let email = email.into();
        validate_email(&email)?;
        validate_balance(saldo_inicial)?;

        Ok(Self {
            nome,
            email,
            saldo: saldo_inicial,
            biblioteca: Vec::new(),
        })
    }

    /// Client starting with zero balance
    pub fn without_balance(nome: impl Into<String>, email: impl Into<String>) -> DomainResult<Self> {
        Self::new(nome, email, Decimal::ZERO)
    }

    /// Client with the placeholder email and zero balance
    pub fn named(nome: impl Into<String>) -> DomainResult<Self> {
        Self::new(nome, DEFAULT_EMAIL, Decimal::ZERO)
    }

    pub fn name(&self) -> &str {
        &self.nome
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn balance(&self) -> Decimal {
        self.saldo
    }

    pub fn library(&self) -> &[Game] {
        &self.biblioteca
    }

    pub fn set_name(&mut self, nome: impl Into<String>) -> DomainResult<()> {
        let nome = nome.into();
        validate_client_name(&nome)?;
        self.nome = nome;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> DomainResult<()> {
        let email = email.into();
        validate_email(&email)?;
        self.email = email;
        Ok(())
    }

    /// Add funds to the balance
    /// Amount must be strictly positive
    pub fn add_balance(&mut self, valor: Decimal) -> DomainResult<()> {
        validate_deposit(valor)?;
        self.saldo = self.saldo.checked_add(valor).ok_or_else(|| {
            DomainError::InvalidArgument(format!("Deposit of {} overflows balance", valor))
        })?;
        Ok(())
    }

    /// Whether a game with the same name is already in the library
    pub fn owns(&self, jogo: &Game) -> bool {
        self.biblioteca.contains(jogo)
    }

    /// Buy a game: debit its price and append it to the library
    ///
    /// Fails with `InsufficientFunds` when the price exceeds the balance,
    /// then with `DuplicateOwnership` when the game is already owned.
    /// On failure neither the balance nor the library is touched.
    pub fn buy_game(&mut self, jogo: &Game) -> DomainResult<()> {
        if jogo.price() > self.saldo {
            return Err(DomainError::InsufficientFunds {
                game: jogo.name().to_string(),
                price: jogo.price(),
                balance: self.saldo,
            });
        }

        if self.owns(jogo) {
            return Err(DomainError::DuplicateOwnership(jogo.name().to_string()));
        }

        // price <= saldo, so the subtraction stays in range and non-negative
        self.saldo -= jogo.price();
        self.biblioteca.push(jogo.clone());
        Ok(())
    }

    /// Owned games in purchase order, or `None` when nothing was bought yet
    pub fn list_library(&self) -> Option<&[Game]> {
        if self.biblioteca.is_empty() {
            None
        } else {
            Some(&self.biblioteca)
        }
    }

    /// Human-readable listing of the library
    pub fn library_report(&self) -> LibraryReport<'_> {
        LibraryReport(self)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self {
            nome: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            saldo: Decimal::ZERO,
            biblioteca: Vec::new(),
        }
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for Client {}

impl Hash for Client {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email.hash(state);
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Saldo: {}",
            self.nome,
            self.email,
            format_currency(&self.saldo)
        )
    }
}

/// Library listing of a `Client`, see `Client::library_report`
pub struct LibraryReport<'a>(&'a Client);

impl fmt::Display for LibraryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let client = self.0;
        write!(f, "Biblioteca de {}:", client.nome)?;
        match client.list_library() {
            None => write!(f, "\nNenhum jogo comprado ainda."),
            Some(jogos) => {
                for jogo in jogos {
                    write!(f, "\n- {}", jogo)?;
                }
                Ok(())
            }
        }
    }
}

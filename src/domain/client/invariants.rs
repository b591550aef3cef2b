use std::collections::HashSet;

use rust_decimal::Decimal;

use super::entity::Client;
use crate::domain::game::{validate_game, Game};
use crate::domain::{require_non_negative, require_not_blank, DomainError, DomainResult};

/// Validates all Client invariants, including every owned game
pub fn validate_client(client: &Client) -> DomainResult<()> {
    validate_client_name(client.name())?;
    validate_email(client.email())?;
    validate_balance(client.balance())?;
    validate_library(client.library())?;
    Ok(())
}

pub(crate) fn validate_client_name(nome: &str) -> DomainResult<()> {
    require_not_blank(nome, "Client name cannot be empty")
}

/// Minimal check only: the address must contain '@'
pub(crate) fn validate_email(email: &str) -> DomainResult<()> {
    if !email.contains('@') {
        return Err(DomainError::InvalidArgument(format!(
            "Invalid email: {:?}",
            email
        )));
    }
    Ok(())
}

pub(crate) fn validate_balance(saldo: Decimal) -> DomainResult<()> {
    require_non_negative(saldo, "Balance cannot be negative")
}

/// Deposits must be strictly positive
pub(crate) fn validate_deposit(valor: Decimal) -> DomainResult<()> {
    if valor <= Decimal::ZERO {
        return Err(DomainError::InvalidArgument(format!(
            "Amount to add must be positive: {}",
            valor
        )));
    }
    Ok(())
}

/// Library holds valid games, no two with the same name
pub(crate) fn validate_library(biblioteca: &[Game]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(biblioteca.len());
    for jogo in biblioteca {
        validate_game(jogo)?;
        if !seen.insert(jogo.name()) {
            return Err(DomainError::DuplicateOwnership(jogo.name().to_string()));
        }
    }
    Ok(())
}

/// Critical Client Invariants:
///
/// 1. Name is never blank
/// 2. Email always contains '@' and is the client's identity
/// 3. Balance is never negative
/// 4. Library keeps purchase order and never holds two games with the same name
/// 5. Balance and library change only through add_balance and buy_game
/// 6. A failed purchase changes nothing

//! Parsing of numeric form input (quantities typed by a user).

use crate::error::{DomainError, DomainResult};

/// Parse a stock quantity: a whole number, zero allowed.
pub fn parse_quantity(raw: &str) -> DomainResult<i64> {
    ensure_quantity(parse_integer(raw)?)
}

/// Parse a movement amount: a whole number greater than zero.
pub fn parse_amount(raw: &str) -> DomainResult<i64> {
    ensure_amount(parse_integer(raw)?)
}

pub fn ensure_quantity(value: i64) -> DomainResult<i64> {
    if value < 0 {
        return Err(DomainError::validation("quantity cannot be negative"));
    }
    Ok(value)
}

pub fn ensure_amount(value: i64) -> DomainResult<i64> {
    if value <= 0 {
        return Err(DomainError::validation("amount must be greater than zero"));
    }
    Ok(value)
}

fn parse_integer(raw: &str) -> DomainResult<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| DomainError::validation(format!("invalid quantity: {trimmed:?}")))
}

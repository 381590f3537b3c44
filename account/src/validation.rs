//! Payload validation run before any guard or repository call

use crate::{
    errors::{AccountError, Result},
    models::{AddressField, AddressFields},
};

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Checks that every must-fill field is present and non-blank in `payload`.
///
/// Missing fields are reported in the configured order.
pub fn check_must_fill(payload: &AddressFields, must_fill: &[AddressField]) -> Result<()> {
    let missing: Vec<&str> = must_fill
        .iter()
        .filter(|field| is_blank(payload.get(**field)))
        .map(|field| field.as_str())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AccountError::validation(missing))
    }
}

/// Basket item amounts must be positive.
pub fn check_amount(amount: i32) -> Result<u32> {
    u32::try_from(amount)
        .ok()
        .filter(|amount| *amount > 0)
        .ok_or_else(|| AccountError::validation(["amount"]))
}

/// Review ratings range from 1 to 5.
pub fn check_rating(rating: i32) -> Result<u8> {
    u8::try_from(rating)
        .ok()
        .filter(|rating| (1..=5).contains(rating))
        .ok_or_else(|| AccountError::validation(["rating"]))
}

pub fn check_price(price: f64) -> Result<()> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(AccountError::validation(["price"]))
    }
}

pub fn check_currency(currency: &str, allowed: &[String]) -> Result<()> {
    if allowed.iter().any(|c| c.eq_ignore_ascii_case(currency)) {
        Ok(())
    } else {
        Err(AccountError::validation(["currency"]))
    }
}

/// Minimal e-mail shape check: a non-empty local part and a dotted domain.
pub fn check_email(email: &str) -> Result<()> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty() && !domain.starts_with('.') && !domain.ends_with('.') && domain.contains('.')
        });

    if valid {
        Ok(())
    } else {
        Err(AccountError::validation(["email"]))
    }
}

pub fn check_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(AccountError::validation([field]))
    } else {
        Ok(())
    }
}

//! Conversion between user-entered token amounts and base units.

use alloy::primitives::U256;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when converting an amount to base units.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
	/// The text is not a decimal number.
	#[error("Amount is not a number: {0}")]
	NotANumber(String),
	/// The amount has more fractional digits than the token supports.
	#[error("Amount {amount} has more than {decimals} decimal places")]
	TooPrecise { amount: String, decimals: u32 },
	/// The amount is negative or too large to represent.
	#[error("Amount {0} is out of range")]
	OutOfRange(String),
}

/// Fractional digits the decimal type holds exactly.
const MAX_SCALE: u32 = 28;

/// Parses a user-entered amount, accepting plain and scientific notation.
///
/// Text the decimal type cannot hold exactly is rejected, never rounded.
pub fn parse_decimal(amount: &str) -> Result<Decimal, AmountError> {
	let trimmed = amount.trim();
	let numeric_text = trimmed
		.chars()
		.all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
	if !numeric_text || trimmed.parse::<f64>().is_err() {
		return Err(AmountError::NotANumber(trimmed.to_string()));
	}

	let scale = significant_fraction_digits(trimmed)
		.ok_or_else(|| AmountError::OutOfRange(trimmed.to_string()))?;
	if scale > i64::from(MAX_SCALE) {
		return Err(AmountError::TooPrecise {
			amount: trimmed.to_string(),
			decimals: MAX_SCALE,
		});
	}

	let value = Decimal::from_str(trimmed)
		.or_else(|_| Decimal::from_scientific(trimmed))
		.map_err(|_| AmountError::OutOfRange(trimmed.to_string()))?;

	// too many significant digits get rounded away on parse
	if i64::from(value.normalize().scale()) != scale {
		return Err(AmountError::OutOfRange(trimmed.to_string()));
	}

	Ok(value)
}

/// Fractional digits of a numeric literal once trailing zeros are dropped
/// and the exponent is applied. `None` when the exponent does not fit.
fn significant_fraction_digits(text: &str) -> Option<i64> {
	let (mantissa, exponent) = match text.find(['e', 'E']) {
		Some(index) => (&text[..index], text[index + 1..].parse::<i64>().ok()?),
		None => (text, 0),
	};
	let fraction = mantissa
		.split_once('.')
		.map_or("", |(_, fraction)| fraction)
		.trim_end_matches('0');

	Some((fraction.len() as i64).saturating_sub(exponent).max(0))
}

/// Returns true when the amount is exactly zero as typed.
///
/// Non-numeric input is not zero; it is left for the validator to reject.
/// Neither is a positive amount too small for the decimal type.
pub fn is_zero_amount(amount: &str) -> bool {
	parse_decimal(amount)
		.map(|value| value.is_zero())
		.unwrap_or(false)
}

/// Scales a token amount to base units (`amount * 10^decimals`).
///
/// The scaling is exact: fractional base units are rejected instead of
/// being rounded.
pub fn to_base_units(amount: &str, decimals: u32) -> Result<U256, AmountError> {
	let value = parse_decimal(amount)?;
	if value.is_sign_negative() && !value.is_zero() {
		return Err(AmountError::OutOfRange(amount.trim().to_string()));
	}

	let factor = 10u64
		.checked_pow(decimals)
		.map(Decimal::from)
		.ok_or_else(|| AmountError::OutOfRange(amount.trim().to_string()))?;
	let scaled = value
		.checked_mul(factor)
		.ok_or_else(|| AmountError::OutOfRange(amount.trim().to_string()))?;

	if !scaled.fract().is_zero() {
		return Err(AmountError::TooPrecise {
			amount: amount.trim().to_string(),
			decimals,
		});
	}

	scaled
		.trunc()
		.to_u128()
		.map(U256::from)
		.ok_or_else(|| AmountError::OutOfRange(amount.trim().to_string()))
}

/// Renders base units as a token amount, e.g. `9000000` with 6 decimals as `9`.
pub fn format_base_units(value: U256, decimals: u32) -> String {
	match u128::try_from(value)
		.ok()
		.and_then(|units| i128::try_from(units).ok())
		.and_then(|units| Decimal::try_from_i128_with_scale(units, decimals).ok())
	{
		Some(amount) => amount.normalize().to_string(),
		None => format!("{} base units", value),
	}
}

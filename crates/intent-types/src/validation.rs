//! Input validation for the wallet address and amount fields.
//!
//! Both checks are pure. Failures are collected per field so each one can be
//! reported next to the input it belongs to.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Message shown next to a rejected wallet address.
pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid Ethereum address";

/// Message shown next to a rejected amount.
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount";

static ADDRESS_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("address pattern compiles"));

/// Returns true iff `address` is `0x` followed by exactly 40 hex characters.
///
/// No checksum validation is performed.
pub fn validate_address(address: &str) -> bool {
	ADDRESS_PATTERN.is_match(address)
}

/// Returns true iff `amount` parses as a finite number greater than zero.
pub fn validate_amount(amount: &str) -> bool {
	amount
		.trim()
		.parse::<f64>()
		.map(|value| value.is_finite() && value > 0.0)
		.unwrap_or(false)
}

/// Field-scoped validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
	pub address: Option<String>,
	pub amount: Option<String>,
}

impl FieldErrors {
	pub fn is_empty(&self) -> bool {
		self.address.is_none() && self.amount.is_none()
	}

	/// One `field: message` line per rejected field.
	pub fn messages(&self) -> Vec<String> {
		[("address", &self.address), ("amount", &self.amount)]
			.into_iter()
			.filter_map(|(name, message)| message.as_ref().map(|m| format!("{}: {}", name, m)))
			.collect()
	}

	/// Errors with only the address field set.
	pub fn invalid_address() -> Self {
		Self {
			address: Some(INVALID_ADDRESS_MESSAGE.to_string()),
			amount: None,
		}
	}
}

impl fmt::Display for FieldErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.messages().join("; "))
	}
}

/// Runs both field validators and collects their messages.
pub fn validate_inputs(address: &str, amount: &str) -> Result<(), FieldErrors> {
	let mut errors = FieldErrors::default();

	if !validate_address(address) {
		errors.address = Some(INVALID_ADDRESS_MESSAGE.to_string());
	}
	if !validate_amount(amount) {
		errors.amount = Some(INVALID_AMOUNT_MESSAGE.to_string());
	}

	if errors.is_empty() {
		Ok(())
	} else {
		Err(errors)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_validate_address_accepts_any_case() {
		assert!(validate_address("0x1111111111111111111111111111111111111111"));
		assert!(validate_address("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"));
		assert!(validate_address("0xABCDEFABCDEFABCDEFABCDEFABCDEFABCDEFABCD"));
	}

	#[test]
	fn test_validate_address_rejects_wrong_shape() {
		let cases = [
			"",
			"not-an-address",
			"1111111111111111111111111111111111111111",
			"0x111111111111111111111111111111111111111",
			"0x11111111111111111111111111111111111111111",
			"0X1111111111111111111111111111111111111111",
			"0xg111111111111111111111111111111111111111",
			" 0x1111111111111111111111111111111111111111",
			"0x1111111111111111111111111111111111111111\n",
		];

		for case in cases {
			assert!(!validate_address(case), "accepted {:?}", case);
		}
	}

	#[test]
	fn test_validate_amount() {
		assert!(validate_amount("10"));
		assert!(validate_amount("0.000001"));
		assert!(validate_amount("1e3"));

		for case in ["0", "0.0", "-1", "-0.5", "", "abc", "NaN", "inf"] {
			assert!(!validate_amount(case), "accepted {:?}", case);
		}
	}

	#[test]
	fn test_validate_inputs_reports_each_field() {
		assert_eq!(
			validate_inputs("0x1111111111111111111111111111111111111111", "10"),
			Ok(())
		);

		assert_eq!(
			validate_inputs("not-an-address", "10"),
			Err(FieldErrors::invalid_address())
		);

		let both = validate_inputs("nope", "-3").unwrap_err();
		assert_eq!(both.address.as_deref(), Some(INVALID_ADDRESS_MESSAGE));
		assert_eq!(both.amount.as_deref(), Some(INVALID_AMOUNT_MESSAGE));
		assert_eq!(
			both.to_string(),
			"address: Invalid Ethereum address; amount: Please enter a valid amount"
		);
	}

	#[test]
	fn test_field_error_messages() {
		assert_eq!(
			FieldErrors::invalid_address().messages(),
			vec!["address: Invalid Ethereum address".to_string()]
		);
		assert!(FieldErrors::default().messages().is_empty());
		assert_eq!(FieldErrors::default().to_string(), "");
	}
}

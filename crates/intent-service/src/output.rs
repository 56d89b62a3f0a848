//! Rendering of generated intents, field errors and decoded order data.

use anyhow::{bail, Result};
use intent_types::{format_base_units, IntentOutcome, IntentPayload, IntentResult, OrderRecord};

/// Renders the three copyable values of a generated intent.
pub fn render_intent(result: &IntentResult, json: bool) -> Result<String> {
	let payload = IntentPayload::from(result);
	if json {
		return Ok(serde_json::to_string_pretty(&payload)?);
	}

	Ok(format!(
		"fillDeadline: {}\norderDataType: {}\norderData: {}",
		payload.fill_deadline, payload.order_data_type, payload.order_data
	))
}

/// Maps a generation outcome to the text printed on stdout.
///
/// A built intent renders its payload and a zero-amount no-op renders
/// nothing; both exit successfully. Field errors become an error so the
/// process exits non-zero.
pub fn render_outcome(outcome: &IntentOutcome, json: bool) -> Result<Option<String>> {
	match outcome {
		IntentOutcome::Skipped => Ok(None),
		IntentOutcome::Invalid(errors) => bail!("Invalid input: {}", errors),
		IntentOutcome::Built(result) => render_intent(result, json).map(Some),
	}
}

pub fn render_order_record(record: &OrderRecord, decimals: u32, json: bool) -> Result<String> {
	if json {
		let value = serde_json::json!({
			"inputToken": record.inputToken.to_string(),
			"inputAmount": record.inputAmount.to_string(),
			"outputToken": record.outputToken.to_string(),
			"outputAmount": record.outputAmount.to_string(),
			"destinationChainId": record.destinationChainId.to_string(),
			"recipient": record.recipient.to_string(),
			"exclusiveRelayer": record.exclusiveRelayer.to_string(),
			"depositNonce": record.depositNonce.to_string(),
			"exclusivityPeriod": record.exclusivityPeriod,
			"message": record.message.to_string(),
		});
		return Ok(serde_json::to_string_pretty(&value)?);
	}

	let lines = [
		format!("inputToken: {}", record.inputToken),
		format!(
			"inputAmount: {} ({})",
			record.inputAmount,
			format_base_units(record.inputAmount, decimals)
		),
		format!("outputToken: {}", record.outputToken),
		format!(
			"outputAmount: {} ({})",
			record.outputAmount,
			format_base_units(record.outputAmount, decimals)
		),
		format!("destinationChainId: {}", record.destinationChainId),
		format!("recipient: {}", record.recipient),
		format!("exclusiveRelayer: {}", record.exclusiveRelayer),
		format!("depositNonce: {}", record.depositNonce),
		format!("exclusivityPeriod: {}", record.exclusivityPeriod),
		format!("message: {}", record.message),
	];
	Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy::primitives::{address, b256, Address, Bytes, U256};
	use intent_types::FieldErrors;

	fn sample_result() -> IntentResult {
		IntentResult {
			fill_deadline: 1_700_001_800,
			order_data_type: b256!(
				"9df4b782e7bbc178b3b93bfe8aafb909e84e39484d7f3c59f400f1b4691f85e2"
			),
			order_data: Bytes::from(vec![0x00, 0x20]),
		}
	}

	fn sample_record() -> OrderRecord {
		OrderRecord {
			inputToken: address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913"),
			inputAmount: U256::from(10_000_000u64),
			outputToken: address!("af88d065e77c8cc2239327c5edb3a432268e5831"),
			outputAmount: U256::from(9_000_000u64),
			destinationChainId: U256::from(42161u64),
			recipient: b256!("0000000000000000000000001111111111111111111111111111111111111111"),
			exclusiveRelayer: Address::ZERO,
			depositNonce: U256::ZERO,
			exclusivityPeriod: 0,
			message: Bytes::new(),
		}
	}

	#[test]
	fn test_render_intent_plain() {
		let text = render_intent(&sample_result(), false).unwrap();
		assert_eq!(
			text,
			"fillDeadline: 1700001800\n\
			 orderDataType: 0x9df4b782e7bbc178b3b93bfe8aafb909e84e39484d7f3c59f400f1b4691f85e2\n\
			 orderData: 0x0020"
		);
	}

	#[test]
	fn test_render_intent_json() {
		let text = render_intent(&sample_result(), true).unwrap();
		let value: serde_json::Value = serde_json::from_str(&text).unwrap();
		assert_eq!(value["fillDeadline"], 1_700_001_800u32);
		assert_eq!(value["orderData"], "0x0020");
	}

	#[test]
	fn test_skipped_outcome_prints_nothing_and_succeeds() {
		assert_eq!(render_outcome(&IntentOutcome::Skipped, false).unwrap(), None);
	}

	#[test]
	fn test_invalid_outcome_fails_with_field_messages() {
		let errors = FieldErrors {
			address: Some("Invalid Ethereum address".to_string()),
			amount: Some("Please enter a valid amount".to_string()),
		};

		let err = render_outcome(&IntentOutcome::Invalid(errors), false).unwrap_err();
		assert_eq!(
			err.to_string(),
			"Invalid input: address: Invalid Ethereum address; amount: Please enter a valid amount"
		);
	}

	#[test]
	fn test_built_outcome_prints_payload() {
		let rendered = render_outcome(&IntentOutcome::Built(sample_result()), false)
			.unwrap()
			.unwrap();
		assert_eq!(rendered, render_intent(&sample_result(), false).unwrap());
	}

	#[test]
	fn test_render_order_record() {
		let text = render_order_record(&sample_record(), 6, false).unwrap();
		assert!(text.contains("outputAmount: 9000000 (9)"));
		assert!(text.contains("destinationChainId: 42161"));
		assert!(text.contains("message: 0x"));

		let json = render_order_record(&sample_record(), 6, true).unwrap();
		let value: serde_json::Value = serde_json::from_str(&json).unwrap();
		assert_eq!(value["outputAmount"], "9000000");
		assert_eq!(
			value["recipient"],
			"0x0000000000000000000000001111111111111111111111111111111111111111"
		);
	}
}

//! Order record and generated intent payload.

use crate::validation::FieldErrors;
use alloy::primitives::{Bytes, B256};
use alloy::sol;
use serde::Serialize;

sol! {
	/// Order data tuple interpreted by the settlement contract.
	///
	/// Field order must match the tuple hashed into `orderDataType`.
	#[derive(Debug, PartialEq, Eq)]
	struct OrderRecord {
		address inputToken;
		uint256 inputAmount;
		address outputToken;
		uint256 outputAmount;
		uint256 destinationChainId;
		bytes32 recipient;
		address exclusiveRelayer;
		uint256 depositNonce;
		uint32 exclusivityPeriod;
		bytes message;
	}
}

/// A generated intent, ready to be copied into an `open` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentResult {
	/// Latest unix timestamp at which the intent may be filled.
	pub fill_deadline: u32,
	pub order_data_type: B256,
	/// ABI encoding of the [`OrderRecord`].
	pub order_data: Bytes,
}

/// Text form of an [`IntentResult`], as displayed and copied by users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentPayload {
	pub fill_deadline: u32,
	pub order_data_type: String,
	pub order_data: String,
}

impl From<&IntentResult> for IntentPayload {
	fn from(result: &IntentResult) -> Self {
		Self {
			fill_deadline: result.fill_deadline,
			order_data_type: result.order_data_type.to_string(),
			order_data: result.order_data.to_string(),
		}
	}
}

/// Outcome of a single generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
	/// The amount was exactly zero; nothing was generated.
	Skipped,
	/// One or more input fields were rejected.
	Invalid(FieldErrors),
	/// The intent was generated.
	Built(IntentResult),
}

impl IntentOutcome {
	pub fn result(&self) -> Option<&IntentResult> {
		match self {
			IntentOutcome::Built(result) => Some(result),
			_ => None,
		}
	}
}

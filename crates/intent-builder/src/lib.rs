//! Intent payload construction.
//!
//! The [`IntentBuilder`] turns a wallet address and a token amount into the
//! `fillDeadline`, `orderDataType` and `orderData` values needed to open a
//! cross-chain intent. The relay fee is looked up through an injected
//! [`FeeQuoter`], so tests and offline runs can substitute their own source.

use alloy::primitives::Address;
use intent_fees::{FeeError, FeeQuoteRequest, FeeQuoter};
use intent_types::{
	is_zero_amount, to_base_units, validate_inputs, AmountError, FieldErrors, IntentOutcome,
	IntentResult, Route,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

pub mod encoding;

pub use encoding::{
	build_order_record, compute_output_amount, decode_order_data, encode_order_data, pad_address,
	EncodingError,
};

/// General (not field-scoped) failures of a generation attempt.
#[derive(Debug, Error)]
pub enum BuildError {
	#[error("Fee lookup failed: {0}")]
	FeeLookup(#[from] FeeError),

	#[error("Invalid amount: {0}")]
	Amount(#[from] AmountError),

	#[error("Encoding failed: {0}")]
	Encoding(#[from] EncodingError),

	#[error("Fill deadline {0} does not fit in uint32")]
	DeadlineOutOfRange(u64),
}

/// Returns the fill deadline for an intent generated at `now`.
pub fn fill_deadline_from(now: u64, offset_secs: u64) -> Result<u32, BuildError> {
	let deadline = now.saturating_add(offset_secs);
	u32::try_from(deadline).map_err(|_| BuildError::DeadlineOutOfRange(deadline))
}

fn unix_now() -> u64 {
	u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default()
}

/// Builds intents along a single route using an injected fee source.
///
/// The builder holds no mutable state; concurrent calls are independent and
/// each performs its own fee lookup.
pub struct IntentBuilder {
	route: Route,
	quoter: Arc<dyn FeeQuoter>,
}

impl IntentBuilder {
	pub fn new(route: Route, quoter: Arc<dyn FeeQuoter>) -> Self {
		Self { route, quoter }
	}

	/// Generates an intent for `amount` tokens sent to `address`.
	///
	/// An amount of exactly zero is a no-op and yields
	/// [`IntentOutcome::Skipped`] without contacting the fee source. Field
	/// validation failures yield [`IntentOutcome::Invalid`], also before any
	/// fee lookup. Fee, amount precision and encoding failures are returned
	/// as [`BuildError`].
	pub async fn build_intent(
		&self,
		address: &str,
		amount: &str,
	) -> Result<IntentOutcome, BuildError> {
		self.build_intent_at(address, amount, unix_now()).await
	}

	/// Same as [`IntentBuilder::build_intent`] with an explicit current time.
	pub async fn build_intent_at(
		&self,
		address: &str,
		amount: &str,
		now: u64,
	) -> Result<IntentOutcome, BuildError> {
		if is_zero_amount(amount) {
			debug!("Amount is zero, nothing to generate");
			return Ok(IntentOutcome::Skipped);
		}

		if let Err(errors) = validate_inputs(address, amount) {
			debug!("Rejected input: {}", errors);
			return Ok(IntentOutcome::Invalid(errors));
		}

		let Ok(recipient) = address.parse::<Address>() else {
			return Ok(IntentOutcome::Invalid(FieldErrors::invalid_address()));
		};

		let input_amount = to_base_units(amount, self.route.token_decimals)?;

		let quote = self
			.quoter
			.quote(&FeeQuoteRequest::for_route(&self.route, input_amount))
			.await
			.map_err(|e| {
				error!("Error fetching fees from {}: {}", self.quoter.name(), e);
				BuildError::FeeLookup(e)
			})?;

		if quote.is_amount_too_low {
			warn!(
				"Fee source reports amount {} as too low to relay",
				input_amount
			);
		}

		let output_amount = compute_output_amount(input_amount, quote.total_relay_fee)?;
		debug!(
			"Input amount {}, relay fee {}, output amount {}",
			input_amount, quote.total_relay_fee, output_amount
		);

		let fill_deadline = fill_deadline_from(now, self.route.fill_deadline_offset_secs)?;
		let record = build_order_record(&self.route, input_amount, output_amount, recipient)?;
		let order_data = encode_order_data(&record);

		info!(
			"Generated intent for {} with fill deadline {} ({} bytes of order data)",
			recipient,
			fill_deadline,
			order_data.len()
		);

		Ok(IntentOutcome::Built(IntentResult {
			fill_deadline,
			order_data_type: self.route.order_data_type,
			order_data,
		}))
	}
}

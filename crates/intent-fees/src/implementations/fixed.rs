//! Fee quoter that always returns the same fee.

use crate::{FeeError, FeeQuote, FeeQuoteRequest, FeeQuoter};
use alloy::primitives::U256;
use async_trait::async_trait;
use tracing::debug;

/// Fee source with a fixed total relay fee, for offline generation.
#[derive(Debug, Clone)]
pub struct FixedFeeQuoter {
	total_relay_fee: U256,
}

impl FixedFeeQuoter {
	pub fn new(total_relay_fee: U256) -> Self {
		Self { total_relay_fee }
	}
}

#[async_trait]
impl FeeQuoter for FixedFeeQuoter {
	fn name(&self) -> &str {
		"fixed"
	}

	async fn quote(&self, request: &FeeQuoteRequest) -> Result<FeeQuote, FeeError> {
		debug!(
			"Using fixed relay fee {} for amount {}",
			self.total_relay_fee, request.amount
		);
		Ok(FeeQuote::with_total(self.total_relay_fee))
	}
}

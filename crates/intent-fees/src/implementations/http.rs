//! Fee quoter backed by the suggested-fees HTTP API.

use crate::types::SuggestedFeesResponse;
use crate::{FeeError, FeeQuote, FeeQuoteRequest, FeeQuoter};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Queries `GET <endpoint>?inputToken=..&outputToken=..&originChainId=..&destinationChainId=..&amount=..`
/// and reads `totalRelayFee.total` from the JSON response.
#[derive(Debug, Clone)]
pub struct HttpFeeQuoter {
	client: Client,
	endpoint: String,
}

impl HttpFeeQuoter {
	/// Creates a quoter with its own HTTP client.
	///
	/// Without a timeout a stalled request waits indefinitely.
	pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FeeError> {
		let mut builder = Client::builder();
		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}
		let client = builder
			.build()
			.map_err(|e| FeeError::Client(e.to_string()))?;

		Ok(Self::with_client(client, endpoint))
	}

	/// Creates a quoter that shares an existing HTTP client.
	pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
		Self {
			client,
			endpoint: endpoint.into(),
		}
	}
}

#[async_trait]
impl FeeQuoter for HttpFeeQuoter {
	fn name(&self) -> &str {
		"suggested-fees"
	}

	async fn quote(&self, request: &FeeQuoteRequest) -> Result<FeeQuote, FeeError> {
		let query = [
			("inputToken", request.input_token.to_string()),
			("outputToken", request.output_token.to_string()),
			("originChainId", request.origin_chain_id.to_string()),
			("destinationChainId", request.destination_chain_id.to_string()),
			("amount", request.amount.to_string()),
		];

		debug!("Requesting suggested fees from {} with {:?}", self.endpoint, query);

		let response = self
			.client
			.get(&self.endpoint)
			.query(&query)
			.send()
			.await
			.map_err(|e| FeeError::Transport(e.to_string()))?;

		if !response.status().is_success() {
			let status = response.status().as_u16();
			let body = response.text().await.unwrap_or_default();
			return Err(FeeError::Status { status, body });
		}

		let body: SuggestedFeesResponse = response
			.json()
			.await
			.map_err(|e| FeeError::InvalidResponse(e.to_string()))?;
		let quote = FeeQuote::from(body);

		info!(
			"Received relay fee {} for amount {}",
			quote.total_relay_fee, request.amount
		);
		debug!(
			"Quote details: pct={:?} timestamp={:?} amount_too_low={}",
			quote.relay_fee_pct, quote.quote_timestamp, quote.is_amount_too_low
		);

		Ok(quote)
	}
}

//! Relay fee quoting for the intent generator.
//!
//! This module defines the interface the intent builder uses to obtain the
//! relay fee for a transfer, along with an HTTP implementation backed by the
//! suggested-fees API and a fixed-fee implementation for offline use.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use intent_types::Route;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod fixed;
	pub mod http;
}

pub mod types;

pub use implementations::fixed::FixedFeeQuoter;
pub use implementations::http::HttpFeeQuoter;
pub use types::FeeQuote;

/// Errors that can occur while looking up a fee quote.
#[derive(Debug, Error)]
pub enum FeeError {
	/// Error that occurs when the HTTP client cannot be constructed.
	#[error("Failed to build HTTP client: {0}")]
	Client(String),
	/// Error that occurs when the request cannot be sent or times out.
	#[error("Fee request failed: {0}")]
	Transport(String),
	/// Error that occurs when the endpoint answers with a non-success status.
	#[error("Fee request failed with status {status}: {body}")]
	Status { status: u16, body: String },
	/// Error that occurs when the response body cannot be interpreted.
	#[error("Invalid fee response: {0}")]
	InvalidResponse(String),
}

/// Parameters of a fee quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeQuoteRequest {
	pub input_token: Address,
	pub output_token: Address,
	pub origin_chain_id: u64,
	pub destination_chain_id: u64,
	/// Input amount in base units.
	pub amount: U256,
}

impl FeeQuoteRequest {
	/// Builds a request for `amount` base units along `route`.
	pub fn for_route(route: &Route, amount: U256) -> Self {
		Self {
			input_token: route.input_token,
			output_token: route.output_token,
			origin_chain_id: route.origin_chain_id,
			destination_chain_id: route.destination_chain_id,
			amount,
		}
	}
}

/// Trait defining the interface for relay fee sources.
///
/// Implementations must report failures as [`FeeError`]; a default fee is
/// never substituted.
#[async_trait]
pub trait FeeQuoter: Send + Sync {
	/// Returns a short name for logging.
	fn name(&self) -> &str;

	/// Looks up the total relay fee for the given transfer.
	async fn quote(&self, request: &FeeQuoteRequest) -> Result<FeeQuote, FeeError>;
}

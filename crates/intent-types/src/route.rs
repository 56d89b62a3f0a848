//! The single token route intents are generated for.

use alloy::primitives::{address, b256, Address, B256};

/// USDC on Base (origin chain).
pub const BASE_USDC: Address = address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913");

/// USDC on Arbitrum (destination chain).
pub const ARBITRUM_USDC: Address = address!("af88d065e77c8cc2239327c5edb3a432268e5831");

pub const BASE_CHAIN_ID: u64 = 8453;

pub const ARBITRUM_CHAIN_ID: u64 = 42161;

/// USDC is a 6-decimal token.
pub const USDC_DECIMALS: u32 = 6;

/// Seconds between generation time and the intent's fill deadline.
pub const FILL_DEADLINE_OFFSET_SECS: u64 = 30 * 60;

/// Type hash of the order data tuple expected by the settlement contract.
pub const ORDER_DATA_TYPE: B256 =
	b256!("9df4b782e7bbc178b3b93bfe8aafb909e84e39484d7f3c59f400f1b4691f85e2");

/// Fee suggestion endpoint queried for the relay fee.
pub const SUGGESTED_FEES_URL: &str = "https://app.across.to/api/suggested-fees";

/// Token pair, chains and payload constants used to build an intent.
///
/// The default is the USDC Base -> Arbitrum route. A configuration file may
/// swap the values, but the generator always works with exactly one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
	/// Token deposited on the origin chain.
	pub input_token: Address,
	/// Token received on the destination chain.
	pub output_token: Address,
	pub origin_chain_id: u64,
	pub destination_chain_id: u64,
	/// Decimals shared by the input and output token.
	pub token_decimals: u32,
	pub fill_deadline_offset_secs: u64,
	pub order_data_type: B256,
}

impl Default for Route {
	fn default() -> Self {
		Self {
			input_token: BASE_USDC,
			output_token: ARBITRUM_USDC,
			origin_chain_id: BASE_CHAIN_ID,
			destination_chain_id: ARBITRUM_CHAIN_ID,
			token_decimals: USDC_DECIMALS,
			fill_deadline_offset_secs: FILL_DEADLINE_OFFSET_SECS,
			order_data_type: ORDER_DATA_TYPE,
		}
	}
}

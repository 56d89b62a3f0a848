//! Configuration types for the intent generator.

use crate::ConfigError;
use alloy::primitives::{Address, B256};
use intent_types::{validate_address, Route, SUGGESTED_FEES_URL};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Complete generator configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IntentConfig {
	/// Token route the intent is built for
	#[serde(default)]
	pub route: RouteConfig,
	/// Fee suggestion API settings
	#[serde(default)]
	pub fees: FeeApiConfig,
}

impl IntentConfig {
	/// Parses the route section into typed values.
	pub fn route(&self) -> Result<Route, ConfigError> {
		self.route.to_route()
	}
}

/// Route settings, kept as text until validated
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteConfig {
	/// Token deposited on the origin chain
	pub input_token: String,
	/// Token received on the destination chain
	pub output_token: String,
	pub origin_chain_id: u64,
	pub destination_chain_id: u64,
	/// Decimals of the route's token
	pub token_decimals: u32,
	/// Seconds added to the current time to get the fill deadline
	pub fill_deadline_offset_secs: u64,
	/// 32-byte type hash identifying the order data tuple
	pub order_data_type: String,
}

impl Default for RouteConfig {
	fn default() -> Self {
		let route = Route::default();
		Self {
			input_token: route.input_token.to_string(),
			output_token: route.output_token.to_string(),
			origin_chain_id: route.origin_chain_id,
			destination_chain_id: route.destination_chain_id,
			token_decimals: route.token_decimals,
			fill_deadline_offset_secs: route.fill_deadline_offset_secs,
			order_data_type: route.order_data_type.to_string(),
		}
	}
}

impl RouteConfig {
	pub fn to_route(&self) -> Result<Route, ConfigError> {
		let order_data_type = B256::from_str(&self.order_data_type).map_err(|e| {
			ConfigError::ValidationError(format!(
				"order_data_type must be a 32-byte hex value: {}",
				e
			))
		})?;

		Ok(Route {
			input_token: parse_address("input_token", &self.input_token)?,
			output_token: parse_address("output_token", &self.output_token)?,
			origin_chain_id: self.origin_chain_id,
			destination_chain_id: self.destination_chain_id,
			token_decimals: self.token_decimals,
			fill_deadline_offset_secs: self.fill_deadline_offset_secs,
			order_data_type,
		})
	}
}

/// Fee suggestion API settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeeApiConfig {
	/// Suggested-fees endpoint URL
	pub endpoint: String,
	/// Request timeout; requests wait indefinitely when unset
	pub timeout_secs: Option<u64>,
}

impl Default for FeeApiConfig {
	fn default() -> Self {
		Self {
			endpoint: SUGGESTED_FEES_URL.to_string(),
			timeout_secs: None,
		}
	}
}

impl FeeApiConfig {
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_secs.map(Duration::from_secs)
	}
}

fn parse_address(field: &str, value: &str) -> Result<Address, ConfigError> {
	if !validate_address(value) {
		return Err(ConfigError::ValidationError(format!(
			"{} must be a valid Ethereum address, got {}",
			field, value
		)));
	}

	Address::from_str(value)
		.map_err(|e| ConfigError::ValidationError(format!("Invalid {}: {}", field, e)))
}

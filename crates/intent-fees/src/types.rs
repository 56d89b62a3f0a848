//! Wire types of the suggested-fees API.
//!
//! Only the fields the generator uses or logs are modelled; everything else in the
//! response is ignored.

use alloy::primitives::U256;
use serde::{de, Deserialize, Deserializer};

/// Relay fee quote in base units of the input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeQuote {
	/// Total relay fee charged for the transfer.
	pub total_relay_fee: U256,
	/// Fee as a fraction of the amount, scaled by 1e18.
	pub relay_fee_pct: Option<U256>,
	/// Set when the API considers the amount too small to relay.
	pub is_amount_too_low: bool,
	/// Unix time the quote was produced at, when reported.
	pub quote_timestamp: Option<u64>,
}

impl FeeQuote {
	/// A quote carrying only a total fee.
	pub fn with_total(total_relay_fee: U256) -> Self {
		Self {
			total_relay_fee,
			relay_fee_pct: None,
			is_amount_too_low: false,
			quote_timestamp: None,
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SuggestedFeesResponse {
	pub total_relay_fee: RelayFee,
	#[serde(default)]
	pub is_amount_too_low: Option<bool>,
	#[serde(default, deserialize_with = "deserialize_optional_timestamp")]
	pub timestamp: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelayFee {
	#[serde(deserialize_with = "deserialize_base_units")]
	pub total: U256,
	#[serde(default, deserialize_with = "deserialize_optional_base_units")]
	pub pct: Option<U256>,
}

impl From<SuggestedFeesResponse> for FeeQuote {
	fn from(response: SuggestedFeesResponse) -> Self {
		Self {
			total_relay_fee: response.total_relay_fee.total,
			relay_fee_pct: response.total_relay_fee.pct,
			is_amount_too_low: response.is_amount_too_low.unwrap_or(false),
			quote_timestamp: response.timestamp,
		}
	}
}

/// The API sends integer amounts either as decimal strings or as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
	Integer(u64),
	Float(f64),
	Text(String),
}

impl NumberOrString {
	fn into_base_units<E: de::Error>(self) -> Result<U256, E> {
		match self {
			NumberOrString::Integer(value) => Ok(U256::from(value)),
			NumberOrString::Float(value) => {
				if value.is_finite()
					&& value >= 0.0
					&& value.fract() == 0.0
					&& value <= u64::MAX as f64
				{
					Ok(U256::from(value as u64))
				} else {
					Err(E::custom(format!("Invalid base unit amount: {}", value)))
				}
			}
			NumberOrString::Text(text) => U256::from_str_radix(text.trim(), 10)
				.map_err(|e| E::custom(format!("Invalid base unit amount {:?}: {}", text, e))),
		}
	}
}

fn deserialize_base_units<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
	D: Deserializer<'de>,
{
	NumberOrString::deserialize(deserializer)?.into_base_units()
}

fn deserialize_optional_base_units<'de, D>(deserializer: D) -> Result<Option<U256>, D::Error>
where
	D: Deserializer<'de>,
{
	Option::<NumberOrString>::deserialize(deserializer)?
		.map(NumberOrString::into_base_units)
		.transpose()
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
	D: Deserializer<'de>,
{
	deserialize_optional_base_units(deserializer)?
		.map(|value| {
			u64::try_from(value).map_err(|_| {
				<D::Error as de::Error>::custom(format!("Timestamp {} is out of range", value))
			})
		})
		.transpose()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(body: serde_json::Value) -> Result<FeeQuote, serde_json::Error> {
		serde_json::from_value::<SuggestedFeesResponse>(body).map(FeeQuote::from)
	}

	#[test]
	fn test_total_as_string() {
		let quote = parse(serde_json::json!({
			"totalRelayFee": { "pct": "100000000000000000", "total": "1000000" },
			"isAmountTooLow": false,
			"timestamp": "1700000000",
		}))
		.unwrap();

		assert_eq!(quote.total_relay_fee, U256::from(1_000_000u64));
		assert_eq!(
			quote.relay_fee_pct,
			Some(U256::from(100_000_000_000_000_000u64))
		);
		assert!(!quote.is_amount_too_low);
		assert_eq!(quote.quote_timestamp, Some(1_700_000_000));
	}

	#[test]
	fn test_total_as_number() {
		let quote = parse(serde_json::json!({
			"totalRelayFee": { "total": 250000 },
			"isAmountTooLow": true,
		}))
		.unwrap();

		assert_eq!(quote.total_relay_fee, U256::from(250_000u64));
		assert_eq!(quote.relay_fee_pct, None);
		assert!(quote.is_amount_too_low);
		assert_eq!(quote.quote_timestamp, None);
	}

	#[test]
	fn test_numeric_timestamp() {
		let quote = parse(serde_json::json!({
			"totalRelayFee": { "total": "1" },
			"timestamp": 1700000123u64,
		}))
		.unwrap();
		assert_eq!(quote.quote_timestamp, Some(1_700_000_123));

		assert!(parse(serde_json::json!({
			"totalRelayFee": { "total": "1" },
			"timestamp": "soon",
		}))
		.is_err());
	}

	#[test]
	fn test_missing_total_is_rejected() {
		assert!(parse(serde_json::json!({ "totalRelayFee": {} })).is_err());
		assert!(parse(serde_json::json!({ "relayFeeTotal": "1" })).is_err());
	}

	#[test]
	fn test_non_integer_total_is_rejected() {
		assert!(parse(serde_json::json!({ "totalRelayFee": { "total": "1.5" } })).is_err());
		assert!(parse(serde_json::json!({ "totalRelayFee": { "total": 1.5 } })).is_err());
		assert!(parse(serde_json::json!({ "totalRelayFee": { "total": -1 } })).is_err());
	}
}

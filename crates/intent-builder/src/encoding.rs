//! Order record construction and ABI encoding.

use alloy::primitives::{Address, Bytes, B256, I256, U256};
use alloy::sol_types::SolValue;
use intent_types::{OrderRecord, Route};
use thiserror::Error;

/// Errors that can occur while encoding or decoding order data.
#[derive(Debug, Error)]
pub enum EncodingError {
	/// The relay fee exceeds the input amount, so the output is negative.
	#[error("Output amount {0} is negative and cannot be encoded as uint256")]
	NegativeOutputAmount(I256),
	/// An amount does not fit the signed arithmetic used for fee deduction.
	#[error("Amount {0} is out of range")]
	AmountOutOfRange(U256),
	/// The bytes are not a valid ABI encoding of an order record.
	#[error("Invalid order data: {0}")]
	InvalidOrderData(String),
}

/// Left-pads a 20-byte address to a 32-byte word.
pub fn pad_address(address: Address) -> B256 {
	let mut bytes32 = [0u8; 32];
	bytes32[12..32].copy_from_slice(address.as_slice());
	B256::from(bytes32)
}

/// Subtracts the relay fee from the input amount.
///
/// The result is not floored at zero: a fee larger than the input yields a
/// negative amount, which later fails to encode.
pub fn compute_output_amount(input_amount: U256, relay_fee: U256) -> Result<I256, EncodingError> {
	let input =
		I256::try_from(input_amount).map_err(|_| EncodingError::AmountOutOfRange(input_amount))?;
	let fee = I256::try_from(relay_fee).map_err(|_| EncodingError::AmountOutOfRange(relay_fee))?;
	Ok(input - fee)
}

/// Assembles the order record for a transfer of `input_amount` to `recipient`.
///
/// The exclusive relayer is the zero address, and the deposit nonce,
/// exclusivity period and message are all empty.
pub fn build_order_record(
	route: &Route,
	input_amount: U256,
	output_amount: I256,
	recipient: Address,
) -> Result<OrderRecord, EncodingError> {
	if output_amount.is_negative() {
		return Err(EncodingError::NegativeOutputAmount(output_amount));
	}

	Ok(OrderRecord {
		inputToken: route.input_token,
		inputAmount: input_amount,
		outputToken: route.output_token,
		outputAmount: output_amount.into_raw(),
		destinationChainId: U256::from(route.destination_chain_id),
		recipient: pad_address(recipient),
		exclusiveRelayer: Address::ZERO,
		depositNonce: U256::ZERO,
		exclusivityPeriod: 0,
		message: Bytes::new(),
	})
}

/// ABI-encodes the record as a single tuple value.
pub fn encode_order_data(record: &OrderRecord) -> Bytes {
	Bytes::from(record.abi_encode())
}

/// Decodes order data produced by [`encode_order_data`].
pub fn decode_order_data(data: &[u8]) -> Result<OrderRecord, EncodingError> {
	OrderRecord::abi_decode(data).map_err(|e| EncodingError::InvalidOrderData(e.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy::primitives::address;

	fn sample_record() -> OrderRecord {
		build_order_record(
			&Route::default(),
			U256::from(10_000_000u64),
			I256::try_from(9_000_000i64).unwrap(),
			address!("1111111111111111111111111111111111111111"),
		)
		.unwrap()
	}

	#[test]
	fn test_pad_address() {
		let address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
		let padded = pad_address(address);

		assert_eq!(padded.len(), 32);
		assert_eq!(&padded[..12], &[0u8; 12]);
		assert_eq!(&padded[12..], address.as_slice());
		assert_eq!(
			padded.to_string(),
			"0x000000000000000000000000aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
		);
	}

	#[test]
	fn test_compute_output_amount() {
		let output =
			compute_output_amount(U256::from(10_000_000u64), U256::from(1_000_000u64)).unwrap();
		assert_eq!(output, I256::try_from(9_000_000i64).unwrap());

		let negative = compute_output_amount(U256::from(100u64), U256::from(250u64)).unwrap();
		assert_eq!(negative, I256::try_from(-150i64).unwrap());

		assert!(matches!(
			compute_output_amount(U256::MAX, U256::ZERO),
			Err(EncodingError::AmountOutOfRange(_))
		));
	}

	#[test]
	fn test_build_order_record_fixed_fields() {
		let record = sample_record();

		assert_eq!(record.inputToken, Route::default().input_token);
		assert_eq!(record.outputToken, Route::default().output_token);
		assert_eq!(record.inputAmount, U256::from(10_000_000u64));
		assert_eq!(record.outputAmount, U256::from(9_000_000u64));
		assert_eq!(record.destinationChainId, U256::from(42161u64));
		assert_eq!(record.exclusiveRelayer, Address::ZERO);
		assert_eq!(record.depositNonce, U256::ZERO);
		assert_eq!(record.exclusivityPeriod, 0);
		assert!(record.message.is_empty());
	}

	#[test]
	fn test_negative_output_is_not_encodable() {
		let result = build_order_record(
			&Route::default(),
			U256::from(100u64),
			I256::try_from(-150i64).unwrap(),
			Address::ZERO,
		);

		assert!(matches!(
			result,
			Err(EncodingError::NegativeOutputAmount(amount)) if amount == I256::try_from(-150i64).unwrap()
		));
	}

	#[test]
	fn test_zero_output_is_encodable() {
		let record = build_order_record(
			&Route::default(),
			U256::from(100u64),
			I256::ZERO,
			Address::ZERO,
		)
		.unwrap();
		assert_eq!(record.outputAmount, U256::ZERO);
	}

	#[test]
	fn test_encoding_layout() {
		let encoded = encode_order_data(&sample_record());

		// offset word, ten head words, then the empty message length word
		assert_eq!(encoded.len(), 32 * 12);
		assert_eq!(&encoded[..32], &U256::from(32u64).to_be_bytes::<32>());
		assert_eq!(&encoded[32 + 12..64], Route::default().input_token.as_slice());
		assert_eq!(
			&encoded[32 + 3 * 32..32 + 4 * 32],
			&U256::from(9_000_000u64).to_be_bytes::<32>()
		);
		// message offset, relative to the tuple start
		assert_eq!(
			&encoded[32 + 9 * 32..32 + 10 * 32],
			&U256::from(320u64).to_be_bytes::<32>()
		);
		assert_eq!(&encoded[32 * 11..], &[0u8; 32]);
	}

	#[test]
	fn test_encode_decode_round_trip() {
		let record = OrderRecord {
			message: Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]),
			exclusivityPeriod: 600,
			depositNonce: U256::from(7u64),
			exclusiveRelayer: address!("2222222222222222222222222222222222222222"),
			..sample_record()
		};

		let decoded = decode_order_data(&encode_order_data(&record)).unwrap();
		assert_eq!(decoded, record);
	}

	#[test]
	fn test_decode_rejects_garbage() {
		assert!(matches!(
			decode_order_data(&[0x01, 0x02, 0x03]),
			Err(EncodingError::InvalidOrderData(_))
		));
	}
}

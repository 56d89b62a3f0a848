//! Command-line interface definitions.

use alloy::primitives::U256;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "intent-gen")]
#[command(about = "Cross-chain intent payload generator", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	/// Path to configuration file
	#[arg(short, long, value_name = "FILE", env = "INTENT_CONFIG_FILE")]
	pub config: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, env = "INTENT_LOG_LEVEL", default_value = "warn")]
	pub log_level: String,

	/// Emit logs as JSON
	#[arg(long)]
	pub log_json: bool,

	/// Subcommand to execute
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Generate fillDeadline, orderDataType and orderData for a transfer
	Generate {
		/// Recipient wallet address on the destination chain
		#[arg(short, long)]
		address: String,

		/// Amount of the input token, e.g. 10 or 2.5
		#[arg(short = 'n', long, allow_hyphen_values = true)]
		amount: String,

		/// Use this relay fee (base units) instead of querying the fee API
		#[arg(long, value_parser = parse_base_units)]
		fee: Option<U256>,

		/// Print the payload as JSON
		#[arg(long)]
		json: bool,
	},

	/// Decode orderData back into its order record fields
	Decode {
		/// Hex-encoded order data, with or without 0x prefix
		order_data: String,

		/// Print the record as JSON
		#[arg(long)]
		json: bool,
	},

	/// Validate the configuration and print the route
	ValidateConfig,
}

fn parse_base_units(value: &str) -> Result<U256, String> {
	U256::from_str_radix(value.trim(), 10)
		.map_err(|e| format!("expected an integer amount of base units: {}", e))
}

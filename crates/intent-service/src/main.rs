use anyhow::{Context, Result};
use clap::Parser;
use intent_builder::{decode_order_data, IntentBuilder};
use intent_config::{ConfigLoader, IntentConfig};
use intent_fees::{FeeQuoter, FixedFeeQuoter, HttpFeeQuoter};
use intent_types::IntentOutcome;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod output;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	setup_tracing(&args.log_level, args.log_json)?;

	let config = load_config(&args).await?;

	match args.command {
		Command::Generate {
			address,
			amount,
			fee,
			json,
		} => {
			let quoter: Arc<dyn FeeQuoter> = match fee {
				Some(fee) => Arc::new(FixedFeeQuoter::new(fee)),
				None => Arc::new(
					HttpFeeQuoter::new(config.fees.endpoint.clone(), config.fees.timeout())
						.context("Failed to create fee client")?,
				),
			};
			generate(&config, quoter, &address, &amount, json).await
		}
		Command::Decode { order_data, json } => decode(&config, &order_data, json),
		Command::ValidateConfig => validate_config(&config),
	}
}

async fn load_config(args: &Args) -> Result<IntentConfig> {
	let mut loader = ConfigLoader::new();
	if let Some(path) = &args.config {
		loader = loader.with_file(path);
	}

	loader.load().await.context("Failed to load configuration")
}

async fn generate(
	config: &IntentConfig,
	quoter: Arc<dyn FeeQuoter>,
	address: &str,
	amount: &str,
	json: bool,
) -> Result<()> {
	let route = config.route()?;
	info!(
		"Generating intent from chain {} to chain {} using {} fees",
		route.origin_chain_id,
		route.destination_chain_id,
		quoter.name()
	);

	let builder = IntentBuilder::new(route, quoter);
	let outcome = builder
		.build_intent(address, amount)
		.await
		.context("Failed to generate intent")?;

	if matches!(outcome, IntentOutcome::Skipped) {
		info!("Amount is zero, no intent generated");
	}
	if let Some(rendered) = output::render_outcome(&outcome, json)? {
		println!("{}", rendered);
	}
	Ok(())
}

fn decode(config: &IntentConfig, order_data: &str, json: bool) -> Result<()> {
	let bytes = hex::decode(order_data.trim().trim_start_matches("0x"))
		.context("Order data is not valid hex")?;
	let record = decode_order_data(&bytes)?;
	let route = config.route()?;

	println!(
		"{}",
		output::render_order_record(&record, route.token_decimals, json)?
	);
	Ok(())
}

fn validate_config(config: &IntentConfig) -> Result<()> {
	let route = config.route()?;

	println!("Configuration is valid");
	println!("  Input token: {} (chain {})", route.input_token, route.origin_chain_id);
	println!(
		"  Output token: {} (chain {})",
		route.output_token, route.destination_chain_id
	);
	println!("  Token decimals: {}", route.token_decimals);
	println!(
		"  Fill deadline offset: {}s",
		route.fill_deadline_offset_secs
	);
	println!("  Order data type: {}", route.order_data_type);
	println!("  Fee endpoint: {}", config.fees.endpoint);
	match config.fees.timeout_secs {
		Some(secs) => println!("  Fee timeout: {}s", secs),
		None => println!("  Fee timeout: none"),
	}

	Ok(())
}

fn setup_tracing(log_level: &str, json: bool) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	// stdout carries the payload only
	let json_layer = json.then(|| {
		tracing_subscriber::fmt::layer()
			.json()
			.with_writer(std::io::stderr)
	});
	let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(json_layer)
		.with(text_layer)
		.try_init()
		.context("Failed to initialize tracing")?;

	Ok(())
}

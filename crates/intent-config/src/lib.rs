//! Configuration loading for the intent generator.
//!
//! Configuration comes from an optional TOML file with `${VAR}` environment
//! substitution, followed by prefixed environment variable overrides. Every
//! value has a default, so running without a file yields the built-in route.

use regex::Regex;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

mod types;

pub use types::*;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
	file_path: Option<PathBuf>,
	env_prefix: String,
}

impl Default for ConfigLoader {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			env_prefix: "INTENT_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_path_buf());
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	pub async fn load(&self) -> Result<IntentConfig, ConfigError> {
		let mut config = match &self.file_path {
			Some(path) => self.load_from_file(path).await?,
			None => {
				debug!("No configuration file given, using built-in route");
				IntentConfig::default()
			}
		};

		self.apply_env_overrides(&mut config)?;
		self.validate_config(&config)?;

		Ok(config)
	}

	async fn load_from_file(&self, path: &Path) -> Result<IntentConfig, ConfigError> {
		info!("Loading configuration from {:?}", path);

		let content = tokio::fs::read_to_string(path).await.map_err(|e| {
			if e.kind() == std::io::ErrorKind::NotFound {
				ConfigError::FileNotFound(path.display().to_string())
			} else {
				ConfigError::IoError(e)
			}
		})?;

		let substituted_content = self.substitute_env_vars(&content)?;

		toml::from_str(&substituted_content).map_err(|e| ConfigError::ParseError(e.to_string()))
	}

	fn substitute_env_vars(&self, content: &str) -> Result<String, ConfigError> {
		let mut result = content.to_string();

		// Find and replace ${VAR_NAME} patterns
		let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::ParseError(e.to_string()))?;

		for cap in re.captures_iter(content) {
			let full_match = &cap[0];
			let var_name = &cap[1];

			let env_value = env::var(var_name)
				.map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;

			result = result.replace(full_match, &env_value);
		}

		Ok(result)
	}

	fn apply_env_overrides(&self, config: &mut IntentConfig) -> Result<(), ConfigError> {
		if let Ok(endpoint) = env::var(format!("{}FEE_ENDPOINT", self.env_prefix)) {
			debug!("Overriding fee endpoint from environment");
			config.fees.endpoint = endpoint;
		}

		if let Ok(timeout) = env::var(format!("{}FEE_TIMEOUT_SECS", self.env_prefix)) {
			config.fees.timeout_secs = Some(timeout.parse().map_err(|e| {
				ConfigError::ValidationError(format!("Invalid fee timeout: {}", e))
			})?);
		}

		Ok(())
	}

	fn validate_config(&self, config: &IntentConfig) -> Result<(), ConfigError> {
		let route = config.route()?;

		if route.origin_chain_id == route.destination_chain_id {
			return Err(ConfigError::ValidationError(format!(
				"Origin and destination chain must differ, both are {}",
				route.origin_chain_id
			)));
		}

		if route.input_token == route.output_token {
			return Err(ConfigError::ValidationError(format!(
				"Input and output token must differ, both are {}",
				route.input_token
			)));
		}

		if route.token_decimals > 18 {
			return Err(ConfigError::ValidationError(format!(
				"token_decimals must be at most 18, got {}",
				route.token_decimals
			)));
		}

		if route.fill_deadline_offset_secs == 0
			|| route.fill_deadline_offset_secs > u64::from(u32::MAX)
		{
			return Err(ConfigError::ValidationError(format!(
				"fill_deadline_offset_secs must be between 1 and {}, got {}",
				u32::MAX,
				route.fill_deadline_offset_secs
			)));
		}

		let endpoint = &config.fees.endpoint;
		if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
			return Err(ConfigError::ValidationError(format!(
				"Fee endpoint must be an http(s) URL, got {}",
				endpoint
			)));
		}

		if config.fees.timeout_secs == Some(0) {
			return Err(ConfigError::ValidationError(
				"Fee timeout must be positive when set".to_string(),
			));
		}

		Ok(())
	}
}

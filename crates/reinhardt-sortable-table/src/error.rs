//! Error types for sortable table configuration

use thiserror::Error;

/// Settings loading error type
#[derive(Debug, Error)]
pub enum SettingsError {
	/// Settings document could not be parsed
	#[error("Invalid sortable table settings: {0}")]
	Parse(#[from] serde_json::Error),

	/// A setting parsed but holds an unusable value
	#[error("Invalid value for '{field}': {reason}")]
	InvalidValue {
		/// Setting name
		field: &'static str,
		/// Why the value was rejected
		reason: String,
	},
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

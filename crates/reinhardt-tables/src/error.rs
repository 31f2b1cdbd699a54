//! Error types for table rendering

use thiserror::Error;

/// Table rendering error type
#[derive(Debug, Error)]
pub enum TableError {
	/// Column not registered on the table
	#[error("Column '{0}' not found")]
	ColumnNotFound(String),

	/// A row does not expose an attribute a column reads
	#[error("Attribute '{attribute}' is not defined on {resource}")]
	MissingAttribute {
		/// Attribute name that was looked up
		attribute: String,
		/// Description of the row the lookup ran against
		resource: String,
	},

	/// No route registered under the given name
	#[error("Reverse for '{0}' not found")]
	NoReverseMatch(String),

	/// A route pattern placeholder had no value
	#[error("Missing URL parameter '{param}' for route '{route}'")]
	MissingUrlParameter {
		/// Route name being reversed
		route: String,
		/// Placeholder without a value
		param: String,
	},

	/// A URL parameter value cannot fill a path segment
	#[error("Invalid URL parameter '{name}': {value:?} is not a valid path segment")]
	InvalidUrlParameter {
		/// Parameter name
		name: String,
		/// Rejected value
		value: String,
	},

	/// A computed cell value failed to evaluate
	#[error("Evaluation error: {0}")]
	Evaluation(String),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

//! Error types for loading and building a mind map.

use thiserror::Error;

/// Invalid configuration supplied through the page URL.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
	/// The `mode` query parameter names no known keyword mode.
	#[error("unknown keyword mode `{0}` (expected `explicit` or `predicted`)")]
	UnknownMode(String),
}

/// Failure to obtain or decode the dataset as a whole.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
	/// The request never produced a response.
	#[error("request for {url} failed: {reason}")]
	Request {
		/// Requested URL.
		url: String,
		/// Transport error text.
		reason: String,
	},

	/// The server answered with a non-success status.
	#[error("{url} answered with HTTP {status}")]
	Status {
		/// Requested URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},

	/// The response body could not be read as text.
	#[error("could not read response body: {0}")]
	Body(String),

	/// The body is not valid JSON.
	#[error("dataset is not valid JSON: {0}")]
	Decode(String),

	/// The body is JSON but not an array of records.
	#[error("dataset must be a JSON array of records")]
	NotAnArray,
}

impl From<serde_json::Error> for LoadError {
	fn from(err: serde_json::Error) -> Self {
		Self::Decode(err.to_string())
	}
}

/// A single record rejected during decoding or building.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RecordError {
	/// The entry is not an object with a string `abstract` and string keywords.
	#[error("record {position} is malformed: {reason}")]
	Malformed {
		/// Index in the dataset array.
		position: usize,
		/// Decoder message.
		reason: String,
	},

	/// Explicit keyword mode, but the record has no `keywords` list.
	#[error("record {position} has no keyword list")]
	MissingKeywords {
		/// Index in the records handed to the builder.
		position: usize,
	},
}

/// Everything that can keep the mind map from being shown.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MindMapError {
	/// Bad query parameters.
	#[error("configuration error: {0}")]
	Config(#[from] ConfigError),

	/// Fetching or decoding the dataset failed.
	#[error("load error: {0}")]
	Load(#[from] LoadError),
}

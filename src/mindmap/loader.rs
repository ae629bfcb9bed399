//! Fetching and decoding the abstracts dataset.

use gloo_net::http::Request;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::builder::{KeywordMode, MindMap, MindMapBuilder};
use super::error::{LoadError, MindMapError, RecordError};
use super::keywords::KeywordBank;
use crate::config::MindMapConfig;

/// One dataset entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractRecord {
	/// Abstract text.
	#[serde(rename = "abstract")]
	pub text: String,
	/// Supplied keywords, kept undecoded. Only explicit mode reads them,
	/// so a broken list does not cost the record in predicted mode.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub keywords: Option<Value>,
}

impl AbstractRecord {
	/// Record with a keyword list.
	pub fn with_keywords(text: &str, keywords: &[&str]) -> Self {
		Self {
			text: text.to_string(),
			keywords: Some(Value::from(keywords.to_vec())),
		}
	}

	/// Record without a `keywords` field.
	pub fn bare(text: &str) -> Self {
		Self {
			text: text.to_string(),
			keywords: None,
		}
	}
}

/// A dataset entry in its original position: a record, or why it is not one.
pub type RecordEntry = Result<AbstractRecord, RecordError>;

fn decode_record(position: usize, value: Value) -> RecordEntry {
	serde_json::from_value(value).map_err(|err| RecordError::Malformed {
		position,
		reason: err.to_string(),
	})
}

/// Parse a JSON array of records. Each array slot yields one entry, so an
/// entry's index is always its position in the dataset.
pub fn decode_records(body: &str) -> Result<Vec<RecordEntry>, LoadError> {
	let Value::Array(values) = serde_json::from_str::<Value>(body)? else {
		return Err(LoadError::NotAnArray);
	};

	let entries: Vec<_> = values
		.into_iter()
		.enumerate()
		.map(|(position, value)| decode_record(position, value))
		.collect();
	debug!(
		"Decoded {} entries, {} malformed",
		entries.len(),
		entries.iter().filter(|e| e.is_err()).count()
	);
	Ok(entries)
}

/// Decode `body` and build the map in one step. Entries rejected by the
/// decoder and by the keyword mode both count as skipped.
pub fn mindmap_from_json(body: &str, mode: KeywordMode, bank: &KeywordBank) -> Result<MindMap, LoadError> {
	let entries = decode_records(body)?;
	Ok(MindMapBuilder::new(mode, bank).build(&entries))
}

/// GET `url` and return the body text.
pub async fn fetch_body(url: &str) -> Result<String, LoadError> {
	let response = Request::get(url)
		.send()
		.await
		.map_err(|err| LoadError::Request {
			url: url.to_string(),
			reason: err.to_string(),
		})?;

	if !response.ok() {
		return Err(LoadError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}

	response
		.text()
		.await
		.map_err(|err| LoadError::Body(err.to_string()))
}

/// Fetch the configured dataset and build a fresh [`MindMap`] from it.
pub async fn load_mindmap(config: &MindMapConfig, bank: &KeywordBank) -> Result<MindMap, MindMapError> {
	info!("Loading {} ({} keywords)", config.data_url, config.mode);
	let body = fetch_body(&config.data_url).await?;
	Ok(mindmap_from_json(&body, config.mode, bank)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn texts(entries: &[RecordEntry]) -> Vec<Option<&str>> {
		entries
			.iter()
			.map(|e| e.as_ref().ok().map(|r| r.text.as_str()))
			.collect()
	}

	fn abstract_ids(map: &MindMap) -> Vec<&str> {
		let mut ids: Vec<_> = map
			.graph
			.nodes
			.iter()
			.filter(|n| !n.id.contains("-kw-"))
			.map(|n| n.id.as_str())
			.collect();
		ids.sort();
		ids
	}

	#[test]
	fn decodes_explicit_and_bare_records() {
		let entries = decode_records(
			r#"[
				{"abstract": "Bamboo bridges", "keywords": ["bamboo", "bridges"]},
				{"abstract": "No keywords here"}
			]"#,
		)
		.unwrap();

		assert_eq!(
			entries,
			[
				Ok(AbstractRecord::with_keywords("Bamboo bridges", &["bamboo", "bridges"])),
				Ok(AbstractRecord::bare("No keywords here")),
			]
		);
	}

	#[test]
	fn only_the_abstract_is_checked_while_decoding() {
		let entries = decode_records(
			r#"[
				{"abstract": "ok", "keywords": []},
				{"keywords": ["orphan"]},
				"just a string",
				{"abstract": "bad keyword", "keywords": [1]},
				{"abstract": 7},
				{"abstract": "also ok", "extra": true}
			]"#,
		)
		.unwrap();

		assert_eq!(
			texts(&entries),
			[Some("ok"), None, None, Some("bad keyword"), None, Some("also ok")]
		);
		for position in [1, 2, 4] {
			assert!(matches!(
				entries[position],
				Err(RecordError::Malformed { position: p, .. }) if p == position
			));
		}
	}

	#[test]
	fn predicted_mode_ignores_broken_keyword_fields() {
		let map = mindmap_from_json(
			r#"[
				{"abstract": "bamboo A"},
				{"abstract": "ai B", "keywords": "ai, bamboo"},
				{"abstract": "citizen C", "keywords": [1]}
			]"#,
			KeywordMode::Predicted,
			&KeywordBank::default(),
		)
		.unwrap();

		assert_eq!(map.skipped, 0);
		assert_eq!(abstract_ids(&map), ["abstract-0", "abstract-1", "abstract-2"]);
		assert_eq!(map.index.get("abstract-1").unwrap().text, "ai B");
	}

	#[test]
	fn explicit_mode_rejects_broken_keyword_fields() {
		let map = mindmap_from_json(
			r#"[
				{"abstract": "A", "keywords": ["a"]},
				{"abstract": "B", "keywords": "a, b"},
				{"abstract": "C", "keywords": [1]}
			]"#,
			KeywordMode::Explicit,
			&KeywordBank::default(),
		)
		.unwrap();

		assert_eq!(map.skipped, 2);
		assert_eq!(abstract_ids(&map), ["abstract-0"]);
	}

	#[test]
	fn skipped_entries_leave_the_same_gap_wherever_rejected() {
		let bank = KeywordBank::default();
		let no_abstract = r#"[
			{"abstract": "A", "keywords": []},
			{"keywords": []},
			{"abstract": "C", "keywords": []}
		]"#;
		let no_keywords = r#"[
			{"abstract": "A", "keywords": []},
			{"abstract": "B"},
			{"abstract": "C", "keywords": []}
		]"#;

		for body in [no_abstract, no_keywords] {
			let map = mindmap_from_json(body, KeywordMode::Explicit, &bank).unwrap();
			assert_eq!(map.skipped, 1);
			assert_eq!(abstract_ids(&map), ["abstract-0", "abstract-2"]);
			assert_eq!(map.index.get("abstract-2").unwrap().text, "C");
		}
	}

	#[test]
	fn non_array_is_an_error() {
		assert_eq!(
			decode_records(r#"{"abstract": "x"}"#),
			Err(LoadError::NotAnArray)
		);
	}

	#[test]
	fn invalid_json_is_a_decode_error() {
		assert!(matches!(decode_records("[{"), Err(LoadError::Decode(_))));
		assert!(matches!(
			mindmap_from_json("nope", KeywordMode::Predicted, &KeywordBank::default()),
			Err(LoadError::Decode(_))
		));
	}

	#[test]
	fn empty_array_is_empty() {
		assert!(decode_records("[]").unwrap().is_empty());
	}
}

//! Turns abstract records into the node/link lists and detail index.

use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};

use super::error::{ConfigError, RecordError};
use super::graph::{GraphData, Link, Node, NodeGroup};
use super::index::{AbstractDetail, AbstractIndex};
use super::keywords::KeywordBank;
use super::loader::{AbstractRecord, RecordEntry};

/// Where each abstract's keywords come from. Chosen once per build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeywordMode {
	/// Use the `keywords` list carried by each record.
	#[default]
	Explicit,
	/// Ignore any supplied list and predict from the abstract text.
	Predicted,
}

impl FromStr for KeywordMode {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"explicit" => Ok(Self::Explicit),
			"predicted" => Ok(Self::Predicted),
			other => Err(ConfigError::UnknownMode(other.to_string())),
		}
	}
}

impl fmt::Display for KeywordMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Explicit => "explicit",
			Self::Predicted => "predicted",
		})
	}
}

/// Result of one build: the graph, its detail index and how many records
/// were rejected on the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MindMap {
	/// Nodes and links for the layout.
	pub graph: GraphData,
	/// Abstract id → detail, for the click handler.
	pub index: AbstractIndex,
	/// Records that were skipped instead of drawn.
	pub skipped: usize,
}

impl MindMap {
	/// Number of abstract nodes.
	pub fn abstract_count(&self) -> usize {
		self.index.len()
	}
}

/// Builds a [`MindMap`] with a fixed keyword mode.
#[derive(Clone, Debug)]
pub struct MindMapBuilder<'a> {
	mode: KeywordMode,
	bank: &'a KeywordBank,
}

impl<'a> MindMapBuilder<'a> {
	/// `bank` is only consulted in [`KeywordMode::Predicted`].
	pub fn new(mode: KeywordMode, bank: &'a KeywordBank) -> Self {
		Self { mode, bank }
	}

	fn keywords_for(&self, position: usize, record: &AbstractRecord) -> Result<Vec<String>, RecordError> {
		if self.mode == KeywordMode::Predicted {
			return Ok(self.bank.predict(&record.text));
		}
		let list = record
			.keywords
			.clone()
			.ok_or(RecordError::MissingKeywords { position })?;
		serde_json::from_value(list).map_err(|err| RecordError::Malformed {
			position,
			reason: format!("keywords: {err}"),
		})
	}

	/// Entry `i` becomes `abstract-{i}` followed by its keyword nodes.
	/// Entries that failed to decode or lack what the mode needs are skipped
	/// and keep their position, so ids always match the dataset index.
	pub fn build(&self, entries: &[RecordEntry]) -> MindMap {
		let mut map = MindMap::default();

		for (position, entry) in entries.iter().enumerate() {
			let checked = entry
				.as_ref()
				.map_err(Clone::clone)
				.and_then(|record| Ok((record, self.keywords_for(position, record)?)));
			let (record, keywords) = match checked {
				Ok(found) => found,
				Err(err) => {
					warn!("Skipping {err}");
					map.skipped += 1;
					continue;
				}
			};

			let abstract_id = Node::abstract_id(position);
			map.graph.nodes.push(Node {
				id: abstract_id.clone(),
				label: record.text.clone(),
				group: NodeGroup::Abstract,
			});

			for (slot, keyword) in keywords.iter().enumerate() {
				let keyword_id = Node::keyword_id(&abstract_id, slot);
				map.graph.nodes.push(Node {
					id: keyword_id.clone(),
					label: keyword.clone(),
					group: NodeGroup::Keyword,
				});
				map.graph.links.push(Link {
					source: abstract_id.clone(),
					target: keyword_id,
				});
			}

			debug!("{abstract_id}: {} keywords", keywords.len());
			map.index.insert(
				abstract_id,
				AbstractDetail {
					text: record.text.clone(),
					keywords,
				},
			);
		}

		info!(
			"Built mind map ({} mode): {} abstracts, {} nodes, {} links, {} skipped",
			self.mode,
			map.abstract_count(),
			map.graph.nodes.len(),
			map.graph.links.len(),
			map.skipped
		);
		map
	}
}

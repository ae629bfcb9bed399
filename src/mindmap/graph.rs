use serde::{Deserialize, Serialize};

/// Which side of the mind map a node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeGroup {
	/// One research abstract.
	Abstract,
	/// One keyword attached to a single abstract.
	Keyword,
}

/// A graph vertex handed to the layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
	/// Unique within one build, e.g. `abstract-3` or `abstract-3-kw-0`.
	pub id: String,
	/// Full abstract text or keyword text.
	pub label: String,
	/// Abstract or keyword.
	pub group: NodeGroup,
}

impl Node {
	/// Abstract node id for the record at `position`.
	pub fn abstract_id(position: usize) -> String {
		format!("abstract-{position}")
	}

	/// Keyword node id for keyword `slot` of the given abstract.
	pub fn keyword_id(abstract_id: &str, slot: usize) -> String {
		format!("{abstract_id}-kw-{slot}")
	}
}

/// An abstract → keyword edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
	/// Abstract node id.
	pub source: String,
	/// Keyword node id.
	pub target: String,
}

/// Nodes and links in build order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
	/// Each abstract followed by its own keywords.
	pub nodes: Vec<Node>,
	/// Interleaved the same way as `nodes`.
	pub links: Vec<Link>,
}

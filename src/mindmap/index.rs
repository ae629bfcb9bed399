use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// What the detail dialog shows for one abstract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractDetail {
	/// Full abstract text.
	#[serde(rename = "abstract")]
	pub text: String,
	/// Keywords in the order they were attached.
	pub keywords: Vec<String>,
}

/// Lookup from abstract node id to its detail.
///
/// Built once per load and only read afterwards. Keyword node ids and stale
/// ids simply miss.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbstractIndex {
	entries: HashMap<String, AbstractDetail>,
}

impl AbstractIndex {
	pub(crate) fn insert(&mut self, id: String, detail: AbstractDetail) {
		self.entries.insert(id, detail);
	}

	/// Detail for `id`, if it names an abstract node of this build.
	pub fn get(&self, id: &str) -> Option<&AbstractDetail> {
		self.entries.get(id)
	}

	/// Number of indexed abstracts.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when no abstract was indexed.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

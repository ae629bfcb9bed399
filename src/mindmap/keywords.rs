//! Naive keyword prediction against a static topic table.

use std::collections::HashSet;

const DEFAULT_TOPICS: &[(&str, &[&str])] = &[
	(
		"bamboo",
		&["bamboo", "infrastructure", "sustainable", "irrigation"],
	),
	(
		"ai",
		&["AI", "machine learning", "satellite", "monitoring"],
	),
	(
		"citizen",
		&["citizen science", "community", "participation", "monitoring"],
	),
];

/// One row of the bank: a token to look for and the keywords it implies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic {
	token: String,
	keywords: Vec<String>,
}

impl Topic {
	/// The token is matched case-insensitively as a plain substring.
	pub fn new(token: &str, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			token: token.to_lowercase(),
			keywords: keywords.into_iter().map(Into::into).collect(),
		}
	}
}

/// Ordered topic → keywords table used to predict keywords from text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordBank {
	topics: Vec<Topic>,
}

impl Default for KeywordBank {
	fn default() -> Self {
		Self::new(
			DEFAULT_TOPICS
				.iter()
				.map(|(token, keywords)| Topic::new(token, keywords.iter().copied())),
		)
	}
}

impl KeywordBank {
	/// Topics are scanned in the order given.
	pub fn new(topics: impl IntoIterator<Item = Topic>) -> Self {
		Self {
			topics: topics.into_iter().collect(),
		}
	}

	/// Keywords of every topic whose token occurs in `text`, in table order,
	/// deduplicated by trimmed value with the first occurrence kept.
	pub fn predict(&self, text: &str) -> Vec<String> {
		let haystack = text.to_lowercase();
		let mut seen = HashSet::new();
		let mut predicted = Vec::new();

		for topic in &self.topics {
			if topic.token.is_empty() || !haystack.contains(&topic.token) {
				continue;
			}
			for keyword in &topic.keywords {
				let keyword = keyword.trim();
				if !keyword.is_empty() && seen.insert(keyword) {
					predicted.push(keyword.to_string());
				}
			}
		}
		predicted
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unmatched_text_predicts_nothing() {
		let bank = KeywordBank::default();
		assert!(bank.predict("").is_empty());
		assert!(bank.predict("Soil erosion in river deltas.").is_empty());
	}

	#[test]
	fn match_is_case_insensitive() {
		let bank = KeywordBank::default();
		assert_eq!(
			bank.predict("BAMBOO scaffolding"),
			["bamboo", "infrastructure", "sustainable", "irrigation"]
		);
	}

	#[test]
	fn repeated_token_contributes_once() {
		let bank = KeywordBank::default();
		let predicted = bank.predict("citizen groups and citizen panels");
		assert_eq!(
			predicted,
			["citizen science", "community", "participation", "monitoring"]
		);
	}

	#[test]
	fn shared_keyword_keeps_earlier_topic_position() {
		let bank = KeywordBank::default();
		let predicted = bank.predict("AI tools for citizen reporting");
		assert_eq!(
			predicted,
			[
				"AI",
				"machine learning",
				"satellite",
				"monitoring",
				"citizen science",
				"community",
				"participation",
			]
		);
		assert_eq!(predicted.iter().filter(|k| *k == "monitoring").count(), 1);
	}

	#[test]
	fn bamboo_and_ai_example() {
		let bank = KeywordBank::default();
		assert_eq!(
			bank.predict("Bamboo grows fast and supports AI-based monitoring."),
			[
				"bamboo",
				"infrastructure",
				"sustainable",
				"irrigation",
				"AI",
				"machine learning",
				"satellite",
				"monitoring",
			]
		);
	}

	#[test]
	fn dedup_compares_trimmed_values() {
		let bank = KeywordBank::new([
			Topic::new("river", [" water ", "delta", ""]),
			Topic::new("Delta", ["delta  ", "water"]),
		]);
		assert_eq!(bank.predict("river delta"), ["water", "delta"]);
	}

	#[test]
	fn deterministic() {
		let bank = KeywordBank::default();
		let text = "citizen bamboo ai";
		assert_eq!(bank.predict(text), bank.predict(text));
	}
}

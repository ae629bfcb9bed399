//! Decode → build on a dataset fixture, in both keyword modes.

use std::collections::HashSet;
use std::path::PathBuf;

use abstract_mindmap::mindmap::{KeywordBank, KeywordMode, MindMap, NodeGroup, mindmap_from_json};

fn load_fixture(name: &str) -> String {
	let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.join("tests")
		.join("fixtures")
		.join(name);
	std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

fn build(mode: KeywordMode) -> MindMap {
	mindmap_from_json(&load_fixture("abstracts.json"), mode, &KeywordBank::default()).unwrap()
}

fn assert_referential_integrity(map: &MindMap) {
	let ids: HashSet<_> = map.graph.nodes.iter().map(|n| n.id.as_str()).collect();
	assert_eq!(ids.len(), map.graph.nodes.len(), "node ids must be unique");
	for link in &map.graph.links {
		assert!(ids.contains(link.source.as_str()), "{} missing", link.source);
		assert!(ids.contains(link.target.as_str()), "{} missing", link.target);
		assert!(link.target.starts_with(&format!("{}-kw-", link.source)));
	}
}

#[test]
fn explicit_mode_skips_records_without_keywords() {
	let map = build(KeywordMode::Explicit);

	// one entry has no abstract, one has no keyword list
	assert_eq!(map.skipped, 2);
	assert_eq!(map.abstract_count(), 4);
	assert_eq!(map.index.get("abstract-0").unwrap().keywords, [
		"bamboo",
		"growth rate",
		"AI",
		"monitoring"
	]);
	for gap in ["abstract-2", "abstract-5"] {
		assert!(map.index.get(gap).is_none());
	}
	assert_eq!(map.index.get("abstract-3").unwrap().keywords, [
		"satellite",
		"machine learning",
		"water stress"
	]);
	assert_referential_integrity(&map);
}

#[test]
fn predicted_mode_uses_every_record_with_an_abstract() {
	let map = build(KeywordMode::Predicted);

	assert_eq!(map.skipped, 1);
	assert_eq!(map.abstract_count(), 5);
	let abstracts: Vec<_> = map
		.graph
		.nodes
		.iter()
		.filter(|n| n.group == NodeGroup::Abstract)
		.map(|n| n.id.as_str())
		.collect();
	assert_eq!(abstracts, [
		"abstract-0",
		"abstract-1",
		"abstract-3",
		"abstract-4",
		"abstract-5"
	]);
	assert_eq!(map.index.get("abstract-0").unwrap().keywords, [
		"bamboo",
		"infrastructure",
		"sustainable",
		"irrigation",
		"AI",
		"machine learning",
		"satellite",
		"monitoring",
	]);
	assert_referential_integrity(&map);
}

#[test]
fn rebuilding_gives_the_same_map() {
	assert_eq!(build(KeywordMode::Predicted), build(KeywordMode::Predicted));
	assert_eq!(build(KeywordMode::Explicit), build(KeywordMode::Explicit));
}
